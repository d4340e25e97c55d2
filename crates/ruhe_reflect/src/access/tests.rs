use alloc::boxed::Box;
use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;
use core::any::TypeId;
use core::fmt;

use crate::Reflect;
use crate::access::{AccessOp, MemberKind, ReflectError, Reflector};
use crate::convert::EnumConversionError;
use crate::derive::{Reflect, reflect_members, reflect_trait};
use crate::info::TypePath;
use crate::registry::TypeRegistry;

// -----------------------------------------------------------------------------
// Fixtures

#[derive(Reflect, Debug, Default, Clone, Copy, PartialEq)]
#[reflect(default, partial_eq, debug)]
enum TestEnum {
    #[default]
    Tchotchke = 0,
    Dingsbums = 1,
}

#[reflect_trait]
trait Disposable {
    fn dispose(&mut self);
}

#[derive(Reflect, Default)]
#[reflect(members, default, type_trait = ReflectDisposable)]
struct TestBase {
    disposed: bool,
    _resets: u32,
}

impl Disposable for TestBase {
    fn dispose(&mut self) {
        self.disposed = true;
    }
}

#[reflect_members]
impl TestBase {
    #[reflect(get = "Disposed")]
    fn is_disposed(&self) -> bool {
        self.disposed
    }

    fn reset(&mut self) {
        self.disposed = false;
        self._resets += 1;
    }
}

#[derive(Debug, PartialEq)]
struct Fault(&'static str);

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fault: {}", self.0)
    }
}

impl core::error::Error for Fault {}

#[derive(Reflect, Default)]
#[reflect(members, default)]
struct TestObject {
    #[reflect(base)]
    base: TestBase,
    _list: Vec<String>,
    _test_enum: TestEnum,
    _maybe: Option<TestEnum>,
    #[reflect(ignore)]
    _secret: u8,
}

#[reflect_members]
impl TestObject {
    #[reflect(get = "TestEnum")]
    fn test_enum(&self) -> TestEnum {
        self._test_enum
    }

    #[reflect(set = "TestEnum")]
    fn set_test_enum(&mut self, value: TestEnum) {
        self._test_enum = value;
    }

    #[reflect(get = "List")]
    fn list(&self) -> &Vec<String> {
        &self._list
    }

    #[reflect(set = "Secret")]
    fn set_secret(&mut self, value: u8) {
        self._secret = value;
    }

    fn add_item(&mut self) {
        self._list.push("item".to_string());
    }

    fn get(&self) -> usize {
        self._list.len()
    }

    pub fn push(&mut self, item: String) -> usize {
        self._list.push(item);
        self._list.len()
    }

    #[reflect(name = "push")]
    fn push_many(&mut self, item: String, count: u32) -> usize {
        for _ in 0..count {
            self._list.push(item.clone());
        }
        self._list.len()
    }

    fn fail(&self) -> Result<(), Fault> {
        Err(Fault("boom"))
    }

    fn checked_len(&self, limit: usize) -> Result<usize, Fault> {
        if self._list.len() > limit {
            Err(Fault("too long"))
        } else {
            Ok(self._list.len())
        }
    }
}

#[derive(Reflect, Default)]
#[reflect(type_path = "ruhe_reflect::access::tests::fixtures::Renamed")]
struct Renamed {
    value: u8,
}

fn registry() -> TypeRegistry {
    let mut registry = TypeRegistry::new();
    registry.register::<TestObject>();
    registry.register::<Renamed>();
    registry
}

// -----------------------------------------------------------------------------
// Fields

#[test]
fn field_existence() {
    let reflector = Reflector::new();
    let object = TestObject::default();

    assert!(reflector.field_exists(&object, "_list"));
    assert!(reflector.field_exists(&object, "_test_enum"));
    assert!(!reflector.field_exists(&object, "_nonexistent"));
    // names are case-sensitive
    assert!(!reflector.field_exists(&object, "_List"));
    // inherited through the base field
    assert!(reflector.field_exists(&object, "disposed"));
    assert!(!reflector.field_exists(&object, "_secret"));
    // properties are not fields
    assert!(!reflector.field_exists(&object, "TestEnum"));
}

#[test]
fn field_round_trip() {
    let reflector = Reflector::new();
    let mut object = TestObject::default();

    let list = vec!["a".to_string(), "b".to_string()];
    reflector
        .set_field_value(&mut object, "_list", list.clone().into_boxed_reflect())
        .unwrap();
    assert_eq!(reflector.get_field_value_as::<Vec<String>>(&object, "_list").unwrap(), &list);

    reflector
        .set_field_value(&mut object, "disposed", true.into_boxed_reflect())
        .unwrap();
    assert!(object.base.disposed);
    assert_eq!(reflector.get_field_value_as::<bool>(&object, "disposed").unwrap(), &true);

    let value = reflector.get_field_value(&object, "_list").unwrap();
    assert_eq!(value.reflect_type_path(), <Vec<String> as TypePath>::type_path());
}

#[test]
fn enum_field_from_name() {
    let reflector = Reflector::new();
    let mut object = TestObject::default();
    assert_eq!(object._test_enum, TestEnum::Tchotchke);

    reflector
        .set_field_value(&mut object, "_test_enum", "Dingsbums".into_boxed_reflect())
        .unwrap();

    let value = reflector.get_property_value(&object, "TestEnum").unwrap();
    assert_eq!(value.take::<TestEnum>().ok(), Some(TestEnum::Dingsbums));
}

#[test]
fn enum_field_inputs_agree() {
    let reflector = Reflector::new();
    let inputs: [Box<dyn Reflect>; 4] = [
        "Dingsbums".into_boxed_reflect(),
        String::from("Dingsbums").into_boxed_reflect(),
        1_i64.into_boxed_reflect(),
        TestEnum::Dingsbums.into_boxed_reflect(),
    ];

    for input in inputs {
        let mut object = TestObject::default();
        reflector.set_field_value(&mut object, "_test_enum", input).unwrap();
        assert_eq!(object._test_enum, TestEnum::Dingsbums);
    }
}

#[test]
fn failed_assignment_keeps_value() {
    let reflector = Reflector::new();
    let mut object = TestObject::default();
    object._test_enum = TestEnum::Dingsbums;

    let err = reflector
        .set_field_value(&mut object, "_test_enum", "Gizmo".into_boxed_reflect())
        .unwrap_err();
    assert!(matches!(
        err,
        ReflectError::EnumConversion(EnumConversionError::UnknownName { .. })
    ));

    let err = reflector
        .set_field_value(&mut object, "_test_enum", 7_u8.into_boxed_reflect())
        .unwrap_err();
    assert!(matches!(
        err,
        ReflectError::EnumConversion(EnumConversionError::UnknownOrdinal { ordinal: 7, .. })
    ));

    let err = reflector
        .set_field_value(&mut object, "_test_enum", 1.5_f32.into_boxed_reflect())
        .unwrap_err();
    assert!(matches!(err, ReflectError::TypeMismatch { .. }));

    assert_eq!(object._test_enum, TestEnum::Dingsbums);

    let err = reflector
        .set_field_value(&mut object, "_list", 3_u32.into_boxed_reflect())
        .unwrap_err();
    assert!(matches!(err, ReflectError::TypeMismatch { .. }));
    assert!(object._list.is_empty());
}

#[test]
fn optional_enum_field_needs_exact_type() {
    let reflector = Reflector::new();
    let mut object = TestObject::default();

    let err = reflector
        .set_field_value(&mut object, "_maybe", "Dingsbums".into_boxed_reflect())
        .unwrap_err();
    assert!(matches!(err, ReflectError::TypeMismatch { .. }));

    let err = reflector
        .set_field_value_as_enum(&mut object, "_maybe", "Dingsbums".into_boxed_reflect())
        .unwrap_err();
    assert!(matches!(err, ReflectError::TypeMismatch { .. }));

    reflector
        .set_field_value(&mut object, "_maybe", Some(TestEnum::Dingsbums).into_boxed_reflect())
        .unwrap();
    assert_eq!(object._maybe, Some(TestEnum::Dingsbums));
}

#[test]
fn missing_field() {
    let reflector = Reflector::new();
    let mut object = TestObject::default();

    let err = reflector.get_field_value(&object, "_nonexistent").unwrap_err();
    assert!(matches!(
        err,
        ReflectError::MemberNotFound { kind: MemberKind::Field, .. }
    ));

    let err = reflector
        .set_field_value(&mut object, "_secret", 1_u8.into_boxed_reflect())
        .unwrap_err();
    assert!(matches!(err, ReflectError::MemberNotFound { .. }));
    assert_eq!(object._secret, 0);
}

// -----------------------------------------------------------------------------
// Properties

#[test]
fn property_access() {
    let reflector = Reflector::new();
    let mut object = TestObject::default();

    reflector
        .set_property_value(&mut object, "TestEnum", 1_u16.into_boxed_reflect())
        .unwrap();
    assert_eq!(object._test_enum, TestEnum::Dingsbums);

    reflector
        .set_property_value_as_enum(&mut object, "TestEnum", "Tchotchke".into_boxed_reflect())
        .unwrap();
    assert_eq!(object._test_enum, TestEnum::Tchotchke);

    object._list.push("x".to_string());
    let list = reflector.get_property_value(&object, "List").unwrap();
    assert_eq!(list.take::<Vec<String>>().ok(), Some(vec!["x".to_string()]));

    // inherited property
    object.base.disposed = true;
    let disposed = reflector.get_property_value(&object, "Disposed").unwrap();
    assert_eq!(disposed.take::<bool>().ok(), Some(true));
}

#[test]
fn property_without_accessor() {
    let reflector = Reflector::new();
    let mut object = TestObject::default();

    let err = reflector
        .set_property_value(&mut object, "List", Vec::<String>::new().into_boxed_reflect())
        .unwrap_err();
    assert!(matches!(
        err,
        ReflectError::Access {
            kind: MemberKind::Property,
            operation: AccessOp::Write,
            ..
        }
    ));

    let err = reflector.get_property_value(&object, "Secret").unwrap_err();
    assert!(matches!(
        err,
        ReflectError::Access {
            operation: AccessOp::Read,
            ..
        }
    ));

    let err = reflector.get_property_value(&object, "Missing").unwrap_err();
    assert!(matches!(
        err,
        ReflectError::MemberNotFound { kind: MemberKind::Property, .. }
    ));
}

#[test]
fn property_type_mismatch() {
    let reflector = Reflector::new();
    let mut object = TestObject::default();

    let err = reflector
        .set_property_value(&mut object, "Secret", 1_u32.into_boxed_reflect())
        .unwrap_err();
    assert!(matches!(err, ReflectError::TypeMismatch { expected: "u8", .. }));
    assert_eq!(object._secret, 0);

    reflector
        .set_property_value(&mut object, "Secret", 9_u8.into_boxed_reflect())
        .unwrap();
    assert_eq!(object._secret, 9);
}

// -----------------------------------------------------------------------------
// Methods

#[test]
fn invoke_private_method() {
    let reflector = Reflector::new();
    let mut object = TestObject::default();

    let result = reflector.invoke_method(&mut object, "add_item", vec![]).unwrap();
    assert!(result.is_none());
    assert_eq!(object._list, ["item"]);

    let count = reflector.invoke_method(&mut object, "get", vec![]).unwrap();
    assert_eq!(count.and_then(|count| count.take::<usize>().ok()), Some(1));
}

#[test]
fn invoke_picks_overload() {
    let reflector = Reflector::new();
    let mut object = TestObject::default();

    let one = reflector
        .invoke_method(&mut object, "push", vec![String::from("a").into_boxed_reflect()])
        .unwrap();
    assert_eq!(one.and_then(|len| len.take::<usize>().ok()), Some(1));

    let many = reflector
        .invoke_method(
            &mut object,
            "push",
            vec![String::from("b").into_boxed_reflect(), 2_u32.into_boxed_reflect()],
        )
        .unwrap();
    assert_eq!(many.and_then(|len| len.take::<usize>().ok()), Some(3));

    // arity and types both take part in the match
    let err = reflector
        .invoke_method(&mut object, "push", vec![1_u32.into_boxed_reflect()])
        .unwrap_err();
    assert!(matches!(
        err,
        ReflectError::MemberNotFound { kind: MemberKind::Method, .. }
    ));
    assert_eq!(object._list, ["a", "b", "b"]);
}

#[test]
fn invoke_inherited_method() {
    let reflector = Reflector::new();
    let mut object = TestObject::default();
    object.base.disposed = true;

    reflector.invoke_method(&mut object, "reset", vec![]).unwrap();
    assert!(!object.base.disposed);
    assert_eq!(object.base._resets, 1);
}

#[test]
fn invoke_keeps_original_fault() {
    let reflector = Reflector::new();
    let mut object = TestObject::default();

    let err = reflector.invoke_method(&mut object, "fail", vec![]).unwrap_err();
    assert_eq!(err.to_string(), "fault: boom");
    match err {
        ReflectError::Invocation(err) => {
            assert_eq!(err.downcast_ref::<Fault>(), Some(&Fault("boom")));
        }
        other => panic!("expected an invocation error, got {other:?}"),
    }

    let len = reflector
        .invoke_method(&mut object, "checked_len", vec![4_usize.into_boxed_reflect()])
        .unwrap();
    assert_eq!(len.and_then(|len| len.take::<usize>().ok()), Some(0));
}

#[test]
fn accessors_are_not_methods() {
    let reflector = Reflector::new();
    let mut object = TestObject::default();

    let err = reflector.invoke_method(&mut object, "test_enum", vec![]).unwrap_err();
    assert!(matches!(err, ReflectError::MemberNotFound { .. }));
}

// -----------------------------------------------------------------------------
// Types

#[test]
fn interface_through_base() {
    let reflector = Reflector::with_registry(registry());

    assert!(reflector.implements_interface::<ReflectDisposable>(TypeId::of::<TestBase>()));
    assert!(reflector.implements_interface::<ReflectDisposable>(TypeId::of::<TestObject>()));
    assert!(!reflector.implements_interface::<ReflectDisposable>(TypeId::of::<TestEnum>()));
    assert!(!reflector.implements_interface::<ReflectDisposable>(TypeId::of::<u64>()));

    let registry = reflector.registry().read();
    let disposable = registry
        .get_type_trait::<ReflectDisposable>(TypeId::of::<TestBase>())
        .unwrap()
        .clone();
    drop(registry);

    let mut base = TestBase::default();
    disposable.get_mut(&mut base).unwrap().dispose();
    assert!(base.disposed);
    assert!(disposable.get(&TestObject::default()).is_none());
}

#[test]
fn cross_module_lookup() {
    let reflector = Reflector::with_registry(registry());

    let info = reflector
        .get_cross_module_type("ruhe_reflect", "access::tests::TestObject")
        .unwrap();
    assert_eq!(info.ty_id(), TypeId::of::<TestObject>());

    let info = reflector
        .get_cross_module_type("ruhe_reflect", "ruhe_reflect::access::tests::fixtures::Renamed")
        .unwrap();
    assert_eq!(info.ty_id(), TypeId::of::<Renamed>());

    let err = reflector
        .get_cross_module_type("ruhe_reflect", "access::tests::Missing")
        .unwrap_err();
    assert!(matches!(err, ReflectError::TypeNotFound { .. }));

    let err = reflector
        .get_cross_module_type("ruhe_widgets", "Button")
        .unwrap_err();
    assert!(matches!(err, ReflectError::ModuleNotFound { .. }));
}

#[test]
fn create_registered_instance() {
    let reflector = Reflector::with_registry(registry());

    let instance = reflector.create_instance(TypeId::of::<TestObject>()).unwrap();
    assert!(reflector.field_exists(&*instance, "_list"));
    assert!(reflector.create_instance(TypeId::of::<Fault>()).is_none());
}

// -----------------------------------------------------------------------------
// Cache

#[test]
fn cache_is_transparent() {
    let cached = Reflector::new();
    let uncached = Reflector::new().without_cache();

    for reflector in [&cached, &uncached] {
        let mut object = TestObject::default();
        for _ in 0..2 {
            assert!(reflector.field_exists(&object, "disposed"));
            assert!(!reflector.field_exists(&object, "_nonexistent"));
            reflector
                .set_field_value(&mut object, "_test_enum", "Dingsbums".into_boxed_reflect())
                .unwrap();
            assert!(reflector.get_property_value(&object, "List").is_ok());
            assert!(matches!(
                reflector.set_property_value(&mut object, "List", Vec::<String>::new().into_boxed_reflect()),
                Err(ReflectError::Access { .. })
            ));
        }
        assert_eq!(object._test_enum, TestEnum::Dingsbums);
    }
}

// -----------------------------------------------------------------------------
// Sharing

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn reflector_is_send_sync() {
    assert_send_sync::<Reflector>();

    let reflector = Reflector::new();
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let object = TestObject::default();
                assert!(reflector.field_exists(&object, "disposed"));
                assert!(!reflector.field_exists(&object, "_nonexistent"));
            });
        }
    });
}

#[cfg(feature = "auto_register")]
#[test]
fn global_reflector_sees_derived_types() {
    let reflector = Reflector::global();
    assert!(core::ptr::eq(reflector, Reflector::global()));

    let info = reflector
        .get_cross_module_type("ruhe_reflect", "access::tests::TestObject")
        .unwrap();
    assert_eq!(info.ty_id(), TypeId::of::<TestObject>());
    assert!(reflector.registry().read().contains(TypeId::of::<TestBase>()));

    let instance = std::thread::spawn(|| {
        Reflector::global().create_instance(TypeId::of::<TestObject>())
    })
    .join()
    .unwrap();
    assert!(instance.is_some());
}

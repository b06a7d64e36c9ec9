//! Integration tests for the object model
//!
//! Tests cover:
//! - Class definition and member tables
//! - Constructor-assigned fields vs template-declared members
//! - Static and instance dispatch with the receiver resolved at call time

use mixweave_model::{ClassDef, Member, Value};

fn point_class() -> ClassDef {
    let mut point = ClassDef::new("Point");
    point.set_constructor(2, |inst, args| {
        inst.set_field("x", args[0].clone());
        inst.set_field("y", args[1].clone());
    });
    point.define_method("sum", |inst, _| {
        let x = inst.field("x").and_then(|v| v.as_int()).unwrap_or(0);
        let y = inst.field("y").and_then(|v| v.as_int()).unwrap_or(0);
        Value::int(x + y)
    });
    point.define_getter("magnitude_squared", |inst| {
        let x = inst.field("x").and_then(|v| v.as_int()).unwrap_or(0);
        let y = inst.field("y").and_then(|v| v.as_int()).unwrap_or(0);
        Value::int(x * x + y * y)
    });
    point
}

// ===== Construction =====

#[test]
fn test_constructor_fields_live_on_the_instance() {
    let point = point_class();
    let inst = point.instantiate(&[Value::int(3), Value::int(4)]).unwrap();

    assert_eq!(inst.field("x"), Some(&Value::int(3)));
    assert_eq!(inst.field("y"), Some(&Value::int(4)));

    // constructor-assigned fields never appear on the shared template
    assert!(!point.template().contains("x"));
    assert!(!point.template().contains("y"));
}

#[test]
fn test_template_holds_only_declared_members() {
    let point = point_class();
    let names: Vec<&str> = point.template().names().collect();
    assert_eq!(names, vec!["sum", "magnitude_squared"]);
}

// ===== Dispatch =====

#[test]
fn test_method_and_getter_dispatch() {
    let point = point_class();
    let mut inst = point.instantiate(&[Value::int(3), Value::int(4)]).unwrap();

    assert_eq!(point.call(&mut inst, "sum", &[]).unwrap(), Value::int(7));
    assert_eq!(
        point.get_property(&inst, "magnitude_squared").unwrap(),
        Value::int(25)
    );
}

#[test]
fn test_two_instances_do_not_share_fields() {
    let point = point_class();
    let mut a = point.instantiate(&[Value::int(1), Value::int(2)]).unwrap();
    let b = point.instantiate(&[Value::int(10), Value::int(20)]).unwrap();

    point.set_property(&mut a, "x", 100).unwrap();

    assert_eq!(a.field("x"), Some(&Value::int(100)));
    assert_eq!(b.field("x"), Some(&Value::int(10)));
}

#[test]
fn test_static_members_resolve_against_the_class() {
    let mut point = point_class();
    point.define_static_data("origin_label", "0,0");
    point.define_static_method("describe", |class, _| {
        let label = class
            .get_static("origin_label")
            .unwrap_or_default()
            .to_string();
        Value::str(format!("{} with origin {}", class.name(), label))
    });

    assert_eq!(
        point.call_static("describe", &[]).unwrap(),
        Value::str("Point with origin 0,0")
    );
}

// ===== Member tables =====

#[test]
fn test_redefinition_overwrites_in_place() {
    let mut point = point_class();
    point.define_method("sum", |_, _| Value::int(-1));

    let names: Vec<&str> = point.template().names().collect();
    assert_eq!(names, vec!["sum", "magnitude_squared"]);

    let mut inst = point.instantiate(&[Value::int(3), Value::int(4)]).unwrap();
    assert_eq!(point.call(&mut inst, "sum", &[]).unwrap(), Value::int(-1));
}

#[test]
fn test_member_clone_is_a_handle_clone() {
    let point = point_class();
    let copied = point.template().get("sum").unwrap().clone();

    let other = {
        let mut other = ClassDef::new("Other");
        other.template_mut().define("sum", copied);
        other
    };

    let mut inst = other.instantiate(&[]).unwrap();
    inst.set_field("x", 5);
    inst.set_field("y", 6);

    // the body runs against the new receiver
    assert_eq!(other.call(&mut inst, "sum", &[]).unwrap(), Value::int(11));
    assert!(matches!(
        other.template().get("sum").unwrap(),
        Member::Method(_)
    ));
}

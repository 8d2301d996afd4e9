use crate::declaration::FieldDeclaration;
use crate::ComposeError;
use crate::Value;
use serde_json::json;

#[test]
fn control_keys_configure_the_declaration() {
    let field = FieldDeclaration::from_json(&json!({
        "__alias": "pals",
        "__args": { "first": 10, "role": { "__enum": "ADMIN" } },
        "__directives": [{ "name": "include", "args": { "if": { "__fromVariable": "withFriends" } } }],
        "__toLocalType": "User",
        "__connection": true,
        "edges": {
            "__scalars": ["cursor"],
            "node": { "__scalars": ["id", "name"], "__fragments": ["UserParts"] }
        }
    })).unwrap();

    assert_eq!(field.alias(), Some("pals"));
    assert_eq!(field.local_type(), Some("User"));
    assert!(field.shape_flags().connection);

    let args = field.arguments().cloned().unwrap_or_default();
    assert_eq!(args["first"], Value::Int(10));
    assert_eq!(args["role"], Value::enum_value("ADMIN"));

    let directive = &field.directives()[0];
    assert_eq!(directive.name(), "include");
    assert_eq!(directive.args()["if"], Value::from_variable("withFriends"));

    let node = &field.fields()["edges"].fields()["node"];
    assert_eq!(node.fragment_spreads(), &vec!["UserParts".to_string()]);
}

#[test]
fn params_is_an_alias_for_args() {
    let field = FieldDeclaration::from_json(&json!({ "__params": { "id": "1" } })).unwrap();

    assert_eq!(
        field.arguments().and_then(|args| args["id"].as_str()),
        Some("1"),
    );
}

#[test]
fn introspection_fields_are_nested_declarations() {
    let field = FieldDeclaration::from_json(&json!({
        "__typename": {},
        "__scalars": ["id"]
    })).unwrap();

    assert!(field.fields().contains_key("__typename"));
}

#[test]
fn non_object_nested_declaration_is_an_error() {
    let result = FieldDeclaration::from_json(&json!({ "story": { "title": "yes" } }));

    assert_eq!(
        result,
        Err(ComposeError::NonObjectDeclaration { path: "story.title".to_string() }),
    );
}

#[test]
fn scalar_list_must_hold_strings() {
    let result = FieldDeclaration::from_json(&json!({ "__scalars": ["id", 7] }));

    assert!(matches!(
        result,
        Err(ComposeError::MalformedControlList { attribute, .. }) if attribute == "__scalars",
    ));
}

#[test]
fn fragment_list_must_be_an_array() {
    let result = FieldDeclaration::from_json(&json!({ "__fragments": "UserParts" }));

    assert!(matches!(result, Err(ComposeError::MalformedControlList { .. })));
}

#[test]
fn unknown_control_key_is_an_error() {
    let result = FieldDeclaration::from_json(&json!({ "author": { "__nullable": true } }));

    assert_eq!(
        result,
        Err(ComposeError::UnknownControlAttribute {
            attribute: "__nullable".to_string(),
            path: "author".to_string(),
        }),
    );
}

#[test]
fn shape_flag_must_be_boolean() {
    let result = FieldDeclaration::from_json(&json!({ "__list": "yes" }));

    assert!(matches!(
        result,
        Err(ComposeError::MalformedControlAttribute { attribute, .. }) if attribute == "__list",
    ));
}

#[test]
fn directive_without_name_is_an_error() {
    let result = FieldDeclaration::from_json(&json!({
        "__directives": [{ "args": { "if": true } }]
    }));

    assert!(matches!(result, Err(ComposeError::MalformedDirective { .. })));
}

#[test]
fn variable_reference_must_name_a_string() {
    let result = FieldDeclaration::from_json(&json!({
        "__args": { "id": { "__fromVariable": 5 } },
        "__scalars": ["id"]
    }));

    assert_eq!(
        result,
        Err(ComposeError::MalformedControlAttribute {
            attribute: "__fromVariable".to_string(),
            expected: "the only entry of its object, holding a string".to_string(),
            path: "id".to_string(),
        }),
    );
}

#[test]
fn variable_reference_must_be_the_only_entry() {
    let result = FieldDeclaration::from_json(&json!({
        "user": {
            "__args": { "filter": { "token": { "__fromVariable": "tok", "extra": 1 } } },
            "__scalars": ["id"]
        }
    }));

    assert!(matches!(
        result,
        Err(ComposeError::MalformedControlAttribute { attribute, path, .. })
            if attribute == "__fromVariable" && path == "user.filter.token",
    ));
}

#[test]
fn enum_literal_must_be_a_lone_string() {
    let in_directive = FieldDeclaration::from_json(&json!({
        "__directives": [{ "name": "sort", "args": { "order": { "__enum": ["ASC"] } } }]
    }));
    assert!(matches!(
        in_directive,
        Err(ComposeError::MalformedControlAttribute { attribute, path, .. })
            if attribute == "__enum" && path == "@sort.order",
    ));

    let with_sibling = FieldDeclaration::from_json(&json!({
        "__args": { "roles": [{ "__enum": "ADMIN", "label": "x" }] },
        "__scalars": ["id"]
    }));
    assert!(matches!(
        with_sibling,
        Err(ComposeError::MalformedControlAttribute { attribute, .. }) if attribute == "__enum",
    ));
}

#[test]
fn nested_tagged_values_still_resolve() {
    let field = FieldDeclaration::from_json(&json!({
        "__args": { "where": { "ids": [{ "__fromVariable": "ids" }], "role": { "__enum": "ADMIN" } } },
        "__scalars": ["id"]
    })).unwrap();

    let expected: Value = [
        ("ids", Value::List(vec![Value::from_variable("ids")])),
        ("role", Value::enum_value("ADMIN")),
    ].into_iter().collect();
    assert_eq!(field.arguments().map(|args| args["where"].to_owned()), Some(expected));
}

#[test]
fn integer_outside_i64_is_rejected() {
    let result = FieldDeclaration::from_json(&json!({
        "user": { "__args": { "id": 18446744073709551615u64 }, "__scalars": ["id"] }
    }));

    assert_eq!(
        result,
        Err(ComposeError::IntegerOutOfRange {
            number: "18446744073709551615".to_string(),
            path: "user.id".to_string(),
        }),
    );
}

#[test]
fn numbers_keep_their_kind() {
    let field = FieldDeclaration::from_json(&json!({
        "__args": { "big": 9223372036854775807i64, "ratio": 0.25, "neg": -3 },
        "__scalars": ["id"]
    })).unwrap();

    let args = field.arguments().cloned().unwrap_or_default();
    assert_eq!(args["big"], Value::Int(i64::MAX));
    assert_eq!(args["ratio"], Value::Float(0.25));
    assert_eq!(args["neg"], Value::Int(-3));
}

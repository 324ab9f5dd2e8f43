use crate::AstNode;
use crate::BooleanValue;
use crate::LocSpan;
use crate::Location;
use crate::NodeKind;
use crate::StringValue;
use crate::tests::ast_test_utils::sample_query_document;
use crate::tests::ast_test_utils::user_field_of;
use serde_json::json;
use std::sync::Arc;

/// Verifies the shallow view: kind, location span and the fields in
/// declaration order, with absent optionals reported as null.
#[test]
fn shallow_field_view() {
    let doc = sample_query_document();
    let field = user_field_of(&doc);
    let shallow = field.to_array();

    assert_eq!(shallow.kind, NodeKind::Field);
    assert_eq!(shallow.loc, Some(LocSpan { start: 33, end: 72 }));

    let keys: Vec<&str> = shallow.properties.keys().copied().collect();
    assert_eq!(
        keys,
        vec!["alias", "name", "arguments", "directives", "selectionSet"],
    );
    assert!(shallow.get("alias").is_some_and(|p| p.is_null()));

    let name = shallow
        .get("name")
        .and_then(|p| p.as_node())
        .expect("name is a node");
    assert_eq!(name.kind(), NodeKind::Name);
    assert_eq!(
        name.to_array().get("value").and_then(|p| p.as_str()),
        Some("user"),
    );

    let arguments = shallow
        .get("arguments")
        .and_then(|p| p.as_nodes())
        .expect("arguments is a list");
    assert_eq!(arguments.len(), 1);
    assert_eq!(arguments[0].kind(), NodeKind::Argument);
}

/// Verifies that a node without a location has no span in its shallow
/// view.
#[test]
fn shallow_view_without_location() {
    let value = BooleanValue {
        loc: None,
        value: true,
    };
    let shallow = value.to_array();

    assert_eq!(shallow.kind, NodeKind::BooleanValue);
    assert_eq!(shallow.loc, None);
    assert!(matches!(
        shallow.get("value"),
        Some(crate::Property::Bool(true)),
    ));
}

/// Verifies the full nested dump of a field: every level carries its
/// kind, null fields are omitted and lists become arrays.
#[test]
fn recursive_field_dump() {
    let doc = sample_query_document();
    let dump = user_field_of(&doc).to_array_recursive();

    let name = |value: &str| json!({"kind": "Name", "value": value});
    let leaf = |field: &str| json!({
        "kind": "Field",
        "name": name(field),
        "arguments": [],
        "directives": [],
    });

    assert_eq!(dump, json!({
        "kind": "Field",
        "loc": {"start": 33, "end": 72},
        "name": name("user"),
        "arguments": [{
            "kind": "Argument",
            "name": name("id"),
            "value": {"kind": "Variable", "name": name("id")},
        }],
        "directives": [],
        "selectionSet": {
            "kind": "SelectionSet",
            "selections": [
                leaf("name"),
                {
                    "kind": "InlineFragment",
                    "typeCondition": {
                        "kind": "NamedType",
                        "name": name("Admin"),
                    },
                    "directives": [],
                    "selectionSet": {
                        "kind": "SelectionSet",
                        "selections": [leaf("level")],
                    },
                },
            ],
        },
    }));
}

/// Verifies that the dump keeps `kind` and `loc` ahead of the fields,
/// which follow declaration order.
#[test]
fn recursive_dump_key_order() {
    let doc = sample_query_document();
    let dump = doc.to_array_recursive();

    let keys: Vec<&str> = dump
        .as_object()
        .expect("object dump")
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, vec!["kind", "loc", "definitions"]);

    let op = &dump["definitions"][0];
    let op_keys: Vec<&str> = op
        .as_object()
        .expect("object dump")
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(op_keys, vec![
        "kind",
        "loc",
        "operation",
        "name",
        "variableDefinitions",
        "directives",
        "selectionSet",
    ]);
    assert_eq!(op["operation"], "query");
    assert_eq!(op["variableDefinitions"][0]["type"]["kind"], "NamedType");
    assert_eq!(op["variableDefinitions"][0]["defaultValue"]["value"], "1");
}

/// Verifies that boolean fields are always present, even when false.
#[test]
fn recursive_dump_keeps_false_booleans() {
    let mut value = StringValue::new("hello");
    value.loc = Some(Arc::new(Location::new(4, 11)));

    assert_eq!(value.to_array_recursive(), json!({
        "kind": "StringValue",
        "loc": {"start": 4, "end": 11},
        "value": "hello",
        "block": false,
    }));
}

/// Verifies that no node dumps with an empty kind.
#[test]
fn kind_is_never_empty() {
    let doc = sample_query_document();

    fn walk(node: &dyn AstNode) {
        assert!(!node.kind().as_str().is_empty());
        for (_, property) in node.properties() {
            if let Some(child) = property.as_node() {
                walk(child);
            }
            if let Some(children) = property.as_nodes() {
                for child in children {
                    walk(*child);
                }
            }
        }
    }
    walk(&doc);
}

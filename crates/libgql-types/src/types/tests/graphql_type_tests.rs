use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;

#[test]
fn builtins_are_named_by_their_graphql_names() {
    let builtins = GraphQLType::builtins();
    let names: Vec<&str> = builtins
        .iter()
        .map(|type_| type_.name())
        .collect();
    assert_eq!(names, vec!["Boolean", "Float", "ID", "Int", "String"]);

    for builtin in GraphQLType::builtins() {
        assert!(builtin.is_builtin());
        assert_eq!(GraphQLType::builtin(builtin.name()), Some(builtin.clone()));
    }
    assert_eq!(GraphQLType::builtin("Bool"), None);
}

#[test]
fn only_interfaces_and_unions_are_abstract() {
    let iface = InterfaceType::builder("Node").build_type();
    let union_type = UnionType::builder("SearchResult").build_type();
    let obj_type = ObjectType::builder("User").build_type();
    let scalar = ScalarType::builder("DateTime").build_type();

    assert!(iface.is_abstract());
    assert!(union_type.is_abstract());
    assert!(!obj_type.is_abstract());
    assert!(!scalar.is_abstract());
    assert!(!GraphQLType::String.is_abstract());
}

#[test]
fn kind_and_describe_name_the_shape() {
    let obj_type = ObjectType::builder("User").build_type();
    assert_eq!(obj_type.kind(), GraphQLTypeKind::Object);
    assert_eq!(obj_type.describe(), "Object `User`");
    assert_eq!(GraphQLType::Bool.describe(), "Boolean `Boolean`");
    assert!(!obj_type.is_builtin());
}

#[test]
fn accessors_match_only_their_variant() {
    let obj_type = ObjectType::builder("User").build_type();
    assert_eq!(obj_type.as_object().map(|t| t.name()), Some("User"));
    assert!(obj_type.as_interface().is_none());
    assert!(obj_type.as_union().is_none());
    assert!(obj_type.as_scalar().is_none());
}

#[test]
fn scalar_builder_records_specified_by_url() {
    let scalar = ScalarType::builder("URL")
        .description("An RFC 3986 URL")
        .specified_by_url("https://datatracker.ietf.org/doc/html/rfc3986")
        .build();
    assert_eq!(scalar.name(), "URL");
    assert_eq!(scalar.description(), Some("An RFC 3986 URL"));
    assert_eq!(
        scalar.specified_by_url(),
        Some("https://datatracker.ietf.org/doc/html/rfc3986"),
    );
}

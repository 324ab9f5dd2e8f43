use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::Parameter;
use crate::types::TypeAnnotation;

#[test]
fn fields_keep_declaration_order() {
    let user = ObjectType::builder("User")
        .field(Field::new("name", TypeAnnotation::named("String")))
        .field(Field::new("id", TypeAnnotation::named("ID").non_null()))
        .field(Field::new("age", TypeAnnotation::named("Int")))
        .build();

    let field_names: Vec<&str> = user.fields().keys().map(String::as_str).collect();
    assert_eq!(field_names, vec!["name", "id", "age"]);
    assert_eq!(
        user.field("id").map(|f| f.type_annotation().to_string()),
        Some("ID!".to_string()),
    );
    assert!(user.field("email").is_none());
}

#[test]
fn redeclaring_a_field_replaces_it_in_place() {
    let user = ObjectType::builder("User")
        .field(Field::new("id", TypeAnnotation::named("ID")))
        .field(Field::new("name", TypeAnnotation::named("String")))
        .field(Field::new("id", TypeAnnotation::named("ID").non_null()))
        .build();

    let field_names: Vec<&str> = user.fields().keys().map(String::as_str).collect();
    assert_eq!(field_names, vec!["id", "name"]);
    assert!(!user.fields()["id"].type_annotation().nullable());
}

#[test]
fn implements_deduplicates_interfaces() {
    let user = ObjectType::builder("User")
        .implements("Node")
        .implements("Entity")
        .implements("Node")
        .build();

    assert_eq!(user.interface_names(), vec!["Node", "Entity"]);
    assert!(user.implements_interface("Entity"));
    assert!(!user.implements_interface("User"));
}

#[test]
fn interfaces_may_implement_interfaces() {
    let resource = InterfaceType::builder("Resource")
        .description("Anything addressable by URL")
        .implements("Node")
        .field(Field::new("url", TypeAnnotation::named("String").non_null()))
        .build();

    assert_eq!(resource.name(), "Resource");
    assert_eq!(resource.description(), Some("Anything addressable by URL"));
    assert_eq!(resource.interface_names(), vec!["Node"]);
}

#[test]
fn field_parameters_and_metadata() {
    let field = Field::new("friends", TypeAnnotation::list(TypeAnnotation::named("User")))
        .with_description("Friends of this user")
        .with_deprecation_reason("Use `connections`")
        .with_parameter(Parameter::new("first", TypeAnnotation::named("Int")))
        .with_parameter(
            Parameter::new("after", TypeAnnotation::named("String"))
                .with_description("Cursor"),
        );

    let param_names: Vec<&str> = field.parameters().keys().map(String::as_str).collect();
    assert_eq!(param_names, vec!["first", "after"]);
    assert_eq!(field.parameters()["after"].description(), Some("Cursor"));
    assert_eq!(field.description(), Some("Friends of this user"));
    assert_eq!(field.deprecation_reason(), Some("Use `connections`"));
}

#[test]
fn build_type_wraps_in_the_matching_variant() {
    let obj_type = ObjectType::builder("User").build_type();
    assert!(matches!(obj_type, GraphQLType::Object(_)));

    let iface = InterfaceType::builder("Node").build_type();
    assert!(matches!(iface, GraphQLType::Interface(_)));
}

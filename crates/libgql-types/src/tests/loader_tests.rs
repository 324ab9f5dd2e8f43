use crate::ResolutionError;
use crate::TypeCatalog;
use crate::TypeLoader;
use crate::tests::resolution_test_utils::post_type;
use crate::tests::resolution_test_utils::schema_types;
use crate::tests::resolution_test_utils::user_type;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectType;
use crate::types::TypeAnnotation;

#[test]
fn catalog_keeps_insertion_order() -> Result<(), ResolutionError> {
    let catalog = TypeCatalog::from_types(schema_types())?;

    let names: Vec<&str> = catalog.types().map(GraphQLType::name).collect();
    assert_eq!(names, vec!["Query", "Node", "SearchResult", "User", "Post"]);
    assert_eq!(catalog.len(), 5);
    assert!(catalog.contains("Post"));
    assert_eq!(catalog.load_type("Post"), Some(post_type()));
    assert_eq!(catalog.load_type("Comment"), None);
    Ok(())
}

#[test]
fn re_adding_an_identical_type_is_a_no_op() -> Result<(), ResolutionError> {
    let mut catalog = TypeCatalog::new();
    catalog.add_type(user_type())?;
    catalog.add_type(user_type())?;
    assert_eq!(catalog.len(), 1);
    Ok(())
}

#[test]
fn adding_a_different_type_under_a_taken_name_fails() {
    let mut catalog = TypeCatalog::new();
    let other_user = ObjectType::builder("User")
        .field(Field::new("email", TypeAnnotation::named("String")))
        .build_type();

    assert!(catalog.add_type(user_type()).is_ok());
    let err = catalog.add_type(other_user).expect_err("User is taken");
    assert!(matches!(
        err,
        ResolutionError::DuplicateTypeName { ref type_name } if type_name == "User"
    ));
    assert_eq!(catalog.get("User"), Some(&user_type()));
}

#[test]
fn closures_are_type_loaders() {
    let loader = |name: &str| (name == "User").then(user_type);

    assert_eq!(loader.load_type("User"), Some(user_type()));
    assert_eq!(loader.load_type("Post"), None);
}

#[test]
fn named_refs_resolve_builtins_without_the_loader() {
    let empty = TypeCatalog::new();

    assert_eq!(NamedGraphQLTypeRef::new("Float").deref(&empty), Some(GraphQLType::Float));
    assert_eq!(NamedGraphQLTypeRef::new("User").deref(&empty), None);
    assert_eq!(NamedGraphQLTypeRef::new("User").name(), "User");
}

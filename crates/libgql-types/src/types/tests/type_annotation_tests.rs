use crate::TypeCatalog;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use crate::types::TypeAnnotation;
use libgql_ast::ListType;
use libgql_ast::NamedType;
use libgql_ast::NonNullType;
use libgql_ast::TypeReference;

fn non_null(inner: TypeReference) -> TypeReference {
    TypeReference::NonNull(NonNullType {
        loc: None,
        type_: Box::new(inner),
    })
}

fn list(inner: TypeReference) -> TypeReference {
    TypeReference::List(ListType {
        loc: None,
        type_: Box::new(inner),
    })
}

fn named(name: &str) -> TypeReference {
    TypeReference::Named(NamedType::new(name))
}

#[test]
fn named_annotations_default_to_nullable() {
    let annot = TypeAnnotation::named("String");
    assert!(annot.nullable());
    assert_eq!(annot.innermost_type_name(), "String");
    assert_eq!(annot.to_string(), "String");
}

#[test]
fn non_null_only_affects_the_outermost_level() {
    let annot = TypeAnnotation::list(TypeAnnotation::named("ID")).non_null();
    assert!(!annot.nullable());

    let inner = annot.as_list_annotation()
        .expect("should be a list annotation")
        .inner_type_annotation();
    assert!(inner.nullable());
    assert_eq!(annot.to_string(), "[ID]!");
}

#[test]
fn from_ast_folds_non_null_wrappers_into_nullability() {
    // [User!]!
    let ast_type = non_null(list(non_null(named("User"))));
    let annot = TypeAnnotation::from_ast(&ast_type);

    assert_eq!(annot.to_string(), "[User!]!");
    assert_eq!(
        annot,
        TypeAnnotation::list(TypeAnnotation::named("User").non_null()).non_null(),
    );
    assert_eq!(annot.innermost_type_name(), "User");
}

#[test]
fn from_ast_keeps_plain_names_nullable() {
    let annot = TypeAnnotation::from_ast(&list(list(named("Int"))));
    assert_eq!(annot.to_string(), "[[Int]]");
    assert!(annot.nullable());
    assert_eq!(annot.innermost_named_type_annotation().graphql_type_name(), "Int");
}

#[test]
fn named_annotation_dereferences_through_a_loader() {
    let user = ObjectType::builder("User").build_type();
    let catalog = TypeCatalog::from_types([user.clone()])
        .expect("catalog should accept a single type");

    let user_annot = TypeAnnotation::named("User");
    let user_named = user_annot.as_named_annotation()
        .expect("should be a named annotation");
    assert_eq!(user_named.graphql_type(&catalog), Some(user));

    // Built-ins resolve without the loader knowing about them.
    let id_annot = TypeAnnotation::named("ID");
    assert_eq!(
        id_annot.innermost_named_type_annotation().graphql_type(&catalog),
        Some(GraphQLType::ID),
    );

    let missing = TypeAnnotation::named("Missing");
    assert_eq!(
        missing.innermost_named_type_annotation().graphql_type(&catalog),
        None,
    );
}

use crate::EagerResolution;
use crate::SchemaConfig;
use crate::SchemaConfigError;
use crate::SchemaConfigOptions;
use crate::TypeLoader;
use crate::TypeResolution;
use crate::TypesSource;
use crate::tests::resolution_test_utils::names_of;
use crate::tests::resolution_test_utils::node_interface;
use crate::tests::resolution_test_utils::query_type;
use crate::tests::resolution_test_utils::schema_catalog;
use crate::tests::resolution_test_utils::schema_types;
use crate::tests::resolution_test_utils::user_type;
use crate::types::Directive;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::ObjectType;
use crate::types::TypeAnnotation;
use libgql_ast::Name;
use libgql_ast::NamedType;
use libgql_ast::Node;
use libgql_ast::NodeKind;
use libgql_ast::NodeList;
use libgql_ast::OperationType;
use libgql_ast::OperationTypeDefinition;
use libgql_ast::SchemaDefinition;
use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

type Result<T> = std::result::Result<T, SchemaConfigError>;

fn schema_definition(query_type_name: &str) -> Node {
    Node::SchemaDefinition(SchemaDefinition {
        description: None,
        directives: NodeList::default(),
        loc: None,
        operation_types: NodeList::new(vec![OperationTypeDefinition {
            loc: None,
            operation: OperationType::Query,
            type_: NamedType::new(query_type_name),
        }]),
    })
}

fn query_options() -> SchemaConfigOptions {
    SchemaConfigOptions {
        query: Some(query_type()),
        ..SchemaConfigOptions::default()
    }
}

#[test]
fn new_config_has_builtin_directives_and_no_extra_types() {
    let query = Arc::new(ObjectType::builder("Query").build());
    let config = SchemaConfig::new(query);

    assert_eq!(config.directives(), Directive::builtins().as_slice());
    assert!(config.types().is_empty());
    assert!(config.mutation().is_none());
    assert!(config.type_loader().is_none());
    assert!(!config.assume_valid());
    assert_eq!(
        config.root_types().iter().map(GraphQLType::name).collect::<Vec<_>>(),
        vec!["Query"],
    );
}

#[test]
fn create_requires_a_query_type() {
    let err = SchemaConfig::create(SchemaConfigOptions::default())
        .expect_err("no query type given");
    assert!(matches!(err, SchemaConfigError::MissingQueryType));
}

#[test]
fn root_types_must_be_object_types() {
    let err = SchemaConfig::create(SchemaConfigOptions {
        query: Some(node_interface()),
        ..SchemaConfigOptions::default()
    }).expect_err("interfaces cannot be roots");
    assert!(matches!(
        err,
        SchemaConfigError::InvalidRootType {
            operation: OperationType::Query,
            expected: GraphQLTypeKind::Object,
            actual: GraphQLTypeKind::Interface,
        }
    ));
    assert_eq!(
        err.to_string(),
        "The query root type must be of kind `Object`, found `Interface`",
    );

    let err = SchemaConfig::create(SchemaConfigOptions {
        subscription: Some(GraphQLType::String),
        ..query_options()
    }).expect_err("scalars cannot be roots");
    assert!(matches!(
        err,
        SchemaConfigError::InvalidRootType {
            operation: OperationType::Subscription,
            actual: GraphQLTypeKind::String,
            ..
        }
    ));
}

#[test]
fn ast_node_must_be_a_schema_definition() {
    let err = SchemaConfig::create(SchemaConfigOptions {
        ast_node: Some(Node::Name(Name::new("Query"))),
        ..query_options()
    }).expect_err("a name is not a schema definition");
    assert!(matches!(
        err,
        SchemaConfigError::InvalidAstNode { actual: NodeKind::Name }
    ));
}

#[test]
fn ast_node_root_bindings_must_match_the_config() -> Result<()> {
    let err = SchemaConfig::create(SchemaConfigOptions {
        ast_node: Some(schema_definition("RootQuery")),
        ..query_options()
    }).expect_err("schema {} binds a different query type");
    assert!(matches!(
        err,
        SchemaConfigError::RootTypeMismatch {
            operation: OperationType::Query,
            ref declared,
            ref configured,
        } if declared == "RootQuery" && configured == "`Query`"
    ));

    let config = SchemaConfig::create(SchemaConfigOptions {
        assume_valid: true,
        ast_node: Some(schema_definition("RootQuery")),
        ..query_options()
    })?;
    assert!(config.assume_valid());
    assert!(config.ast_node().is_some());

    let config = SchemaConfig::create(SchemaConfigOptions {
        ast_node: Some(schema_definition("Query")),
        ..query_options()
    })?;
    config.validate()?;
    Ok(())
}

#[test]
fn setters_chain_on_the_same_config() -> Result<()> {
    let mut config = SchemaConfig::create(query_options())?;
    let mutation = ObjectType::builder("Mutation").build_type();
    config
        .set_mutation(Some(mutation))?
        .set_directives(vec![Directive::custom("auth", ["FIELD_DEFINITION"])])
        .set_types(vec![user_type()])
        .set_assume_valid(true);

    assert_eq!(config.mutation().map(|t| t.name()), Some("Mutation"));
    assert_eq!(config.root_type(OperationType::Mutation), config.mutation());
    assert_eq!(config.directives().len(), 1);
    assert_eq!(config.types(), vec![user_type()]);
    assert_eq!(
        config.root_types().iter().map(GraphQLType::name).collect::<Vec<_>>(),
        vec!["Query", "Mutation"],
    );

    let err = config.set_query(node_interface())
        .map(|_| ())
        .expect_err("query must stay an object type");
    assert!(matches!(err, SchemaConfigError::InvalidRootType { .. }));
    assert_eq!(config.query().name(), "Query");
    Ok(())
}

#[test]
fn types_provider_runs_on_demand() -> Result<()> {
    let runs = Rc::new(Cell::new(0));
    let provider_runs = runs.clone();
    let config = SchemaConfig::create(SchemaConfigOptions {
        types: TypesSource::Provider(Arc::new(move || {
            provider_runs.set(provider_runs.get() + 1);
            schema_types()
        })),
        ..query_options()
    })?;
    assert_eq!(runs.get(), 0);

    let resolution = config.build_resolution(None)?;
    assert_eq!(runs.get(), 1);
    assert_eq!(resolution.resolve_type("Post")?.map(|t| t.kind()), Some(GraphQLTypeKind::Object));
    assert_eq!(format!("{:?}", config.types_source()), "Provider(..)");
    Ok(())
}

#[test]
fn eager_resolution_uses_extra_types_then_the_loader() -> Result<()> {
    let loader: Arc<dyn TypeLoader> = Arc::new(schema_catalog());
    let mut config = SchemaConfig::create(query_options())?;
    config.set_type_loader(Some(loader));

    let resolution = config.build_resolution(None)?;

    assert_eq!(resolution.resolve_type("User")?, Some(user_type()));
    assert_eq!(
        names_of(&resolution.resolve_possible_types(&node_interface())?),
        vec!["User", "Post"],
    );
    Ok(())
}

#[test]
fn eager_resolution_without_a_loader_needs_every_type() {
    let query = ObjectType::builder("Query")
        .field(Field::new("me", TypeAnnotation::named("User")))
        .build();
    let config = SchemaConfig::new(Arc::new(query));

    let err = config.build_resolution(None).err().expect("User is unknown");
    assert!(matches!(err, SchemaConfigError::Resolution(_)));
}

#[test]
fn loader_and_descriptor_select_lazy_resolution() -> Result<()> {
    let descriptor = EagerResolution::with_loader(&[query_type()], &schema_catalog())
        .map_err(SchemaConfigError::from)?
        .descriptor();
    let calls = Rc::new(Cell::new(0));
    let loader_calls = calls.clone();
    let catalog = schema_catalog();
    let loader: Arc<dyn TypeLoader> = Arc::new(move |name: &str| {
        loader_calls.set(loader_calls.get() + 1);
        catalog.load_type(name)
    });
    let mut config = SchemaConfig::create(query_options())?;
    config.set_type_loader(Some(loader));

    let resolution = config.build_resolution(Some(descriptor))?;
    assert_eq!(calls.get(), 0);

    assert_eq!(resolution.resolve_type("User")?, Some(user_type()));
    assert_eq!(resolution.resolve_type("User")?, Some(user_type()));
    assert_eq!(calls.get(), 1);
    Ok(())
}

use crate::Descriptor;
use crate::DescriptorError;
use crate::EagerResolution;
use crate::LazyResolution;
use crate::ResolutionError;
use crate::TypeLoader;
use crate::tests::resolution_test_utils::names_of;
use crate::tests::resolution_test_utils::node_interface;
use crate::tests::resolution_test_utils::query_type;
use crate::tests::resolution_test_utils::schema_catalog;
use crate::tests::resolution_test_utils::search_result_union;
use crate::tests::resolution_test_utils::user_type;
use crate::types::GraphQLType;
use crate::types::InterfaceType;
use std::cell::RefCell;

type Result<T> = std::result::Result<T, ResolutionError>;

fn eager_descriptor() -> Result<Descriptor> {
    Ok(EagerResolution::with_loader(&[query_type()], &schema_catalog())?.descriptor())
}

#[test]
fn json_descriptor_round_trip_preserves_results() -> Result<()> {
    let eager = EagerResolution::with_loader(&[query_type()], &schema_catalog())?;
    let json = eager.descriptor().to_json()?;
    let catalog = schema_catalog();

    let lazy = LazyResolution::from_json(&json, |name: &str| catalog.load_type(name))?;

    assert_eq!(lazy.resolve_type("User")?, eager.resolve_type("User")?);
    let node = node_interface();
    assert_eq!(
        names_of(&lazy.resolve_possible_types(&node)?),
        names_of(&eager.resolve_possible_types(&node)?),
    );
    let search = search_result_union();
    assert_eq!(
        names_of(&lazy.resolve_possible_types(&search)?),
        vec!["User", "Post"],
    );
    Ok(())
}

#[test]
fn binary_descriptor_round_trip_preserves_results() -> Result<()> {
    let bytes = eager_descriptor()?.to_bytes()?;
    let lazy = LazyResolution::from_bytes(&bytes, schema_catalog())?;

    assert_eq!(lazy.descriptor(), &eager_descriptor()?);
    assert_eq!(lazy.resolve_type("User")?, Some(user_type()));
    assert_eq!(
        names_of(&lazy.resolve_possible_types(&node_interface())?),
        vec!["User", "Post"],
    );
    Ok(())
}

#[test]
fn loader_runs_at_most_once_per_name() -> Result<()> {
    let calls = RefCell::new(Vec::<String>::new());
    let catalog = schema_catalog();
    let lazy = LazyResolution::new(eager_descriptor()?, |name: &str| {
        calls.borrow_mut().push(name.to_string());
        catalog.load_type(name)
    });

    assert!(!lazy.is_loaded("User"));
    assert_eq!(lazy.resolve_type("User")?, Some(user_type()));
    assert_eq!(lazy.resolve_type("User")?, Some(user_type()));
    assert!(lazy.is_loaded("User"));
    assert_eq!(*calls.borrow(), vec!["User".to_string()]);
    Ok(())
}

#[test]
fn absent_load_results_are_memoized_too() -> Result<()> {
    let calls = RefCell::new(0usize);
    let mut descriptor = Descriptor::new();
    descriptor.add_type_name("Retired");
    let lazy = LazyResolution::new(descriptor, |_: &str| -> Option<GraphQLType> {
        *calls.borrow_mut() += 1;
        None
    });

    assert_eq!(lazy.resolve_type("Retired")?, None);
    assert_eq!(lazy.resolve_type("Retired")?, None);
    assert_eq!(*calls.borrow(), 1);
    Ok(())
}

#[test]
fn names_outside_the_descriptor_never_reach_the_loader() -> Result<()> {
    let calls = RefCell::new(0usize);
    let lazy = LazyResolution::new(eager_descriptor()?, |_: &str| -> Option<GraphQLType> {
        *calls.borrow_mut() += 1;
        None
    });

    assert_eq!(lazy.resolve_type("Comment")?, None);
    assert_eq!(lazy.resolve_type("ID")?, Some(GraphQLType::ID));
    assert_eq!(lazy.resolve_type("Boolean")?, Some(GraphQLType::Bool));
    assert_eq!(*calls.borrow(), 0);
    Ok(())
}

#[test]
fn possible_types_load_members_once_in_stored_order() -> Result<()> {
    let calls = RefCell::new(Vec::<String>::new());
    let catalog = schema_catalog();
    let lazy = LazyResolution::new(eager_descriptor()?, |name: &str| {
        calls.borrow_mut().push(name.to_string());
        catalog.load_type(name)
    });

    let node = node_interface();
    let first = lazy.resolve_possible_types(&node)?;
    let second = lazy.resolve_possible_types(&node)?;
    assert_eq!(names_of(&first), vec!["User", "Post"]);
    assert_eq!(first, second);

    // The union shares members already loaded for the interface.
    lazy.resolve_possible_types(&search_result_union())?;
    assert_eq!(*calls.borrow(), vec!["User".to_string(), "Post".to_string()]);
    Ok(())
}

#[test]
fn missing_possible_type_map_fails_before_any_lookup() {
    let calls = RefCell::new(0usize);
    let json = r#"{"version":"1.0","typeMap":{"User":1}}"#;

    let result = LazyResolution::from_json(json, |_: &str| -> Option<GraphQLType> {
        *calls.borrow_mut() += 1;
        None
    });

    assert!(matches!(
        result,
        Err(ResolutionError::Descriptor(
            DescriptorError::MissingField("possibleTypeMap"),
        )),
    ));
    assert_eq!(*calls.borrow(), 0);
}

#[test]
fn missing_type_map_or_version_is_fatal() {
    let no_type_map = r#"{"version":"1.0","possibleTypeMap":{}}"#;
    assert!(matches!(
        LazyResolution::from_json(no_type_map, schema_catalog()),
        Err(ResolutionError::Descriptor(DescriptorError::MissingField("typeMap"))),
    ));

    let no_version = r#"{"typeMap":{},"possibleTypeMap":{}}"#;
    assert!(matches!(
        LazyResolution::from_json(no_version, schema_catalog()),
        Err(ResolutionError::Descriptor(DescriptorError::MissingField("version"))),
    ));
}

#[test]
fn unsupported_version_is_fatal() {
    let json = r#"{"version":"2.0","typeMap":{},"possibleTypeMap":{}}"#;

    let result = LazyResolution::from_json(json, schema_catalog());
    assert!(matches!(
        result,
        Err(ResolutionError::Descriptor(
            DescriptorError::UnsupportedVersion { ref found },
        )) if found == "2.0"
    ));
}

#[test]
fn abstract_type_absent_from_descriptor_has_no_possible_types() -> Result<()> {
    let calls = RefCell::new(0usize);
    let lazy = LazyResolution::new(eager_descriptor()?, |_: &str| -> Option<GraphQLType> {
        *calls.borrow_mut() += 1;
        None
    });

    let unknown = InterfaceType::builder("Timestamped").build_type();
    assert!(lazy.resolve_possible_types(&unknown)?.is_empty());
    assert_eq!(*calls.borrow(), 0);
    Ok(())
}

#[test]
fn loader_returning_another_type_fails_naming_the_request() -> Result<()> {
    let lazy = LazyResolution::new(eager_descriptor()?, |_: &str| -> Option<GraphQLType> {
        Some(query_type())
    });

    let err = lazy.resolve_type("User").expect_err("asked for User, got Query");
    assert!(matches!(
        err,
        ResolutionError::LoaderContractViolation {
            ref requested,
            ref found,
        } if requested == "User" && found == "Object `Query`"
    ));
    assert!(err.to_string().contains("`User`"));
    Ok(())
}

#[test]
fn loader_contract_violation_is_remembered() -> Result<()> {
    let calls = RefCell::new(0);
    let lazy = LazyResolution::new(eager_descriptor()?, |_: &str| -> Option<GraphQLType> {
        *calls.borrow_mut() += 1;
        Some(query_type())
    });

    for _ in 0..2 {
        let err = lazy.resolve_type("User").expect_err("asked for User, got Query");
        assert!(matches!(
            err,
            ResolutionError::LoaderContractViolation { ref requested, .. }
                if requested == "User"
        ));
    }
    assert_eq!(*calls.borrow(), 1);
    assert!(lazy.is_loaded("User"));
    Ok(())
}

#[test]
fn possible_type_that_is_not_an_object_is_fatal() -> Result<()> {
    let mut descriptor = Descriptor::new();
    descriptor
        .add_type_name("Node")
        .add_type_name("Search")
        .add_possible_type("Node", "Search");
    let lazy = LazyResolution::new(descriptor, |name: &str| match name {
        "Node" => Some(node_interface()),
        "Search" => Some(InterfaceType::builder("Search").build_type()),
        _ => None,
    });

    let err = lazy.resolve_possible_types(&node_interface())
        .expect_err("Search is an interface");
    assert!(matches!(
        err,
        ResolutionError::InvalidPossibleType {
            ref abstract_type,
            ref member,
            ..
        } if abstract_type == "Node" && member == "Search"
    ));

    // A failed resolution caches nothing.
    assert!(lazy.resolve_possible_types(&node_interface()).is_err());
    Ok(())
}

#[test]
fn possible_type_missing_from_loader_is_fatal() -> Result<()> {
    let mut descriptor = Descriptor::new();
    descriptor
        .add_type_name("Node")
        .add_type_name("User")
        .add_possible_type("Node", "User");
    let lazy = LazyResolution::new(
        descriptor,
        |_: &str| -> Option<GraphQLType> { None },
    );

    let err = lazy.resolve_possible_types(&node_interface())
        .expect_err("User cannot be loaded");
    assert!(matches!(
        err,
        ResolutionError::InvalidPossibleType { ref found, .. } if found == "nothing"
    ));
    Ok(())
}

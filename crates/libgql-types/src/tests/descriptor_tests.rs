use crate::DESCRIPTOR_VERSION;
use crate::Descriptor;
use crate::DescriptorError;
use crate::NameSet;
use crate::RawDescriptor;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, DescriptorError>;

fn sample_descriptor() -> Descriptor {
    let mut descriptor = Descriptor::new();
    descriptor
        .add_type_name("Query")
        .add_type_name("Node")
        .add_type_name("User")
        .add_type_name("Post")
        .add_possible_type("Node", "User")
        .add_possible_type("Node", "Post");
    descriptor
}

#[test]
fn json_uses_presence_maps() -> Result<()> {
    assert_eq!(
        sample_descriptor().to_json()?,
        concat!(
            r#"{"version":"1.0","#,
            r#""typeMap":{"Query":1,"Node":1,"User":1,"Post":1},"#,
            r#""possibleTypeMap":{"Node":{"User":1,"Post":1}}}"#,
        ),
    );
    Ok(())
}

#[test]
fn json_round_trip_keeps_member_order() -> Result<()> {
    let json = r#"{
        "version": "1.0",
        "typeMap": {"Post": 1, "User": 1, "Node": 1},
        "possibleTypeMap": {"Node": {"Post": 1, "User": 1}}
    }"#;
    let descriptor = Descriptor::from_json(json)?;

    let members: Vec<&str> = descriptor.possible_type_names("Node")
        .map(|names| names.iter().collect())
        .unwrap_or_default();
    assert_eq!(members, vec!["Post", "User"]);
    assert_eq!(descriptor.version(), DESCRIPTOR_VERSION);

    let pretty = descriptor.to_json_pretty()?;
    assert_eq!(Descriptor::from_json(&pretty)?, descriptor);
    Ok(())
}

#[test]
fn binary_round_trip() -> Result<()> {
    let descriptor = sample_descriptor();
    let bytes = descriptor.to_bytes()?;
    assert_eq!(Descriptor::from_bytes(&bytes)?, descriptor);
    Ok(())
}

#[test]
fn queries_report_membership() {
    let descriptor = sample_descriptor();

    assert!(descriptor.contains_type("User"));
    assert!(!descriptor.contains_type("Comment"));
    assert_eq!(descriptor.abstract_type_names().collect::<Vec<_>>(), vec!["Node"]);
    assert!(descriptor.possible_type_names("User").is_none());
    assert_eq!(descriptor.type_names().len(), 4);
}

#[test]
fn each_required_field_is_checked() {
    let cases = [
        (r#"{"version":"1.0","possibleTypeMap":{}}"#, "typeMap"),
        (r#"{"version":"1.0","typeMap":{}}"#, "possibleTypeMap"),
        (r#"{"typeMap":{},"possibleTypeMap":{}}"#, "version"),
    ];
    for (json, missing) in cases {
        match Descriptor::from_json(json) {
            Err(DescriptorError::MissingField(field)) => assert_eq!(field, missing),
            other => panic!("expected MissingField({missing}), got {other:?}"),
        }
    }
}

#[test]
fn missing_field_is_reported_from_binary_too() -> Result<()> {
    let raw = RawDescriptor {
        version: None,
        type_map: Some(NameSet::from_iter(["User"])),
        possible_type_map: Some(IndexMap::new()),
    };
    let bytes = bincode::serde::encode_to_vec(&raw, bincode::config::standard())?;

    assert!(matches!(
        Descriptor::from_bytes(&bytes),
        Err(DescriptorError::MissingField("version")),
    ));
    Ok(())
}

#[test]
fn other_versions_are_rejected() {
    let json = r#"{"version":"0.9","typeMap":{},"possibleTypeMap":{}}"#;

    let err = Descriptor::from_json(json).expect_err("0.9 is not supported");
    assert!(matches!(
        err,
        DescriptorError::UnsupportedVersion { ref found } if found == "0.9"
    ));
    assert_eq!(
        err.to_string(),
        "Unsupported descriptor version `0.9` (expected `1.0`)",
    );
}

#[test]
fn malformed_input_is_a_decode_error() {
    assert!(matches!(
        Descriptor::from_json("{\"typeMap\": [\"User\"]}"),
        Err(DescriptorError::Json(_)),
    ));
    assert!(matches!(
        Descriptor::from_bytes(&[]),
        Err(DescriptorError::BincodeDecode(_)),
    ));
}

#[test]
fn serde_deserialization_validates_too() {
    let result: std::result::Result<Descriptor, _> =
        serde_json::from_str(r#"{"version":"1.0","typeMap":{}}"#);

    let err = result.expect_err("possibleTypeMap is missing");
    assert!(err.to_string().contains("possibleTypeMap"));
}

#[test]
fn name_set_ignores_duplicates() {
    let mut names: NameSet = ["User", "Post"].into_iter().collect();
    assert!(!names.insert("User"));
    assert!(names.insert("Comment"));
    assert_eq!(names.iter().collect::<Vec<_>>(), vec!["User", "Post", "Comment"]);
    assert!(!names.is_empty());
}

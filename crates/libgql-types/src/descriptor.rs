use indexmap::IndexMap;
use indexmap::IndexSet;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::de::MapAccess;
use serde::de::Visitor;
use serde::ser::SerializeMap;
use thiserror::Error;

type Result<T> = std::result::Result<T, DescriptorError>;

/// The only descriptor format version this crate reads or writes.
pub const DESCRIPTOR_VERSION: &str = "1.0";

#[derive(Debug, Error)]
pub enum DescriptorError {
    #[error("Failed to decode descriptor bytes: {0}")]
    BincodeDecode(#[from] bincode::error::DecodeError),

    #[error("Failed to encode descriptor bytes: {0}")]
    BincodeEncode(#[from] bincode::error::EncodeError),

    #[error("Invalid descriptor JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Descriptor is missing required field `{0}`")]
    MissingField(&'static str),

    #[error("Unsupported descriptor version `{found}` (expected `{}`)", DESCRIPTOR_VERSION)]
    UnsupportedVersion {
        found: String,
    },
}

/// An ordered set of type names.
///
/// Serializes as a presence map (`{"Name": 1, ...}`) so the wire shape
/// matches what other implementations of the descriptor format produce.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct NameSet(IndexSet<String>);
impl NameSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    /// Adds `name`, returning `false` if it was already present.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.0.insert(name.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}
impl<S: Into<String>> FromIterator<S> for NameSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
impl Serialize for NameSet {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for name in &self.0 {
            map.serialize_entry(name, &1u8)?;
        }
        map.end()
    }
}
impl<'de> Deserialize<'de> for NameSet {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        struct NameSetVisitor;
        impl<'de> Visitor<'de> for NameSetVisitor {
            type Value = NameSet;

            fn expecting(
                &self,
                f: &mut std::fmt::Formatter<'_>,
            ) -> std::fmt::Result {
                f.write_str("a map of names to 1")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<NameSet, A::Error> {
                let mut names = IndexSet::with_capacity(
                    access.size_hint().unwrap_or(0),
                );
                while let Some((name, _present)) =
                    access.next_entry::<String, u8>()?
                {
                    names.insert(name);
                }
                Ok(NameSet(names))
            }
        }
        deserializer.deserialize_map(NameSetVisitor)
    }
}

/// The descriptor exactly as found on the wire, before validation.
///
/// Every field is optional here so that a missing field can be reported
/// by name instead of as a generic decoding failure.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDescriptor {
    pub version: Option<String>,
    pub type_map: Option<NameSet>,
    pub possible_type_map: Option<IndexMap<String, NameSet>>,
}

/// A portable snapshot of which type names exist and which object types
/// belong to each abstract type. It holds no type definitions.
///
/// Produced by [`EagerResolution::descriptor()`](crate::EagerResolution::descriptor)
/// and consumed by [`LazyResolution`](crate::LazyResolution). A
/// `Descriptor` value is always valid: decoding goes through
/// [`RawDescriptor`] and rejects a missing field or an unsupported
/// version.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(try_from = "RawDescriptor", into = "RawDescriptor")]
pub struct Descriptor {
    possible_type_map: IndexMap<String, NameSet>,
    type_map: NameSet,
}
impl Descriptor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `name` as part of the type universe.
    pub fn add_type_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.type_map.insert(name);
        self
    }

    /// Records `member` as a possible type of `abstract_type`.
    pub fn add_possible_type(
        &mut self,
        abstract_type: impl Into<String>,
        member: impl Into<String>,
    ) -> &mut Self {
        self.possible_type_map
            .entry(abstract_type.into())
            .or_default()
            .insert(member);
        self
    }

    /// Abstract type names that have recorded members.
    pub fn abstract_type_names(&self) -> impl Iterator<Item = &str> {
        self.possible_type_map.keys().map(String::as_str)
    }

    pub fn contains_type(&self, name: &str) -> bool {
        self.type_map.contains(name)
    }

    /// Members recorded for `abstract_type`, in stored order, or `None`
    /// if the descriptor has no entry for it.
    pub fn possible_type_names(&self, abstract_type: &str) -> Option<&NameSet> {
        self.possible_type_map.get(abstract_type)
    }

    pub fn type_names(&self) -> &NameSet {
        &self.type_map
    }

    pub fn version(&self) -> &'static str {
        DESCRIPTOR_VERSION
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let (raw, _len): (RawDescriptor, usize) =
            bincode::serde::decode_from_slice(
                bytes,
                bincode::config::standard(),
            )?;
        Self::try_from(raw)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawDescriptor = serde_json::from_str(json)?;
        Self::try_from(raw)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serde::encode_to_vec(
            RawDescriptor::from(self.clone()),
            bincode::config::standard(),
        )?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
impl TryFrom<RawDescriptor> for Descriptor {
    type Error = DescriptorError;

    fn try_from(raw: RawDescriptor) -> Result<Self> {
        let type_map = raw.type_map
            .ok_or(DescriptorError::MissingField("typeMap"))?;
        let possible_type_map = raw.possible_type_map
            .ok_or(DescriptorError::MissingField("possibleTypeMap"))?;
        let version = raw.version
            .ok_or(DescriptorError::MissingField("version"))?;
        if version != DESCRIPTOR_VERSION {
            return Err(DescriptorError::UnsupportedVersion {
                found: version,
            });
        }
        Ok(Self {
            possible_type_map,
            type_map,
        })
    }
}
impl From<Descriptor> for RawDescriptor {
    fn from(descriptor: Descriptor) -> Self {
        Self {
            version: Some(DESCRIPTOR_VERSION.to_string()),
            type_map: Some(descriptor.type_map),
            possible_type_map: Some(descriptor.possible_type_map),
        }
    }
}

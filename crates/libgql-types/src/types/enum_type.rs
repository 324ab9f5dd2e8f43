use crate::types::GraphQLType;
use indexmap::IndexMap;

/// Represents an
/// [enum type](https://spec.graphql.org/October2021/#sec-Enums).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumType {
    pub(super) description: Option<String>,
    pub(super) name: String,
    pub(super) values: IndexMap<String, EnumValue>,
}
impl EnumType {
    pub fn builder(name: impl Into<String>) -> EnumTypeBuilder {
        EnumTypeBuilder {
            type_: EnumType {
                description: None,
                name: name.into(),
                values: IndexMap::new(),
            },
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn value(&self, name: &str) -> Option<&EnumValue> {
        self.values.get(name)
    }

    /// The values of this enum, in declaration order.
    pub fn values(&self) -> &IndexMap<String, EnumValue> {
        &self.values
    }
}

/// Represents an
/// [enum value](https://spec.graphql.org/October2021/#sec-Enum-Value) defined
/// within a specific [`EnumType`].
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumValue {
    pub(super) deprecation_reason: Option<String>,
    pub(super) description: Option<String>,
    pub(super) name: String,
}
impl EnumValue {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            deprecation_reason: None,
            description: None,
            name: name.into(),
        }
    }

    pub fn with_deprecation_reason(mut self, reason: impl Into<String>) -> Self {
        self.deprecation_reason = Some(reason.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn deprecation_reason(&self) -> Option<&str> {
        self.deprecation_reason.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The name of this [`EnumValue`].
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

#[derive(Debug)]
pub struct EnumTypeBuilder {
    type_: EnumType,
}
impl EnumTypeBuilder {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.type_.description = Some(description.into());
        self
    }

    /// Adds (or replaces) a value, keeping declaration order.
    pub fn value(mut self, value: EnumValue) -> Self {
        self.type_.values.insert(value.name.clone(), value);
        self
    }

    pub fn build(self) -> EnumType {
        self.type_
    }

    /// Shorthand for `GraphQLType::from(builder.build())`.
    pub fn build_type(self) -> GraphQLType {
        GraphQLType::from(self.build())
    }
}

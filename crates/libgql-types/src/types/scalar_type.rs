use crate::types::GraphQLType;

/// Represents a custom
/// [scalar type](https://spec.graphql.org/October2021/#sec-Scalars).
/// The built-in scalars are variants of [`GraphQLType`] instead.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ScalarType {
    pub(super) description: Option<String>,
    pub(super) name: String,
    pub(super) specified_by_url: Option<String>,
}
impl ScalarType {
    pub fn builder(name: impl Into<String>) -> ScalarTypeBuilder {
        ScalarTypeBuilder {
            type_: ScalarType {
                description: None,
                name: name.into(),
                specified_by_url: None,
            },
        }
    }

    /// The description of this [`ScalarType`] as defined in the schema
    /// (e.g. in a """-string immediately before the type definition).
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    // The name of this [ScalarType].
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The `@specifiedBy(url:)` of this scalar, if any.
    pub fn specified_by_url(&self) -> Option<&str> {
        self.specified_by_url.as_deref()
    }
}

#[derive(Debug)]
pub struct ScalarTypeBuilder {
    type_: ScalarType,
}
impl ScalarTypeBuilder {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.type_.description = Some(description.into());
        self
    }

    pub fn specified_by_url(mut self, url: impl Into<String>) -> Self {
        self.type_.specified_by_url = Some(url.into());
        self
    }

    pub fn build(self) -> ScalarType {
        self.type_
    }

    /// Shorthand for `GraphQLType::from(builder.build())`.
    pub fn build_type(self) -> GraphQLType {
        GraphQLType::from(self.build())
    }
}

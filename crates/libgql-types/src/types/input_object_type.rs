use crate::types::GraphQLType;
use crate::types::InputField;
use indexmap::IndexMap;

/// Represents an
/// [input object type](https://spec.graphql.org/October2021/#sec-Input-Objects).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InputObjectType {
    pub(super) description: Option<String>,
    pub(super) fields: IndexMap<String, InputField>,
    pub(super) name: String,
}
impl InputObjectType {
    pub fn builder(name: impl Into<String>) -> InputObjectTypeBuilder {
        InputObjectTypeBuilder {
            type_: InputObjectType {
                description: None,
                fields: IndexMap::new(),
                name: name.into(),
            },
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The input fields of this type, in declaration order.
    pub fn fields(&self) -> &IndexMap<String, InputField> {
        &self.fields
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

#[derive(Debug)]
pub struct InputObjectTypeBuilder {
    type_: InputObjectType,
}
impl InputObjectTypeBuilder {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.type_.description = Some(description.into());
        self
    }

    /// Adds (or replaces) an input field, keeping declaration order.
    pub fn field(mut self, field: InputField) -> Self {
        self.type_.fields.insert(field.name().to_string(), field);
        self
    }

    pub fn build(self) -> InputObjectType {
        self.type_
    }

    /// Shorthand for `GraphQLType::from(builder.build())`.
    pub fn build_type(self) -> GraphQLType {
        GraphQLType::from(self.build())
    }
}

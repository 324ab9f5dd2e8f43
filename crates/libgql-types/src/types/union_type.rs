use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;
use indexmap::IndexMap;

/// Represents a
/// [union type](https://spec.graphql.org/October2021/#sec-Unions).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UnionType {
    pub(super) description: Option<String>,
    pub(super) members: IndexMap<String, NamedGraphQLTypeRef>,
    pub(super) name: String,
}
impl UnionType {
    pub fn builder(name: impl Into<String>) -> UnionTypeBuilder {
        UnionTypeBuilder {
            type_: UnionType {
                description: None,
                members: IndexMap::new(),
                name: name.into(),
            },
        }
    }

    /// The description of this [`UnionType`] as defined in the schema
    /// (e.g. in a """-string immediately before the type definition).
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// An ordered list of the names of each [`GraphQLType`] defined as a member
    /// of this union.
    ///
    /// The order of this `Vec` retains the same ordering as the order of
    /// members defined on the union type in the schema.
    pub fn member_type_names(&self) -> Vec<&str> {
        self.members.keys()
            .map(|type_name| type_name.as_str())
            .collect()
    }

    pub fn has_member(&self, type_name: &str) -> bool {
        self.members.contains_key(type_name)
    }

    /// The name of this [`UnionType`].
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

#[derive(Debug)]
pub struct UnionTypeBuilder {
    type_: UnionType,
}
impl UnionTypeBuilder {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.type_.description = Some(description.into());
        self
    }

    /// Adds a member type. Members keep the order they were added in and
    /// adding the same name twice has no further effect.
    pub fn member(mut self, type_name: impl AsRef<str>) -> Self {
        let type_name = type_name.as_ref();
        if !self.type_.members.contains_key(type_name) {
            self.type_.members.insert(
                type_name.to_string(),
                NamedGraphQLTypeRef::new(type_name),
            );
        }
        self
    }

    pub fn build(self) -> UnionType {
        self.type_
    }

    /// Shorthand for `GraphQLType::from(builder.build())`.
    pub fn build_type(self) -> GraphQLType {
        GraphQLType::from(self.build())
    }
}

use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::ObjectOrInterfaceTypeBuilder;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectOrInterfaceTypeTrait;
use indexmap::IndexMap;
use inherent::inherent;

/// Represents an
/// [object type](https://spec.graphql.org/October2021/#sec-Objects).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectType(pub(super) ObjectOrInterfaceTypeData);
impl ObjectType {
    pub fn builder(name: impl Into<String>) -> ObjectTypeBuilder {
        ObjectOrInterfaceTypeBuilder::new(name)
    }
}

#[inherent]
impl ObjectOrInterfaceTypeTrait for ObjectType {
    /// The description of this [`ObjectType`] as defined in the schema
    /// (e.g. in a """-string immediately before the type definition).
    pub fn description(&self) -> Option<&str> {
        self.0.description()
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.0.field(name)
    }

    /// A map from FieldName -> [`Field`] for all fields defined on this
    /// [`ObjectType`], in declaration order.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        self.0.fields()
    }

    pub fn implements_interface(&self, interface_name: &str) -> bool {
        self.0.implements_interface(interface_name)
    }

    /// The names of the interfaces this type declares, in declaration
    /// order.
    pub fn interface_names(&self) -> Vec<&str> {
        self.0.interface_names()
    }

    /// The name of this [`ObjectType`].
    pub fn name(&self) -> &str {
        self.0.name()
    }
}

pub type ObjectTypeBuilder = ObjectOrInterfaceTypeBuilder<ObjectType>;
impl ObjectTypeBuilder {
    pub fn build(self) -> ObjectType {
        ObjectType(self.into_data())
    }

    /// Shorthand for `GraphQLType::from(builder.build())`.
    pub fn build_type(self) -> GraphQLType {
        GraphQLType::from(self.build())
    }
}

use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::ObjectOrInterfaceTypeBuilder;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectOrInterfaceTypeTrait;
use indexmap::IndexMap;
use inherent::inherent;

/// Represents an
/// [interface type](https://spec.graphql.org/October2021/#sec-Interfaces).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InterfaceType(pub(super) ObjectOrInterfaceTypeData);
impl InterfaceType {
    pub fn builder(name: impl Into<String>) -> InterfaceTypeBuilder {
        ObjectOrInterfaceTypeBuilder::new(name)
    }
}

#[inherent]
impl ObjectOrInterfaceTypeTrait for InterfaceType {
    /// The description of this [`InterfaceType`] as defined in the schema
    /// (e.g. in a """-string immediately before the type definition).
    pub fn description(&self) -> Option<&str> {
        self.0.description()
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.0.field(name)
    }

    /// A map from FieldName -> [`Field`] for all fields defined on this
    /// [`InterfaceType`], in declaration order.
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

    /// The name of this [`InterfaceType`].
    pub fn name(&self) -> &str {
        self.0.name()
    }
}

pub type InterfaceTypeBuilder = ObjectOrInterfaceTypeBuilder<InterfaceType>;
impl InterfaceTypeBuilder {
    pub fn build(self) -> InterfaceType {
        InterfaceType(self.into_data())
    }

    /// Shorthand for `GraphQLType::from(builder.build())`.
    pub fn build_type(self) -> GraphQLType {
        GraphQLType::from(self.build())
    }
}

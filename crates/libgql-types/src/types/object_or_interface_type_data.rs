use crate::types::Field;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectOrInterfaceTypeTrait;
use indexmap::IndexMap;
use inherent::inherent;

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub(super) struct ObjectOrInterfaceTypeData {
    pub(super) description: Option<String>,
    pub(super) fields: IndexMap<String, Field>,
    pub(super) interfaces: Vec<NamedGraphQLTypeRef>,
    pub(super) name: String,
}
impl ObjectOrInterfaceTypeData {
    pub(super) fn new(name: impl Into<String>) -> Self {
        Self {
            description: None,
            fields: IndexMap::new(),
            interfaces: vec![],
            name: name.into(),
        }
    }
}

#[inherent]
impl ObjectOrInterfaceTypeTrait for ObjectOrInterfaceTypeData {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.fields
    }

    /// Only directly declared interfaces are considered.
    pub fn implements_interface(&self, interface_name: &str) -> bool {
        self.interfaces
            .iter()
            .any(|iface_ref| iface_ref.name() == interface_name)
    }

    pub fn interface_names(&self) -> Vec<&str> {
        self.interfaces
            .iter()
            .map(|iface_ref| iface_ref.name())
            .collect()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

use crate::types::Field;
use indexmap::IndexMap;

pub(super) trait ObjectOrInterfaceTypeTrait {
    fn description(&self) -> Option<&str>;
    fn field(&self, name: &str) -> Option<&Field>;
    fn fields(&self) -> &IndexMap<String, Field>;
    fn implements_interface(&self, interface_name: &str) -> bool;
    fn interface_names(&self) -> Vec<&str>;
    fn name(&self) -> &str;
}

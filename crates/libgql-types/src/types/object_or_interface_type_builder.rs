use crate::types::Field;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectOrInterfaceTypeData;
use std::marker::PhantomData;

/// Programmatic builder shared by [`ObjectType`](crate::types::ObjectType)
/// and [`InterfaceType`](crate::types::InterfaceType).
///
/// ```
/// use libgql_types::types::Field;
/// use libgql_types::types::ObjectType;
/// use libgql_types::types::TypeAnnotation;
///
/// let user = ObjectType::builder("User")
///     .implements("Node")
///     .field(Field::new("id", TypeAnnotation::named("ID").non_null()))
///     .build();
/// assert_eq!(user.interface_names(), vec!["Node"]);
/// ```
#[derive(Debug)]
pub struct ObjectOrInterfaceTypeBuilder<T> {
    data: ObjectOrInterfaceTypeData,
    phantom: PhantomData<T>,
}
impl<T> ObjectOrInterfaceTypeBuilder<T> {
    pub(super) fn new(name: impl Into<String>) -> Self {
        Self {
            data: ObjectOrInterfaceTypeData::new(name),
            phantom: PhantomData,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.data.description = Some(description.into());
        self
    }

    /// Adds (or replaces) a field, keeping declaration order.
    pub fn field(mut self, field: Field) -> Self {
        self.data.fields.insert(field.name().to_string(), field);
        self
    }

    /// Declares an implemented interface. Declaring the same interface
    /// twice has no further effect.
    pub fn implements(mut self, interface_name: impl AsRef<str>) -> Self {
        let iface_ref = NamedGraphQLTypeRef::new(interface_name);
        if !self.data.interfaces.contains(&iface_ref) {
            self.data.interfaces.push(iface_ref);
        }
        self
    }

    pub(super) fn into_data(self) -> ObjectOrInterfaceTypeData {
        self.data
    }
}

mod directive;
mod enum_type;
mod field;
mod graphql_type;
mod graphql_type_kind;
mod input_field;
mod input_object_type;
mod interface_type;
mod list_type_annotation;
mod named_graphql_type_ref;
mod named_type_annotation;
mod object_or_interface_type_builder;
mod object_or_interface_type_data;
mod object_or_interface_type_trait;
mod object_type;
mod parameter;
mod scalar_type;
mod type_annotation;
mod union_type;

pub use directive::Directive;
pub use enum_type::EnumType;
pub use enum_type::EnumTypeBuilder;
pub use enum_type::EnumValue;
pub use field::Field;
pub use graphql_type::GraphQLType;
pub use graphql_type_kind::GraphQLTypeKind;
pub use input_field::InputField;
pub use input_object_type::InputObjectType;
pub use input_object_type::InputObjectTypeBuilder;
pub use interface_type::InterfaceType;
pub use interface_type::InterfaceTypeBuilder;
pub use list_type_annotation::ListTypeAnnotation;
pub use named_graphql_type_ref::NamedGraphQLTypeRef;
pub use named_type_annotation::NamedTypeAnnotation;
pub use object_or_interface_type_builder::ObjectOrInterfaceTypeBuilder;
use object_or_interface_type_data::ObjectOrInterfaceTypeData;
use object_or_interface_type_trait::ObjectOrInterfaceTypeTrait;
pub use object_type::ObjectType;
pub use object_type::ObjectTypeBuilder;
pub use parameter::Parameter;
pub use scalar_type::ScalarType;
pub use scalar_type::ScalarTypeBuilder;
pub use type_annotation::TypeAnnotation;
pub use union_type::UnionType;
pub use union_type::UnionTypeBuilder;

#[cfg(test)]
mod tests;

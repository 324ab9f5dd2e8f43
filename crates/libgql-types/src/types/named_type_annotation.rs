use crate::TypeLoader;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NamedTypeAnnotation {
    pub(super) nullable: bool,
    pub(super) type_ref: NamedGraphQLTypeRef,
}
impl NamedTypeAnnotation {
    /// De-reference the annotated type through `loader`.
    pub fn graphql_type(&self, loader: &dyn TypeLoader) -> Option<GraphQLType> {
        self.type_ref.deref(loader)
    }

    pub fn graphql_type_name(&self) -> &str {
        self.type_ref.name()
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }
}

use crate::Descriptor;
use crate::EagerResolution;
use crate::LazyResolution;
use crate::ResolutionError;
use crate::TypeCatalog;
use crate::TypeLoader;
use crate::TypeResolution;
use crate::types::Directive;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::ObjectType;
use libgql_ast::Node;
use libgql_ast::NodeKind;
use libgql_ast::OperationType;
use libgql_ast::SchemaDefinition;
use std::sync::Arc;

type Result<T> = std::result::Result<T, SchemaConfigError>;

#[derive(Debug, thiserror::Error)]
pub enum SchemaConfigError {
    #[error(
        "Expected the schema's originating node to be a `SchemaDefinition`, \
        found a `{}` node",
        .actual.as_str()
    )]
    InvalidAstNode {
        actual: NodeKind,
    },

    #[error(
        "The {} root type must be of kind `{expected}`, found `{actual}`",
        .operation.as_str()
    )]
    InvalidRootType {
        operation: OperationType,
        expected: GraphQLTypeKind,
        actual: GraphQLTypeKind,
    },

    #[error("A schema requires a query root type")]
    MissingQueryType,

    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error(
        "The schema definition binds the {} root to `{declared}`, but the \
        configured {} root type is {configured}",
        .operation.as_str(),
        .operation.as_str()
    )]
    RootTypeMismatch {
        operation: OperationType,
        declared: String,
        configured: String,
    },
}

/// Where a schema's additional (non-root) types come from.
#[derive(Clone)]
pub enum TypesSource {
    List(Vec<GraphQLType>),

    /// Invoked every time the types are needed, so expensive discovery
    /// can be deferred until a resolution is built.
    Provider(Arc<dyn Fn() -> Vec<GraphQLType>>),
}
impl TypesSource {
    pub fn resolve(&self) -> Vec<GraphQLType> {
        match self {
            Self::List(types) => types.clone(),
            Self::Provider(provider) => provider(),
        }
    }
}
impl std::default::Default for TypesSource {
    fn default() -> Self {
        Self::List(vec![])
    }
}
impl std::fmt::Debug for TypesSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(types) => f.debug_tuple("List").field(types).finish(),
            Self::Provider(_) => f.write_str("Provider(..)"),
        }
    }
}
impl std::convert::From<Vec<GraphQLType>> for TypesSource {
    fn from(types: Vec<GraphQLType>) -> Self {
        Self::List(types)
    }
}

/// Loosely-typed inputs to [`SchemaConfig::create()`]. Every present field
/// is checked for the shape it must have.
#[derive(Clone, Default)]
pub struct SchemaConfigOptions {
    pub assume_valid: bool,
    pub ast_node: Option<Node>,
    pub directives: Option<Vec<Directive>>,
    pub mutation: Option<GraphQLType>,
    pub query: Option<GraphQLType>,
    pub subscription: Option<GraphQLType>,
    pub type_loader: Option<Arc<dyn TypeLoader>>,
    pub types: TypesSource,
}

/// The inputs a schema is built from: its root operation types, the extra
/// types to include, its directives and, optionally, a [`TypeLoader`]
/// used to resolve types lazily.
#[derive(Clone)]
pub struct SchemaConfig {
    assume_valid: bool,
    ast_node: Option<SchemaDefinition>,
    directives: Vec<Directive>,
    mutation: Option<Arc<ObjectType>>,
    query: Arc<ObjectType>,
    subscription: Option<Arc<ObjectType>>,
    type_loader: Option<Arc<dyn TypeLoader>>,
    types: TypesSource,
}
impl SchemaConfig {
    pub fn new(query: Arc<ObjectType>) -> Self {
        Self {
            assume_valid: false,
            ast_node: None,
            directives: Directive::builtins(),
            mutation: None,
            query,
            subscription: None,
            type_loader: None,
            types: TypesSource::default(),
        }
    }

    pub fn create(options: SchemaConfigOptions) -> Result<Self> {
        let query = options.query.ok_or(SchemaConfigError::MissingQueryType)?;
        let mut config = Self::new(root_object_type(OperationType::Query, query)?);
        config
            .set_mutation(options.mutation)?
            .set_subscription(options.subscription)?
            .set_ast_node(options.ast_node)?
            .set_assume_valid(options.assume_valid)
            .set_type_loader(options.type_loader)
            .set_types(options.types);
        if let Some(directives) = options.directives {
            config.set_directives(directives);
        }
        if !config.assume_valid {
            config.validate()?;
        }
        Ok(config)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn assume_valid(&self) -> bool {
        self.assume_valid
    }

    pub fn ast_node(&self) -> Option<&SchemaDefinition> {
        self.ast_node.as_ref()
    }

    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    pub fn mutation(&self) -> Option<&Arc<ObjectType>> {
        self.mutation.as_ref()
    }

    pub fn query(&self) -> &Arc<ObjectType> {
        &self.query
    }

    pub fn root_type(&self, operation: OperationType) -> Option<&Arc<ObjectType>> {
        match operation {
            OperationType::Mutation => self.mutation.as_ref(),
            OperationType::Query => Some(&self.query),
            OperationType::Subscription => self.subscription.as_ref(),
        }
    }

    /// The configured root operation types in query, mutation,
    /// subscription order.
    pub fn root_types(&self) -> Vec<GraphQLType> {
        [Some(&self.query), self.mutation.as_ref(), self.subscription.as_ref()]
            .into_iter()
            .flatten()
            .map(|obj_type| GraphQLType::Object(obj_type.clone()))
            .collect()
    }

    pub fn subscription(&self) -> Option<&Arc<ObjectType>> {
        self.subscription.as_ref()
    }

    pub fn type_loader(&self) -> Option<&Arc<dyn TypeLoader>> {
        self.type_loader.as_ref()
    }

    /// The extra types. A [`TypesSource::Provider`] is invoked on every
    /// call.
    pub fn types(&self) -> Vec<GraphQLType> {
        self.types.resolve()
    }

    pub fn types_source(&self) -> &TypesSource {
        &self.types
    }

    // =========================================================================
    // Setters
    // =========================================================================

    pub fn set_assume_valid(&mut self, assume_valid: bool) -> &mut Self {
        self.assume_valid = assume_valid;
        self
    }

    pub fn set_ast_node(&mut self, ast_node: Option<Node>) -> Result<&mut Self> {
        self.ast_node = match ast_node {
            None => None,
            Some(Node::SchemaDefinition(schema_def)) => Some(schema_def),
            Some(other) => return Err(SchemaConfigError::InvalidAstNode {
                actual: other.kind(),
            }),
        };
        Ok(self)
    }

    pub fn set_directives(&mut self, directives: Vec<Directive>) -> &mut Self {
        self.directives = directives;
        self
    }

    pub fn set_mutation(
        &mut self,
        mutation: Option<GraphQLType>,
    ) -> Result<&mut Self> {
        self.mutation = mutation
            .map(|type_| root_object_type(OperationType::Mutation, type_))
            .transpose()?;
        Ok(self)
    }

    pub fn set_query(&mut self, query: GraphQLType) -> Result<&mut Self> {
        self.query = root_object_type(OperationType::Query, query)?;
        Ok(self)
    }

    pub fn set_subscription(
        &mut self,
        subscription: Option<GraphQLType>,
    ) -> Result<&mut Self> {
        self.subscription = subscription
            .map(|type_| root_object_type(OperationType::Subscription, type_))
            .transpose()?;
        Ok(self)
    }

    pub fn set_type_loader(
        &mut self,
        type_loader: Option<Arc<dyn TypeLoader>>,
    ) -> &mut Self {
        self.type_loader = type_loader;
        self
    }

    pub fn set_types(&mut self, types: impl Into<TypesSource>) -> &mut Self {
        self.types = types.into();
        self
    }

    // =========================================================================
    // Validation and resolution
    // =========================================================================

    /// Checks that every root operation bound by the originating
    /// `schema { ... }` definition names the configured root type.
    pub fn validate(&self) -> Result<()> {
        let Some(schema_def) = &self.ast_node else {
            return Ok(());
        };
        for operation in [
            OperationType::Query,
            OperationType::Mutation,
            OperationType::Subscription,
        ] {
            let Some(declared) = schema_def.operation_type(operation) else {
                continue;
            };
            let declared = declared.name.value.as_str();
            let configured = self.root_type(operation).map(|obj| obj.name());
            if configured != Some(declared) {
                return Err(SchemaConfigError::RootTypeMismatch {
                    operation,
                    declared: declared.to_string(),
                    configured: configured.map_or_else(
                        || "not set".to_string(),
                        |name| format!("`{name}`"),
                    ),
                });
            }
        }
        Ok(())
    }

    /// Builds the resolution strategy this configuration asks for.
    ///
    /// With both a type loader and a `descriptor`, types are loaded
    /// lazily through the loader. Otherwise the full type graph reachable
    /// from the root types and the extra types is resolved up front, with
    /// the extra types (then the type loader, if any) serving the names
    /// the walk encounters.
    pub fn build_resolution(
        &self,
        descriptor: Option<Descriptor>,
    ) -> Result<Box<dyn TypeResolution>> {
        if !self.assume_valid {
            self.validate()?;
        }

        if let (Some(loader), Some(descriptor)) = (&self.type_loader, descriptor) {
            log::debug!("building lazy resolution for `{}`", self.query.name());
            let loader = loader.clone();
            return Ok(Box::new(LazyResolution::new(
                descriptor,
                move |name: &str| loader.load_type(name),
            )));
        }

        log::debug!("building eager resolution for `{}`", self.query.name());
        let mut roots = self.root_types();
        roots.extend(self.types());
        let catalog = TypeCatalog::from_types(roots.iter().cloned())?;
        let type_loader = self.type_loader.as_deref();
        let loader = |name: &str| {
            catalog.get(name).cloned().or_else(|| {
                type_loader.and_then(|loader| loader.load_type(name))
            })
        };
        Ok(Box::new(EagerResolution::with_loader(&roots, &loader)?))
    }
}
impl std::fmt::Debug for SchemaConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaConfig")
            .field("query", &self.query.name())
            .field("mutation", &self.mutation.as_ref().map(|t| t.name()))
            .field("subscription", &self.subscription.as_ref().map(|t| t.name()))
            .field("types", &self.types)
            .field("directives", &self.directives.len())
            .field("has_type_loader", &self.type_loader.is_some())
            .field("assume_valid", &self.assume_valid)
            .finish_non_exhaustive()
    }
}

fn root_object_type(
    operation: OperationType,
    type_: GraphQLType,
) -> Result<Arc<ObjectType>> {
    match type_ {
        GraphQLType::Object(obj_type) => Ok(obj_type),
        other => Err(SchemaConfigError::InvalidRootType {
            operation,
            expected: GraphQLTypeKind::Object,
            actual: GraphQLTypeKind::from(&other),
        }),
    }
}

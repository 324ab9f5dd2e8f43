use crate::types::ListTypeAnnotation;
use crate::types::NamedGraphQLTypeRef;
use crate::types::NamedTypeAnnotation;
use libgql_ast::TypeReference;

/// Represents the annotated type for a [`Field`](crate::types::Field),
/// [`InputField`](crate::types::InputField), or
/// [`Parameter`](crate::types::Parameter).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeAnnotation {
    List(ListTypeAnnotation),
    Named(NamedTypeAnnotation),
}
impl TypeAnnotation {
    /// A nullable reference to the type named `name`.
    pub fn named(name: impl AsRef<str>) -> Self {
        Self::Named(NamedTypeAnnotation {
            nullable: true,
            type_ref: NamedGraphQLTypeRef::new(name),
        })
    }

    /// A nullable list of `inner`.
    pub fn list(inner: TypeAnnotation) -> Self {
        Self::List(ListTypeAnnotation {
            inner_type_ref: Box::new(inner),
            nullable: true,
        })
    }

    /// This annotation with its outermost level made non-nullable.
    pub fn non_null(self) -> Self {
        match self {
            Self::List(annot) => Self::List(ListTypeAnnotation {
                nullable: false,
                ..annot
            }),
            Self::Named(annot) => Self::Named(NamedTypeAnnotation {
                nullable: false,
                ..annot
            }),
        }
    }

    /// Build an annotation from a type reference as written in a document.
    pub fn from_ast(ast_type: &TypeReference) -> Self {
        Self::from_ast_impl(ast_type, /* nullable = */ true)
    }

    fn from_ast_impl(ast_type: &TypeReference, nullable: bool) -> Self {
        match ast_type {
            TypeReference::List(list) =>
                Self::List(ListTypeAnnotation {
                    inner_type_ref: Box::new(
                        Self::from_ast_impl(&list.type_, true),
                    ),
                    nullable,
                }),

            TypeReference::Named(named) =>
                Self::Named(NamedTypeAnnotation {
                    nullable,
                    type_ref: NamedGraphQLTypeRef::new(named.name.as_str()),
                }),

            TypeReference::NonNull(inner) =>
                Self::from_ast_impl(&inner.type_, false),
        }
    }

    /// Unwrap the [`ListTypeAnnotation`] if this annotation is one.
    pub fn as_list_annotation(&self) -> Option<&ListTypeAnnotation> {
        if let Self::List(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    /// Unwrap the [`NamedTypeAnnotation`] if this annotation is one.
    pub fn as_named_annotation(&self) -> Option<&NamedTypeAnnotation> {
        if let Self::Named(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    /// Recursively unwrap this [`TypeAnnotation`] and return the inner-most
    /// [`NamedTypeAnnotation`] from it.
    pub fn innermost_named_type_annotation(&self) -> &NamedTypeAnnotation {
        match self {
            TypeAnnotation::List(ListTypeAnnotation { inner_type_ref, .. })
                => inner_type_ref.innermost_named_type_annotation(),
            TypeAnnotation::Named(named_annot)
                => named_annot,
        }
    }

    /// Name of the type at the core of this annotation (`User` for
    /// `[User!]!`).
    pub fn innermost_type_name(&self) -> &str {
        self.innermost_named_type_annotation().graphql_type_name()
    }

    /// Indicates if this [`TypeAnnotation`] is [nullable or
    /// non-nullable](https://spec.graphql.org/October2021/#sec-Non-Null).
    pub fn nullable(&self) -> bool {
        match self {
            TypeAnnotation::List(ListTypeAnnotation { nullable, .. }) => *nullable,
            TypeAnnotation::Named(NamedTypeAnnotation { nullable, .. }) => *nullable,
        }
    }
}
impl std::convert::From<ListTypeAnnotation> for TypeAnnotation {
    fn from(value: ListTypeAnnotation) -> Self {
        Self::List(value)
    }
}
impl std::convert::From<NamedTypeAnnotation> for TypeAnnotation {
    fn from(value: NamedTypeAnnotation) -> Self {
        Self::Named(value)
    }
}
impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(list_annot) => write!(
                f,
                "[{}]{}",
                list_annot.inner_type_annotation(),
                if list_annot.nullable() { "" } else { "!" },
            ),

            Self::Named(named_annot) => write!(
                f,
                "{}{}",
                named_annot.graphql_type_name(),
                if named_annot.nullable() { "" } else { "!" },
            ),
        }
    }
}

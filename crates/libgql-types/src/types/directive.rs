use crate::types::Parameter;
use indexmap::IndexMap;

/// Represents a defined directive.
///
/// The directives every schema supports are unit variants; anything
/// declared by a schema author is [`Directive::Custom`].
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Directive {
    Custom {
        description: Option<String>,
        /// Location names as written (`FIELD`, `OBJECT`, ...).
        locations: Vec<String>,
        name: String,
        params: IndexMap<String, Parameter>,
        repeatable: bool,
    },
    Deprecated,
    Include,
    Skip,
    SpecifiedBy,
}
impl Directive {
    /// The directives supported by every schema.
    pub fn builtins() -> Vec<Directive> {
        vec![
            Directive::Deprecated,
            Directive::Include,
            Directive::Skip,
            Directive::SpecifiedBy,
        ]
    }

    /// A non-repeatable custom directive with no parameters.
    pub fn custom<L, S>(name: impl Into<String>, locations: L) -> Self
    where
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Directive::Custom {
            description: None,
            locations: locations.into_iter().map(Into::into).collect(),
            name: name.into(),
            params: IndexMap::new(),
            repeatable: false,
        }
    }

    pub fn is_builtin(&self) -> bool {
        !matches!(self, Directive::Custom { .. })
    }

    pub fn name(&self) -> &str {
        match self {
            Directive::Custom { name, .. } => name.as_str(),
            Directive::Deprecated => "deprecated",
            Directive::Include => "include",
            Directive::Skip => "skip",
            Directive::SpecifiedBy => "specifiedBy",
        }
    }
}

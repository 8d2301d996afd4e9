use crate::ComposeError;
use crate::Value;
use crate::VariableRegistry;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, ComposeError>;

/// Represents a
/// [directive annotation](https://spec.graphql.org/October2021/#sec-Language.Directives)
/// placed on a field or on an operation.
///
/// A [`DirectiveAnnotation`] is a directive name paired with a set of named
/// arguments ([`Value`]s). Argument values may be deferred references to
/// operation variables (see [`Value::from_variable()`]).
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveAnnotation {
    pub(crate) args: IndexMap<String, Value>,
    pub(crate) name: String,
}
impl DirectiveAnnotation {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            args: IndexMap::new(),
            name: name.as_ref().to_string(),
        }
    }

    /// Add an argument after any previously added arguments.
    pub fn add_arg(
        mut self,
        arg_name: impl AsRef<str>,
        value: impl Into<Value>,
    ) -> Self {
        self.args.insert(arg_name.as_ref().to_string(), value.into());
        self
    }

    /// A map from ParameterName -> [`Value`] for all arguments passed to this
    /// [`DirectiveAnnotation`].
    ///
    /// This returns an [`IndexMap`] to guarantee that map entries retain the
    /// same ordering as the order of arguments passed to this directive
    /// annotation.
    pub fn args(&self) -> &IndexMap<String, Value> {
        &self.args
    }

    /// The name of the directive this annotation applies.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Render as `@name(arg: value, ...)`. Directives without arguments render
    /// without parentheses.
    pub(crate) fn to_graphql_source(
        &self,
        variables: &VariableRegistry,
    ) -> Result<String> {
        if self.args.is_empty() {
            return Ok(format!("@{}", self.name));
        }

        let args = self.args.iter()
            .map(|(arg_name, value)| {
                Ok(format!("{arg_name}: {}", value.to_graphql_source(variables)?))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(format!("@{}({})", self.name, args.join(", ")))
    }
}

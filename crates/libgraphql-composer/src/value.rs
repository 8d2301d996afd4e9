use crate::named_ref::DerefByName;
use crate::ComposeError;
use crate::NamedVariableRef;
use crate::VariableDescriptor;
use crate::VariableRegistry;
use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::ser::SerializeSeq;

type Result<T> = std::result::Result<T, ComposeError>;

/// A literal value passed as a field argument, a directive argument, or as the
/// value of an operation variable.
///
/// [`Value::VarRef`] is a deferred reference to an operation variable: it is
/// declared by name and only resolved against the operation's
/// [`VariableRegistry`] when the surrounding argument or directive is
/// composed. Construct one with [`Value::from_variable()`].
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    VarRef(NamedVariableRef),
    Int(i64),
    Float(f64),
    String(String),
    Bool(bool),
    Null,
    Enum(String),
    List(Vec<Value>),
    Object(IndexMap<String, Value>),
}
impl Value {
    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(str) = self {
            Some(str.as_str())
        } else {
            None
        }
    }

    /// An enum literal. Rendered unquoted (e.g. `JEDI`).
    pub fn enum_value(name: impl AsRef<str>) -> Self {
        Self::Enum(name.as_ref().to_string())
    }

    /// A deferred reference to the operation variable named `variable_name`.
    ///
    /// Composing an argument or directive that holds this value fails with
    /// [`ComposeError::UndefinedVariable`] unless a variable of that name has
    /// been registered on the operation.
    pub fn from_variable(variable_name: impl AsRef<str>) -> Self {
        Self::VarRef(VariableDescriptor::named_ref(variable_name.as_ref()))
    }

    /// Whether this value (or any value nested inside of it) is a
    /// [`Value::VarRef`].
    pub fn contains_variable_ref(&self) -> bool {
        match self {
            Self::VarRef(_) => true,
            Self::List(values) => values.iter().any(Self::contains_variable_ref),
            Self::Object(entries) => entries.values().any(Self::contains_variable_ref),
            _ => false,
        }
    }

    /// Render this value as GraphQL source text, resolving every
    /// [`Value::VarRef`] against `variables`.
    pub(crate) fn to_graphql_source(
        &self,
        variables: &VariableRegistry,
    ) -> Result<String> {
        Ok(match self {
            Self::VarRef(var_ref) => {
                let variable = var_ref.deref(variables).map_err(|_| {
                    ComposeError::UndefinedVariable {
                        variable_name: var_ref.name().to_string(),
                    }
                })?;
                format!("${}", variable.name())
            },

            Self::Int(value) => value.to_string(),

            Self::Float(value) => {
                if !value.is_finite() {
                    return Err(ComposeError::NonFiniteFloat { value: *value });
                }
                format!("{value:?}")
            },

            // JSON string escapes are a subset of GraphQL's.
            Self::String(value) => quote_string(value),

            Self::Bool(value) => value.to_string(),

            Self::Null => "null".to_string(),

            Self::Enum(name) => name.to_string(),

            Self::List(values) => {
                let items = values.iter()
                    .map(|value| value.to_graphql_source(variables))
                    .collect::<Result<Vec<_>>>()?;
                format!("[{}]", items.join(", "))
            },

            Self::Object(entries) => {
                let fields = entries.iter()
                    .map(|(key, value)| {
                        Ok(format!("{key}: {}", value.to_graphql_source(variables)?))
                    })
                    .collect::<Result<Vec<_>>>()?;
                format!("{{{}}}", fields.join(", "))
            },
        })
    }
}

fn quote_string(value: &str) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| format!("\"{}\"", value.replace('"', "\\\"")))
}

impl serde::Serialize for Value {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::VarRef(var_ref) =>
                serializer.serialize_str(format!("${}", var_ref.name()).as_str()),
            Self::Int(value) => serializer.serialize_i64(*value),
            Self::Float(value) => serializer.serialize_f64(*value),
            Self::String(value) => serializer.serialize_str(value),
            Self::Bool(value) => serializer.serialize_bool(*value),
            Self::Null => serializer.serialize_unit(),
            Self::Enum(name) => serializer.serialize_str(name),
            Self::List(values) => {
                let mut seq = serializer.serialize_seq(Some(values.len()))?;
                for value in values {
                    seq.serialize_element(value)?;
                }
                seq.end()
            },
            Self::Object(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            },
        }
    }
}

impl std::convert::From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}
impl std::convert::From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}
impl std::convert::From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}
impl std::convert::From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}
impl std::convert::From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}
impl std::convert::From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}
impl<T: Into<Value>> std::convert::From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}
impl<T: Into<Value>> std::convert::From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
impl<K: Into<String>, V: Into<Value>> std::iter::FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(entries: I) -> Self {
        Self::Object(
            entries.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

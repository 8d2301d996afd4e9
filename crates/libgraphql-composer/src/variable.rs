use crate::named_ref::DerefByName;
use crate::named_ref::DerefByNameError;
use crate::named_ref::NamedRef;
use crate::ComposeError;
use crate::Value;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, ComposeError>;

/// Every [`VariableDescriptor`] registered on an operation, keyed (and
/// ordered) by variable name.
pub type VariableRegistry = IndexMap<String, VariableDescriptor>;

pub type NamedVariableRef = NamedRef<
    /* TSource = */ VariableRegistry,
    /* TResource = */ VariableDescriptor,
>;

/// The declared GraphQL type of an operation variable: a base type name plus
/// a nullability flag.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VariableType {
    pub(crate) name: String,
    pub(crate) nullable: bool,
}
impl VariableType {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }
}
impl std::fmt::Display for VariableType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.nullable {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}!", self.name)
        }
    }
}

/// An operation variable that has not been given a name yet: a literal value
/// paired with a type name and a nullability flag.
///
/// The name comes from the key the config is registered under (see
/// [`OperationBuilder::add_variable()`](crate::operation::OperationBuilder::add_variable)),
/// at which point [`VariableConfig::named()`] produces the
/// [`VariableDescriptor`].
#[derive(Clone, Debug, PartialEq)]
pub struct VariableConfig {
    non_nullable: bool,
    type_name: String,
    value: Value,
}
impl VariableConfig {
    pub fn new(
        value: impl Into<Value>,
        type_name: impl AsRef<str>,
        non_nullable: bool,
    ) -> Self {
        Self {
            non_nullable,
            type_name: type_name.as_ref().to_string(),
            value: value.into(),
        }
    }

    /// Produce the [`VariableDescriptor`] for this config under the given
    /// name.
    ///
    /// Fails if the type name already carries a `!` (non-nullability must be
    /// expressed through the `non_nullable` flag) or if the value refers to
    /// another variable.
    pub fn named(&self, variable_name: impl AsRef<str>) -> Result<VariableDescriptor> {
        let variable_name = variable_name.as_ref();
        if self.type_name.contains('!') {
            return Err(ComposeError::NonNullMarkerInTypeName {
                type_name: self.type_name.to_owned(),
                variable_name: variable_name.to_string(),
            });
        }

        if self.value.contains_variable_ref() {
            return Err(ComposeError::VariableReferenceInValue {
                variable_name: variable_name.to_string(),
            });
        }

        Ok(VariableDescriptor {
            name: variable_name.to_string(),
            type_annotation: VariableType {
                name: self.type_name.to_owned(),
                nullable: !self.non_nullable,
            },
            value: self.value.to_owned(),
        })
    }

    pub fn non_nullable(&self) -> bool {
        self.non_nullable
    }

    pub fn type_name(&self) -> &str {
        self.type_name.as_str()
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// A named operation variable: `$name: Type` in the operation header, with
/// `value` sent alongside the request.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDescriptor {
    pub(crate) name: String,
    pub(crate) type_annotation: VariableType,
    pub(crate) value: Value,
}
impl VariableDescriptor {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &VariableType {
        &self.type_annotation
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}
impl DerefByName for VariableDescriptor {
    type Source = VariableRegistry;

    fn deref_name<'a>(
        registry: &'a Self::Source,
        name: &str,
    ) -> std::result::Result<&'a Self, DerefByNameError> {
        registry.get(name).ok_or_else(
            || DerefByNameError::DanglingReference(name.to_string()),
        )
    }
}

use crate::declaration::json;
use crate::declaration::FieldDeclaration;
use crate::file_reader;
use crate::operation::Mutation;
use crate::operation::Operation;
use crate::operation::OperationData;
use crate::operation::OperationKind;
use crate::operation::Query;
use crate::operation::Subscription;
use crate::ComposeError;
use crate::DirectiveAnnotation;
use crate::VariableConfig;
use indexmap::IndexMap;
use std::path::Path;

type Result<T> = std::result::Result<T, ComposeError>;

/// Assembles a [`Query`], [`Mutation`] or [`Subscription`] from its name,
/// variables, directives and root field declarations.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationBuilder {
    directives: Vec<DirectiveAnnotation>,
    fields: IndexMap<String, FieldDeclaration>,
    name: Option<String>,
    operation_kind: OperationKind,
    variables: IndexMap<String, VariableConfig>,
}
impl OperationBuilder {
    /// Add a [`DirectiveAnnotation`] after any previously added
    /// `DirectiveAnnotation`s.
    pub fn add_directive(mut self, annot: DirectiveAnnotation) -> Result<Self> {
        self.directives.push(annot);
        Ok(self)
    }

    /// Add a root field after any previously added root fields. Adding a field
    /// under a key that is already present replaces the earlier declaration.
    pub fn add_field(
        mut self,
        key: impl AsRef<str>,
        field: FieldDeclaration,
    ) -> Result<Self> {
        self.fields.insert(key.as_ref().to_string(), field);
        Ok(self)
    }

    /// Add a variable after any previously added variables.
    pub fn add_variable(
        mut self,
        variable_name: impl AsRef<str>,
        config: VariableConfig,
    ) -> Result<Self> {
        let variable_name = variable_name.as_ref();
        if self.variables.contains_key(variable_name) {
            return Err(ComposeError::DuplicateVariableName {
                variable_name: variable_name.to_string(),
            });
        }
        self.variables.insert(variable_name.to_string(), config);
        Ok(self)
    }

    /// Consume this [`OperationBuilder`] to produce an [`Operation`].
    pub fn build(self) -> Result<Operation> {
        let num_fields = self.fields.len();
        if self.operation_kind.requires_single_root_field() && num_fields != 1 {
            return Err(ComposeError::InvalidRootFieldCount {
                num_fields,
                operation_kind: self.operation_kind,
            });
        }
        if num_fields == 0 {
            return Err(ComposeError::EmptySelection {
                path: self.name.unwrap_or_else(|| {
                    self.operation_kind.default_operation_name().to_string()
                }),
            });
        }

        let operation_data = OperationData {
            directives: self.directives,
            fields: self.fields,
            name: self.name,
            variables: self.variables,
        };

        Ok(match self.operation_kind {
            OperationKind::Mutation => Mutation(operation_data).into(),
            OperationKind::Query => Query(operation_data).into(),
            OperationKind::Subscription => Subscription(operation_data).into(),
        })
    }

    /// Produce an [`OperationBuilder`] from a file containing a JSON operation
    /// declaration.
    pub fn from_file(
        operation_kind: OperationKind,
        file_path: impl AsRef<Path>,
    ) -> Result<Self> {
        let file_path = file_path.as_ref();
        let file_content = file_reader::read_declaration_file(file_path)?;
        Self::from_json_str(operation_kind, file_content.as_str())
    }

    /// Produce an [`OperationBuilder`] from a JSON operation declaration.
    ///
    /// The object's `__operationName`, `__variables` and `__directives` keys
    /// configure the operation. Every other key declares a root field (see
    /// [`FieldDeclaration::from_json()`]).
    pub fn from_json(
        operation_kind: OperationKind,
        json: &serde_json::Value,
    ) -> Result<Self> {
        json::parse_operation(operation_kind, json)
    }

    /// Produce an [`OperationBuilder`] from a string of JSON.
    pub fn from_json_str(
        operation_kind: OperationKind,
        content: impl AsRef<str>,
    ) -> Result<Self> {
        let json = serde_json::from_str::<serde_json::Value>(content.as_ref())?;
        Self::from_json(operation_kind, &json)
    }

    pub fn new(operation_kind: OperationKind) -> Self {
        Self {
            directives: vec![],
            fields: IndexMap::new(),
            name: None,
            operation_kind,
            variables: IndexMap::new(),
        }
    }

    pub fn operation_kind(&self) -> OperationKind {
        self.operation_kind
    }

    /// Set the list of [`DirectiveAnnotation`]s.
    ///
    /// NOTE: If any previous directives were added (either using this function
    /// or [`OperationBuilder::add_directive()`]), they will be fully replaced
    /// by the [`Vec`] passed here.
    pub fn set_directives(mut self, directives: &[DirectiveAnnotation]) -> Result<Self> {
        self.directives = directives.into();
        Ok(self)
    }

    /// Set the name of the operation. `None` composes the operation under its
    /// default name.
    pub fn set_name(mut self, name: Option<String>) -> Result<Self> {
        self.name = name;
        Ok(self)
    }

    /// Set the operation's variables.
    ///
    /// NOTE: If any previous variables were added (either using this function
    /// or [`OperationBuilder::add_variable()`]), they will be fully replaced.
    pub fn set_variables(
        mut self,
        variables: impl IntoIterator<Item = (String, VariableConfig)>,
    ) -> Result<Self> {
        self.variables = IndexMap::new();
        for (variable_name, config) in variables {
            self = self.add_variable(variable_name, config)?;
        }
        Ok(self)
    }
}

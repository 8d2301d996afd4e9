use crate::file_reader;
use crate::operation::OperationKind;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ComposeError {
    #[error("Duplicate fragment definition: '{fragment_name}'")]
    DuplicateFragmentDefinition {
        fragment_name: String,
    },

    #[error("Found multiple variables defined with the same name '{variable_name}' on this operation")]
    DuplicateVariableName {
        variable_name: String,
    },

    #[error("No fields are declared at '{path}'.")]
    EmptySelection {
        path: String,
    },

    #[error("Failure while trying to read a declaration file from disk: {0}")]
    FileReadError(Box<file_reader::ReadContentError>),

    #[error("Fragment cycle detected: {}", format_cycle_path(.cycle_path))]
    FragmentCycleDetected {
        cycle_path: Vec<String>,
    },

    #[error("Integer `{number}` at '{path}' does not fit in a 64-bit signed integer")]
    IntegerOutOfRange {
        number: String,
        path: String,
    },

    #[error("A {operation_kind} operation must have a single field (found {num_fields})")]
    InvalidRootFieldCount {
        num_fields: usize,
        operation_kind: OperationKind,
    },

    #[error("Error parsing declaration JSON: {message}")]
    JsonParseError {
        message: String,
    },

    #[error(
        "'__toLocalType' on node '{path}' must be omitted or be the same as on \
        the containing list or connection (found '{declared}', expected \
        '{enforced}')",
    )]
    LocalTypeConflict {
        declared: String,
        enforced: String,
        path: String,
    },

    #[error("'{attribute}' at '{path}' must be {expected}")]
    MalformedControlAttribute {
        attribute: String,
        expected: String,
        path: String,
    },

    #[error("'{attribute}' at '{path}' must be a list of strings")]
    MalformedControlList {
        attribute: String,
        path: String,
    },

    #[error("Malformed directive at '{path}': {reason}")]
    MalformedDirective {
        path: String,
        reason: String,
    },

    #[error(
        "Variable '{variable_name}' must be declared as an object with \
        'value', 'type' and 'nonNullable' entries: {reason}",
    )]
    MalformedVariable {
        reason: String,
        variable_name: String,
    },

    #[error("Float literal `{value}` cannot be represented in GraphQL source")]
    NonFiniteFloat {
        value: f64,
    },

    #[error("Fields must be declared via objects or using '__scalars' (found a non-object at '{path}')")]
    NonObjectDeclaration {
        path: String,
    },

    #[error(
        "The type '{type_name}' of variable '{variable_name}' must not include \
        '!', use the non-nullable flag to mark it as non nullable",
    )]
    NonNullMarkerInTypeName {
        type_name: String,
        variable_name: String,
    },

    #[error("Fragment '{fragment_name}' includes itself")]
    SelfIncludingFragment {
        fragment_name: String,
    },

    #[error("Failure while serializing the request document: {message}")]
    SerializationError {
        message: String,
    },

    #[error("Fragment '{fragment_name}' is not registered")]
    UndefinedFragment {
        fragment_name: String,
    },

    #[error("Cannot find variable '{variable_name}'")]
    UndefinedVariable {
        variable_name: String,
    },

    #[error("Unknown control attribute '{attribute}' at '{path}'")]
    UnknownControlAttribute {
        attribute: String,
        path: String,
    },

    #[error("The value of variable '{variable_name}' must not reference another variable")]
    VariableReferenceInValue {
        variable_name: String,
    },
}
impl std::convert::From<file_reader::ReadContentError> for ComposeError {
    fn from(value: file_reader::ReadContentError) -> Self {
        Self::FileReadError(Box::new(value))
    }
}
impl std::convert::From<serde_json::Error> for ComposeError {
    fn from(value: serde_json::Error) -> Self {
        Self::JsonParseError {
            message: value.to_string(),
        }
    }
}

fn format_cycle_path(cycle: &[String]) -> String {
    cycle.join(" → ")
}

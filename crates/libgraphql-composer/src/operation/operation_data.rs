use crate::declaration::FieldDeclaration;
use crate::DirectiveAnnotation;
use crate::VariableConfig;
use indexmap::IndexMap;

#[derive(Clone, Debug, PartialEq)]
pub(super) struct OperationData {
    pub(super) directives: Vec<DirectiveAnnotation>,
    pub(super) fields: IndexMap<String, FieldDeclaration>,
    pub(super) name: Option<String>,
    pub(super) variables: IndexMap<String, VariableConfig>,
}

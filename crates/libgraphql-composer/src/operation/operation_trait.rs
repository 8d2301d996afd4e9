use crate::declaration::FieldDeclaration;
use crate::operation::OperationBuilder;
use crate::DirectiveAnnotation;
use crate::VariableConfig;
use indexmap::IndexMap;

// Implements the set of things common to every kind of operation.
pub(super) trait OperationTrait where Self: Sized {
    fn builder() -> OperationBuilder;
    fn directives(&self) -> &Vec<DirectiveAnnotation>;
    fn fields(&self) -> &IndexMap<String, FieldDeclaration>;
    fn name(&self) -> Option<&str>;
    fn variables(&self) -> &IndexMap<String, VariableConfig>;
}

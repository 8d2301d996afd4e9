use crate::declaration::FieldDeclaration;
use crate::operation::OperationBuilder;
use crate::operation::OperationData;
use crate::operation::OperationKind;
use crate::operation::OperationTrait;
use crate::DirectiveAnnotation;
use crate::VariableConfig;
use indexmap::IndexMap;
use inherent::inherent;

/// A declared Query operation, ready to be composed.
#[derive(Clone, Debug, PartialEq)]
pub struct Query(pub(super) OperationData);

#[inherent]
impl OperationTrait for Query {
    /// Convenience wrapper around [`OperationBuilder::new()`] for a
    /// [`Query`].
    pub fn builder() -> OperationBuilder {
        OperationBuilder::new(OperationKind::Query)
    }

    /// The list of [`DirectiveAnnotation`]s applied to this [`Query`].
    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.0.directives
    }

    /// The root field declarations of this [`Query`], in declared order.
    pub fn fields(&self) -> &IndexMap<String, FieldDeclaration> {
        &self.0.fields
    }

    /// Access the name of this [`Query`] (if one was specified).
    pub fn name(&self) -> Option<&str> {
        self.0.name.as_deref()
    }

    /// Access the variables declared on this [`Query`].
    pub fn variables(&self) -> &IndexMap<String, VariableConfig> {
        &self.0.variables
    }
}

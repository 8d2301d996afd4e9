use crate::declaration::FieldDeclaration;
use crate::operation::OperationBuilder;
use crate::operation::OperationData;
use crate::operation::OperationKind;
use crate::operation::OperationTrait;
use crate::DirectiveAnnotation;
use crate::VariableConfig;
use indexmap::IndexMap;
use inherent::inherent;

/// A declared Subscription operation, ready to be composed.
#[derive(Clone, Debug, PartialEq)]
pub struct Subscription(pub(super) OperationData);

#[inherent]
impl OperationTrait for Subscription {
    /// Convenience wrapper around [`OperationBuilder::new()`] for a
    /// [`Subscription`].
    pub fn builder() -> OperationBuilder {
        OperationBuilder::new(OperationKind::Subscription)
    }

    /// The list of [`DirectiveAnnotation`]s applied to this [`Subscription`].
    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.0.directives
    }

    /// The root field declarations of this [`Subscription`], in declared order.
    pub fn fields(&self) -> &IndexMap<String, FieldDeclaration> {
        &self.0.fields
    }

    /// Access the name of this [`Subscription`] (if one was specified).
    pub fn name(&self) -> Option<&str> {
        self.0.name.as_deref()
    }

    /// Access the variables declared on this [`Subscription`].
    pub fn variables(&self) -> &IndexMap<String, VariableConfig> {
        &self.0.variables
    }
}

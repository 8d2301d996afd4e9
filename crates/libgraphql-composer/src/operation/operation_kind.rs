/// Similar to [`Operation`](crate::operation::Operation), except without the
/// corresponding declarations. Useful when representing a group or category of
/// [`Operation`](crate::operation::Operation)s.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OperationKind {
    Mutation,
    Query,
    Subscription,
}
impl OperationKind {
    /// The operation name used when none is set explicitly.
    pub fn default_operation_name(&self) -> &'static str {
        match self {
            Self::Mutation => "Mutation",
            Self::Query => "Query",
            Self::Subscription => "Subscription",
        }
    }

    /// Whether operations of this kind must select exactly one root field.
    pub fn requires_single_root_field(&self) -> bool {
        matches!(self, Self::Mutation | Self::Subscription)
    }
}
impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Mutation => "mutation",
            Self::Query => "query",
            Self::Subscription => "subscription",
        })
    }
}

use crate::composer::join_source;
use crate::composer::Composer;
use crate::declaration::FieldDeclaration;
use crate::expectation::ResponsePath;
use crate::operation::Mutation;
use crate::operation::OperationData;
use crate::operation::OperationKind;
use crate::operation::Query;
use crate::operation::Subscription;
use crate::ComposeError;
use crate::DirectiveAnnotation;
use crate::VariableConfig;
use indexmap::IndexMap;
use std::boxed::Box;

type Result<T> = std::result::Result<T, ComposeError>;

#[derive(Clone, Debug, PartialEq)]
pub enum Operation {
    Query(Box<Query>),
    Mutation(Box<Mutation>),
    Subscription(Box<Subscription>),
}
impl Operation {
    /// Compose the full GraphQL source for this operation: any fragment
    /// definitions it spreads, followed by the operation itself.
    ///
    /// Expectations for every selected field are registered on `composer`,
    /// with root fields at level 1.
    pub fn compose(&self, composer: &mut Composer) -> Result<String> {
        let data = self.data();
        let operation_kind = self.operation_kind();
        log::debug!(
            "Composing {operation_kind} `{}` ({} root field(s)).",
            self.operation_name(),
            data.fields.len(),
        );

        // Variables first: arguments and directives below resolve against them.
        let variables = composer.register_variables(&data.variables)?;

        let root = ResponsePath::root();
        let mut selections = vec![];
        for (key, field) in &data.fields {
            selections.push(composer.resolve_fields(key, field, &root, 1, None)?);
        }
        let directives = composer.compose_directives(&data.directives)?;

        let mut source = vec![
            composer.compose_fragment_definitions(),
            operation_kind.to_string(),
            self.operation_name().to_string(),
            variables,
            directives,
            "{".to_string(),
        ];
        source.extend(selections);
        source.push("}".to_string());

        Ok(join_source(source))
    }

    fn data(&self) -> &OperationData {
        match self {
            Self::Mutation(op) => &op.0,
            Self::Query(op) => &op.0,
            Self::Subscription(op) => &op.0,
        }
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        match self {
            Self::Mutation(op) => op.directives(),
            Self::Query(op) => op.directives(),
            Self::Subscription(op) => op.directives(),
        }
    }

    pub fn fields(&self) -> &IndexMap<String, FieldDeclaration> {
        match self {
            Self::Mutation(op) => op.fields(),
            Self::Query(op) => op.fields(),
            Self::Subscription(op) => op.fields(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Mutation(op) => op.name(),
            Self::Query(op) => op.name(),
            Self::Subscription(op) => op.name(),
        }
    }

    /// The name this operation is composed under: its explicit name if one was
    /// set, otherwise the default name for its [`OperationKind`].
    pub fn operation_name(&self) -> &str {
        self.name().unwrap_or(self.operation_kind().default_operation_name())
    }

    pub fn operation_kind(&self) -> OperationKind {
        match self {
            Self::Mutation(_) => OperationKind::Mutation,
            Self::Query(_) => OperationKind::Query,
            Self::Subscription(_) => OperationKind::Subscription,
        }
    }

    pub fn variables(&self) -> &IndexMap<String, VariableConfig> {
        match self {
            Self::Mutation(op) => op.variables(),
            Self::Query(op) => op.variables(),
            Self::Subscription(op) => op.variables(),
        }
    }
}
impl std::convert::From<Mutation> for Operation {
    fn from(op: Mutation) -> Self {
        Self::Mutation(Box::new(op))
    }
}
impl std::convert::From<Query> for Operation {
    fn from(op: Query) -> Self {
        Self::Query(Box::new(op))
    }
}
impl std::convert::From<Subscription> for Operation {
    fn from(op: Subscription) -> Self {
        Self::Subscription(Box::new(op))
    }
}

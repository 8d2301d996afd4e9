use crate::composer::Composer;
use crate::declaration::FragmentDefinition;
use crate::expectation::Expectation;
use crate::expectation::ExpectationKey;
use crate::operation::Mutation;
use crate::operation::Operation;
use crate::operation::Query;
use crate::operation::Subscription;
use crate::ComposeError;
use crate::Value;
use indexmap::IndexMap;
use serde::Serialize;

type Result<T> = std::result::Result<T, ComposeError>;

/// Anything that can be handed to [`compose()`]: either a shared fragment
/// definition or an operation to compose.
#[derive(Clone, Debug, PartialEq)]
pub enum Composable {
    Fragment(FragmentDefinition),
    Operation(Operation),
}
impl std::convert::From<FragmentDefinition> for Composable {
    fn from(fragment: FragmentDefinition) -> Self {
        Self::Fragment(fragment)
    }
}
impl std::convert::From<Operation> for Composable {
    fn from(operation: Operation) -> Self {
        Self::Operation(operation)
    }
}
impl std::convert::From<Mutation> for Composable {
    fn from(mutation: Mutation) -> Self {
        Self::Operation(mutation.into())
    }
}
impl std::convert::From<Query> for Composable {
    fn from(query: Query) -> Self {
        Self::Operation(query.into())
    }
}
impl std::convert::From<Subscription> for Composable {
    fn from(subscription: Subscription) -> Self {
        Self::Operation(subscription.into())
    }
}

/// The request body for one composed operation.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestDocument {
    operation_name: String,
    query: String,
    variables: IndexMap<String, Value>,
}
impl RequestDocument {
    pub fn operation_name(&self) -> &str {
        self.operation_name.as_str()
    }

    pub fn query(&self) -> &str {
        self.query.as_str()
    }

    /// Serialize this document as the JSON body of a GraphQL request:
    /// `{"operationName": ..., "query": ..., "variables": {...}}`.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|err| ComposeError::SerializationError {
            message: err.to_string(),
        })
    }

    pub fn variables(&self) -> &IndexMap<String, Value> {
        &self.variables
    }
}

/// A [`RequestDocument`] paired with the [`Composer`] that produced it, so the
/// response can later be interpreted through the composer's
/// [`Expectation`]s.
#[derive(Clone, Debug)]
pub struct ComposedOperation {
    composer: Composer,
    document: RequestDocument,
}
impl ComposedOperation {
    pub fn composer(&self) -> &Composer {
        &self.composer
    }

    pub fn document(&self) -> &RequestDocument {
        &self.document
    }

    pub fn expectation(&self, response_key: &str, level: u32) -> Option<&Expectation> {
        self.composer.expectation(response_key, level)
    }

    pub fn expectations(&self) -> &IndexMap<ExpectationKey, Expectation> {
        self.composer.expectations()
    }
}

/// Compose every supplied operation into a [`ComposedOperation`], in the order
/// the operations were supplied.
///
/// Every supplied fragment definition is made available to every operation,
/// but each operation composes with its own isolated [`Composer`]: fragment
/// expansion, variables and expectations never leak between operations.
pub fn compose(
    composables: impl IntoIterator<Item = Composable>,
) -> Result<Vec<ComposedOperation>> {
    let mut fragments = vec![];
    let mut operations = vec![];
    for composable in composables {
        match composable {
            Composable::Fragment(fragment) => fragments.push(fragment),
            Composable::Operation(operation) => operations.push(operation),
        }
    }
    log::debug!(
        "Composing {} operation(s) with {} shared fragment(s).",
        operations.len(),
        fragments.len(),
    );

    let mut composed = vec![];
    for operation in operations {
        let mut composer = Composer::new(operation.operation_name());
        for fragment in &fragments {
            composer.register_fragment(fragment.to_owned())?;
        }

        let source = operation.compose(&mut composer)?;
        let document = RequestDocument {
            operation_name: operation.operation_name().to_string(),
            query: collapse_whitespace(source.as_str()),
            variables: composer.request_variables(),
        };
        composed.push(ComposedOperation {
            composer,
            document,
        });
    }

    Ok(composed)
}

/// Collapse each run of whitespace outside of string literals into a single
/// space and trim both ends.
pub(crate) fn collapse_whitespace(source: &str) -> String {
    let mut collapsed = String::with_capacity(source.len());
    let mut in_string = false;
    let mut escaped = false;
    let mut pending_space = false;

    for ch in source.chars() {
        if in_string {
            collapsed.push(ch);
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        if ch.is_whitespace() {
            pending_space = !collapsed.is_empty();
            continue;
        }

        if pending_space {
            collapsed.push(' ');
            pending_space = false;
        }
        if ch == '"' {
            in_string = true;
        }
        collapsed.push(ch);
    }

    collapsed
}

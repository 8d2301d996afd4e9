use crate::expectation::ExpectedShape;
use crate::expectation::ResponsePath;
use crate::Value;
use indexmap::IndexMap;

/// Identifies an [`Expectation`] by the key it appears under in the response
/// and its nesting level (root selections are level 1).
pub type ExpectationKey = (String, u32);

/// The predicted response shape of one selected field.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Expectation {
    pub(crate) alias: Option<String>,
    pub(crate) arguments: IndexMap<String, Value>,
    pub(crate) key: String,
    pub(crate) level: u32,
    pub(crate) local_type_name: Option<String>,
    pub(crate) path: ResponsePath,
    pub(crate) response_key: String,
    pub(crate) shape: ExpectedShape,
}
impl Expectation {
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// Arguments declared on the field. Deferred variable references are kept
    /// as [`Value::VarRef`]s.
    pub fn arguments(&self) -> &IndexMap<String, Value> {
        &self.arguments
    }

    /// The field name as selected on the server.
    pub fn key(&self) -> &str {
        self.key.as_str()
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// The local type name for `Node`, `NodeList`, `Connection` and `Edges`
    /// expectations.
    pub fn local_type_name(&self) -> Option<&str> {
        self.local_type_name.as_deref()
    }

    pub fn path(&self) -> &ResponsePath {
        &self.path
    }

    /// The key this field appears under in the response: its alias if it has
    /// one, otherwise its name.
    pub fn response_key(&self) -> &str {
        self.response_key.as_str()
    }

    pub fn shape(&self) -> ExpectedShape {
        self.shape
    }
}

/// The shape a field is expected to have in the server's response.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ExpectedShape {
    /// A Relay-style connection wrapping a list of edges.
    Connection,
    /// The list of edges within a connection.
    Edges,
    /// A field whose shape could not be inferred.
    Negligible,
    /// A single object of some local type.
    Node,
    /// A flat list of objects of some local type.
    NodeList,
    /// An object without a local type.
    Record,
    Scalar,
}
impl ExpectedShape {
    /// Whether the field is expected to be an object (or list of objects) and
    /// therefore requires a selection set.
    pub fn is_composite(self) -> bool {
        !matches!(self, Self::Negligible | Self::Scalar)
    }

    /// Whether an [`Expectation`](crate::expectation::Expectation) of this
    /// shape records a local type name.
    pub fn carries_local_type(self) -> bool {
        matches!(
            self,
            Self::Connection | Self::Edges | Self::Node | Self::NodeList,
        )
    }

    /// Whether a field of this shape passes its local type down to the fields
    /// nested inside of it.
    pub fn propagates_local_type(self) -> bool {
        matches!(self, Self::Connection | Self::Edges | Self::NodeList)
    }
}
impl std::fmt::Display for ExpectedShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Connection => "connection",
            Self::Edges => "edges",
            Self::Negligible => "negligible",
            Self::Node => "node",
            Self::NodeList => "nodeList",
            Self::Record => "record",
            Self::Scalar => "scalar",
        })
    }
}

/// Explicit shape overrides set on a field declaration.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ShapeFlags {
    pub connection: bool,
    pub edges: bool,
    pub list: bool,
    pub node: bool,
}

/// Everything [`classify()`] looks at when inferring a field's
/// [`ExpectedShape`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeInputs<'a> {
    /// Local type inherited from the containing connection, edges or node
    /// list.
    pub enforced_local_type: Option<&'a str>,
    pub flags: ShapeFlags,
    pub has_arguments: bool,
    pub has_fragment_spreads: bool,
    pub has_nested_fields: bool,
    pub has_scalars: bool,
    /// The field name (not the alias).
    pub key: &'a str,
    /// Local type declared on the field itself.
    pub local_type: Option<&'a str>,
}
impl ShapeInputs<'_> {
    fn has_selection_content(&self) -> bool {
        self.has_nested_fields
            || self.has_arguments
            || self.has_scalars
            || self.has_fragment_spreads
    }
}

/// Infer the [`ExpectedShape`] of a field.
///
/// Rules are checked in order and the first match wins:
///
/// | # | Shape        | Rule                                                                 |
/// |---|--------------|----------------------------------------------------------------------|
/// | 1 | `Connection` | own local type, and key contains `Connection`/`connection` or the connection flag is set |
/// | 2 | `NodeList`   | own or inherited local type, and the list flag is set                 |
/// | 3 | `Edges`      | own or inherited local type and key is `edges`, or the edges flag is set |
/// | 4 | `Node`       | own or inherited local type and key is `node`, or key contains `Node`/`node`, or the node flag is set |
/// | 5 | `Record`     | no local type at all, and nested fields, arguments, scalars or fragment spreads |
/// | 6 | `Scalar`     | no own local type, and no nested fields, arguments, scalars or fragment spreads |
/// | 7 | `Negligible` | anything else                                                        |
///
/// This function only classifies; it does not check that own and inherited
/// local types of a `Node` agree.
pub fn classify(inputs: &ShapeInputs<'_>) -> ExpectedShape {
    let ShapeInputs {
        enforced_local_type,
        flags,
        key,
        local_type,
        ..
    } = *inputs;
    let has_local_type = local_type.is_some();
    let has_any_local_type = has_local_type || enforced_local_type.is_some();

    if has_local_type
        && (key.contains("Connection") || key.contains("connection") || flags.connection) {
        ExpectedShape::Connection
    } else if has_any_local_type && flags.list {
        ExpectedShape::NodeList
    } else if (has_any_local_type && key == "edges") || flags.edges {
        ExpectedShape::Edges
    } else if (has_any_local_type && key == "node")
        || key.contains("Node")
        || key.contains("node")
        || flags.node {
        ExpectedShape::Node
    } else if !has_any_local_type && inputs.has_selection_content() {
        ExpectedShape::Record
    } else if !has_local_type && !inputs.has_selection_content() {
        ExpectedShape::Scalar
    } else {
        ExpectedShape::Negligible
    }
}

use crate::expectation::ShapeFlags;
use crate::expectation::ShapeInputs;
use crate::ComposeError;
use crate::DirectiveAnnotation;
use crate::Value;
use indexmap::IndexMap;

/// One node of a declared selection tree.
///
/// A declaration carries control attributes (alias, arguments, directives,
/// scalar list, local type, shape flags and fragment spreads) plus any number
/// of nested declarations keyed by field name. A declaration with nothing
/// but control attributes is terminal and selects a leaf field:
///
/// ```
/// use libgraphql_composer::declaration::FieldDeclaration;
///
/// let friends = FieldDeclaration::new()
///     .set_alias("pals")
///     .set_local_type("User")
///     .set_connection(true)
///     .add_field("edges", FieldDeclaration::new()
///         .add_scalar("cursor")
///         .add_field("node", FieldDeclaration::new().add_scalars(["id", "name"])));
///
/// assert_eq!(friends.alias(), Some("pals"));
/// assert_eq!(friends.fields().len(), 1);
/// ```
///
/// Nested declarations are kept in insertion order, which is also the order
/// in which they are composed. Adding a nested declaration under a key that
/// already exists replaces the earlier one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldDeclaration {
    pub(crate) alias: Option<String>,
    pub(crate) arguments: Option<IndexMap<String, Value>>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) fields: IndexMap<String, FieldDeclaration>,
    pub(crate) fragment_spreads: Vec<String>,
    pub(crate) local_type: Option<String>,
    pub(crate) scalars: Option<Vec<String>>,
    pub(crate) shape_flags: ShapeFlags,
}
impl FieldDeclaration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an argument after any previously added arguments.
    pub fn add_argument(
        mut self,
        name: impl AsRef<str>,
        value: impl Into<Value>,
    ) -> Self {
        self.arguments
            .get_or_insert_with(IndexMap::new)
            .insert(name.as_ref().to_string(), value.into());
        self
    }

    /// Add a [`DirectiveAnnotation`] after any previously added
    /// `DirectiveAnnotation`s.
    pub fn add_directive(mut self, annot: DirectiveAnnotation) -> Self {
        self.directives.push(annot);
        self
    }

    /// Add a nested declaration for the field named `key`.
    pub fn add_field(
        mut self,
        key: impl AsRef<str>,
        field: FieldDeclaration,
    ) -> Self {
        self.fields.insert(key.as_ref().to_string(), field);
        self
    }

    /// Spread the named fragment into this field's selection set.
    pub fn add_fragment_spread(mut self, fragment_name: impl AsRef<str>) -> Self {
        self.fragment_spreads.push(fragment_name.as_ref().to_string());
        self
    }

    /// Select a scalar field by name.
    pub fn add_scalar(mut self, name: impl AsRef<str>) -> Self {
        self.scalars
            .get_or_insert_with(Vec::new)
            .push(name.as_ref().to_string());
        self
    }

    pub fn add_scalars<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let scalars = self.scalars.get_or_insert_with(Vec::new);
        scalars.extend(names.into_iter().map(|name| name.as_ref().to_string()));
        self
    }

    pub fn set_alias(mut self, alias: impl AsRef<str>) -> Self {
        self.alias = Some(alias.as_ref().to_string());
        self
    }

    /// Set the full argument map.
    ///
    /// NOTE: Any previously added arguments are replaced. An empty map still
    /// counts as "has arguments" when the field's shape is inferred.
    pub fn set_arguments(mut self, arguments: IndexMap<String, Value>) -> Self {
        self.arguments = Some(arguments);
        self
    }

    pub fn set_connection(mut self, connection: bool) -> Self {
        self.shape_flags.connection = connection;
        self
    }

    pub fn set_edges(mut self, edges: bool) -> Self {
        self.shape_flags.edges = edges;
        self
    }

    pub fn set_list(mut self, list: bool) -> Self {
        self.shape_flags.list = list;
        self
    }

    /// Set the local type name used when inferring this field's expectation.
    pub fn set_local_type(mut self, local_type: impl AsRef<str>) -> Self {
        self.local_type = Some(local_type.as_ref().to_string());
        self
    }

    pub fn set_node(mut self, node: bool) -> Self {
        self.shape_flags.node = node;
        self
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn arguments(&self) -> Option<&IndexMap<String, Value>> {
        self.arguments.as_ref()
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    pub fn fields(&self) -> &IndexMap<String, FieldDeclaration> {
        &self.fields
    }

    pub fn fragment_spreads(&self) -> &Vec<String> {
        &self.fragment_spreads
    }

    /// Whether this declaration selects anything (a scalar, a nested field or
    /// a fragment spread). Declarations without a selection are emitted
    /// without braces.
    pub fn has_selection(&self) -> bool {
        self.scalars.as_ref().is_some_and(|scalars| !scalars.is_empty())
            || !self.fields.is_empty()
            || !self.fragment_spreads.is_empty()
    }

    pub fn local_type(&self) -> Option<&str> {
        self.local_type.as_deref()
    }

    pub fn scalars(&self) -> Option<&[String]> {
        self.scalars.as_deref()
    }

    pub fn shape_flags(&self) -> ShapeFlags {
        self.shape_flags
    }

    pub(crate) fn shape_inputs<'a>(
        &'a self,
        key: &'a str,
        enforced_local_type: Option<&'a str>,
    ) -> ShapeInputs<'a> {
        ShapeInputs {
            enforced_local_type,
            flags: self.shape_flags,
            has_arguments: self.arguments.is_some(),
            has_fragment_spreads: !self.fragment_spreads.is_empty(),
            has_nested_fields: !self.fields.is_empty(),
            has_scalars: self.scalars.is_some(),
            key,
            local_type: self.local_type.as_deref(),
        }
    }

    /// Load a declaration from JSON that uses the `__alias`, `__args`,
    /// `__directives`, `__scalars`, `__toLocalType`, `__connection`, `__node`,
    /// `__list`, `__edges` and `__fragments` control keys. Every other key is
    /// a nested declaration.
    pub fn from_json(json: &serde_json::Value) -> Result<Self, ComposeError> {
        crate::declaration::json::parse_field("", json)
    }
}

use crate::declaration::FieldDeclaration;
use crate::file_reader;
use crate::ComposeError;
use indexmap::IndexMap;
use std::path::Path;

type Result<T> = std::result::Result<T, ComposeError>;

/// A named, typed, reusable selection that field declarations can spread via
/// [`FieldDeclaration::add_fragment_spread()`].
///
/// A fragment is emitted at most once per operation, no matter how many times
/// it is spread.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentDefinition {
    pub(crate) fields: IndexMap<String, FieldDeclaration>,
    pub(crate) included_fragments: Vec<String>,
    pub(crate) name: String,
    pub(crate) scalars: Vec<String>,
    pub(crate) type_condition: String,
}
impl FragmentDefinition {
    pub fn new(name: impl AsRef<str>, type_condition: impl AsRef<str>) -> Self {
        Self {
            fields: IndexMap::new(),
            included_fragments: vec![],
            name: name.as_ref().to_string(),
            scalars: vec![],
            type_condition: type_condition.as_ref().to_string(),
        }
    }

    pub fn add_field(
        mut self,
        key: impl AsRef<str>,
        field: FieldDeclaration,
    ) -> Self {
        self.fields.insert(key.as_ref().to_string(), field);
        self
    }

    /// Spread another fragment inside of this one.
    pub fn add_included_fragment(mut self, fragment_name: impl AsRef<str>) -> Self {
        self.included_fragments.push(fragment_name.as_ref().to_string());
        self
    }

    pub fn add_scalar(mut self, name: impl AsRef<str>) -> Self {
        self.scalars.push(name.as_ref().to_string());
        self
    }

    pub fn add_scalars<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.scalars.extend(names.into_iter().map(|name| name.as_ref().to_string()));
        self
    }

    pub fn fields(&self) -> &IndexMap<String, FieldDeclaration> {
        &self.fields
    }

    pub fn included_fragments(&self) -> &Vec<String> {
        &self.included_fragments
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn scalars(&self) -> &Vec<String> {
        &self.scalars
    }

    pub fn type_condition(&self) -> &str {
        self.type_condition.as_str()
    }

    /// Load a fragment from JSON with `__fragmentName`, `__typename`,
    /// `__scalars` and `__fragments` control keys. Every other key is a nested
    /// [`FieldDeclaration`].
    pub fn from_json(json: &serde_json::Value) -> Result<Self> {
        crate::declaration::json::parse_fragment(json)
    }

    pub fn from_json_str(content: impl AsRef<str>) -> Result<Self> {
        let json = serde_json::from_str::<serde_json::Value>(content.as_ref())?;
        Self::from_json(&json)
    }

    pub fn from_file(file_path: impl AsRef<Path>) -> Result<Self> {
        let file_content = file_reader::read_declaration_file(file_path.as_ref())?;
        Self::from_json_str(file_content)
    }
}

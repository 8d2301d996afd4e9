use crate::declaration::FragmentDefinition;
use crate::ComposeError;
use indexmap::IndexMap;

/// The [`FragmentDefinition`]s available to one
/// [`Composer`](crate::composer::Composer), keyed by fragment name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FragmentRegistry {
    fragments: IndexMap<String, FragmentDefinition>,
}
impl FragmentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a fragment to the registry.
    ///
    /// Returns an error if a fragment with the same name already exists, or if
    /// the fragment includes itself.
    pub fn add_fragment(
        &mut self,
        fragment: FragmentDefinition,
    ) -> Result<(), ComposeError> {
        if self.fragments.contains_key(fragment.name()) {
            return Err(ComposeError::DuplicateFragmentDefinition {
                fragment_name: fragment.name().to_string(),
            });
        }

        if fragment.included_fragments().iter().any(|name| name == fragment.name()) {
            return Err(ComposeError::SelfIncludingFragment {
                fragment_name: fragment.name().to_string(),
            });
        }

        self.fragments.insert(fragment.name().to_string(), fragment);
        Ok(())
    }

    pub fn fragments(&self) -> &IndexMap<String, FragmentDefinition> {
        &self.fragments
    }

    pub fn get(&self, fragment_name: &str) -> Option<&FragmentDefinition> {
        self.fragments.get(fragment_name)
    }
}

use crate::composer::join_source;
use crate::composer::Composer;
use crate::declaration::FragmentDefinition;
use crate::expectation::ResponsePath;
use crate::ComposeError;

type Result<T> = std::result::Result<T, ComposeError>;

impl Composer {
    /// Compose a spread of the named fragment and return the `...Name` token
    /// to place in the enclosing selection set.
    ///
    /// The first spread of a fragment composes its definition (registering
    /// [`Expectation`](crate::expectation::Expectation)s for its fields at
    /// `level + 1` under `path`) and caches it. Later spreads of the same
    /// fragment reuse the cached definition.
    pub fn compose_fragment_spread(
        &mut self,
        fragment_name: &str,
        path: &ResponsePath,
        level: u32,
        enforced_local_type: Option<&str>,
    ) -> Result<String> {
        let spread = format!("...{fragment_name}");
        if self.emitted_fragments.contains_key(fragment_name) {
            log::debug!("Fragment `{fragment_name}` is already composed; reusing it.");
            return Ok(spread);
        }

        if let Some(idx) =
            self.fragments_in_progress.iter().position(|name| name == fragment_name) {
            if idx + 1 == self.fragments_in_progress.len() {
                return Err(ComposeError::SelfIncludingFragment {
                    fragment_name: fragment_name.to_string(),
                });
            }
            let mut cycle_path = self.fragments_in_progress[idx..].to_vec();
            cycle_path.push(fragment_name.to_string());
            return Err(ComposeError::FragmentCycleDetected { cycle_path });
        }

        let fragment =
            self.fragment_registry
                .get(fragment_name)
                .cloned()
                .ok_or_else(|| ComposeError::UndefinedFragment {
                    fragment_name: fragment_name.to_string(),
                })?;

        self.fragments_in_progress.push(fragment_name.to_string());
        let body = self.compose_fragment_body(&fragment, path, level, enforced_local_type);
        self.fragments_in_progress.pop();

        let definition = join_source(vec![
            "fragment".to_string(),
            fragment.name().to_string(),
            "on".to_string(),
            fragment.type_condition().to_string(),
            "{".to_string(),
            body?,
            "}".to_string(),
        ]);
        log::trace!("Composed fragment `{fragment_name}`: {definition}");
        self.emitted_fragments.insert(fragment_name.to_string(), definition);

        Ok(spread)
    }

    fn compose_fragment_body(
        &mut self,
        fragment: &FragmentDefinition,
        path: &ResponsePath,
        level: u32,
        enforced_local_type: Option<&str>,
    ) -> Result<String> {
        if fragment.scalars().is_empty()
            && fragment.fields().is_empty()
            && fragment.included_fragments().is_empty() {
            return Err(ComposeError::EmptySelection {
                path: fragment.name().to_string(),
            });
        }

        let mut source = fragment.scalars().to_owned();
        for included_name in fragment.included_fragments() {
            source.push(self.compose_fragment_spread(
                included_name,
                path,
                level,
                enforced_local_type,
            )?);
        }
        for (key, field) in fragment.fields() {
            source.push(self.resolve_fields(
                key,
                field,
                path,
                level + 1,
                enforced_local_type,
            )?);
        }

        Ok(join_source(source))
    }
}

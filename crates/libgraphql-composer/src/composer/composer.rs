use crate::composer::FragmentRegistry;
use crate::declaration::FieldDeclaration;
use crate::declaration::FragmentDefinition;
use crate::expectation;
use crate::expectation::Expectation;
use crate::expectation::ExpectationKey;
use crate::expectation::ExpectedShape;
use crate::expectation::ResponsePath;
use crate::ComposeError;
use crate::DirectiveAnnotation;
use crate::Value;
use crate::VariableConfig;
use crate::VariableRegistry;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, ComposeError>;

/// Owns the state needed to compose a single operation: the variables it
/// declares, the fragments it may spread, the fragment definitions emitted so
/// far, and the [`Expectation`]s registered for every selected field.
///
/// A `Composer` is created for one operation, mutated while that operation's
/// declarations are walked, and only read from afterwards.
///
/// Variables must be registered (see [`Composer::register_variables()`])
/// before composing any field, argument or directive that references them:
/// references are resolved against the registry as soon as they are composed.
#[derive(Clone, Debug)]
pub struct Composer {
    pub(super) emitted_fragments: IndexMap<String, String>,
    expectations: IndexMap<ExpectationKey, Expectation>,
    pub(super) fragment_registry: FragmentRegistry,
    pub(super) fragments_in_progress: Vec<String>,
    operation_name: String,
    variables: VariableRegistry,
}
impl Composer {
    pub fn new(operation_name: impl AsRef<str>) -> Self {
        Self {
            emitted_fragments: IndexMap::new(),
            expectations: IndexMap::new(),
            fragment_registry: FragmentRegistry::new(),
            fragments_in_progress: vec![],
            operation_name: operation_name.as_ref().to_string(),
            variables: VariableRegistry::new(),
        }
    }

    /// Render an argument map as `(name: value, ...)`. An empty map renders as
    /// an empty string.
    pub fn compose_arguments(&self, arguments: &IndexMap<String, Value>) -> Result<String> {
        if arguments.is_empty() {
            return Ok(String::new());
        }

        let arguments = arguments.iter()
            .map(|(name, value)| {
                Ok(format!("{name}: {}", value.to_graphql_source(&self.variables)?))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(format!("({})", arguments.join(", ")))
    }

    /// Render a list of directives separated by spaces.
    pub fn compose_directives(&self, directives: &[DirectiveAnnotation]) -> Result<String> {
        let directives = directives.iter()
            .map(|annot| annot.to_graphql_source(&self.variables))
            .collect::<Result<Vec<_>>>()?;

        Ok(directives.join(" "))
    }

    /// Every fragment definition emitted so far, in the order they finished
    /// composing.
    pub fn compose_fragment_definitions(&self) -> String {
        self.emitted_fragments.values()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Look up the [`Expectation`] registered for `response_key` at `level`.
    pub fn expectation(&self, response_key: &str, level: u32) -> Option<&Expectation> {
        self.expectations.get(&(response_key.to_string(), level))
    }

    pub fn expectations(&self) -> &IndexMap<ExpectationKey, Expectation> {
        &self.expectations
    }

    pub fn fragment_registry(&self) -> &FragmentRegistry {
        &self.fragment_registry
    }

    pub fn operation_name(&self) -> &str {
        self.operation_name.as_str()
    }

    /// Make a fragment available for spreading within this composer's
    /// operation.
    pub fn register_fragment(&mut self, fragment: FragmentDefinition) -> Result<()> {
        log::trace!(
            "Registering fragment `{}` for operation `{}`.",
            fragment.name(),
            self.operation_name,
        );
        self.fragment_registry.add_fragment(fragment)
    }

    /// Register operation variables and render their declarations as
    /// `($name: Type, ...)`. An empty map renders as an empty string.
    ///
    /// If a variable with the same name is already registered, the earlier
    /// registration is kept.
    pub fn register_variables(
        &mut self,
        variables: &IndexMap<String, VariableConfig>,
    ) -> Result<String> {
        if variables.is_empty() {
            return Ok(String::new());
        }

        let mut declarations = vec![];
        for (variable_name, config) in variables {
            let descriptor = config.named(variable_name)?;
            declarations.push(format!(
                "${}: {}",
                descriptor.name(),
                descriptor.type_annotation(),
            ));

            if self.variables.contains_key(variable_name) {
                log::debug!(
                    "Variable `${variable_name}` is already registered on operation \
                    `{}`; keeping the first registration.",
                    self.operation_name,
                );
                continue;
            }
            self.variables.insert(variable_name.to_owned(), descriptor);
        }

        Ok(format!("({})", declarations.join(", ")))
    }

    /// The variable values to send alongside the composed operation.
    pub fn request_variables(&self) -> IndexMap<String, Value> {
        self.variables.iter()
            .map(|(name, descriptor)| (name.to_owned(), descriptor.value().to_owned()))
            .collect()
    }

    /// Compose the GraphQL source for the field named `key` (and everything
    /// nested inside of it), registering an [`Expectation`] for each field
    /// along the way.
    ///
    /// `enforced_local_type` is the local type passed down from a containing
    /// connection, edges or node list field.
    pub fn resolve_fields(
        &mut self,
        key: &str,
        field: &FieldDeclaration,
        parent_path: &ResponsePath,
        level: u32,
        enforced_local_type: Option<&str>,
    ) -> Result<String> {
        let response_key = field.alias().unwrap_or(key);
        let flags = field.shape_flags();
        let path = parent_path.child(
            response_key,
            key == "edges" || flags.edges || flags.list,
        );

        let shape = expectation::classify(&field.shape_inputs(key, enforced_local_type));
        log::trace!("Resolved `{path}` at level {level} as `{shape}`.");

        if shape == ExpectedShape::Node
            && let (Some(declared), Some(enforced)) = (field.local_type(), enforced_local_type)
            && declared != enforced {
            return Err(ComposeError::LocalTypeConflict {
                declared: declared.to_string(),
                enforced: enforced.to_string(),
                path: path.to_string(),
            });
        }

        if shape.is_composite() && !field.has_selection() {
            return Err(ComposeError::EmptySelection {
                path: path.to_string(),
            });
        }

        let local_type_name =
            if shape.carries_local_type() {
                field.local_type().or(enforced_local_type).map(str::to_string)
            } else {
                None
            };
        let child_local_type =
            if shape.propagates_local_type() {
                local_type_name.to_owned()
            } else {
                None
            };

        self.register_expectation(Expectation {
            alias: field.alias().map(str::to_string),
            arguments: field.arguments().cloned().unwrap_or_default(),
            key: key.to_string(),
            level,
            local_type_name,
            path: path.to_owned(),
            response_key: response_key.to_string(),
            shape,
        });

        let mut source = vec![match field.alias() {
            Some(alias) => format!("{alias}: {key}"),
            None => key.to_string(),
        }];

        if let Some(arguments) = field.arguments() {
            source.push(self.compose_arguments(arguments)?);
        }
        source.push(self.compose_directives(field.directives())?);

        if field.has_selection() {
            source.push("{".to_string());
            if let Some(scalars) = field.scalars() {
                source.extend(scalars.iter().cloned());
            }
            for fragment_name in field.fragment_spreads() {
                source.push(self.compose_fragment_spread(
                    fragment_name,
                    &path,
                    level,
                    child_local_type.as_deref(),
                )?);
            }
            for (nested_key, nested_field) in field.fields() {
                source.push(self.resolve_fields(
                    nested_key,
                    nested_field,
                    &path,
                    level + 1,
                    child_local_type.as_deref(),
                )?);
            }
            source.push("}".to_string());
        }

        Ok(join_source(source))
    }

    pub fn variables(&self) -> &VariableRegistry {
        &self.variables
    }

    fn register_expectation(&mut self, expectation: Expectation) {
        let key = (expectation.response_key.to_owned(), expectation.level);
        if let Some(previous) = self.expectations.insert(key, expectation) {
            // Last write wins.
            log::debug!(
                "Expectation for `{}` at level {} (path `{}`) was replaced.",
                previous.response_key(),
                previous.level(),
                previous.path(),
            );
        }
    }
}

/// Join source fragments with single spaces, skipping empty ones.
pub(crate) fn join_source(parts: Vec<String>) -> String {
    parts.into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

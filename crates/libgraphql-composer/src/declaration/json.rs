use crate::declaration::FieldDeclaration;
use crate::declaration::FragmentDefinition;
use crate::operation::OperationBuilder;
use crate::operation::OperationKind;
use crate::ComposeError;
use crate::DirectiveAnnotation;
use crate::Value;
use crate::VariableConfig;
use indexmap::IndexMap;
use serde_json::Map;
use serde_json::Value as JsonValue;

type Result<T> = std::result::Result<T, ComposeError>;

const FROM_VARIABLE_KEY: &str = "__fromVariable";
const ENUM_KEY: &str = "__enum";

/// Introspection fields that may be declared as nested fields even though
/// their names start with `__`.
const INTROSPECTION_FIELDS: [&str; 3] = ["__schema", "__type", "__typename"];

fn child_path(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}

fn as_object<'a>(path: &str, json: &'a JsonValue) -> Result<&'a Map<String, JsonValue>> {
    json.as_object().ok_or_else(|| ComposeError::NonObjectDeclaration {
        path: path.to_string(),
    })
}

fn parse_bool(attribute: &str, path: &str, json: &JsonValue) -> Result<bool> {
    json.as_bool().ok_or_else(|| ComposeError::MalformedControlAttribute {
        attribute: attribute.to_string(),
        expected: "a boolean".to_string(),
        path: path.to_string(),
    })
}

fn parse_string(attribute: &str, path: &str, json: &JsonValue) -> Result<String> {
    json.as_str()
        .map(str::to_string)
        .ok_or_else(|| ComposeError::MalformedControlAttribute {
            attribute: attribute.to_string(),
            expected: "a string".to_string(),
            path: path.to_string(),
        })
}

fn parse_string_list(
    attribute: &str,
    path: &str,
    json: &JsonValue,
) -> Result<Vec<String>> {
    let malformed = || ComposeError::MalformedControlList {
        attribute: attribute.to_string(),
        path: path.to_string(),
    };

    json.as_array()
        .ok_or_else(malformed)?
        .iter()
        .map(|item| item.as_str().map(str::to_string).ok_or_else(malformed))
        .collect()
}

fn parse_arguments(
    attribute: &str,
    path: &str,
    json: &JsonValue,
) -> Result<IndexMap<String, Value>> {
    let entries = json.as_object().ok_or_else(|| {
        ComposeError::MalformedControlAttribute {
            attribute: attribute.to_string(),
            expected: "an object".to_string(),
            path: path.to_string(),
        }
    })?;

    entries.iter()
        .map(|(name, value)| {
            Ok((name.to_string(), parse_value(child_path(path, name).as_str(), value)?))
        })
        .collect()
}

/// Convert a JSON value into a [`Value`].
///
/// `{"__fromVariable": "name"}` becomes a deferred variable reference and
/// `{"__enum": "NAME"}` an enum literal. Any other object carrying one of those
/// keys is rejected, as are integers outside the `i64` range.
pub(crate) fn parse_value(path: &str, json: &JsonValue) -> Result<Value> {
    Ok(match json {
        JsonValue::Null => Value::Null,
        JsonValue::Bool(value) => Value::Bool(*value),
        JsonValue::Number(number) => {
            if let Some(int) = number.as_i64() {
                Value::Int(int)
            } else if number.is_f64()
                && let Some(float) = number.as_f64() {
                Value::Float(float)
            } else {
                return Err(ComposeError::IntegerOutOfRange {
                    number: number.to_string(),
                    path: path.to_string(),
                });
            }
        },
        JsonValue::String(value) => Value::String(value.to_string()),
        JsonValue::Array(values) => Value::List(
            values.iter()
                .map(|value| parse_value(path, value))
                .collect::<Result<Vec<_>>>()?,
        ),
        JsonValue::Object(entries) => {
            if let Some(name) = tagged_name(FROM_VARIABLE_KEY, path, entries)? {
                return Ok(Value::from_variable(name));
            }
            if let Some(name) = tagged_name(ENUM_KEY, path, entries)? {
                return Ok(Value::enum_value(name));
            }
            Value::Object(
                entries.iter()
                    .map(|(key, value)| {
                        Ok((key.to_string(), parse_value(child_path(path, key).as_str(), value)?))
                    })
                    .collect::<Result<IndexMap<_, _>>>()?,
            )
        },
    })
}

// `Ok(None)` when `tag` is absent; an error unless the object is exactly
// `{"<tag>": "<string>"}`.
fn tagged_name<'a>(
    tag: &str,
    path: &str,
    entries: &'a Map<String, JsonValue>,
) -> Result<Option<&'a str>> {
    let Some(tagged) = entries.get(tag) else {
        return Ok(None);
    };
    match tagged {
        JsonValue::String(name) if entries.len() == 1 => Ok(Some(name.as_str())),
        _ => Err(ComposeError::MalformedControlAttribute {
            attribute: tag.to_string(),
            expected: "the only entry of its object, holding a string".to_string(),
            path: path.to_string(),
        }),
    }
}

pub(crate) fn parse_directives(
    path: &str,
    json: &JsonValue,
) -> Result<Vec<DirectiveAnnotation>> {
    let malformed = |reason: &str| ComposeError::MalformedDirective {
        path: path.to_string(),
        reason: reason.to_string(),
    };

    let items = json.as_array()
        .ok_or_else(|| malformed("'__directives' must be a list of objects"))?;

    let mut directives = vec![];
    for item in items {
        let entries = item.as_object()
            .ok_or_else(|| malformed("each directive must be an object"))?;

        let name = entries.get("name")
            .and_then(JsonValue::as_str)
            .ok_or_else(|| malformed("each directive must have a string 'name'"))?;

        let mut annot = DirectiveAnnotation::new(name);
        for (key, value) in entries {
            match key.as_str() {
                "name" => (),
                "args" => {
                    let args = value.as_object()
                        .ok_or_else(|| malformed("directive 'args' must be an object"))?;
                    for (arg_name, arg_value) in args {
                        let arg_path = child_path(path, format!("@{name}.{arg_name}").as_str());
                        let arg_value = parse_value(arg_path.as_str(), arg_value)?;
                        annot = annot.add_arg(arg_name, arg_value);
                    }
                },
                other => return Err(malformed(
                    format!("unexpected directive entry '{other}'").as_str(),
                )),
            }
        }
        directives.push(annot);
    }

    Ok(directives)
}

pub(crate) fn parse_variables(json: &JsonValue) -> Result<IndexMap<String, VariableConfig>> {
    let entries = json.as_object().ok_or_else(|| {
        ComposeError::MalformedControlAttribute {
            attribute: "__variables".to_string(),
            expected: "an object".to_string(),
            path: String::new(),
        }
    })?;

    let mut variables = IndexMap::new();
    for (variable_name, config) in entries {
        let malformed = |reason: &str| ComposeError::MalformedVariable {
            reason: reason.to_string(),
            variable_name: variable_name.to_string(),
        };

        let config = config.as_object()
            .ok_or_else(|| malformed("not an object"))?;

        let mut value = None;
        let mut type_name = None;
        let mut non_nullable = false;
        for (key, entry) in config {
            match key.as_str() {
                "value" => value = Some(parse_value(
                    child_path("__variables", variable_name).as_str(),
                    entry,
                )?),
                "type" => type_name = Some(
                    entry.as_str().ok_or_else(|| malformed("'type' must be a string"))?,
                ),
                "nonNullable" => non_nullable = entry.as_bool()
                    .ok_or_else(|| malformed("'nonNullable' must be a boolean"))?,
                other => return Err(malformed(
                    format!("unexpected entry '{other}'").as_str(),
                )),
            }
        }

        let value = value.ok_or_else(|| malformed("missing 'value'"))?;
        let type_name = type_name.ok_or_else(|| malformed("missing 'type'"))?;
        variables.insert(
            variable_name.to_string(),
            VariableConfig::new(value, type_name, non_nullable),
        );
    }

    Ok(variables)
}

pub(crate) fn parse_field(path: &str, json: &JsonValue) -> Result<FieldDeclaration> {
    let entries = as_object(path, json)?;

    let mut field = FieldDeclaration::new();
    for (key, value) in entries {
        match key.as_str() {
            "__alias" => field.alias = Some(parse_string(key, path, value)?),
            "__args" | "__params" =>
                field.arguments = Some(parse_arguments(key, path, value)?),
            "__connection" => field.shape_flags.connection = parse_bool(key, path, value)?,
            "__directives" => field.directives = parse_directives(path, value)?,
            "__edges" => field.shape_flags.edges = parse_bool(key, path, value)?,
            "__fragments" =>
                field.fragment_spreads = parse_string_list(key, path, value)?,
            "__list" => field.shape_flags.list = parse_bool(key, path, value)?,
            "__node" => field.shape_flags.node = parse_bool(key, path, value)?,
            "__scalars" => field.scalars = Some(parse_string_list(key, path, value)?),
            "__toLocalType" => field.local_type = Some(parse_string(key, path, value)?),
            _ => {
                if key.starts_with("__") && !INTROSPECTION_FIELDS.contains(&key.as_str()) {
                    return Err(ComposeError::UnknownControlAttribute {
                        attribute: key.to_string(),
                        path: path.to_string(),
                    });
                }
                let nested = parse_field(child_path(path, key).as_str(), value)?;
                field.fields.insert(key.to_string(), nested);
            },
        }
    }

    Ok(field)
}

pub(crate) fn parse_fragment(json: &JsonValue) -> Result<FragmentDefinition> {
    let entries = as_object("", json)?;

    let name = entries.get("__fragmentName")
        .ok_or_else(|| ComposeError::MalformedControlAttribute {
            attribute: "__fragmentName".to_string(),
            expected: "present".to_string(),
            path: String::new(),
        })
        .and_then(|value| parse_string("__fragmentName", "", value))?;

    let type_condition = entries.get("__typename")
        .ok_or_else(|| ComposeError::MalformedControlAttribute {
            attribute: "__typename".to_string(),
            expected: "present".to_string(),
            path: name.to_owned(),
        })
        .and_then(|value| parse_string("__typename", name.as_str(), value))?;

    let mut fragment = FragmentDefinition::new(name.as_str(), type_condition);
    for (key, value) in entries {
        match key.as_str() {
            "__fragmentName" | "__typename" => (),
            "__fragments" =>
                fragment.included_fragments = parse_string_list(key, name.as_str(), value)?,
            "__scalars" =>
                fragment.scalars = parse_string_list(key, name.as_str(), value)?,
            _ => {
                if key.starts_with("__") && !INTROSPECTION_FIELDS.contains(&key.as_str()) {
                    return Err(ComposeError::UnknownControlAttribute {
                        attribute: key.to_string(),
                        path: name.to_owned(),
                    });
                }
                let nested = parse_field(child_path(name.as_str(), key).as_str(), value)?;
                fragment.fields.insert(key.to_string(), nested);
            },
        }
    }

    Ok(fragment)
}

pub(crate) fn parse_operation(
    operation_kind: OperationKind,
    json: &JsonValue,
) -> Result<OperationBuilder> {
    let entries = as_object("", json)?;

    let mut builder = OperationBuilder::new(operation_kind);
    for (key, value) in entries {
        builder = match key.as_str() {
            "__directives" => builder.set_directives(&parse_directives("", value)?)?,
            "__operationName" =>
                builder.set_name(Some(parse_string(key, "", value)?))?,
            "__variables" => {
                let mut builder = builder;
                for (variable_name, config) in parse_variables(value)? {
                    builder = builder.add_variable(variable_name, config)?;
                }
                builder
            },
            _ => {
                if key.starts_with("__") && !INTROSPECTION_FIELDS.contains(&key.as_str()) {
                    return Err(ComposeError::UnknownControlAttribute {
                        attribute: key.to_string(),
                        path: String::new(),
                    });
                }
                builder.add_field(key, parse_field(key, value)?)?
            },
        };
    }

    Ok(builder)
}

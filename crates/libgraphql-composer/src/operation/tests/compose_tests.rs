use crate::compose;
use crate::declaration::FieldDeclaration;
use crate::declaration::FragmentDefinition;
use crate::operation::Mutation;
use crate::operation::Query;
use crate::Composable;
use crate::ComposeError;
use crate::Value;
use crate::VariableConfig;

type Result<T> = std::result::Result<T, ComposeError>;

#[test]
fn each_operation_composes_in_isolation() -> Result<()> {
    let fragment = FragmentDefinition::new("UserParts", "User").add_scalars(["id", "name"]);
    let query = Query::builder()
        .set_name(Some("Viewer".to_string()))?
        .add_variable("id", VariableConfig::new("1", "ID", true))?
        .add_field("viewer", FieldDeclaration::new().add_fragment_spread("UserParts"))?
        .build()?;
    let mutation = Mutation::builder()
        .add_field("logout", FieldDeclaration::new().add_scalar("ok"))?
        .build()?;

    let composed = compose([query.into(), fragment.into(), mutation.into()])?;
    assert_eq!(composed.len(), 2);

    let (viewer, logout) = (&composed[0], &composed[1]);
    assert_eq!(viewer.document().operation_name(), "Viewer");
    assert_eq!(logout.document().operation_name(), "Mutation");

    // Fragments are shared, but only emitted where they are spread.
    assert!(viewer.document().query().starts_with("fragment UserParts on User"));
    assert!(!logout.document().query().contains("fragment"));
    let shared = logout.composer().fragment_registry().fragments();
    assert_eq!(shared.keys().collect::<Vec<_>>(), vec!["UserParts"]);

    assert!(logout.document().variables().is_empty());
    assert!(logout.expectation("viewer", 1).is_none());
    assert_eq!(viewer.composer().operation_name(), "Viewer");
    Ok(())
}

#[test]
fn duplicate_shared_fragment_fails_compose() -> Result<()> {
    let query = Query::builder()
        .add_field("viewer", FieldDeclaration::new().add_scalar("id"))?
        .build()?;
    let fragment = FragmentDefinition::new("UserParts", "User").add_scalar("id");

    let result = compose([
        Composable::from(fragment.to_owned()),
        Composable::from(fragment),
        Composable::from(query),
    ]);

    assert!(matches!(result, Err(ComposeError::DuplicateFragmentDefinition { .. })));
    Ok(())
}

#[test]
fn fragments_alone_compose_nothing() -> Result<()> {
    let composed = compose([
        Composable::from(FragmentDefinition::new("UserParts", "User").add_scalar("id")),
    ])?;

    assert!(composed.is_empty());
    Ok(())
}

#[test]
fn string_literals_keep_their_whitespace() -> Result<()> {
    let query = Query::builder()
        .add_field("search", FieldDeclaration::new()
            .add_argument("text", "two  spaces")
            .add_scalar("id"))?
        .build()?;
    let composed = compose([query.into()])?;

    assert_eq!(
        composed[0].document().query(),
        r#"query Query { search (text: "two  spaces") { id } }"#,
    );
    Ok(())
}

#[test]
fn request_document_json_uses_wire_names() -> Result<()> {
    let query = Query::builder()
        .set_name(Some("Story".to_string()))?
        .add_variable("id", VariableConfig::new(Value::from(42), "ID", true))?
        .add_field("story", FieldDeclaration::new()
            .add_argument("id", Value::from_variable("id"))
            .add_scalar("title"))?
        .build()?;
    let composed = compose([query.into()])?;

    let json: serde_json::Value =
        serde_json::from_str(composed[0].document().to_json()?.as_str()).unwrap();
    assert_eq!(json["operationName"], "Story");
    assert_eq!(json["query"], "query Story ($id: ID!) { story (id: $id) { title } }");
    assert_eq!(json["variables"]["id"], 42);
    Ok(())
}

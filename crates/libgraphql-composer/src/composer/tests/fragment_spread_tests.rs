use crate::composer::Composer;
use crate::composer::FragmentRegistry;
use crate::declaration::FieldDeclaration;
use crate::declaration::FragmentDefinition;
use crate::expectation::ExpectedShape;
use crate::expectation::ResponsePath;
use crate::ComposeError;
use proptest::prelude::*;

type Result<T> = std::result::Result<T, ComposeError>;

fn user_parts() -> FragmentDefinition {
    FragmentDefinition::new("UserParts", "User").add_scalars(["id", "name"])
}

#[test]
fn spread_emits_token_and_caches_definition() -> Result<()> {
    let mut composer = Composer::new("Test");
    composer.register_fragment(user_parts())?;

    let field = FieldDeclaration::new().add_fragment_spread("UserParts");
    let source = composer.resolve_fields("viewer", &field, &ResponsePath::root(), 1, None)?;

    assert_eq!(source, "viewer { ...UserParts }");
    assert_eq!(
        composer.compose_fragment_definitions(),
        "fragment UserParts on User { id name }",
    );
    assert_eq!(
        composer.expectation("viewer", 1).map(|e| e.shape()),
        Some(ExpectedShape::Record),
    );
    Ok(())
}

#[test]
fn fragment_fields_resolve_one_level_below_the_spread() -> Result<()> {
    let mut composer = Composer::new("Test");
    composer.register_fragment(
        FragmentDefinition::new("StoryParts", "Story")
            .add_scalar("id")
            .add_field("likers", FieldDeclaration::new().add_scalar("count")),
    )?;

    let field = FieldDeclaration::new().add_fragment_spread("StoryParts");
    composer.resolve_fields("story", &field, &ResponsePath::root(), 1, None)?;

    let likers = composer.expectation("likers", 2).unwrap();
    assert_eq!(likers.shape(), ExpectedShape::Record);
    assert_eq!(likers.path().to_string(), "story.likers");
    assert_eq!(
        composer.compose_fragment_definitions(),
        "fragment StoryParts on Story { id likers { count } }",
    );
    Ok(())
}

#[test]
fn spread_inherits_the_enclosing_local_type() -> Result<()> {
    let mut composer = Composer::new("Test");
    composer.register_fragment(
        FragmentDefinition::new("EdgeParts", "UserEdge")
            .add_scalar("cursor")
            .add_field("node", FieldDeclaration::new().add_scalar("id")),
    )?;

    let field = FieldDeclaration::new()
        .set_local_type("User")
        .set_connection(true)
        .add_field("edges", FieldDeclaration::new().add_fragment_spread("EdgeParts"));
    composer.resolve_fields("users", &field, &ResponsePath::root(), 1, None)?;

    let node = composer.expectation("node", 3).unwrap();
    assert_eq!(node.shape(), ExpectedShape::Node);
    assert_eq!(node.local_type_name(), Some("User"));
    assert_eq!(node.path().to_string(), "users.edges.#.node");
    Ok(())
}

#[test]
fn included_fragments_complete_first() -> Result<()> {
    let mut composer = Composer::new("Test");
    composer.register_fragment(
        FragmentDefinition::new("StoryParts", "Story")
            .add_scalar("id")
            .add_included_fragment("AuthorParts"),
    )?;
    composer.register_fragment(
        FragmentDefinition::new("AuthorParts", "Story")
            .add_field("author", FieldDeclaration::new().add_scalar("name")),
    )?;

    let field = FieldDeclaration::new().add_fragment_spread("StoryParts");
    composer.resolve_fields("story", &field, &ResponsePath::root(), 1, None)?;

    assert_eq!(
        composer.compose_fragment_definitions(),
        "fragment AuthorParts on Story { author { name } } \
        fragment StoryParts on Story { id ...AuthorParts }",
    );
    assert!(composer.expectation("author", 2).is_some());
    Ok(())
}

#[test]
fn undefined_fragment_is_rejected() {
    let mut composer = Composer::new("Test");
    let field = FieldDeclaration::new().add_fragment_spread("Missing");
    let result = composer.resolve_fields("viewer", &field, &ResponsePath::root(), 1, None);

    assert_eq!(
        result,
        Err(ComposeError::UndefinedFragment { fragment_name: "Missing".to_string() }),
    );
}

#[test]
fn duplicate_fragment_registration_is_rejected() -> Result<()> {
    let mut composer = Composer::new("Test");
    composer.register_fragment(user_parts())?;

    assert_eq!(
        composer.register_fragment(user_parts()),
        Err(ComposeError::DuplicateFragmentDefinition {
            fragment_name: "UserParts".to_string(),
        }),
    );
    Ok(())
}

#[test]
fn self_including_fragment_is_rejected_at_registration() {
    let mut registry = FragmentRegistry::new();
    let result = registry.add_fragment(
        FragmentDefinition::new("Loop", "User")
            .add_scalar("id")
            .add_included_fragment("Loop"),
    );

    assert_eq!(
        result,
        Err(ComposeError::SelfIncludingFragment { fragment_name: "Loop".to_string() }),
    );
    assert!(registry.get("Loop").is_none());
}

#[test]
fn indirect_fragment_cycle_is_rejected() -> Result<()> {
    let mut composer = Composer::new("Test");
    for (name, includes) in [("A", "B"), ("B", "C"), ("C", "A")] {
        composer.register_fragment(
            FragmentDefinition::new(name, "User")
                .add_scalar("id")
                .add_included_fragment(includes),
        )?;
    }

    let field = FieldDeclaration::new().add_fragment_spread("A");
    let result = composer.resolve_fields("viewer", &field, &ResponsePath::root(), 1, None);

    assert_eq!(
        result,
        Err(ComposeError::FragmentCycleDetected {
            cycle_path: vec!["A", "B", "C", "A"].into_iter().map(String::from).collect(),
        }),
    );
    Ok(())
}

#[test]
fn empty_fragment_is_rejected() -> Result<()> {
    let mut composer = Composer::new("Test");
    composer.register_fragment(FragmentDefinition::new("Nothing", "User"))?;

    let field = FieldDeclaration::new().add_fragment_spread("Nothing");
    let result = composer.resolve_fields("viewer", &field, &ResponsePath::root(), 1, None);

    assert!(matches!(result, Err(ComposeError::EmptySelection { .. })));
    Ok(())
}

proptest! {
    #[test]
    fn repeated_spreads_emit_one_definition(num_spreads in 1usize..8) {
        let mut composer = Composer::new("Test");
        composer.register_fragment(user_parts()).unwrap();

        let field = (0..num_spreads).fold(FieldDeclaration::new(), |field, idx| {
            field.add_field(
                format!("user{idx}"),
                FieldDeclaration::new().add_fragment_spread("UserParts"),
            )
        });
        let source = composer
            .resolve_fields("users", &field, &ResponsePath::root(), 1, None)
            .unwrap();
        let definitions = composer.compose_fragment_definitions();

        prop_assert_eq!(source.matches("...UserParts").count(), num_spreads);
        prop_assert_eq!(definitions.matches("fragment UserParts on User").count(), 1);
    }
}

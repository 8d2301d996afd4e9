use crate::compose;
use crate::declaration::FieldDeclaration;
use crate::expectation::ExpectedShape;
use crate::operation::OperationKind;
use crate::operation::Subscription;
use crate::ComposeError;
use crate::Value;
use crate::VariableConfig;

type Result<T> = std::result::Result<T, ComposeError>;

fn story_like_subscription() -> Result<crate::operation::Operation> {
    Subscription::builder()
        .set_name(Some("StoryLikeSubscription".to_string()))?
        .add_variable("input", VariableConfig::new(
            [("storyId", "42")].into_iter().collect::<Value>(),
            "StoryLikeSubscribeInput",
            false,
        ))?
        .add_field("storyLikeSubscribe", FieldDeclaration::new()
            .add_argument("input", Value::from_variable("input"))
            .add_field("story", FieldDeclaration::new()
                .add_field("likers", FieldDeclaration::new().add_scalar("count"))
                .add_field("likeSentence", FieldDeclaration::new().add_scalar("text"))))?
        .build()
}

#[test]
fn nested_braces_reach_four_levels() -> Result<()> {
    let composed = compose([story_like_subscription()?.into()])?;
    let query = composed[0].document().query();

    assert_eq!(
        query,
        "subscription StoryLikeSubscription ($input: StoryLikeSubscribeInput) \
        { storyLikeSubscribe (input: $input) { story { likers { count } \
        likeSentence { text } } } }",
    );

    let mut depth = 0;
    let mut max_depth = 0;
    for ch in query.chars() {
        match ch {
            '{' => {
                depth += 1;
                max_depth = max_depth.max(depth);
            },
            '}' => depth -= 1,
            _ => (),
        }
    }
    assert_eq!(depth, 0);
    assert_eq!(max_depth, 4);
    Ok(())
}

#[test]
fn expectations_registered_at_each_level() -> Result<()> {
    let composed = compose([story_like_subscription()?.into()])?;
    let operation = &composed[0];

    for (response_key, level, path) in [
        ("storyLikeSubscribe", 1, "storyLikeSubscribe"),
        ("story", 2, "storyLikeSubscribe.story"),
        ("likers", 3, "storyLikeSubscribe.story.likers"),
        ("likeSentence", 3, "storyLikeSubscribe.story.likeSentence"),
    ] {
        let expectation = operation.expectation(response_key, level).unwrap();
        assert_eq!(expectation.shape(), ExpectedShape::Record);
        assert_eq!(expectation.path().to_string(), path);
    }
    Ok(())
}

#[test]
fn subscription_requires_exactly_one_root_field() -> Result<()> {
    let result = Subscription::builder()
        .add_field("a", FieldDeclaration::new().add_scalar("id"))?
        .add_field("b", FieldDeclaration::new().add_scalar("id"))?
        .build();

    assert_eq!(
        result,
        Err(ComposeError::InvalidRootFieldCount {
            num_fields: 2,
            operation_kind: OperationKind::Subscription,
        }),
    );
    Ok(())
}

use super::prelude::*;
use super::*;
use stage_testing::test_stage;

#[test]
fn compose_attaches_under_the_stage_root() {
    let mut stage = test_stage();
    let composition = compose(
        || Column(Props::new(), [Text(Props::new().with("text", "a"))]),
        &mut stage,
        &UiConfig::default(),
    )
    .unwrap();
    assert_eq!(stage.children(stage.root()).unwrap(), vec![composition.root]);
    assert!(composition.pending_textures.is_empty());
}

#[test]
fn failed_compose_leaves_the_stage_untouched() {
    let mut stage = test_stage();
    let before = stage.len();
    let result = compose(
        || {
            Column(
                Props::new(),
                [
                    Text(Props::new().with("text", "ok")),
                    h("Marquee", None::<Props>, []),
                ],
            )
        },
        &mut stage,
        &UiConfig::default(),
    );
    assert!(matches!(
        result,
        Err(ComposeError::UnknownElementKind { ref tag }) if tag == "Marquee"
    ));
    assert_eq!(stage.len(), before);
    assert!(stage.children(stage.root()).unwrap().is_empty());
}

#[test]
fn compose_collects_pending_textures() {
    let mut stage = test_stage();
    let composition = compose(
        || {
            Row(
                Props::new(),
                [
                    Image(Props::new().with("src", "a.png"), []),
                    Image(Props::new().with("src", "b.png"), []),
                ],
            )
        },
        &mut stage,
        &UiConfig::default(),
    )
    .unwrap();
    let sources: Vec<&str> = composition
        .pending_textures
        .iter()
        .map(|pending| pending.src.as_str())
        .collect();
    assert_eq!(sources, ["a.png", "b.png"]);
}

#[test]
fn merged_props_leave_both_inputs_alone() {
    let base = Props::new().with("text", "a").with("width", 10);
    let overlay = Props::new().with("text", "b");
    let merged = base.merged(&overlay);
    assert_eq!(merged.text("text"), Some("b"));
    assert_eq!(merged.number("width"), Some(10.0));
    assert_eq!(base.text("text"), Some("a"));
    assert_eq!(overlay.len(), 1);
}

#[test]
fn mistyped_prop_reads_as_absent() {
    let props = Props::new().with("width", "wide").with("disabled", 1);
    assert_eq!(props.number("width"), None);
    assert_eq!(props.flag("disabled"), None);
    assert_eq!(props.number("missing"), None);
    assert!(props.contains("width"));
}

#[test]
fn whole_numbers_read_as_hex_colors() {
    let props = Props::new()
        .with("fill", 0x336699)
        .with("half", 0.5_f32)
        .with("name", "red");
    assert_eq!(props.color("fill"), Some(Color::from_hex(0x336699)));
    assert_eq!(props.color("half"), None);
    assert_eq!(props.color("name"), None);
}

#[test]
fn renderer_accumulates_alpha_and_skips_hidden_nodes() {
    let mut stage = test_stage();
    let image_style = Props::new().with("alpha", 0.5_f32);
    compose(
        || {
            Box(
                Props::new(),
                [
                    Image(
                        Props::new()
                            .with("texture", Texture::new("card.png", 40.0, 20.0))
                            .with("anchor", Point::ZERO)
                            .with("style", image_style),
                        [Text(Props::new().with("text", "on card"))],
                    ),
                    Image(
                        Props::new()
                            .with("texture", Texture::new("ghost.png", 10.0, 10.0))
                            .with("style", Props::new().with("visible", false)),
                        [],
                    ),
                ],
            )
        },
        &mut stage,
        &UiConfig::default(),
    )
    .unwrap();

    let scene = HeadlessRenderer::new(&stage).render().unwrap();
    assert_eq!(scene.operations().len(), 2);
    assert_eq!(scene.sprites().count(), 1);
    match &scene.operations()[0] {
        RenderOp::Sprite {
            rect,
            source,
            alpha,
            ..
        } => {
            assert_eq!(*rect, stage_core::Rect::new(0.0, 0.0, 40.0, 20.0));
            assert_eq!(source.as_deref(), Some("card.png"));
            assert_eq!(*alpha, 0.5);
        }
        other => panic!("expected sprite, got {other:?}"),
    }
    match &scene.operations()[1] {
        RenderOp::Text { value, alpha, .. } => {
            assert_eq!(value, "on card");
            assert_eq!(*alpha, 0.5);
        }
        other => panic!("expected text, got {other:?}"),
    }
    assert_eq!(scene.texts().collect::<Vec<_>>(), ["on card"]);
}

#[test]
fn placeholder_sprites_render_without_a_source() {
    let mut stage = test_stage();
    compose(
        || Image(Props::new().with("src", "later.png"), []),
        &mut stage,
        &UiConfig::default(),
    )
    .unwrap();
    let scene = HeadlessRenderer::new(&stage).render().unwrap();
    let sprite = scene.sprites().next().expect("placeholder sprite");
    assert!(matches!(sprite, RenderOp::Sprite { source: None, .. }));
    assert_eq!(sprite.rect(), stage_core::Rect::new(-13.0, -18.5, 26.0, 37.0));
}

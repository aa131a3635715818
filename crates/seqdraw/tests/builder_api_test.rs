//! Integration tests for the DiagramBuilder API

use float_cmp::assert_approx_eq;

use seqdraw::{
    DiagramBuilder, SeqdrawError,
    config::{AppConfig, FontConfig, LayoutConfig, StyleConfig, ThemeKind},
    layout::ItemShape,
    measure::MonospaceMeasurer,
};

/// 10px per character and per line.
fn measurer() -> MonospaceMeasurer {
    MonospaceMeasurer::new(1.0, 1.0)
}

fn builder(theme: ThemeKind) -> DiagramBuilder {
    let mut style = StyleConfig::default();
    style.set_theme(theme);
    style.set_seed(Some(7));
    DiagramBuilder::new(AppConfig::new(
        LayoutConfig::default(),
        FontConfig::new(10, Some("mono".to_string())),
        style,
    ))
}

#[test]
fn test_builder_api_exists() {
    let _builder = DiagramBuilder::default();
}

#[test]
fn test_render_simple_diagram() {
    let source = r#"{ "actors": ["Alice", "Bob"],
        "items": [{ "kind": "signal", "from": "Alice", "to": "Bob", "message": "Hello" }] }"#;

    let builder = DiagramBuilder::default();
    let diagram = builder.parse(source).expect("Failed to parse diagram");
    let result = builder.render_svg(&diagram);

    if let Ok(svg) = result {
        assert!(svg.contains("<svg"), "Output should contain SVG tag");
        assert!(svg.contains("</svg>"), "Output should be complete SVG");
    } else {
        panic!("Failed to render: {:?}", result.err());
    }
}

#[test]
fn test_two_actors_one_signal() {
    let builder = builder(ThemeKind::Plain);
    let diagram = builder
        .parse(
            r#"{ "actors": ["A", "B"], "items": [
                { "kind": "signal", "from": "A", "to": "B", "message": "a long message here" }
            ] }"#,
        )
        .unwrap();

    let layout = builder.layout(&diagram, &measurer()).unwrap();
    let [a, b] = layout.actors() else {
        panic!("expected two actors");
    };

    // 19 characters plus signal margin and padding on both sides.
    let gap = 190.0 + 4.0;
    assert!(b.center_x() - a.center_x() >= gap - 1e-3);
    assert_approx_eq!(f32, a.x(), 5.0);
    assert!(layout.width() >= b.x() + b.width() + 5.0 - 1e-3);
}

#[test]
fn test_note_over_first_and_third_actor() {
    let builder = builder(ThemeKind::Plain);
    let diagram = builder
        .parse(
            r#"{ "actors": ["A", "B", "C"], "items": [
                { "kind": "note", "placement": "over", "actors": ["A", "C"], "message": "span" }
            ] }"#,
        )
        .unwrap();

    let layout = builder.layout(&diagram, &measurer()).unwrap();
    let item = &layout.items()[0];
    let ItemShape::Note { extent, .. } = item.shape() else {
        panic!("expected a note");
    };

    let left = layout.actors()[0].center_x();
    let right = layout.actors()[2].center_x();
    // note overlap plus note padding on each side
    assert_approx_eq!(f32, extent.x, left - 6.0, epsilon = 1e-3);
    assert_approx_eq!(f32, extent.width, (right + 6.0) - (left - 6.0), epsilon = 1e-3);
    assert!(extent.width >= item.width() - 1e-3);
}

#[test]
fn test_self_signal_draws_three_segments() {
    let builder = builder(ThemeKind::Plain);
    let diagram = builder
        .parse(
            r#"{ "actors": ["A"], "items": [
                { "kind": "signal", "from": "A", "to": "A", "message": "think" }
            ] }"#,
        )
        .unwrap();

    let svg = builder.render_svg_with(&diagram, &measurer()).unwrap();
    assert_eq!(svg.matches("class=\"signal signal-0 line\"").count(), 3);
    assert_eq!(svg.matches("marker-end=").count(), 1);
}

#[test]
fn test_height_adds_up() {
    let builder = builder(ThemeKind::Plain);
    let diagram = builder
        .parse(
            r#"{ "title": "Title", "actors": ["A", "B"], "items": [
                { "kind": "signal", "from": "A", "to": "B", "message": "one" },
                { "kind": "note", "placement": "left_of", "actors": ["A"], "message": "two\nlines" },
                { "kind": "signal", "from": "B", "to": "B", "message": "three" }
            ] }"#,
        )
        .unwrap();

    let layout = builder.layout(&diagram, &measurer()).unwrap();
    let items: f32 = layout.items().iter().map(|item| item.height()).sum();
    let expected = 2.0 * 5.0 + 2.0 * layout.actors_height() + layout.title_height() + items;
    assert_approx_eq!(f32, layout.height(), expected, epsilon = 1e-3);
}

#[test]
fn test_cycle_items_skip_numbering() {
    let builder = builder(ThemeKind::Plain);
    let diagram = builder
        .parse(
            r#"{ "actors": ["A", "B"], "items": [
                { "kind": "signal", "from": "A", "to": "B", "message": "first" },
                { "kind": "note", "placement": "over", "actors": ["A", "B"], "message": "Cycle 1" },
                { "kind": "signal", "from": "B", "to": "A", "message": "second" },
                { "kind": "note", "placement": "over", "actors": ["A"], "message": "plain" }
            ] }"#,
        )
        .unwrap();

    let svg = builder.render_svg_with(&diagram, &measurer()).unwrap();
    assert!(svg.contains("class=\"signal signal-0 line\""));
    assert!(svg.contains("class=\"signal signal-1 line\""));
    assert!(svg.contains("class=\"note note-2 textbox rect\""));
    assert!(svg.contains("class=\"note rule line\""));
    assert!(!svg.contains("signal-2"));
}

#[test]
fn test_hand_drawn_output_is_reproducible_with_seed() {
    let builder = builder(ThemeKind::Hand);
    let diagram = builder
        .parse(
            r#"{ "actors": ["A", "B"], "items": [
                { "kind": "signal", "from": "A", "to": "B", "message": "hi", "line": "dotted" }
            ] }"#,
        )
        .unwrap();

    let first = builder.render_svg_with(&diagram, &measurer()).unwrap();
    let second = builder.render_svg_with(&diagram, &measurer()).unwrap();
    assert_eq!(first, second);
    assert!(first.contains(" C "));
}

#[test]
fn test_invalid_json_keeps_source() {
    let source = r#"{ "items": [{ "kind": "arrow" }] }"#;
    let err = DiagramBuilder::default().parse(source).unwrap_err();
    let SeqdrawError::Input { err, src } = err else {
        panic!("expected an input error");
    };
    assert_eq!(src, source);
    assert!(err.location().is_some());
}

#[test]
fn test_invalid_background_color() {
    let config: AppConfig =
        serde_json::from_str(r#"{ "style": { "background_color": "not-a-color" } }"#).unwrap();
    let builder = DiagramBuilder::new(config);
    let diagram = builder.parse(r#"{ "actors": ["A"] }"#).unwrap();

    let result = builder.render_svg_with(&diagram, &measurer());
    assert!(matches!(result, Err(SeqdrawError::Config(_))));
}

#[test]
fn test_background_color_is_painted() {
    let config: AppConfig = serde_json::from_str(
        r#"{ "style": { "theme": "plain", "background_color": "white" } }"#,
    )
    .unwrap();
    let builder = DiagramBuilder::new(config);
    let diagram = builder.parse(r#"{ "actors": ["A"] }"#).unwrap();

    let svg = builder.render_svg_with(&diagram, &measurer()).unwrap();
    assert!(svg.contains("class=\"background\""));
}

use panelgen_core::{
    geometry::{Point, Size},
    shape::ShapeKind,
};
use panelgen_parser::{SkipRules, error::ErrorCode, parse};

fn wrap(body: &str) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg"
     xmlns:inkscape="http://www.inkscape.org/namespaces/inkscape"
     width="225mm" height="190mm" viewBox="0 0 225 190">
{body}
</svg>"#
    )
}

#[test]
fn test_reads_circles_and_rects_in_document_order() {
    let source = wrap(
        r#"
        <rect id="load_btn" x="10" y="12" width="20" height="8"/>
        <circle id="knob_mix" cx="40" cy="80" r="6"/>
        <rect id="zoom_in_btn" x="50" y="12" width="6" height="6"/>
        "#,
    );

    let drawing = parse(&source, &SkipRules::default()).expect("Failed to parse");

    let ids: Vec<_> = drawing.shapes().map(|s| s.id().to_string()).collect();
    assert_eq!(ids, ["load_btn", "knob_mix", "zoom_in_btn"]);

    let knob = drawing.get("knob_mix").unwrap();
    assert_eq!(knob.kind(), ShapeKind::Circle { radius: 6.0 });
    assert_eq!(knob.position(), Point::new(40.0, 80.0));

    let load = drawing.get("load_btn").unwrap();
    assert_eq!(load.size(), Some(Size::new(20.0, 8.0)));
    assert_eq!(load.position(), Point::new(10.0, 12.0));
}

#[test]
fn test_declared_canvas() {
    let drawing = parse(&wrap(""), &SkipRules::default()).unwrap();

    assert_eq!(drawing.canvas(), Some(Size::new(225.0, 190.0)));
    assert!(drawing.is_empty());
    assert!(drawing.warnings().is_empty());
}

#[test]
fn test_canvas_in_pixels_is_a_warning() {
    let source = r#"<svg xmlns="http://www.w3.org/2000/svg" width="850px" height="720px">
        <circle id="knob_mix" cx="1" cy="1" r="1"/>
    </svg>"#;

    let drawing = parse(source, &SkipRules::default()).expect("Warnings are not fatal");

    assert_eq!(drawing.canvas(), None);
    assert_eq!(drawing.len(), 1);
    assert_eq!(drawing.warnings().len(), 1);
    assert_eq!(drawing.warnings()[0].code(), Some(ErrorCode::E101));
}

#[test]
fn test_missing_attributes_default_to_zero() {
    let drawing = parse(&wrap(r#"<circle id="knob_pan"/>"#), &SkipRules::default()).unwrap();

    let knob = drawing.get("knob_pan").unwrap();
    assert_eq!(knob.position(), Point::new(0.0, 0.0));
    assert_eq!(knob.radius(), Some(0.0));
}

#[test]
fn test_elements_without_id_are_skipped() {
    let source = wrap(r#"<circle cx="1" cy="1" r="1"/><rect id="" x="1" y="1"/>"#);
    let drawing = parse(&source, &SkipRules::default()).unwrap();

    assert!(drawing.is_empty());
}

#[test]
fn test_other_elements_are_ignored() {
    let source = wrap(
        r#"
        <ellipse id="knob_odd" cx="1" cy="1" rx="1" ry="2"/>
        <path id="waveform_line" d="M0 0 L10 10"/>
        <text id="title_text" x="4" y="4">SR</text>
        "#,
    );
    let drawing = parse(&source, &SkipRules::default()).unwrap();

    assert!(drawing.is_empty());
}

#[test]
fn test_foreign_namespace_elements_are_ignored() {
    let source = wrap(r#"<x:circle xmlns:x="urn:other" id="knob_foreign" cx="1" cy="1" r="1"/>"#);
    let drawing = parse(&source, &SkipRules::default()).unwrap();

    assert!(drawing.get("knob_foreign").is_none());
}

#[test]
fn test_decorative_elements_are_skipped() {
    let source = wrap(
        r#"
        <rect id="panel_background" x="0" y="0" width="225" height="190"/>
        <rect id="output_border" x="0" y="0" width="50" height="50"/>
        <circle id="grain_particle_3" cx="5" cy="5" r="1"/>
        <circle id="midi_dot" cx="5" cy="5" r="1"/>
        <rect id="kbd_key_c4" x="0" y="180" width="4" height="10"/>
        <circle id="knob_mix" cx="40" cy="80" r="6"/>
        "#,
    );
    let drawing = parse(&source, &SkipRules::default()).unwrap();

    let ids: Vec<_> = drawing.shapes().map(|s| s.id()).collect();
    assert_eq!(ids, ["knob_mix"]);
}

#[test]
fn test_decorative_elements_are_not_validated() {
    // A broken decorative element never reaches attribute parsing.
    let source = wrap(r#"<circle id="grain_particle_1" cx="oops" cy="1" r="1"/>"#);

    assert!(parse(&source, &SkipRules::default()).is_ok());
}

#[test]
fn test_nearest_labelled_group_wins() {
    let source = wrap(
        r#"
        <g inkscape:label="Grain Controls">
          <circle id="knob_position" cx="20" cy="40" r="6"/>
          <g id="unlabelled">
            <circle id="knob_size" cx="40" cy="40" r="6"/>
          </g>
          <g inkscape:label="Envelope">
            <circle id="knob_attack" cx="20" cy="120" r="6"/>
          </g>
          <g inkscape:label="">
            <circle id="knob_decay" cx="40" cy="120" r="6"/>
          </g>
        </g>
        <circle id="knob_output" cx="200" cy="160" r="6"/>
        "#,
    );
    let drawing = parse(&source, &SkipRules::default()).unwrap();

    assert_eq!(
        drawing.get("knob_position").unwrap().group(),
        Some("Grain Controls")
    );
    assert_eq!(drawing.get("knob_size").unwrap().group(), Some("Grain Controls"));
    assert_eq!(drawing.get("knob_attack").unwrap().group(), Some("Envelope"));
    assert_eq!(
        drawing.get("knob_decay").unwrap().group(),
        Some("Grain Controls")
    );
    assert_eq!(drawing.get("knob_output").unwrap().group(), None);
}

#[test]
fn test_spans_cover_the_element() {
    let source = wrap(r#"<circle id="knob_mix" cx="40" cy="80" r="6"/>"#);
    let drawing = parse(&source, &SkipRules::default()).unwrap();

    let span = drawing.get("knob_mix").unwrap().span();
    assert_eq!(
        &source[span.start()..span.end()],
        r#"<circle id="knob_mix" cx="40" cy="80" r="6"/>"#
    );
}

#[test]
fn test_duplicate_ids_are_an_error() {
    let source = wrap(
        r#"
        <circle id="knob_mix" cx="40" cy="80" r="6"/>
        <rect id="knob_mix" x="1" y="1" width="2" height="2"/>
        "#,
    );

    let err = parse(&source, &SkipRules::default()).unwrap_err();

    assert_eq!(err.diagnostics().len(), 1);
    let diag = &err.diagnostics()[0];
    assert_eq!(diag.code(), Some(ErrorCode::E200));
    assert_eq!(diag.labels().len(), 2);
    assert!(diag.labels()[0].is_primary());
    assert_eq!(diag.labels()[1].message(), "first defined here");
}

#[test]
fn test_invalid_lengths_are_all_reported() {
    let source = wrap(
        r#"
        <circle id="knob_mix" cx="12,5" cy="80" r="6"/>
        <rect id="load_btn" x="1" y="1" width="wide" height="50%"/>
        "#,
    );

    let err = parse(&source, &SkipRules::default()).unwrap_err();

    assert_eq!(err.diagnostics().len(), 3);
    assert!(
        err.diagnostics()
            .iter()
            .all(|d| d.code() == Some(ErrorCode::E100))
    );
    assert_eq!(
        err.diagnostics()[0].message(),
        "invalid value `12,5` for attribute `cx`"
    );
}

#[test]
fn test_malformed_xml() {
    let err = parse("<svg xmlns=\"http://www.w3.org/2000/svg\">\n<rect id=\"a\"", &SkipRules::default())
        .unwrap_err();

    assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E001));
    assert_eq!(err.diagnostics()[0].labels().len(), 1);
}

#[test]
fn test_non_svg_root() {
    let err = parse("<html><circle id=\"a\"/></html>", &SkipRules::default()).unwrap_err();

    assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E002));
}

#[test]
fn test_custom_skip_rules() {
    let source = wrap(
        r#"
        <circle id="deco_star" cx="1" cy="1" r="1"/>
        <rect id="panel_background" x="0" y="0" width="225" height="190"/>
        "#,
    );
    let rules = SkipRules::new(vec!["deco_".to_string()], vec![], vec![]);
    let drawing = parse(&source, &rules).unwrap();

    let ids: Vec<_> = drawing.shapes().map(|s| s.id()).collect();
    assert_eq!(ids, ["panel_background"]);
}

mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    fn decorative_id() -> impl Strategy<Value = String> {
        (
            prop_oneof![
                Just("grain_particle"),
                Just("midi_dot"),
                Just("kbd_key")
            ],
            "[a-z0-9_]{0,8}",
        )
            .prop_map(|(prefix, rest)| format!("{prefix}{rest}"))
    }

    proptest! {
        #[test]
        fn decorative_ids_never_parsed(
            id in decorative_id(),
            x in -500.0f32..500.0,
            y in -500.0f32..500.0,
            r in 0.0f32..50.0,
            as_rect in any::<bool>(),
        ) {
            let element = if as_rect {
                format!(r#"<rect id="{id}" x="{x}" y="{y}" width="{r}" height="{r}"/>"#)
            } else {
                format!(r#"<circle id="{id}" cx="{x}" cy="{y}" r="{r}"/>"#)
            };
            let source = wrap(&format!(
                r#"{element}<circle id="knob_keep" cx="1" cy="1" r="1"/>"#
            ));

            let drawing = parse(&source, &SkipRules::default()).unwrap();
            prop_assert!(drawing.get(&id).is_none());
            prop_assert_eq!(drawing.len(), 1);
        }
    }
}

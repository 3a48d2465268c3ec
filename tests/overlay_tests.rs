use chart_pipeline::data_types::{AnnotationDescriptor, DrawablePrimitive, Rgba};
use chart_pipeline::overlay::{AnnotationRegistry, VERTICAL_LINE};
use chart_pipeline::transform::PlotHelpers;

fn plot_helpers<'a>(
    scale_x: &'a dyn Fn(f64) -> f32,
    scale_y: &'a dyn Fn(f64) -> f32,
) -> PlotHelpers<'a> {
    PlotHelpers::new(scale_x, scale_y, 640.0, 480.0)
}

#[test]
fn test_unknown_shape_is_a_noop() {
    let registry = AnnotationRegistry::with_builtin_shapes();
    let sx = |x: f64| x as f32;
    let sy = |y: f64| y as f32;
    let helpers = plot_helpers(&sx, &sy);

    let descriptor = AnnotationDescriptor::new("no-such-shape");
    assert!(registry.dispatch(&descriptor, &helpers).is_none());
}

#[test]
fn test_vertical_line_spans_plot_height() {
    let registry = AnnotationRegistry::with_builtin_shapes();
    let sx = |x: f64| (x * 10.0) as f32;
    let sy = |y: f64| (y * 2.0) as f32;
    let helpers = plot_helpers(&sx, &sy);

    let descriptor = AnnotationDescriptor::vertical_line(5.0);
    let drawable = registry
        .dispatch(&descriptor, &helpers)
        .expect("built-in shape must render");

    match drawable {
        DrawablePrimitive::Line {
            x1,
            y1,
            x2,
            y2,
            width,
            ..
        } => {
            assert_eq!(x1, 50.0, "x must go through the horizontal scale");
            assert_eq!(x2, 50.0);
            assert_eq!(y1, 0.0);
            assert_eq!(y2, 480.0, "guide must span the plot height");
            assert_eq!(width, 1.0);
        }
        other => panic!("expected a line, got {other:?}"),
    }
}

#[test]
fn test_vertical_line_without_x_renders_nothing() {
    let registry = AnnotationRegistry::with_builtin_shapes();
    let sx = |x: f64| x as f32;
    let sy = |y: f64| y as f32;
    let helpers = plot_helpers(&sx, &sy);

    let descriptor = AnnotationDescriptor::new(VERTICAL_LINE);
    assert!(registry.dispatch(&descriptor, &helpers).is_none());
}

#[test]
fn test_vertical_line_honors_stroke_and_color() {
    let registry = AnnotationRegistry::default();
    let sx = |x: f64| x as f32;
    let sy = |y: f64| y as f32;
    let helpers = plot_helpers(&sx, &sy);

    let red = Rgba::new(1.0, 0.0, 0.0, 1.0);
    let descriptor = AnnotationDescriptor::vertical_line(3.0)
        .with_stroke_width(2.5)
        .with_color(red)
        .with_label("entry");

    match registry.dispatch(&descriptor, &helpers) {
        Some(DrawablePrimitive::Line {
            width,
            color,
            label,
            ..
        }) => {
            assert_eq!(width, 2.5);
            assert_eq!(color, Some(red));
            assert_eq!(label.as_deref(), Some("entry"));
        }
        other => panic!("expected a line, got {other:?}"),
    }
}

#[test]
fn test_reregistering_overrides_the_builtin() {
    let registry = AnnotationRegistry::with_builtin_shapes();
    let sx = |x: f64| x as f32;
    let sy = |y: f64| y as f32;
    let helpers = plot_helpers(&sx, &sy);

    registry.register(VERTICAL_LINE, |_descriptor, helpers| {
        Some(DrawablePrimitive::Rect {
            x: 0.0,
            y: 0.0,
            width: helpers.plot_width(),
            height: helpers.plot_height(),
            fill: true,
            color: None,
        })
    });

    let descriptor = AnnotationDescriptor::vertical_line(5.0);
    match registry.dispatch(&descriptor, &helpers) {
        Some(DrawablePrimitive::Rect { width, height, .. }) => {
            assert_eq!(width, 640.0);
            assert_eq!(height, 480.0);
        }
        other => panic!("newest renderer must win, got {other:?}"),
    }
}

#[test]
fn test_external_shape_registration() {
    let registry = AnnotationRegistry::with_builtin_shapes();
    let sx = |x: f64| x as f32;
    let sy = |y: f64| (100.0 - y) as f32;
    let helpers = plot_helpers(&sx, &sy);

    registry.register("horizontal-line", |descriptor, helpers| {
        let y = descriptor.y?;
        let screen_y = helpers.y_to_screen(y);
        Some(DrawablePrimitive::Line {
            x1: 0.0,
            y1: screen_y,
            x2: helpers.plot_width(),
            y2: screen_y,
            width: descriptor.stroke_width.unwrap_or(1.0),
            color: descriptor.color,
            label: descriptor.label.clone(),
        })
    });

    assert!(registry.resolve("horizontal-line").is_some());

    let mut descriptor = AnnotationDescriptor::new("horizontal-line");
    descriptor.y = Some(40.0);
    match registry.dispatch(&descriptor, &helpers) {
        Some(DrawablePrimitive::Line { y1, x2, .. }) => {
            assert_eq!(y1, 60.0);
            assert_eq!(x2, 640.0);
        }
        other => panic!("expected a line, got {other:?}"),
    }
}

#[test]
fn test_empty_registry_resolves_nothing() {
    let registry = AnnotationRegistry::new();
    assert!(registry.resolve(VERTICAL_LINE).is_none());
}

#[test]
fn test_descriptor_parses_from_json() {
    let descriptor = AnnotationDescriptor::from_json(
        r#"{"shape":"vertical-line","x":3.5,"label":"open","threshold":9}"#,
    )
    .expect("valid descriptor json");

    assert_eq!(descriptor.shape, VERTICAL_LINE);
    assert_eq!(descriptor.x, Some(3.5));
    assert_eq!(descriptor.label.as_deref(), Some("open"));
    assert_eq!(
        descriptor.extra.get("threshold").and_then(|v| v.as_u64()),
        Some(9),
        "unrecognized fields must be kept"
    );
}

#[test]
fn test_descriptor_rejects_malformed_json() {
    assert!(AnnotationDescriptor::from_json(r#"{"x":3.5}"#).is_err());
    assert!(AnnotationDescriptor::from_json("not json").is_err());
}

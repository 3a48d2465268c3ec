use crate::data_types::{AnnotationDescriptor, DrawablePrimitive};
use crate::transform::PlotHelpers;

use super::registry::AnnotationRegistry;

pub const VERTICAL_LINE: &str = "vertical-line";

/// Pre-register every built-in shape.
pub fn register_builtin_shapes(registry: &AnnotationRegistry) {
    registry.register(VERTICAL_LINE, render_vertical_line);
}

/// Vertical guide spanning the plot height at the descriptor's `x`. Renders
/// nothing when `x` is absent.
fn render_vertical_line(
    descriptor: &AnnotationDescriptor,
    helpers: &PlotHelpers<'_>,
) -> Option<DrawablePrimitive> {
    let x = descriptor.x?;
    let screen_x = helpers.x_to_screen(x);
    Some(DrawablePrimitive::Line {
        x1: screen_x,
        y1: 0.0,
        x2: screen_x,
        y2: helpers.plot_height(),
        width: descriptor.stroke_width.unwrap_or(1.0),
        color: descriptor.color,
        label: descriptor.label.clone(),
    })
}

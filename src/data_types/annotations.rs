use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Rgba;

/// Caller-supplied description of one overlay instance. `shape` selects the
/// registered renderer; everything else is shape-specific. Fields the common
/// set does not cover land in `extra` untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnnotationDescriptor {
    pub shape: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgba>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AnnotationDescriptor {
    pub fn new(shape: impl Into<String>) -> Self {
        Self {
            shape: shape.into(),
            x: None,
            y: None,
            label: None,
            stroke_width: None,
            color: None,
            extra: Map::new(),
        }
    }

    pub fn vertical_line(x: f64) -> Self {
        let mut descriptor = Self::new(crate::overlay::VERTICAL_LINE);
        descriptor.x = Some(x);
        descriptor
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = Some(width);
        self
    }

    pub fn with_color(mut self, color: Rgba) -> Self {
        self.color = Some(color);
        self
    }

    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).wrap_err("invalid annotation descriptor")
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).wrap_err("invalid annotation descriptor")
    }
}

/// Screen-space output of a shape renderer. Coordinates are pixels relative
/// to the plot origin; scaling has already happened inside the renderer.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawablePrimitive {
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        width: f32,
        color: Option<Rgba>,
        label: Option<String>,
    },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        fill: bool,
        color: Option<Rgba>,
    },
    Text {
        x: f32,
        y: f32,
        text: String,
        font_size: f32,
        color: Option<Rgba>,
    },
}

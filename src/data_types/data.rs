use serde::{Deserialize, Serialize};

/// Framework-neutral straight-alpha color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum ColorOp {
    Persistent(Rgba),
    OneShot(Rgba),
    Reset,
    #[default]
    None,
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
    pub color_op: ColorOp,
}

impl PlotPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            color_op: ColorOp::None,
        }
    }
}

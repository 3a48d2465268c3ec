//! Scale context handed to overlay renderers.

/// Borrowed coordinate-mapping context for one render pass. The chart surface
/// owns the actual scales; renderers only ever see domain→pixel closures plus
/// the drawable plot extent, so they stay scale-agnostic.
pub struct PlotHelpers<'a> {
    scale_x: &'a dyn Fn(f64) -> f32,
    scale_y: &'a dyn Fn(f64) -> f32,
    plot_width: f32,
    plot_height: f32,
}

impl<'a> PlotHelpers<'a> {
    pub fn new(
        scale_x: &'a dyn Fn(f64) -> f32,
        scale_y: &'a dyn Fn(f64) -> f32,
        plot_width: f32,
        plot_height: f32,
    ) -> Self {
        Self {
            scale_x,
            scale_y,
            plot_width,
            plot_height,
        }
    }

    pub fn x_to_screen(&self, x: f64) -> f32 {
        (self.scale_x)(x)
    }

    pub fn y_to_screen(&self, y: f64) -> f32 {
        (self.scale_y)(y)
    }

    pub fn plot_width(&self) -> f32 {
        self.plot_width
    }

    pub fn plot_height(&self) -> f32 {
        self.plot_height
    }
}

//! chart_pipeline crate: rendering support for large, animated charts

pub mod animation;
pub mod data_types;
pub mod decimation;
pub mod overlay;
pub mod transform;

pub use animation::{AnimationOptions, Easing, StaggerScheduler};
pub use data_types::{AnnotationDescriptor, DrawablePrimitive, PlotPoint, Rgba};
pub use overlay::{AnnotationRegistry, VERTICAL_LINE};
pub use transform::PlotHelpers;

pub mod builtin;
pub mod registry;

pub use builtin::{register_builtin_shapes, VERTICAL_LINE};
pub use registry::{AnnotationRegistry, RendererFn};

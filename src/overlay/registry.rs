use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use crate::data_types::{AnnotationDescriptor, DrawablePrimitive};
use crate::transform::PlotHelpers;

/// A shape renderer: pure function from descriptor plus scale context to a
/// drawable, or nothing when the descriptor does not apply.
pub type RendererFn =
    dyn Fn(&AnnotationDescriptor, &PlotHelpers<'_>) -> Option<DrawablePrimitive> + Send + Sync;

/// Name-keyed table of shape renderers.
///
/// Explicitly owned by the host application, not a process singleton.
/// Registration is a setup-time operation; dispatch runs on the render hot
/// path and never fails: an unknown shape renders nothing rather than
/// blanking the chart.
pub struct AnnotationRegistry {
    renderers: RwLock<HashMap<String, Arc<RendererFn>>>,
}

impl AnnotationRegistry {
    /// Empty registry, no shapes.
    pub fn new() -> Self {
        Self {
            renderers: RwLock::new(HashMap::new()),
        }
    }

    /// Registry with the built-in shapes pre-registered.
    pub fn with_builtin_shapes() -> Self {
        let registry = Self::new();
        super::builtin::register_builtin_shapes(&registry);
        registry
    }

    /// Store `renderer` under `shape`. Re-registering an existing name
    /// overwrites the prior renderer; last write wins.
    pub fn register<F>(&self, shape: impl Into<String>, renderer: F)
    where
        F: Fn(&AnnotationDescriptor, &PlotHelpers<'_>) -> Option<DrawablePrimitive>
            + Send
            + Sync
            + 'static,
    {
        let shape = shape.into();
        debug!("registered annotation renderer for shape {shape:?}");
        self.renderers.write().insert(shape, Arc::new(renderer));
    }

    pub fn resolve(&self, shape: &str) -> Option<Arc<RendererFn>> {
        self.renderers.read().get(shape).cloned()
    }

    /// Look up the descriptor's shape and run its renderer. Unknown shapes
    /// are a no-op.
    pub fn dispatch(
        &self,
        descriptor: &AnnotationDescriptor,
        helpers: &PlotHelpers<'_>,
    ) -> Option<DrawablePrimitive> {
        match self.resolve(&descriptor.shape) {
            Some(renderer) => renderer(descriptor, helpers),
            None => {
                debug!("no annotation renderer for shape {:?}", descriptor.shape);
                None
            }
        }
    }
}

impl Default for AnnotationRegistry {
    fn default() -> Self {
        Self::with_builtin_shapes()
    }
}

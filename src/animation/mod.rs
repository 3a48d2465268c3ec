pub mod clock;
pub mod easing;
pub mod scheduler;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use easing::Easing;
pub use scheduler::{AnimationOptions, ItemProgress, MasterProgress, StaggerScheduler};

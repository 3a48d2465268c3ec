pub mod annotations;
pub mod data;

pub use annotations::*;
pub use data::*;

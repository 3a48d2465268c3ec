pub mod bucketing;
pub mod largest_rect;

pub use bucketing::calculate_index_buckets;
pub use largest_rect::{
    decimate_largest_rect_arrays, decimate_largest_rect_arrays_into,
    decimate_largest_rect_generic, decimate_largest_rect_slice,
};

//! Value objects - immutable objects defined by their attributes

mod location;

pub use location::{LocationPreview, UNKNOWN_ID};

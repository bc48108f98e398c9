mod interval;
pub use interval::Interval;

pub mod axis_aligned_bounding_box;
pub use axis_aligned_bounding_box::BoundingBox;

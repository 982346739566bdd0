pub mod filename;
pub mod params;

pub use filename::parse_filename;
pub use params::{parse_rotate_angle, parse_thumbnail_size};

pub mod decode;
pub mod dimensions;
pub mod encode;
pub mod filters;
pub mod formats;
pub mod params;
pub mod resize;
pub mod rotate;

pub use decode::{decode_and_verify, to_rgb};
pub use dimensions::calculate_thumbnail_dimensions;
pub use encode::encode_image;
pub use filters::apply_filters;
pub use formats::{FormatEntry, FormatRegistry};
pub use params::FilterSet;
pub use resize::{resize_image, thumbnail};
pub use rotate::rotate;

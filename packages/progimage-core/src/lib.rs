pub mod constants;
pub mod errors;
pub mod ingest;
pub mod serve;
pub mod storage;
pub mod transform;
pub mod validation;

// 公開API
pub use constants::DEFAULT_QUALITY;
pub use errors::{MediaError, StorageError, TransformError};
pub use ingest::{ingest, ImageRequest, IngestResponse, RequestType};
pub use serve::{render, serve, ServedImage};
pub use storage::{ImageStore, MemoryStore, ObjectStoreStorage};
pub use transform::{
    apply_filters, calculate_thumbnail_dimensions, decode_and_verify, encode_image, resize_image,
    rotate, thumbnail, to_rgb, FilterSet, FormatEntry, FormatRegistry,
};
pub use validation::{parse_filename, parse_rotate_angle, parse_thumbnail_size};

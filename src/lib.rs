pub mod error;
pub mod utils;

pub use error::FetchError;
pub use utils::images::{encode_image, store_image};

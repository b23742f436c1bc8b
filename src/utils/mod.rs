//! Utility modules for img-fetch
//!
//! This module contains the pieces behind the two CLI operations:
//! - `http`: the shared fetch step (single GET, whole body in memory)
//! - `images`: data-URI encoding and save-to-disk

pub mod http;
pub mod images;

//! Lectura y eliminación de metadata embebida (EXIF, texto PNG, Info de
//! PDF y etiquetas de contenedores de video) en un único archivo.
//!
//! ```rust,no_run
//! use metadata_eraser::{read_metadata, strip_metadata};
//! use std::path::Path;
//!
//! let path = Path::new("photo.jpg");
//! let before = read_metadata(path);
//! let stripped = strip_metadata(path)?;
//! let after = read_metadata(&stripped.output);
//! # Ok::<(), metadata_eraser::EraserError>(())
//! ```

pub mod category;
pub mod config;
pub mod error;
pub mod export;
pub mod hashing;
pub mod reader;
pub mod record;
pub mod report;
pub mod stripper;
pub mod tools;

#[cfg(test)]
mod test_support;

pub use category::FileCategory;
pub use config::EraserConfig;
pub use error::{EraserError, Result};
pub use reader::{read_metadata, read_metadata_with};
pub use record::MetadataRecord;
pub use stripper::{StrippedFile, strip_metadata, strip_metadata_with};

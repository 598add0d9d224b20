//! Catalog ingestion and normalization pipeline for FrameKit.
//!
//! This crate turns loosely-typed external kit data into the canonical
//! [`Kit`](framekit_catalog::Kit) shape:
//!
//! - `csv` - quote-aware CSV tokenizer and header-zipping record reader
//! - `raw` - explicit raw-record representation of unvalidated source data
//! - `normalize` - numeric/boolean/list field normalizers
//! - `map` - raw record to `Kit` mapping
//! - `fetch` - the `SourceFetcher` transport seam
//! - `resolver` - ordered source fallback with a validation gate
//! - `upload` - user-supplied file loading (no validation gate)
//!
//! Automatic loads are validated and fall back to the bundled defaults;
//! uploads trust the user and only guard against outright parse failure.

pub mod csv;
pub mod error;
pub mod fetch;
pub mod map;
pub mod normalize;
pub mod raw;
pub mod resolver;
pub mod upload;

pub use error::IngestError;
pub use fetch::{FetchError, SourceFetcher};
pub use map::{map_record, map_records};
pub use raw::{RawRecord, RawValue};
pub use resolver::{resolve, CatalogSource, Resolution, ResolvedFrom, SourceFailure, SourceFormat};
pub use upload::{load_upload, UploadSource};

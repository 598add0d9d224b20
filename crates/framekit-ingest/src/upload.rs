//! User-supplied catalog files.
//!
//! Uploads run through the same mapping pipeline as automatic sources
//! but, matching source behavior, get no id/price validation gate: a
//! structurally parseable file replaces the catalog as-is. Only outright
//! read or parse failures are reported, and those leave existing state
//! untouched because nothing is returned to swap in.

use crate::error::IngestError;
use crate::map::map_records;
use crate::resolver::{parse_records, SourceFormat};
use async_trait::async_trait;
use framekit_catalog::Kit;
use tracing::{info, warn};

/// A user-chosen file: a name to sniff the format from and an
/// asynchronous one-shot text read.
#[async_trait]
pub trait UploadSource: Send + Sync {
    /// The file name, used only for its extension.
    fn file_name(&self) -> &str;

    /// Read the whole file as text.
    async fn read_text(&self) -> Result<String, std::io::Error>;
}

/// Load a user-supplied catalog file.
///
/// `.json` files parse as a JSON array of raw records; anything else
/// goes down the CSV path. On success the mapped kits are returned for
/// the caller to swap into the store; on failure the error carries the
/// underlying detail for display.
pub async fn load_upload(source: &dyn UploadSource) -> Result<Vec<Kit>, IngestError> {
    let name = source.file_name().to_string();
    let text = source.read_text().await.map_err(|e| {
        warn!(file = %name, error = %e, "upload read failed");
        IngestError::UploadParseFailure(e.to_string())
    })?;

    let format = if name.ends_with(".json") {
        SourceFormat::Json
    } else {
        SourceFormat::Csv
    };

    let records = parse_records(&text, format).map_err(|detail| {
        warn!(file = %name, %detail, "upload parse failed");
        IngestError::UploadParseFailure(detail)
    })?;

    let kits = map_records(&records);
    info!(file = %name, kits = kits.len(), "upload parsed");
    Ok(kits)
}

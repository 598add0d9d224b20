//! Ordered catalog source resolution.
//!
//! Candidates are attempted strictly in order, each one awaited before
//! the next is tried: source precedence beats latency here. Failures are
//! never fatal and never silent — each attempt that does not produce a
//! valid catalog is recorded as a [`SourceFailure`] on the resolution.

use crate::csv;
use crate::error::IngestError;
use crate::fetch::SourceFetcher;
use crate::map::map_records;
use crate::raw::RawRecord;
use framekit_catalog::defaults::default_kits;
use framekit_catalog::{validate_catalog, Kit};
use tracing::{info, warn};

/// Payload format of a candidate source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// JSON array of raw kit records.
    Json,
    /// CSV text with a header row; list fields semicolon-separated.
    Csv,
}

/// One candidate in the ordered list of places to load the catalog from.
#[derive(Debug, Clone)]
pub struct CatalogSource {
    /// Path or URL handed to the fetcher.
    pub path: String,
    /// Payload format.
    pub format: SourceFormat,
}

impl CatalogSource {
    /// A JSON candidate.
    pub fn json(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            format: SourceFormat::Json,
        }
    }

    /// A CSV candidate.
    pub fn csv(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            format: SourceFormat::Csv,
        }
    }

    /// The standard candidate order: remote JSON, then remote CSV.
    pub fn standard() -> Vec<Self> {
        vec![Self::json("/kits.json"), Self::csv("/kits.csv")]
    }
}

/// Where the resolved catalog came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedFrom {
    /// A candidate source, identified by its path.
    Source(String),
    /// The bundled default catalog.
    Defaults,
}

/// A recorded failure for one candidate.
#[derive(Debug)]
pub struct SourceFailure {
    /// Path of the candidate that failed.
    pub path: String,
    /// Why it was skipped.
    pub reason: IngestError,
}

/// Outcome of catalog resolution.
///
/// Always carries a non-empty catalog: when every candidate fails, the
/// bundled defaults are the result.
#[derive(Debug)]
pub struct Resolution {
    /// The resolved catalog, in display order.
    pub kits: Vec<Kit>,
    /// Which source won.
    pub origin: ResolvedFrom,
    /// Failure reasons for the candidates that were skipped.
    pub failures: Vec<SourceFailure>,
}

/// Resolve the catalog from an ordered list of candidates.
///
/// Each candidate is fetched, parsed, mapped, and validated in turn; the
/// first one yielding a non-empty catalog where every kit has an id and
/// a positive numeric price wins. If none does, the bundled defaults are
/// returned verbatim.
pub async fn resolve(fetcher: &dyn SourceFetcher, sources: &[CatalogSource]) -> Resolution {
    let mut failures = Vec::new();

    for source in sources {
        match attempt(fetcher, source).await {
            Ok(kits) => {
                info!(path = %source.path, kits = kits.len(), "catalog resolved");
                return Resolution {
                    kits,
                    origin: ResolvedFrom::Source(source.path.clone()),
                    failures,
                };
            }
            Err(reason) => {
                warn!(path = %source.path, %reason, "catalog source skipped");
                failures.push(SourceFailure {
                    path: source.path.clone(),
                    reason,
                });
            }
        }
    }

    info!("all catalog sources failed; using bundled defaults");
    Resolution {
        kits: default_kits(),
        origin: ResolvedFrom::Defaults,
        failures,
    }
}

/// Fetch, parse, map, and validate one candidate.
async fn attempt(
    fetcher: &dyn SourceFetcher,
    source: &CatalogSource,
) -> Result<Vec<Kit>, IngestError> {
    let body = fetcher.fetch_text(&source.path).await?;

    let records = parse_records(&body, source.format)
        .map_err(IngestError::MalformedPayload)?;
    let kits = map_records(&records);

    if !validate_catalog(&kits) {
        return Err(IngestError::MalformedPayload(
            "catalog failed validation: every kit needs a non-empty id and a positive price"
                .to_string(),
        ));
    }
    Ok(kits)
}

/// Parse a payload into raw records per its format.
pub(crate) fn parse_records(body: &str, format: SourceFormat) -> Result<Vec<RawRecord>, String> {
    match format {
        SourceFormat::Json => {
            let value: serde_json::Value =
                serde_json::from_str(body).map_err(|e| e.to_string())?;
            let items = value
                .as_array()
                .ok_or_else(|| "expected a JSON array of kit records".to_string())?;
            Ok(items.iter().map(RawRecord::from_json).collect())
        }
        SourceFormat::Csv => Ok(csv::read_records(body)),
    }
}

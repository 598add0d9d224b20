//! Kit record and catalog validation.

use crate::ids::KitId;
use serde::{Deserialize, Serialize};

/// A purchasable structural building kit.
///
/// This is the canonical catalog entity. Numeric and list fields are
/// already normalized by the ingestion pipeline; free-form spec-sheet
/// fields stay as display strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Kit {
    /// Unique kit identifier.
    pub id: KitId,
    /// Kit name.
    pub name: String,
    /// Marketing tagline.
    pub tagline: String,
    /// Price in whole currency units.
    pub price: f64,
    /// Hero image URL.
    pub img: String,
    /// Fabrication lead time in weeks.
    pub lead_time_weeks: Option<f64>,
    /// Footprint description (e.g., "24' x 40' (960 ft²)").
    pub footprint: String,
    /// Total envelope area description.
    pub envelope_area: String,
    /// Number of structural bays.
    pub bays: Option<f64>,
    /// Grid module description.
    pub grid: String,
    /// Clear span description.
    pub clear_span: String,
    /// Available roof profiles, in display order.
    pub roof_options: Vec<String>,
    /// Compatible cladding systems, in display order.
    pub cladding: Vec<String>,
    /// Steel grade description.
    pub steel: String,
    /// Finish description.
    pub finish: String,
    /// Design load summary.
    pub design_loads: String,
    /// Compatible energy assemblies.
    pub energy: String,
    /// Shipping weight description.
    pub shipping_weight: String,
    /// Crew size and install time.
    pub crew: String,
    /// Tools needed for assembly.
    pub tools: String,
    /// Structural warranty in years.
    pub warranty_years: Option<f64>,
    /// Best-seller badge flag.
    pub best_seller: bool,
    /// Premium/developer badge flag.
    pub premium: bool,
}

impl Kit {
    /// Check whether this kit is valid: non-empty id and positive price.
    pub fn is_valid(&self) -> bool {
        !self.id.is_empty() && self.price.is_finite() && self.price > 0.0
    }
}

/// Check whether a catalog is valid: non-empty and every kit valid.
pub fn validate_catalog(kits: &[Kit]) -> bool {
    !kits.is_empty() && kits.iter().all(Kit::is_valid)
}

/// One self-check result over a catalog.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Diagnostic {
    /// Name of the check.
    pub name: String,
    /// Whether the check passed.
    pub pass: bool,
    /// Failure detail, if any.
    pub details: Option<String>,
}

impl Diagnostic {
    fn pass(name: &str) -> Self {
        Self {
            name: name.to_string(),
            pass: true,
            details: None,
        }
    }

    fn fail(name: &str, details: String) -> Self {
        Self {
            name: name.to_string(),
            pass: false,
            details: Some(details),
        }
    }
}

/// Run the catalog self-checks and return the results as data.
///
/// Checks: the catalog is non-empty, every kit carries an id and a
/// positive price, and the joined list fields render without stray
/// quote characters from CSV ingestion.
pub fn catalog_diagnostics(kits: &[Kit]) -> Vec<Diagnostic> {
    let mut results = Vec::new();

    results.push(if kits.is_empty() {
        Diagnostic::fail("has >= 1 kit", format!("Expected >=1, got {}", kits.len()))
    } else {
        Diagnostic::pass("has >= 1 kit")
    });

    let bad = kits.iter().find(|k| !k.is_valid());
    results.push(match bad {
        Some(k) if k.id.is_empty() => {
            Diagnostic::fail("each kit has id & price", "missing id".to_string())
        }
        Some(k) => Diagnostic::fail("each kit has id & price", format!("{} bad price", k.id)),
        None => Diagnostic::pass("each kit has id & price"),
    });

    let stray = kits.iter().find(|k| {
        k.roof_options.join(", ").contains('"') || k.cladding.join(", ").contains('"')
    });
    results.push(match stray {
        Some(k) => Diagnostic::fail("joins produce plain strings", format!("{} stray quotes", k.id)),
        None => Diagnostic::pass("joins produce plain strings"),
    });

    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kit(id: &str, price: f64) -> Kit {
        Kit {
            id: KitId::new(id),
            name: format!("Kit {}", id),
            price,
            ..Default::default()
        }
    }

    #[test]
    fn test_kit_validity() {
        assert!(kit("sf-1200", 89000.0).is_valid());
        assert!(!kit("", 89000.0).is_valid());
        assert!(!kit("sf-1200", 0.0).is_valid());
        assert!(!kit("sf-1200", -1.0).is_valid());
        assert!(!kit("sf-1200", f64::NAN).is_valid());
    }

    #[test]
    fn test_validate_catalog() {
        assert!(validate_catalog(&[kit("a", 1.0), kit("b", 2.0)]));
        assert!(!validate_catalog(&[]));
        assert!(!validate_catalog(&[kit("a", 1.0), kit("", 2.0)]));
    }

    #[test]
    fn test_duplicate_ids_tolerated() {
        // Display order comes from the source; duplicates are not deduplicated.
        assert!(validate_catalog(&[kit("a", 1.0), kit("a", 1.0)]));
    }

    #[test]
    fn test_diagnostics_pass() {
        let results = catalog_diagnostics(&[kit("a", 1.0)]);
        assert!(results.iter().all(|d| d.pass));
    }

    #[test]
    fn test_diagnostics_report_bad_price() {
        let results = catalog_diagnostics(&[kit("a", 0.0)]);
        let check = results.iter().find(|d| d.name == "each kit has id & price").unwrap();
        assert!(!check.pass);
        assert_eq!(check.details.as_deref(), Some("a bad price"));
    }

    #[test]
    fn test_diagnostics_stray_quotes() {
        let mut k = kit("a", 1.0);
        k.cladding = vec!["\"Metal panel\"".to_string()];
        let results = catalog_diagnostics(&[k]);
        let check = results.iter().find(|d| d.name == "joins produce plain strings").unwrap();
        assert!(!check.pass);
    }

    #[test]
    fn test_kit_camel_case_serde() {
        let json = r#"{"id":"sf-1200","name":"Starter","price":89000,"leadTimeWeeks":6,"bestSeller":true}"#;
        let k: Kit = serde_json::from_str(json).unwrap();
        assert_eq!(k.lead_time_weeks, Some(6.0));
        assert!(k.best_seller);
        assert!(!k.premium);
    }
}

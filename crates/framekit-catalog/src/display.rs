//! Derived display strings for the presentation layer.
//!
//! The core hands the renderer preformatted strings so no pricing or
//! list-join logic leaks into templates.

use crate::kit::Kit;
use serde::Serialize;

/// Format a price as whole-dollar USD with thousands separators,
/// e.g. `format_usd(89000.0)` is `"$89,000"`.
pub fn format_usd(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let negative = rounded < 0;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if negative {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

impl Kit {
    /// Roof options joined for display.
    pub fn roof_summary(&self) -> String {
        self.roof_options.join(", ")
    }

    /// Cladding options joined for display.
    pub fn cladding_summary(&self) -> String {
        self.cladding.join(", ")
    }

    /// Lead time label, e.g. `"~8 weeks"`; empty when unknown.
    pub fn lead_time_label(&self) -> String {
        match self.lead_time_weeks {
            Some(w) => format!("~{} weeks", trim_number(w)),
            None => String::new(),
        }
    }

    /// Warranty label, e.g. `"20 years"`; empty when unknown.
    pub fn warranty_label(&self) -> String {
        match self.warranty_years {
            Some(y) => format!("{} years", trim_number(y)),
            None => String::new(),
        }
    }

    /// Bay count as a display string; empty when unknown.
    pub fn bays_label(&self) -> String {
        self.bays.map(trim_number).unwrap_or_default()
    }

    /// Formatted price, e.g. `"$129,000"`.
    pub fn price_label(&self) -> String {
        format_usd(self.price)
    }
}

/// Render a float without a trailing `.0` for whole numbers.
fn trim_number(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// One labeled row of the kit comparison table.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ComparisonRow {
    /// Spec label (left column).
    pub label: String,
    /// One formatted cell per kit, in catalog order.
    pub cells: Vec<String>,
}

impl ComparisonRow {
    fn new(label: &str, cells: Vec<String>) -> Self {
        Self {
            label: label.to_string(),
            cells,
        }
    }
}

/// Build the comparison-table rows for a catalog.
pub fn comparison_rows(kits: &[Kit]) -> Vec<ComparisonRow> {
    let row = |label: &str, f: &dyn Fn(&Kit) -> String| {
        ComparisonRow::new(label, kits.iter().map(f).collect())
    };

    vec![
        row("Price", &Kit::price_label),
        row("Footprint", &|k| k.footprint.clone()),
        row("Envelope area", &|k| k.envelope_area.clone()),
        row("Bays", &Kit::bays_label),
        row("Grid module", &|k| k.grid.clone()),
        row("Clear span", &|k| k.clear_span.clone()),
        row("Roof options", &Kit::roof_summary),
        row("Compatible cladding", &Kit::cladding_summary),
        row("Steel grade", &|k| k.steel.clone()),
        row("Finish", &|k| k.finish.clone()),
        row("Design loads", &|k| k.design_loads.clone()),
        row("Energy assemblies", &|k| k.energy.clone()),
        row("Shipping weight", &|k| k.shipping_weight.clone()),
        row("Crew & time", &|k| k.crew.clone()),
        row("Tools needed", &|k| k.tools.clone()),
        row("Warranty", &Kit::warranty_label),
    ]
}

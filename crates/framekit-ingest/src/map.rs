//! Raw record to Kit mapping.

use crate::normalize::{smart_bool, smart_number, split_list};
use crate::raw::{RawRecord, RawValue};
use framekit_catalog::{Kit, KitId};

/// Map one raw record into a canonical kit.
///
/// Numeric fields go through the numeric normalizer, flags through the
/// boolean normalizer, list fields through the list normalizer, and the
/// remaining known fields pass through as display strings. Fields not in
/// the canonical shape are ignored, never merged.
pub fn map_record(record: &RawRecord) -> Kit {
    Kit {
        id: KitId::new(record.get("id").display_string()),
        name: record.get("name").display_string(),
        tagline: record.get("tagline").display_string(),
        price: required_number(record.get("price")),
        img: record.get("img").display_string(),
        lead_time_weeks: optional_number(record.get("leadTimeWeeks")),
        footprint: record.get("footprint").display_string(),
        envelope_area: record.get("envelopeArea").display_string(),
        bays: optional_number(record.get("bays")),
        grid: record.get("grid").display_string(),
        clear_span: record.get("clearSpan").display_string(),
        roof_options: split_list(record.get("roofOptions")),
        cladding: split_list(record.get("cladding")),
        steel: record.get("steel").display_string(),
        finish: record.get("finish").display_string(),
        design_loads: record.get("designLoads").display_string(),
        energy: record.get("energy").display_string(),
        shipping_weight: record.get("shippingWeight").display_string(),
        crew: record.get("crew").display_string(),
        tools: record.get("tools").display_string(),
        warranty_years: optional_number(record.get("warrantyYears")),
        best_seller: smart_bool(&record.get("bestSeller")),
        premium: smart_bool(&record.get("premium")),
    }
}

/// Map a slice of raw records, preserving source order.
pub fn map_records(records: &[RawRecord]) -> Vec<Kit> {
    records.iter().map(map_record).collect()
}

/// A numeric field the kit cannot do without: a value that does not
/// normalize to a number marks the kit invalid via a non-finite price.
fn required_number(value: RawValue) -> f64 {
    match smart_number(value) {
        RawValue::Num(n) => n,
        _ => f64::NAN,
    }
}

fn optional_number(value: RawValue) -> Option<f64> {
    match smart_number(value) {
        RawValue::Num(n) => Some(n),
        _ => None,
    }
}

//! Bundled default catalog.
//!
//! Hand-authored, fully populated kits used verbatim when no external
//! source resolves. These never pass through the normalization pipeline.

use crate::ids::KitId;
use crate::kit::Kit;

/// The bundled default catalog: three turnkey core-and-shell kits.
pub fn default_kits() -> Vec<Kit> {
    vec![
        Kit {
            id: KitId::new("sf-1200"),
            name: "Starter Kit — SF-1200".to_string(),
            tagline: "Fast, clean shell for ADUs & small homes".to_string(),
            price: 89_000.0,
            img: "https://picsum.photos/seed/spaceframe1/1200/700".to_string(),
            lead_time_weeks: Some(6.0),
            footprint: "24' x 40' (960 ft²)".to_string(),
            envelope_area: "~3,250 ft²".to_string(),
            bays: Some(6.0),
            grid: "8' module".to_string(),
            clear_span: "24'".to_string(),
            roof_options: vec!["Gable".to_string(), "Mono-slope".to_string()],
            cladding: vec![
                "Metal panel".to_string(),
                "Cedar rainscreen".to_string(),
                "Stucco".to_string(),
            ],
            steel: "ASTM A500 Grade B / A36 nodes".to_string(),
            finish: "Hot-dip galvanized + powder-coat (RAL options)".to_string(),
            design_loads: "Roof: 30 psf • Wind: 110 mph (ASCE 7-16) • Seismic: D1/D2".to_string(),
            energy: "R-30 roof / R-21 wall compatible assemblies".to_string(),
            shipping_weight: "~7,200 lb".to_string(),
            crew: "3–4 ppl, 2–3 days to dry-in".to_string(),
            tools: "Impact driver, ratchets, laser level, 2 ladders".to_string(),
            warranty_years: Some(15.0),
            best_seller: false,
            premium: false,
        },
        Kit {
            id: KitId::new("sf-1800"),
            name: "Builder Kit — SF-1800".to_string(),
            tagline: "Family plan with expanded span & bay count".to_string(),
            price: 129_000.0,
            img: "https://picsum.photos/seed/spaceframe2/1200/700".to_string(),
            lead_time_weeks: Some(8.0),
            footprint: "30' x 60' (1,800 ft²)".to_string(),
            envelope_area: "~5,900 ft²".to_string(),
            bays: Some(10.0),
            grid: "10' module".to_string(),
            clear_span: "30'".to_string(),
            roof_options: vec![
                "Gable".to_string(),
                "Mono-slope".to_string(),
                "Clerestory".to_string(),
            ],
            cladding: vec![
                "Metal panel".to_string(),
                "Fiber-cement".to_string(),
                "Brick veneer".to_string(),
            ],
            steel: "ASTM A500 Grade C / A572 nodes".to_string(),
            finish: "Hot-dip galvanized + powder-coat (custom)".to_string(),
            design_loads: "Roof: 40 psf • Wind: 130 mph • Seismic: D2".to_string(),
            energy: "R-38 roof / R-23 wall compatible assemblies".to_string(),
            shipping_weight: "~12,500 lb".to_string(),
            crew: "4–5 ppl, 4–5 days to dry-in".to_string(),
            tools: "Impact wrenches, laser level, 2 scaffolds".to_string(),
            warranty_years: Some(20.0),
            best_seller: true,
            premium: false,
        },
        Kit {
            id: KitId::new("sf-2400"),
            name: "Pro Kit — SF-2400".to_string(),
            tagline: "Developer-grade speed with premium spans".to_string(),
            price: 169_000.0,
            img: "https://picsum.photos/seed/spaceframe3/1200/700".to_string(),
            lead_time_weeks: Some(10.0),
            footprint: "40' x 60' (2,400 ft²)".to_string(),
            envelope_area: "~7,600 ft²".to_string(),
            bays: Some(12.0),
            grid: "10' module".to_string(),
            clear_span: "40'".to_string(),
            roof_options: vec![
                "Gable".to_string(),
                "Mono-slope".to_string(),
                "Sawtooth".to_string(),
                "Green roof-ready".to_string(),
            ],
            cladding: vec![
                "High-rib metal".to_string(),
                "Composite panel".to_string(),
                "EIFS".to_string(),
            ],
            steel: "ASTM A500 Grade C / A572 nodes".to_string(),
            finish: "HDG + architectural powder-coat (project palette)".to_string(),
            design_loads: "Roof: 50 psf • Wind: 140 mph • Seismic: D2".to_string(),
            energy: "R-49 roof / R-24 wall compatible assemblies".to_string(),
            shipping_weight: "~16,800 lb".to_string(),
            crew: "5–6 ppl, 5–7 days to dry-in".to_string(),
            tools: "Torque-controlled impacts, lasers, small telehandler".to_string(),
            warranty_years: Some(25.0),
            best_seller: false,
            premium: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kit::validate_catalog;

    #[test]
    fn test_defaults_are_valid() {
        // Defaults bypass the runtime validation gate; this pins the
        // invariant at test time instead.
        assert!(validate_catalog(&default_kits()));
    }

    #[test]
    fn test_defaults_shape() {
        let kits = default_kits();
        assert_eq!(kits.len(), 3);
        assert_eq!(kits[0].id.as_str(), "sf-1200");
        assert!(kits[1].best_seller);
        assert!(kits[2].premium);
    }
}

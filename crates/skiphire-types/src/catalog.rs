//! Static catalogs of selectable waste categories
//!
//! The surrounding application supplies these as fixed enumerated lists; the
//! core consumes `id` and `enabled` to validate selections.

use serde::Serialize;

/// A selectable waste category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WasteType {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub enabled: bool,
    pub examples: &'static [&'static str],
}

/// A heavy-waste sub-category offered on the detail screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeavyWasteOption {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

/// Waste-type id selected by default when a session starts
pub const DEFAULT_WASTE_TYPE: &str = "garden-waste";

const WASTE_CATALOG: &[WasteType] = &[
    WasteType {
        id: "household-waste",
        name: "Household Waste",
        description: "General household items and furniture",
        enabled: true,
        examples: &["Furniture", "Appliances", "Garden waste", "General household items"],
    },
    WasteType {
        id: "construction-waste",
        name: "Construction Waste",
        description: "Building materials and renovation debris",
        enabled: false,
        examples: &["Bricks", "Timber", "Concrete", "Plasterboard"],
    },
    WasteType {
        id: "garden-waste",
        name: "Garden Waste",
        description: "Green waste and landscaping materials",
        enabled: true,
        examples: &["Soil", "Branches", "Plants", "Grass cuttings"],
    },
    WasteType {
        id: "commercial-waste",
        name: "Commercial Waste",
        description: "Business and office clearance",
        enabled: true,
        examples: &["Office furniture", "Shop fittings", "Equipment", "Commercial debris"],
    },
];

const HEAVY_WASTE_CATALOG: &[HeavyWasteOption] = &[
    HeavyWasteOption {
        id: "soil",
        label: "Soil",
        description: "Garden soil, topsoil, subsoil",
    },
    HeavyWasteOption {
        id: "concrete",
        label: "Concrete",
        description: "Broken concrete, cement blocks",
    },
    HeavyWasteOption {
        id: "bricks",
        label: "Bricks",
        description: "Whole or broken bricks",
    },
    HeavyWasteOption {
        id: "rubble",
        label: "Rubble",
        description: "Mixed construction debris",
    },
];

/// All waste categories in display order
pub fn waste_catalog() -> &'static [WasteType] {
    WASTE_CATALOG
}

/// Look up a waste category by id
pub fn waste_type(id: &str) -> Option<&'static WasteType> {
    WASTE_CATALOG.iter().find(|w| w.id == id)
}

/// Display name for a waste-type id, falling back to the id itself
pub fn waste_type_name(id: &str) -> &str {
    match waste_type(id) {
        Some(waste) => waste.name,
        None => id,
    }
}

/// All heavy-waste sub-categories in display order
pub fn heavy_waste_catalog() -> &'static [HeavyWasteOption] {
    HEAVY_WASTE_CATALOG
}

/// Look up a heavy-waste sub-category by id
pub fn heavy_waste_option(id: &str) -> Option<&'static HeavyWasteOption> {
    HEAVY_WASTE_CATALOG.iter().find(|o| o.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_waste_type_is_enabled() {
        let waste = waste_type(DEFAULT_WASTE_TYPE).unwrap();
        assert!(waste.enabled);
    }

    #[test]
    fn test_construction_waste_is_disabled() {
        assert!(!waste_type("construction-waste").unwrap().enabled);
    }

    #[test]
    fn test_unknown_waste_type() {
        assert!(waste_type("nuclear-waste").is_none());
        assert_eq!(waste_type_name("nuclear-waste"), "nuclear-waste");
    }

    #[test]
    fn test_heavy_waste_catalog_ids_unique() {
        let ids: Vec<_> = heavy_waste_catalog().iter().map(|o| o.id).collect();
        let mut deduped = ids.clone();
        deduped.dedup();
        assert_eq!(ids, deduped);
        assert!(heavy_waste_option("soil").is_some());
    }
}

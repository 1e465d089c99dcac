//! Symptom catalog — the fixed checklist presented on the diagnosis screen.
//!
//! Static data, defined once, never mutated. Catalog order is display
//! order; it has no bearing on rule evaluation, which only sees the
//! labels the user actually selected, in selection order.

/// The selectable symptom labels, in display order.
pub const SYMPTOM_CATALOG: &[&str] = &[
    "Fever",
    "Cough",
    "Headache",
    "Nausea",
    "Chest Pain",
    "Fatigue",
    "Sore Throat",
    "Shortness of Breath",
    "Pale Skin",
    "Vomiting",
    "Diarrhea",
    "Runny Nose",
    "Sneezing",
    "Itchy Eyes",
];

/// Owned copy of the catalog for serialisation to the frontend.
pub fn symptom_catalog() -> Vec<String> {
    SYMPTOM_CATALOG.iter().map(|s| s.to_string()).collect()
}

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::models::{InputSet, ProductParameters};

/// Field name to human-readable message, sorted by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[cfg(test)]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    #[cfg(test)]
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<_> = self.0.iter().map(|(k, v)| format!("{k}: {v}")).collect();
        f.write_str(&parts.join("; "))
    }
}

/// Checks every image slot and the required text fields. Pure.
pub fn validate(inputs: &InputSet, params: &ProductParameters) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    for slot in inputs.missing_slots() {
        errors.add(slot.as_str(), "Image is required.");
    }

    let required = [
        ("productName", &params.product_name, "Product name is required."),
        ("leatherPatternName", &params.leather_pattern_name, "Leather pattern is required."),
        ("logoName", &params.logo_name, "Logo name is required."),
    ];
    for (field, value, message) in required {
        if value.trim().is_empty() {
            errors.add(field, message);
        }
    }

    let dimensions = [
        ("productHeight", &params.product_height),
        ("productWidth", &params.product_width),
        ("productDepth", &params.product_depth),
        ("caseThickness", &params.case_thickness),
    ];
    for (field, value) in dimensions {
        let value = value.trim();
        if value.is_empty() {
            errors.add(field, "Dimension is required.");
        } else if value.parse::<f64>().map_or(true, |n| !n.is_finite()) {
            errors.add(field, "Please enter a valid number.");
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

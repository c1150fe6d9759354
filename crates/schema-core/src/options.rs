//! Wizard Options
//!
//! Geometry, default colors and button labels. Deserializes from camelCase
//! JSON or a JS options object; every field is optional.

use serde::{Deserialize, Serialize};

use crate::error::{WizardError, WizardResult};

/// Static configuration of a wizard instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WizardOptions {
    pub field_width: f64,
    pub field_height: f64,
    pub item_width: f64,
    pub item_height: f64,
    /// Snap step for dragged items; values of 1 or less disable snapping
    pub item_grid_step: f64,
    pub item_default_color: String,
    pub info_default_color: String,
    pub add_text_label: String,
    pub add_admin_label: String,
}

impl Default for WizardOptions {
    fn default() -> Self {
        Self {
            field_width: 500.0,
            field_height: 500.0,
            item_width: 32.0,
            item_height: 32.0,
            item_grid_step: 8.0,
            item_default_color: "#ffffff".to_string(),
            info_default_color: "#000000".to_string(),
            add_text_label: "Add text".to_string(),
            add_admin_label: "Add admin".to_string(),
        }
    }
}

impl WizardOptions {
    pub fn from_json(json: &str) -> WizardResult<Self> {
        let options: Self =
            serde_json::from_str(json).map_err(|e| WizardError::InvalidOptions(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Reject geometry the field cannot be laid out with
    pub fn validate(&self) -> WizardResult<()> {
        let sizes = [
            ("fieldWidth", self.field_width),
            ("fieldHeight", self.field_height),
            ("itemWidth", self.item_width),
            ("itemHeight", self.item_height),
        ];
        for (name, value) in sizes {
            if !value.is_finite() || value <= 0.0 {
                return Err(WizardError::InvalidOptions(format!(
                    "{} should be a positive number, got {}",
                    name, value
                )));
            }
        }
        if !self.item_grid_step.is_finite() || self.item_grid_step < 0.0 {
            return Err(WizardError::InvalidOptions(format!(
                "itemGridStep should be zero or a positive number, got {}",
                self.item_grid_step
            )));
        }
        if self.item_width > self.field_width || self.item_height > self.field_height {
            return Err(WizardError::InvalidOptions(
                "items should fit inside the field".to_string(),
            ));
        }
        Ok(())
    }

    /// Distance moved by one arrow key press
    pub fn nudge_step(&self) -> f64 {
        if self.item_grid_step > 0.0 {
            self.item_grid_step
        } else {
            1.0
        }
    }

    /// CSS custom properties set on the widget root
    pub fn css_variables(&self) -> [(&'static str, String); 4] {
        [
            ("--field-width", format!("{}px", self.field_width)),
            ("--field-height", format!("{}px", self.field_height)),
            ("--item-width", format!("{}px", self.item_width)),
            ("--item-height", format!("{}px", self.item_height)),
        ]
    }
}

//! Screen Configuration
//!
//! User-facing copy and bin styling. The shipped copy lives in
//! `data/screen.json`; any field it omits falls back to the English default.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::models::Bin;

const BUNDLED_SCREEN: &str = include_str!("../data/screen.json");

/// Title and styling of one drop target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinConfig {
    pub title: String,
    /// Background class of the zone
    pub panel_class: String,
    /// Text color class of the zone heading
    pub heading_class: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    pub lang: String,
    /// Text direction of the page: "ltr" or "rtl"
    pub dir: String,
    pub heading: String,
    pub instructions: String,
    pub submit_label: String,
    pub done_heading: String,
    pub recommended: BinConfig,
    pub avoid: BinConfig,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            lang: "en".to_string(),
            dir: "ltr".to_string(),
            heading: "Step 1 of 2: Match the clinical scenarios".to_string(),
            instructions: "Drag each clinical statement into the matching category (recommended / avoid).".to_string(),
            submit_label: "Continue to step 2".to_string(),
            done_heading: "Answers saved".to_string(),
            recommended: BinConfig {
                title: "Consider an SGLT2 inhibitor".to_string(),
                panel_class: "bg-teal-50".to_string(),
                heading_class: "text-teal-800".to_string(),
            },
            avoid: BinConfig {
                title: "Avoid an SGLT2 inhibitor".to_string(),
                panel_class: "bg-pink-50".to_string(),
                heading_class: "text-pink-800".to_string(),
            },
        }
    }
}

impl ScreenConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn bundled() -> Result<Self, ConfigError> {
        Self::from_json(BUNDLED_SCREEN)
    }

    pub fn bin(&self, bin: Bin) -> &BinConfig {
        match bin {
            Bin::Recommended => &self.recommended,
            Bin::Avoid => &self.avoid,
        }
    }

    pub fn is_rtl(&self) -> bool {
        self.dir.eq_ignore_ascii_case("rtl")
    }

    /// Layout of the two bins; right-to-left pages reverse the row
    pub fn bins_row_class(&self) -> &'static str {
        if self.is_rtl() {
            "flex flex-col lg:flex-row-reverse gap-6"
        } else {
            "flex flex-col lg:flex-row gap-6"
        }
    }
}

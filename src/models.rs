//! Frontend Models
//!
//! Statements, bins and the submitted answer map.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One clinical statement to be categorized
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub text: String,
}

/// Target category of a drop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bin {
    Recommended,
    Avoid,
}

impl Bin {
    pub const ALL: [Bin; 2] = [Bin::Recommended, Bin::Avoid];

    /// Label used in the answer map and the `data-target` attribute
    pub fn as_str(self) -> &'static str {
        match self {
            Bin::Recommended => "recommended",
            Bin::Avoid => "avoid",
        }
    }
}

impl fmt::Display for Bin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Item id -> chosen bin, handed to the parent flow on submit
pub type AnswerMap = BTreeMap<String, Bin>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bin_labels() {
        assert_eq!(Bin::Recommended.as_str(), "recommended");
        assert_eq!(Bin::Avoid.to_string(), "avoid");
    }

    #[test]
    fn test_answer_map_json() {
        let mut answers = AnswerMap::new();
        answers.insert("b".to_string(), Bin::Avoid);
        answers.insert("a".to_string(), Bin::Recommended);
        let json = serde_json::to_string(&answers).unwrap();
        assert_eq!(json, r#"{"a":"recommended","b":"avoid"}"#);
    }
}

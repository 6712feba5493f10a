//! Core domain types for aortascreen.

use serde::{Deserialize, Serialize};

/// Classification result for a single title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// At least one lexicon phrase matched the title.
    #[serde(rename = "Aortic Disease")]
    AorticDisease,
    /// No lexicon phrase matched, or the cell held no text.
    Other,
}

impl Category {
    /// The label written to the output column and shown in the summary.
    pub fn label(self) -> &'static str {
        match self {
            Category::AorticDisease => "Aortic Disease",
            Category::Other => "Other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_output_column_values() {
        assert_eq!(Category::AorticDisease.label(), "Aortic Disease");
        assert_eq!(Category::Other.label(), "Other");
        assert_eq!(Category::AorticDisease.to_string(), "Aortic Disease");
    }

    #[test]
    fn category_serializes_to_label() {
        let json = serde_json::to_string(&Category::AorticDisease).expect("serialize");
        assert_eq!(json, "\"Aortic Disease\"");
    }
}

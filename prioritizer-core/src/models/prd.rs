use serde::{Deserialize, Serialize};

/// One target metric in the Key Metrics section of a PRD.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyMetric {
    pub name: String,
    pub target: String,
}

/// A templated mini product-requirements document for a single feature.
///
/// Generated on demand by [`crate::engine::generate_prd`] and never stored
/// alongside the feature it describes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrdDocument {
    /// The feature name the document was generated from.
    pub feature_name: String,
    pub title: String,
    pub problem: String,
    pub solution: String,
    pub key_metrics: [KeyMetric; 3],
}

/// Visibility of the PRD panel.
///
/// `Hidden` → `Shown` happens by generating a document for a feature;
/// `Shown` → `Hidden` is an explicit dismiss and has no effect on any feature.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "document", rename_all = "snake_case")]
pub enum PrdPanel {
    #[default]
    Hidden,
    Shown(PrdDocument),
}

impl PrdPanel {
    pub fn is_shown(&self) -> bool {
        matches!(self, Self::Shown(_))
    }

    pub fn document(&self) -> Option<&PrdDocument> {
        match self {
            Self::Hidden => None,
            Self::Shown(doc) => Some(doc),
        }
    }

    pub fn dismiss(&mut self) {
        *self = Self::Hidden;
    }
}

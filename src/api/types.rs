//! Request and response bodies for the HTTP API.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::engine::{impact_label, rank_and_score};
use crate::models::{Feature, FeatureId, ImpactLabel};

/// Body of `PATCH /features/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateFeatureRequest {
    /// One of `name`, `reach`, `impact`, `confidence`, `effort`.
    pub field: String,
    pub value: Value,
}

/// One card on the board: the feature plus everything derived from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardEntry {
    #[serde(flatten)]
    pub feature: Feature,
    pub score: f64,
    pub impact_label: ImpactLabel,
    pub is_top_priority: bool,
}

/// The whole ranked board, in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub features: Vec<BoardEntry>,
    pub top_id: Option<FeatureId>,
}

impl Board {
    /// Rank a store snapshot from scratch.
    pub fn from_features(features: &[Arc<Feature>]) -> Self {
        let ranking = rank_and_score(features);
        let top_id = ranking.top_id;

        let features = ranking
            .scored
            .into_iter()
            .map(|scored| BoardEntry {
                impact_label: impact_label(scored.feature.impact),
                is_top_priority: top_id == Some(scored.feature.id),
                feature: scored.feature,
                score: scored.score,
            })
            .collect();

        Self { features, top_id }
    }
}

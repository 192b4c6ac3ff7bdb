use serde::{Deserialize, Serialize};

use super::score;
use crate::models::{Feature, FeatureId};

/// A feature annotated with its freshly computed score.
///
/// The feature fields are flattened into the JSON form, with `score` added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredFeature {
    #[serde(flatten)]
    pub feature: Feature,
    pub score: f64,
}

impl AsRef<Feature> for ScoredFeature {
    fn as_ref(&self) -> &Feature {
        &self.feature
    }
}

/// Result of [`rank_and_score`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    /// Input order, every record re-scored.
    pub scored: Vec<ScoredFeature>,
    /// Id of the highest-scoring feature; `None` for an empty input.
    pub top_id: Option<FeatureId>,
}

impl Ranking {
    pub fn top(&self) -> Option<&ScoredFeature> {
        let id = self.top_id?;
        self.scored.iter().find(|s| s.feature.id == id)
    }

    pub fn is_top(&self, id: FeatureId) -> bool {
        self.top_id == Some(id)
    }
}

/// Score every feature and pick the top one.
///
/// Accepts plain features, shared `Arc<Feature>`s from a store snapshot, or
/// previously scored features; any earlier score is discarded and recomputed.
/// Ties go to the earliest feature in input order.
pub fn rank_and_score<F: AsRef<Feature>>(features: &[F]) -> Ranking {
    let scored: Vec<ScoredFeature> = features
        .iter()
        .map(|f| {
            let feature: &Feature = f.as_ref();
            ScoredFeature {
                feature: feature.clone(),
                score: score(feature),
            }
        })
        .collect();

    let top_id = scored
        .iter()
        .fold(None::<&ScoredFeature>, |best, current| match best {
            // Strictly greater only, so an equal score never displaces the earlier one.
            Some(best) if current.score > best.score => Some(current),
            Some(best) => Some(best),
            None => Some(current),
        })
        .map(|best| best.feature.id);

    Ranking { scored, top_id }
}

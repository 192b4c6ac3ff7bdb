use crate::models::{Feature, ImpactLabel};

/// RICE score: `reach * impact * (confidence / 100) / effort`.
///
/// Full precision; rounding for display is up to the caller. An effort of
/// exactly 0 scores 0 instead of infinity.
pub fn score(feature: &Feature) -> f64 {
    if feature.effort == 0.0 {
        return 0.0;
    }
    let confidence = f64::from(feature.confidence) / 100.0;
    (f64::from(feature.reach) * feature.impact * confidence) / feature.effort
}

/// Label for an impact value. Thresholds are inclusive lower bounds checked
/// from the top, so exactly 3 is `Massive` and exactly 0.5 is `Low`.
pub fn impact_label(impact: f64) -> ImpactLabel {
    if impact >= 3.0 {
        ImpactLabel::Massive
    } else if impact >= 2.0 {
        ImpactLabel::High
    } else if impact >= 1.0 {
        ImpactLabel::Medium
    } else if impact >= 0.5 {
        ImpactLabel::Low
    } else {
        ImpactLabel::Minimal
    }
}

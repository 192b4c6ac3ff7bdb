use crate::models::Feature;

/// The three example ideas a fresh board starts with.
pub(super) fn seed_features() -> Vec<Feature> {
    vec![
        Feature::new("AI-Powered Code Suggestions", 5000, 2.0, 80, 3.0),
        Feature::new("Real-time Collaboration", 8000, 2.5, 90, 4.0),
        Feature::new("Gamified Learning Modules", 3000, 1.5, 70, 2.0),
    ]
}

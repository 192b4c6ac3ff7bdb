//! Mini-PRD templating.

use crate::models::{Feature, KeyMetric, PrdDocument, PrdPanel};

const KEY_METRICS: [(&str, &str); 3] = [
    (
        "Adoption Rate",
        "Target 20% of active users within the first month.",
    ),
    (
        "Engagement",
        "At least 50% of users who adopt the feature use it weekly.",
    ),
    (
        "User Satisfaction",
        "Achieve a CSAT score of 4.5/5 or higher for the feature.",
    ),
];

/// Generate the mini-PRD for `feature`, or `None` when no feature is selected.
pub fn generate_prd(feature: Option<&Feature>) -> Option<PrdDocument> {
    feature.map(render_prd)
}

/// The mini-PRD for a selected feature.
///
/// Only the feature name is used; the metrics are fixed targets and do not
/// depend on the RICE inputs.
pub fn render_prd(feature: &Feature) -> PrdDocument {
    let name = &feature.name;

    PrdDocument {
        feature_name: name.clone(),
        title: format!("Mini-PRD: {name}"),
        problem: format!(
            "Users need a way to achieve [User Goal] because they are currently struggling \
             with [Problem]. This causes [Negative Impact]. Our feature, \"{name},\" aims to \
             solve this by providing a clear and efficient solution."
        ),
        solution: format!(
            "\"{name}\" will be a [Feature Description] that allows users to [Action/Benefit]. \
             It will integrate seamlessly into the existing workflow, and provide [Value \
             Proposition]. We will build it using [Technology/Approach], ensuring a robust \
             and scalable solution."
        ),
        key_metrics: KEY_METRICS.map(|(metric, target)| KeyMetric {
            name: metric.to_string(),
            target: target.to_string(),
        }),
    }
}

impl PrdPanel {
    /// Show the PRD for `feature`. With no feature the panel ends up hidden.
    pub fn show(&mut self, feature: Option<&Feature>) -> Option<&PrdDocument> {
        *self = match generate_prd(feature) {
            Some(doc) => Self::Shown(doc),
            None => Self::Hidden,
        };
        self.document()
    }
}

impl PrdDocument {
    /// Render as Markdown with one heading per section.
    ///
    /// Example output:
    /// ```text
    /// # Mini-PRD: Dark Mode
    ///
    /// ## Problem
    ///
    /// Users need a way to ...
    ///
    /// ## Solution
    ///
    /// "Dark Mode" will be ...
    ///
    /// ## Key Metrics
    ///
    /// - Adoption Rate: Target 20% of active users within the first month.
    /// - ...
    /// ```
    pub fn to_markdown(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!("# {}\n\n", self.title));
        output.push_str(&format!("## Problem\n\n{}\n\n", self.problem));
        output.push_str(&format!("## Solution\n\n{}\n\n", self.solution));
        output.push_str("## Key Metrics\n\n");
        for metric in &self.key_metrics {
            output.push_str(&format!("- {}: {}\n", metric.name, metric.target));
        }
        output
    }
}

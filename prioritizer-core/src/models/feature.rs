use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::{FeatureEdit, InvalidFieldError};

/// Stable identifier of a feature, assigned at creation and never changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureId(Uuid);

impl FeatureId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FeatureId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A candidate product idea, prioritized by its RICE inputs.
///
/// There is deliberately no `score` field: the score is a pure function of
/// `reach`, `impact`, `confidence` and `effort`, computed by
/// [`crate::engine::score`] whenever it is needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub id: FeatureId,
    /// Free-text label. May be empty.
    pub name: String,
    /// Users affected per time period.
    pub reach: u32,
    /// Qualitative magnitude, see [`ImpactLabel`].
    pub impact: f64,
    /// Percentage, 50..=100 in normal operation.
    pub confidence: u32,
    /// Person-months. Never 0 in normal operation, but scoring tolerates it.
    pub effort: f64,
}

impl Feature {
    /// Create a feature with a freshly generated id.
    pub fn new(
        name: impl Into<String>,
        reach: u32,
        impact: f64,
        confidence: u32,
        effort: f64,
    ) -> Self {
        Self {
            id: FeatureId::new(),
            name: name.into(),
            reach,
            impact,
            confidence,
            effort,
        }
    }
}

impl AsRef<Feature> for Feature {
    fn as_ref(&self) -> &Feature {
        self
    }
}

/// Input for adding a feature to a store. Omitted numeric fields take the
/// defaults below, all of which sit inside the domain bounds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewFeature {
    #[serde(default)]
    pub name: String,
    pub reach: Option<u32>,
    pub impact: Option<f64>,
    pub confidence: Option<u32>,
    pub effort: Option<f64>,
}

impl NewFeature {
    pub const DEFAULT_REACH: u32 = 1000;
    pub const DEFAULT_IMPACT: f64 = 1.0;
    pub const DEFAULT_CONFIDENCE: u32 = 80;
    pub const DEFAULT_EFFORT: f64 = 1.0;

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn into_feature(self) -> Feature {
        Feature::new(
            self.name,
            self.reach.unwrap_or(Self::DEFAULT_REACH),
            self.impact.unwrap_or(Self::DEFAULT_IMPACT),
            self.confidence.unwrap_or(Self::DEFAULT_CONFIDENCE),
            self.effort.unwrap_or(Self::DEFAULT_EFFORT),
        )
    }

    /// Build the input from a JSON object of field names to values.
    ///
    /// Each entry goes through the same checks as a single-field edit, so
    /// unknown fields and mistyped values fail the whole input.
    pub fn from_fields(input: &Value) -> Result<Self, InvalidFieldError> {
        let fields = input.as_object().ok_or(InvalidFieldError::NotAnObject)?;
        let mut feature = Self::default();
        for (field, value) in fields {
            feature.set(FeatureEdit::from_field(field, value)?);
        }
        Ok(feature)
    }

    /// Numeric values clamped and snapped into their domain bounds, as
    /// [`FeatureEdit::clamped`] does for edits.
    pub fn clamped(self) -> Self {
        let edits = [
            self.reach.map(FeatureEdit::SetReach),
            self.impact.map(FeatureEdit::SetImpact),
            self.confidence.map(FeatureEdit::SetConfidence),
            self.effort.map(FeatureEdit::SetEffort),
        ];
        let mut feature = Self::named(self.name);
        for edit in edits.into_iter().flatten() {
            feature.set(edit.clamped());
        }
        feature
    }

    fn set(&mut self, edit: FeatureEdit) {
        match edit {
            FeatureEdit::SetName(name) => self.name = name,
            FeatureEdit::SetReach(v) => self.reach = Some(v),
            FeatureEdit::SetImpact(v) => self.impact = Some(v),
            FeatureEdit::SetConfidence(v) => self.confidence = Some(v),
            FeatureEdit::SetEffort(v) => self.effort = Some(v),
        }
    }
}

/// Discrete label for an impact value.
///
/// - `Massive`: 3 and above
/// - `High`: 2 up to 3
/// - `Medium`: 1 up to 2
/// - `Low`: 0.5 up to 1
/// - `Minimal`: below 0.5
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImpactLabel {
    Massive,
    High,
    Medium,
    Low,
    Minimal,
}

impl ImpactLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Massive => "Massive",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::Minimal => "Minimal",
        }
    }
}

impl fmt::Display for ImpactLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::{Feature, FieldBounds};

/// The editable fields of a [`Feature`]. `id` is not one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureField {
    Name,
    Reach,
    Impact,
    Confidence,
    Effort,
}

impl FeatureField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Reach => "reach",
            Self::Impact => "impact",
            Self::Confidence => "confidence",
            Self::Effort => "effort",
        }
    }

    /// Domain bounds of a numeric field, `None` for `name`.
    pub fn bounds(&self) -> Option<FieldBounds> {
        match self {
            Self::Name => None,
            Self::Reach => Some(FieldBounds::REACH),
            Self::Impact => Some(FieldBounds::IMPACT),
            Self::Confidence => Some(FieldBounds::CONFIDENCE),
            Self::Effort => Some(FieldBounds::EFFORT),
        }
    }
}

impl FromStr for FeatureField {
    type Err = InvalidFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "reach" => Ok(Self::Reach),
            "impact" => Ok(Self::Impact),
            "confidence" => Ok(Self::Confidence),
            "effort" => Ok(Self::Effort),
            other => Err(InvalidFieldError::UnknownField(other.to_string())),
        }
    }
}

impl fmt::Display for FeatureField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field name or value that does not fit the shape of a [`Feature`].
///
/// This signals a bug in the calling layer, not bad user data, so it is
/// raised before any record is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidFieldError {
    #[error(
        "unknown feature field '{0}' (expected one of name, reach, impact, confidence, effort)"
    )]
    UnknownField(String),
    #[error("field '{field}' expects {expected}")]
    WrongType {
        field: FeatureField,
        expected: &'static str,
    },
    #[error("feature input must be an object of field names to values")]
    NotAnObject,
}

/// A change to exactly one field of one feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value")]
pub enum FeatureEdit {
    #[serde(rename = "name")]
    SetName(String),
    #[serde(rename = "reach")]
    SetReach(u32),
    #[serde(rename = "impact")]
    SetImpact(f64),
    #[serde(rename = "confidence")]
    SetConfidence(u32),
    #[serde(rename = "effort")]
    SetEffort(f64),
}

impl FeatureEdit {
    /// Build an edit from a field name and an untyped value.
    ///
    /// `name` takes a string; the other fields take a number, and `reach` and
    /// `confidence` must be non-negative whole numbers. Nothing is coerced.
    pub fn from_field(field: &str, value: &Value) -> Result<Self, InvalidFieldError> {
        let field: FeatureField = field.parse()?;
        match field {
            FeatureField::Name => value
                .as_str()
                .map(|s| Self::SetName(s.to_string()))
                .ok_or(InvalidFieldError::WrongType {
                    field,
                    expected: "a string",
                }),
            FeatureField::Reach => whole_number(field, value).map(Self::SetReach),
            FeatureField::Confidence => whole_number(field, value).map(Self::SetConfidence),
            FeatureField::Impact => number(field, value).map(Self::SetImpact),
            FeatureField::Effort => number(field, value).map(Self::SetEffort),
        }
    }

    pub fn field(&self) -> FeatureField {
        match self {
            Self::SetName(_) => FeatureField::Name,
            Self::SetReach(_) => FeatureField::Reach,
            Self::SetImpact(_) => FeatureField::Impact,
            Self::SetConfidence(_) => FeatureField::Confidence,
            Self::SetEffort(_) => FeatureField::Effort,
        }
    }

    /// The same edit with any numeric value clamped and snapped into its
    /// domain bounds. Name edits pass through unchanged.
    pub fn clamped(self) -> Self {
        let Some(bounds) = self.field().bounds() else {
            return self;
        };
        match self {
            Self::SetName(name) => Self::SetName(name),
            Self::SetReach(v) => Self::SetReach(bounds.clamp(f64::from(v)) as u32),
            Self::SetImpact(v) => Self::SetImpact(bounds.clamp(v)),
            Self::SetConfidence(v) => Self::SetConfidence(bounds.clamp(f64::from(v)) as u32),
            Self::SetEffort(v) => Self::SetEffort(bounds.clamp(v)),
        }
    }

    /// Write this edit into `feature`. Touches exactly one field and never `id`.
    pub fn apply(self, feature: &mut Feature) {
        match self {
            Self::SetName(name) => feature.name = name,
            Self::SetReach(v) => feature.reach = v,
            Self::SetImpact(v) => feature.impact = v,
            Self::SetConfidence(v) => feature.confidence = v,
            Self::SetEffort(v) => feature.effort = v,
        }
    }
}

fn number(field: FeatureField, value: &Value) -> Result<f64, InvalidFieldError> {
    value.as_f64().ok_or(InvalidFieldError::WrongType {
        field,
        expected: "a number",
    })
}

fn whole_number(field: FeatureField, value: &Value) -> Result<u32, InvalidFieldError> {
    let err = InvalidFieldError::WrongType {
        field,
        expected: "a non-negative whole number",
    };
    if let Some(n) = value.as_u64() {
        return u32::try_from(n).map_err(|_| err);
    }
    match value.as_f64() {
        Some(n) if n >= 0.0 && n.fract() == 0.0 && n <= f64::from(u32::MAX) => Ok(n as u32),
        Some(_) => Err(err),
        None => Err(InvalidFieldError::WrongType {
            field,
            expected: "a number",
        }),
    }
}

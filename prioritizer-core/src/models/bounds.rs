/// Inclusive domain range and step of a numeric feature field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldBounds {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl FieldBounds {
    pub const REACH: Self = Self {
        min: 100.0,
        max: 10_000.0,
        step: 100.0,
    };
    pub const IMPACT: Self = Self {
        min: 0.25,
        max: 3.0,
        step: 0.25,
    };
    pub const CONFIDENCE: Self = Self {
        min: 50.0,
        max: 100.0,
        step: 1.0,
    };
    pub const EFFORT: Self = Self {
        min: 1.0,
        max: 5.0,
        step: 0.5,
    };

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp into range, then snap to the nearest step counted from `min`.
    ///
    /// NaN maps to `min`.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        let bounded = value.clamp(self.min, self.max);
        let steps = ((bounded - self.min) / self.step).round();
        (self.min + steps * self.step).clamp(self.min, self.max)
    }
}

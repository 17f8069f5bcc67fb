use serde::Serialize;

/// Categorical label derived from a BMI value.
///
/// The 18.5–30 band is deliberately one label: records between the
/// conventional normal and overweight ranges both report `Normal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    Underweight,
    Normal,
    Obese,
}

impl Verdict {
    /// Classify a BMI value.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            Verdict::Underweight
        } else if bmi < 30.0 {
            Verdict::Normal
        } else {
            Verdict::Obese
        }
    }
}

/// Body-mass index: weight over height squared, rounded to 2 decimal
/// places. Non-positive heights (possible only in hand-edited data
/// files) yield 0 rather than dividing by zero.
pub fn bmi(height: f64, weight: f64) -> f64 {
    if height <= 0.0 {
        return 0.0;
    }
    let raw = weight / (height * height);
    (raw * 100.0).round() / 100.0
}

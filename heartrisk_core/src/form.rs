//! The fixed input-form schema: 13 controls, one per feature.
//!
//! Each field is either a bounded slider or a select with a closed option
//! list. Select options carry their integer encoding explicitly; for every
//! field except `sex` the code is the zero-based position of the label, and
//! for `sex` the training data used Male→1, Female→0 despite Male being
//! listed first. The table below is the authoritative encoding contract.

use crate::{Error, FeatureVector, Result, FEATURE_COUNT};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// A select option: display label plus the encoding the model expects
#[derive(Clone, Copy, Debug)]
pub struct SelectOption {
    pub label: &'static str,
    pub code: f64,
}

const fn opt(label: &'static str, code: f64) -> SelectOption {
    SelectOption { label, code }
}

/// Control kind and domain for one form field
#[derive(Clone, Copy, Debug)]
pub enum FieldControl {
    /// Numeric range slider, inclusive bounds
    Slider { min: f64, max: f64, step: f64 },
    /// Closed choice list
    Select { options: &'static [SelectOption] },
}

/// Schema entry for a single form field
#[derive(Clone, Copy, Debug)]
pub struct FieldSpec {
    /// Feature column name (matches `FEATURE_NAMES`)
    pub key: &'static str,
    /// Human-readable control label
    pub label: &'static str,
    pub control: FieldControl,
    /// Initial control value (already encoded for selects)
    pub default: f64,
}

/// The 13 form fields in training column order
pub const FORM_FIELDS: [FieldSpec; FEATURE_COUNT] = [
    FieldSpec {
        key: "age",
        label: "Age",
        control: FieldControl::Slider { min: 18.0, max: 100.0, step: 1.0 },
        default: 50.0,
    },
    FieldSpec {
        key: "sex",
        label: "Sex",
        control: FieldControl::Select {
            options: &[opt("Male", 1.0), opt("Female", 0.0)],
        },
        default: 1.0,
    },
    FieldSpec {
        key: "cp",
        label: "Chest Pain Type",
        control: FieldControl::Select {
            options: &[
                opt("Typical Angina", 0.0),
                opt("Atypical Angina", 1.0),
                opt("Non-anginal Pain", 2.0),
                opt("Asymptomatic", 3.0),
            ],
        },
        default: 0.0,
    },
    FieldSpec {
        key: "trestbps",
        label: "Resting Blood Pressure",
        control: FieldControl::Slider { min: 90.0, max: 200.0, step: 1.0 },
        default: 120.0,
    },
    FieldSpec {
        key: "chol",
        label: "Cholesterol",
        control: FieldControl::Slider { min: 100.0, max: 600.0, step: 1.0 },
        default: 250.0,
    },
    FieldSpec {
        key: "fbs",
        label: "Fasting Blood Sugar > 120 mg/dl",
        control: FieldControl::Select {
            options: &[opt("False", 0.0), opt("True", 1.0)],
        },
        default: 0.0,
    },
    FieldSpec {
        key: "restecg",
        label: "Resting Electrocardiographic Results",
        control: FieldControl::Select {
            options: &[
                opt("Normal", 0.0),
                opt("ST-T Abnormality", 1.0),
                opt("Left Ventricular Hypertrophy", 2.0),
            ],
        },
        default: 0.0,
    },
    FieldSpec {
        key: "thalach",
        label: "Maximum Heart Rate Achieved",
        control: FieldControl::Slider { min: 70.0, max: 220.0, step: 1.0 },
        default: 150.0,
    },
    FieldSpec {
        key: "exang",
        label: "Exercise Induced Angina",
        control: FieldControl::Select {
            options: &[opt("No", 0.0), opt("Yes", 1.0)],
        },
        default: 0.0,
    },
    FieldSpec {
        key: "oldpeak",
        label: "ST Depression Induced by Exercise Relative to Rest",
        control: FieldControl::Slider { min: 0.0, max: 6.2, step: 0.1 },
        default: 1.0,
    },
    FieldSpec {
        key: "slope",
        label: "Slope of the Peak Exercise ST Segment",
        control: FieldControl::Select {
            options: &[
                opt("Upsloping", 0.0),
                opt("Flat", 1.0),
                opt("Downsloping", 2.0),
            ],
        },
        default: 0.0,
    },
    FieldSpec {
        key: "ca",
        label: "Number of Major Vessels Colored by Fluoroscopy",
        control: FieldControl::Slider { min: 0.0, max: 4.0, step: 1.0 },
        default: 1.0,
    },
    FieldSpec {
        key: "thal",
        label: "Thalassemia",
        control: FieldControl::Select {
            options: &[
                opt("Normal", 0.0),
                opt("Fixed Defect", 1.0),
                opt("Reversible Defect", 2.0),
            ],
        },
        default: 0.0,
    },
];

/// Cached key → index lookup for the form schema
static FIELD_INDEX: Lazy<HashMap<&'static str, usize>> = Lazy::new(|| {
    FORM_FIELDS
        .iter()
        .enumerate()
        .map(|(i, f)| (f.key, i))
        .collect()
});

/// Find a field's position in the schema by its column name
pub fn field_index(key: &str) -> Option<usize> {
    FIELD_INDEX.get(key).copied()
}

impl FieldSpec {
    /// Parse raw user input into an encoded field value.
    ///
    /// Sliders accept a number and clamp it to the field's range. Selects
    /// accept the option label (case-insensitive) or the encoded integer.
    pub fn parse_input(&self, input: &str) -> Result<f64> {
        let input = input.trim();
        match self.control {
            FieldControl::Slider { min, max, .. } => {
                let value: f64 = input.parse().map_err(|_| {
                    Error::Input(format!("{}: expected a number, got '{}'", self.label, input))
                })?;
                if !value.is_finite() {
                    return Err(Error::Input(format!(
                        "{}: expected a finite number",
                        self.label
                    )));
                }
                Ok(value.clamp(min, max))
            }
            FieldControl::Select { options } => {
                // Label match first, then encoded value
                if let Some(o) = options
                    .iter()
                    .find(|o| o.label.eq_ignore_ascii_case(input))
                {
                    return Ok(o.code);
                }
                if let Ok(code) = input.parse::<f64>() {
                    if let Some(o) = options.iter().find(|o| o.code == code) {
                        return Ok(o.code);
                    }
                }
                let labels: Vec<&str> = options.iter().map(|o| o.label).collect();
                Err(Error::Input(format!(
                    "{}: '{}' is not one of {}",
                    self.label,
                    input,
                    labels.join(", ")
                )))
            }
        }
    }

    /// Human-readable rendering of an encoded value (label for selects)
    pub fn display_value(&self, value: f64) -> String {
        match self.control {
            FieldControl::Slider { step, .. } => {
                if step.fract() == 0.0 {
                    format!("{}", value as i64)
                } else {
                    format!("{:.1}", value)
                }
            }
            FieldControl::Select { options } => options
                .iter()
                .find(|o| o.code == value)
                .map(|o| o.label.to_string())
                .unwrap_or_else(|| format!("{}", value)),
        }
    }

    /// One-line domain description for prompts
    pub fn domain_hint(&self) -> String {
        match self.control {
            FieldControl::Slider { min, max, step } => {
                if step.fract() == 0.0 {
                    format!("{}-{}", min as i64, max as i64)
                } else {
                    format!("{:.1}-{:.1}", min, max)
                }
            }
            FieldControl::Select { options } => {
                let labels: Vec<&str> = options.iter().map(|o| o.label).collect();
                labels.join(" / ")
            }
        }
    }
}

/// Current values of all 13 controls for one session.
///
/// Starts at the schema defaults; values are always kept inside their
/// field's domain.
#[derive(Clone, Debug)]
pub struct FormState {
    values: [f64; FEATURE_COUNT],
}

impl Default for FormState {
    fn default() -> Self {
        let mut values = [0.0; FEATURE_COUNT];
        for (i, field) in FORM_FIELDS.iter().enumerate() {
            values[i] = field.default;
        }
        Self { values }
    }
}

impl FormState {
    pub fn value(&self, index: usize) -> f64 {
        self.values[index]
    }

    /// Set a field from raw user input, validating against its domain
    pub fn set_from_input(&mut self, index: usize, input: &str) -> Result<()> {
        let field = FORM_FIELDS
            .get(index)
            .ok_or_else(|| Error::Input(format!("No form field at position {}", index + 1)))?;
        self.values[index] = field.parse_input(input)?;
        Ok(())
    }

    /// Set a field by its column name
    pub fn set_by_key(&mut self, key: &str, input: &str) -> Result<()> {
        let index = field_index(key)
            .ok_or_else(|| Error::Input(format!("Unknown form field '{}'", key)))?;
        self.set_from_input(index, input)
    }

    /// Assemble the current values into a feature vector in training order
    pub fn assemble(&self) -> FeatureVector {
        FeatureVector::from_array(self.values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select_code(key: &str, label: &str) -> f64 {
        let field = &FORM_FIELDS[field_index(key).unwrap()];
        field.parse_input(label).unwrap()
    }

    #[test]
    fn test_schema_covers_all_features_in_order() {
        assert_eq!(FORM_FIELDS.len(), FEATURE_COUNT);
        for (i, field) in FORM_FIELDS.iter().enumerate() {
            assert_eq!(field.key, crate::FEATURE_NAMES[i]);
        }
    }

    #[test]
    fn test_categorical_encoding_table() {
        assert_eq!(select_code("sex", "Male"), 1.0);
        assert_eq!(select_code("sex", "Female"), 0.0);

        assert_eq!(select_code("cp", "Typical Angina"), 0.0);
        assert_eq!(select_code("cp", "Atypical Angina"), 1.0);
        assert_eq!(select_code("cp", "Non-anginal Pain"), 2.0);
        assert_eq!(select_code("cp", "Asymptomatic"), 3.0);

        assert_eq!(select_code("fbs", "False"), 0.0);
        assert_eq!(select_code("fbs", "True"), 1.0);

        assert_eq!(select_code("restecg", "Normal"), 0.0);
        assert_eq!(select_code("restecg", "ST-T Abnormality"), 1.0);
        assert_eq!(select_code("restecg", "Left Ventricular Hypertrophy"), 2.0);

        assert_eq!(select_code("exang", "No"), 0.0);
        assert_eq!(select_code("exang", "Yes"), 1.0);

        assert_eq!(select_code("slope", "Upsloping"), 0.0);
        assert_eq!(select_code("slope", "Flat"), 1.0);
        assert_eq!(select_code("slope", "Downsloping"), 2.0);

        assert_eq!(select_code("thal", "Normal"), 0.0);
        assert_eq!(select_code("thal", "Fixed Defect"), 1.0);
        assert_eq!(select_code("thal", "Reversible Defect"), 2.0);
    }

    #[test]
    fn test_select_accepts_code_and_mixed_case() {
        let field = &FORM_FIELDS[field_index("thal").unwrap()];
        assert_eq!(field.parse_input("reversible defect").unwrap(), 2.0);
        assert_eq!(field.parse_input("2").unwrap(), 2.0);
        assert!(field.parse_input("5").is_err());
        assert!(field.parse_input("Unknown").is_err());
    }

    #[test]
    fn test_slider_clamps_to_domain() {
        let field = &FORM_FIELDS[field_index("age").unwrap()];
        assert_eq!(field.parse_input("50").unwrap(), 50.0);
        assert_eq!(field.parse_input("150").unwrap(), 100.0);
        assert_eq!(field.parse_input("3").unwrap(), 18.0);
        assert!(field.parse_input("fifty").is_err());
        assert!(field.parse_input("NaN").is_err());
    }

    #[test]
    fn test_fractional_slider() {
        let field = &FORM_FIELDS[field_index("oldpeak").unwrap()];
        assert_eq!(field.parse_input("1.5").unwrap(), 1.5);
        assert_eq!(field.parse_input("9.0").unwrap(), 6.2);
        assert_eq!(field.display_value(1.5), "1.5");
    }

    #[test]
    fn test_defaults_assemble_to_expected_record() {
        // Defaults are the documented scenario: age=50, Male, Typical Angina,
        // 120, 250, False, Normal, 150, No, 1.0, Upsloping, 1, Normal
        let state = FormState::default();
        let record = state.assemble();
        assert_eq!(
            record.as_array(),
            [50.0, 1.0, 0.0, 120.0, 250.0, 0.0, 0.0, 150.0, 0.0, 1.0, 0.0, 1.0, 0.0]
        );
    }

    #[test]
    fn test_set_by_key_updates_assembled_record() {
        let mut state = FormState::default();
        state.set_by_key("age", "63").unwrap();
        state.set_by_key("sex", "Female").unwrap();
        state.set_by_key("cp", "Asymptomatic").unwrap();
        state.set_by_key("thal", "Reversible Defect").unwrap();

        let record = state.assemble();
        assert_eq!(record.age, 63.0);
        assert_eq!(record.sex, 0.0);
        assert_eq!(record.cp, 3.0);
        assert_eq!(record.thal, 2.0);

        assert!(state.set_by_key("nonexistent", "1").is_err());
    }

    #[test]
    fn test_display_values() {
        let sex = &FORM_FIELDS[field_index("sex").unwrap()];
        assert_eq!(sex.display_value(1.0), "Male");
        assert_eq!(sex.display_value(0.0), "Female");

        let age = &FORM_FIELDS[field_index("age").unwrap()];
        assert_eq!(age.display_value(50.0), "50");
    }
}

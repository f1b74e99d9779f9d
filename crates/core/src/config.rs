//! Ward runtime configuration.
//!
//! The ward layout is resolved once at process startup (flags, environment or an interactive
//! prompt) and then handed to [`HospitalSystem::new`](crate::HospitalSystem::new). Nothing in the
//! core reads the environment while operations run.

use crate::constants::MAX_WARD_BEDS;
use crate::{BedLabel, HospitalError, HospitalResult, NonEmptyText};

/// Validated layout of the single ward.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WardConfig {
    name: NonEmptyText,
    first_bed: BedLabel,
    last_bed: BedLabel,
}

impl WardConfig {
    /// Create a new `WardConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`HospitalError::Validation`] unless the name is non-empty,
    /// `0 <= first_bed <= last_bed`, and the ward holds at most [`MAX_WARD_BEDS`] beds.
    pub fn new(
        name: impl AsRef<str>,
        first_bed: BedLabel,
        last_bed: BedLabel,
    ) -> HospitalResult<Self> {
        let raw_name = name.as_ref();
        let name = NonEmptyText::new(raw_name)
            .map_err(|_| invalid_layout(raw_name, first_bed, last_bed))?;

        if first_bed < 0 || last_bed < first_bed {
            return Err(invalid_layout(raw_name, first_bed, last_bed));
        }

        if last_bed - first_bed >= MAX_WARD_BEDS {
            return Err(HospitalError::Validation(format!(
                "a ward may hold at most {MAX_WARD_BEDS} beds, but {first_bed}..={last_bed} holds {}",
                last_bed - first_bed + 1
            )));
        }

        Ok(Self {
            name,
            first_bed,
            last_bed,
        })
    }

    pub fn name(&self) -> &NonEmptyText {
        &self.name
    }

    pub fn first_bed(&self) -> BedLabel {
        self.first_bed
    }

    pub fn last_bed(&self) -> BedLabel {
        self.last_bed
    }

    /// Build a config from optional raw values, typically environment variables.
    ///
    /// Returns `Ok(None)` when any of the three values is missing or blank, so the caller can
    /// fall back to prompting the operator.
    pub fn from_env_values(
        name: Option<String>,
        first_bed: Option<String>,
        last_bed: Option<String>,
    ) -> HospitalResult<Option<Self>> {
        let name = name.filter(|v| !v.trim().is_empty());
        let first_bed = bed_label_from_env_value(first_bed)?;
        let last_bed = bed_label_from_env_value(last_bed)?;

        match (name, first_bed, last_bed) {
            (Some(name), Some(first), Some(last)) => Self::new(name, first, last).map(Some),
            _ => Ok(None),
        }
    }
}

fn invalid_layout(name: &str, first_bed: BedLabel, last_bed: BedLabel) -> HospitalError {
    HospitalError::Validation(format!(
        "The name cannot be null or empty, the label of the first bed must be at least 0, \
         and the label of the last bed must be at least as large as the first label. \
         They are '{name}', {first_bed} and {last_bed}"
    ))
}

/// Parse a bed label from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns `Ok(None)`.
pub fn bed_label_from_env_value(value: Option<String>) -> HospitalResult<Option<BedLabel>> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    value
        .map(|v| {
            v.parse::<BedLabel>().map_err(|_| {
                HospitalError::Validation(format!("bed label '{v}' is not an integer"))
            })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn new_accepts_single_bed_ward() {
        let cfg = WardConfig::new("East", 0, 0).expect("single bed ward should be valid");
        assert_eq!(cfg.name().as_str(), "East");
        assert_eq!((cfg.first_bed(), cfg.last_bed()), (0, 0));
    }

    #[test]
    fn new_rejects_bad_layouts() {
        for (name, first, last) in [("", 1, 3), ("  ", 1, 3), ("East", -1, 3), ("East", 4, 3)] {
            let err = WardConfig::new(name, first, last).expect_err("layout should be rejected");
            assert_eq!(err.kind(), ErrorKind::Validation, "{name:?} {first} {last}");
        }
    }

    #[test]
    fn new_rejects_oversized_ward() {
        WardConfig::new("Big", 1, MAX_WARD_BEDS).expect("exactly MAX_WARD_BEDS beds is allowed");
        let err = WardConfig::new("Bigger", 0, MAX_WARD_BEDS).expect_err("too many beds");
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn from_env_values_requires_all_three() {
        let cfg = WardConfig::from_env_values(Some("East".into()), Some("1".into()), None)
            .expect("missing value is not an error");
        assert!(cfg.is_none());

        let cfg = WardConfig::from_env_values(
            Some("East".into()),
            Some(" 1 ".into()),
            Some("3".into()),
        )
        .expect("complete values should parse")
        .expect("config should be present");
        assert_eq!((cfg.first_bed(), cfg.last_bed()), (1, 3));
    }

    #[test]
    fn bed_label_from_env_value_rejects_non_integers() {
        assert_eq!(bed_label_from_env_value(None), Ok(None));
        assert_eq!(bed_label_from_env_value(Some("  ".into())), Ok(None));
        let err = bed_label_from_env_value(Some("two".into())).expect_err("not an integer");
        assert_eq!(err.kind(), ErrorKind::Validation);
    }
}

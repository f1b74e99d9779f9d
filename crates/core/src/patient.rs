//! Patient records.
//!
//! A patient refers to its doctors by name only. The bed label is owned jointly with the
//! [`Ward`](crate::Ward): only [`HospitalSystem`](crate::HospitalSystem) changes either side, and
//! always both together.

use crate::constants::UNASSIGNED_BED_LABEL;
use crate::{BedLabel, HealthNumber, NonEmptyText};
use std::collections::BTreeSet;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Patient {
    name: NonEmptyText,
    health_number: HealthNumber,
    pub(crate) bed_label: Option<BedLabel>,
    pub(crate) doctors: BTreeSet<NonEmptyText>,
}

impl Patient {
    /// A newly registered patient has no bed and no doctors.
    pub fn new(name: NonEmptyText, health_number: HealthNumber) -> Self {
        Self {
            name,
            health_number,
            bed_label: None,
            doctors: BTreeSet::new(),
        }
    }

    pub fn name(&self) -> &NonEmptyText {
        &self.name
    }

    pub fn health_number(&self) -> HealthNumber {
        self.health_number
    }

    /// The bed this patient occupies, if any.
    pub fn bed_label(&self) -> Option<BedLabel> {
        self.bed_label
    }

    pub fn has_doctor(&self, name: &str) -> bool {
        self.doctors.contains(name)
    }

    /// Names of the doctors caring for this patient, in name order.
    pub fn doctors(&self) -> impl Iterator<Item = &NonEmptyText> {
        self.doctors.iter()
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bed = self.bed_label.unwrap_or(UNASSIGNED_BED_LABEL);
        writeln!(f, "\nName: {}", self.name)?;
        writeln!(f, "Health number: {}", self.health_number)?;
        writeln!(f, "Bed label: {bed}")?;
        let doctors: Vec<&str> = self.doctors.iter().map(NonEmptyText::as_str).collect();
        writeln!(f, "Doctors: [{}]", doctors.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_renders_unassigned_bed_as_sentinel() {
        let patient = Patient::new(NonEmptyText::new("Ann").unwrap(), HealthNumber::new(100));
        let rendered = patient.to_string();
        assert!(rendered.contains("Health number: 100"));
        assert!(rendered.contains("Bed label: -1"));
        assert!(rendered.contains("Doctors: []"));
    }

    #[test]
    fn has_doctor_matches_by_name() {
        let mut patient = Patient::new(NonEmptyText::new("Ann").unwrap(), HealthNumber::new(100));
        patient.doctors.insert(NonEmptyText::new("Lee").unwrap());
        assert!(patient.has_doctor("Lee"));
        assert!(!patient.has_doctor("Kim"));
        assert_eq!(patient.doctors().count(), 1);
    }
}

//! The single ward and its bed occupancy.
//!
//! A ward owns a fixed, contiguous range of bed labels `first..=last`. Each bed is either empty
//! or occupied by exactly one patient, recorded by health number. The range never changes after
//! construction.

use crate::config::WardConfig;
use crate::{BedLabel, HealthNumber, HospitalError, HospitalResult, NonEmptyText};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Clone, Debug)]
pub struct Ward {
    name: NonEmptyText,
    first_bed: BedLabel,
    last_bed: BedLabel,
    occupants: BTreeMap<BedLabel, HealthNumber>,
}

impl Ward {
    /// Create an empty ward.
    ///
    /// # Errors
    ///
    /// Returns [`HospitalError::Validation`] under the same rules as [`WardConfig::new`].
    pub fn new(
        name: impl AsRef<str>,
        first_bed: BedLabel,
        last_bed: BedLabel,
    ) -> HospitalResult<Self> {
        WardConfig::new(name, first_bed, last_bed).map(|cfg| Self::from_config(&cfg))
    }

    pub fn from_config(cfg: &WardConfig) -> Self {
        Self {
            name: cfg.name().clone(),
            first_bed: cfg.first_bed(),
            last_bed: cfg.last_bed(),
            occupants: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &NonEmptyText {
        &self.name
    }

    pub fn min_bed_label(&self) -> BedLabel {
        self.first_bed
    }

    pub fn max_bed_label(&self) -> BedLabel {
        self.last_bed
    }

    /// Total number of beds, occupied or not.
    pub fn capacity(&self) -> usize {
        (self.last_bed - self.first_bed + 1) as usize
    }

    pub fn contains_label(&self, label: BedLabel) -> bool {
        (self.first_bed..=self.last_bed).contains(&label)
    }

    /// Fail with [`HospitalError::InvalidBed`] unless `label` lies within the ward.
    pub fn check_label(&self, label: BedLabel) -> HospitalResult<()> {
        if self.contains_label(label) {
            Ok(())
        } else {
            Err(HospitalError::InvalidBed {
                label,
                first: self.first_bed,
                last: self.last_bed,
            })
        }
    }

    /// Labels of the currently empty beds, in ascending order.
    pub fn available_beds(&self) -> Vec<BedLabel> {
        (self.first_bed..=self.last_bed)
            .filter(|label| !self.occupants.contains_key(label))
            .collect()
    }

    /// Occupied beds and their occupants, in ascending bed order.
    pub fn occupied_beds(&self) -> impl Iterator<Item = (BedLabel, HealthNumber)> + '_ {
        self.occupants.iter().map(|(label, hn)| (*label, *hn))
    }

    /// Record `health_number` as the occupant of bed `label`.
    ///
    /// # Errors
    ///
    /// - [`HospitalError::InvalidBed`] if `label` is outside the ward.
    /// - [`HospitalError::BedOccupied`] if another patient already holds the bed.
    pub fn assign_patient_to_bed(
        &mut self,
        health_number: HealthNumber,
        label: BedLabel,
    ) -> HospitalResult<()> {
        self.check_label(label)?;
        if let Some(occupant) = self.occupants.get(&label) {
            return Err(HospitalError::BedOccupied {
                label,
                occupant: *occupant,
            });
        }
        self.occupants.insert(label, health_number);
        Ok(())
    }

    /// Empty bed `label`, returning whoever occupied it. Freeing an empty bed is a no-op.
    pub fn free_bed(&mut self, label: BedLabel) -> Option<HealthNumber> {
        self.occupants.remove(&label)
    }

    /// The occupant of bed `label`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`HospitalError::InvalidBed`] if `label` is outside the ward.
    pub fn get_patient(&self, label: BedLabel) -> HospitalResult<Option<HealthNumber>> {
        self.check_label(label)?;
        Ok(self.occupants.get(&label).copied())
    }
}

impl fmt::Display for Ward {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\nName: {}", self.name)?;
        writeln!(f, "Beds: {} to {}", self.first_bed, self.last_bed)?;
        for label in self.first_bed..=self.last_bed {
            match self.occupants.get(&label) {
                Some(hn) => writeln!(f, "bed {label}: patient {hn}")?,
                None => writeln!(f, "bed {label}: empty")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn ward(first: BedLabel, last: BedLabel) -> Ward {
        Ward::new("East", first, last).expect("ward layout should be valid")
    }

    #[test]
    fn new_ward_has_every_bed_available() {
        let ward = ward(1, 3);
        assert_eq!(ward.available_beds(), vec![1, 2, 3]);
        assert_eq!(ward.capacity(), 3);
        assert_eq!(ward.occupied_beds().count(), 0);
    }

    #[test]
    fn new_rejects_invalid_layout() {
        let err = Ward::new("East", 5, 2).expect_err("last before first");
        assert_eq!(err.kind(), ErrorKind::Validation);
        let err = Ward::new("", 0, 2).expect_err("empty name");
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn assign_removes_bed_from_available() {
        let mut ward = ward(1, 3);
        ward.assign_patient_to_bed(HealthNumber::new(100), 2)
            .expect("empty bed should accept patient");

        assert_eq!(ward.available_beds(), vec![1, 3]);
        assert_eq!(ward.get_patient(2), Ok(Some(HealthNumber::new(100))));
    }

    #[test]
    fn assign_rejects_out_of_range_and_occupied_beds() {
        let mut ward = ward(1, 3);
        let err = ward
            .assign_patient_to_bed(HealthNumber::new(100), 4)
            .expect_err("bed 4 is outside the ward");
        assert_eq!(
            err,
            HospitalError::InvalidBed {
                label: 4,
                first: 1,
                last: 3
            }
        );

        ward.assign_patient_to_bed(HealthNumber::new(100), 1).unwrap();
        let err = ward
            .assign_patient_to_bed(HealthNumber::new(200), 1)
            .expect_err("bed 1 is taken");
        assert_eq!(err.kind(), ErrorKind::BedOccupied);
        assert_eq!(ward.get_patient(1), Ok(Some(HealthNumber::new(100))));
    }

    #[test]
    fn free_bed_is_a_no_op_on_empty_beds() {
        let mut ward = ward(1, 3);
        assert_eq!(ward.free_bed(2), None);

        ward.assign_patient_to_bed(HealthNumber::new(100), 2).unwrap();
        assert_eq!(ward.free_bed(2), Some(HealthNumber::new(100)));
        assert_eq!(ward.available_beds(), vec![1, 2, 3]);
    }

    #[test]
    fn get_patient_rejects_labels_outside_the_ward() {
        let ward = ward(1, 3);
        assert_eq!(ward.get_patient(3), Ok(None));
        for label in [0, 4, -1] {
            let err = ward.get_patient(label).expect_err("label is outside the ward");
            assert_eq!(err.kind(), ErrorKind::InvalidBed);
        }
    }

    #[test]
    fn display_lists_every_bed() {
        let mut ward = ward(1, 2);
        ward.assign_patient_to_bed(HealthNumber::new(100), 2).unwrap();
        let rendered = ward.to_string();
        assert!(rendered.contains("Name: East"));
        assert!(rendered.contains("bed 1: empty"));
        assert!(rendered.contains("bed 2: patient 100"));
    }
}

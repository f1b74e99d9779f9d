//! Rendering of the whole system state.
//!
//! [`HospitalSystem`] implements `Display` for the operator report, and
//! [`HospitalSystem::snapshot`] returns a serialisable view for machine-readable dumps.

use crate::doctor::Doctor;
use crate::hospital::HospitalSystem;
use crate::patient::Patient;
use crate::{BedLabel, HealthNumber, NonEmptyText};
use std::fmt;

/// Borrowed, serialisable view of the system state.
#[derive(Debug, serde::Serialize)]
pub struct HospitalSnapshot<'a> {
    pub patients: Vec<&'a Patient>,
    pub doctors: Vec<&'a Doctor>,
    pub ward: WardSnapshot<'a>,
}

#[derive(Debug, serde::Serialize)]
pub struct WardSnapshot<'a> {
    pub name: &'a NonEmptyText,
    pub first_bed: BedLabel,
    pub last_bed: BedLabel,
    pub available_beds: Vec<BedLabel>,
    pub occupied_beds: Vec<BedOccupancy>,
}

#[derive(Debug, serde::Serialize)]
pub struct BedOccupancy {
    pub bed: BedLabel,
    pub health_number: HealthNumber,
}

impl HospitalSystem {
    pub fn snapshot(&self) -> HospitalSnapshot<'_> {
        let ward = self.ward();
        HospitalSnapshot {
            patients: self.patients().collect(),
            doctors: self.doctors().collect(),
            ward: WardSnapshot {
                name: ward.name(),
                first_bed: ward.min_bed_label(),
                last_bed: ward.max_bed_label(),
                available_beds: ward.available_beds(),
                occupied_beds: ward
                    .occupied_beds()
                    .map(|(bed, health_number)| BedOccupancy { bed, health_number })
                    .collect(),
            },
        }
    }

    /// The snapshot as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.snapshot())
    }
}

impl fmt::Display for HospitalSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\nThe patients in the system are \n")?;
        for patient in self.patients() {
            write!(f, "{patient}")?;
        }
        write!(f, "\nThe doctors in the system are \n")?;
        for doctor in self.doctors() {
            write!(f, "{doctor}")?;
        }
        write!(f, "\nThe ward is {}", self.ward())
    }
}

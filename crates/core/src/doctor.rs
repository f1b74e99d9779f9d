//! Doctor records.

use crate::{HealthNumber, NonEmptyText};
use std::collections::BTreeSet;
use std::fmt;

/// Classification of a doctor.
///
/// No operation behaves differently per kind; the tag is carried for reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DoctorKind {
    General,
    Surgeon,
}

impl DoctorKind {
    pub fn from_is_surgeon(is_surgeon: bool) -> Self {
        if is_surgeon {
            DoctorKind::Surgeon
        } else {
            DoctorKind::General
        }
    }
}

impl fmt::Display for DoctorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DoctorKind::General => write!(f, "Doctor"),
            DoctorKind::Surgeon => write!(f, "Surgeon"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Doctor {
    name: NonEmptyText,
    kind: DoctorKind,
    pub(crate) patients: BTreeSet<HealthNumber>,
}

impl Doctor {
    pub fn new(name: NonEmptyText, kind: DoctorKind) -> Self {
        Self {
            name,
            kind,
            patients: BTreeSet::new(),
        }
    }

    pub fn name(&self) -> &NonEmptyText {
        &self.name
    }

    pub fn kind(&self) -> DoctorKind {
        self.kind
    }

    pub fn is_surgeon(&self) -> bool {
        self.kind == DoctorKind::Surgeon
    }

    pub fn has_patient(&self, health_number: HealthNumber) -> bool {
        self.patients.contains(&health_number)
    }

    /// Health numbers of this doctor's patients, in ascending order.
    pub fn patients(&self) -> impl Iterator<Item = HealthNumber> + '_ {
        self.patients.iter().copied()
    }
}

impl fmt::Display for Doctor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n{} name: {}", self.kind, self.name)?;
        let patients: Vec<String> = self.patients.iter().map(ToString::to_string).collect();
        writeln!(f, "Patients: [{}]", patients.join(", "))
    }
}

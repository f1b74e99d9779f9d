use crate::{BedLabel, HealthNumber, NonEmptyText, TextError};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum HospitalError {
    #[error("invalid input: {0}")]
    Validation(String),

    #[error("Patient not added as there already is a patient with the health number {0}")]
    DuplicatePatient(HealthNumber),
    #[error("Doctor not added as there already is a doctor with the name {0}")]
    DuplicateDoctor(NonEmptyText),

    #[error("There is no patient with health number {0}")]
    PatientNotFound(HealthNumber),
    #[error("There is no doctor with name {0}")]
    DoctorNotFound(String),

    #[error("Bed label {label} is not valid, as the value must be between {first} and {last}")]
    InvalidBed {
        label: BedLabel,
        first: BedLabel,
        last: BedLabel,
    },
    #[error("Bed {label} is already occupied by the patient with health number {occupant}")]
    BedOccupied {
        label: BedLabel,
        occupant: HealthNumber,
    },
    #[error("Patient {health_number} is already in bed {label} so cannot be assigned a new bed")]
    AlreadyAssigned {
        health_number: HealthNumber,
        label: BedLabel,
    },
    #[error("Patient {0} must already have a bed to be released")]
    NoBedAssigned(HealthNumber),

    #[error("Doctor {doctor} is not associated with the patient {health_number}")]
    NotAssociated {
        health_number: HealthNumber,
        doctor: NonEmptyText,
    },

    #[error(
        "Patient {health_number} is not in the bed stored with the patient. Bed {label} has {}",
        describe_occupant(.found)
    )]
    BedOccupantMismatch {
        health_number: HealthNumber,
        label: BedLabel,
        found: Option<HealthNumber>,
    },
    #[error(
        "Doctor {doctor} and patient {health_number} are incorrectly associated. \
         The doctor has the patient, but the patient does not have the doctor"
    )]
    AssociationAsymmetry {
        health_number: HealthNumber,
        doctor: NonEmptyText,
    },
}

fn describe_occupant(found: &Option<HealthNumber>) -> String {
    match found {
        Some(occupant) => format!("patient {occupant}"),
        None => "no patient".into(),
    }
}

/// The error taxonomy operators and tests reason about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    DuplicateKey,
    NotFound,
    InvalidBed,
    BedOccupied,
    AlreadyAssigned,
    NoBedAssigned,
    Association,
    /// Ward and patient records disagree; a prior bug, never a user mistake.
    Consistency,
}

impl HospitalError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            HospitalError::Validation(_) => ErrorKind::Validation,
            HospitalError::DuplicatePatient(_) | HospitalError::DuplicateDoctor(_) => {
                ErrorKind::DuplicateKey
            }
            HospitalError::PatientNotFound(_) | HospitalError::DoctorNotFound(_) => {
                ErrorKind::NotFound
            }
            HospitalError::InvalidBed { .. } => ErrorKind::InvalidBed,
            HospitalError::BedOccupied { .. } => ErrorKind::BedOccupied,
            HospitalError::AlreadyAssigned { .. } => ErrorKind::AlreadyAssigned,
            HospitalError::NoBedAssigned(_) => ErrorKind::NoBedAssigned,
            HospitalError::NotAssociated { .. } => ErrorKind::Association,
            HospitalError::BedOccupantMismatch { .. }
            | HospitalError::AssociationAsymmetry { .. } => ErrorKind::Consistency,
        }
    }

    /// True when the error reveals corrupted internal state rather than bad operator input.
    pub fn is_internal(&self) -> bool {
        self.kind() == ErrorKind::Consistency
    }
}

impl From<TextError> for HospitalError {
    fn from(err: TextError) -> Self {
        HospitalError::Validation(err.to_string())
    }
}

pub type HospitalResult<T> = std::result::Result<T, HospitalError>;

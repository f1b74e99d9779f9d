//! The hospital controller.
//!
//! [`HospitalSystem`] owns the patient directory, the doctor directory and the ward, and is the
//! only place where records on both sides of a relationship are changed. Every operation checks
//! all of its failure conditions before it mutates anything, so a failed call leaves the system
//! exactly as it was.
//!
//! Two relationships are kept symmetric:
//!
//! - doctor ⇄ patient: a doctor lists a patient's health number iff the patient lists the
//!   doctor's name;
//! - patient ⇄ bed: a patient's bed label is `Some(b)` iff the ward records that patient in
//!   bed `b`.
//!
//! A broken symmetry is reported as a consistency error and never repaired in place.

use crate::config::WardConfig;
use crate::doctor::{Doctor, DoctorKind};
use crate::patient::Patient;
use crate::registry::Registry;
use crate::ward::Ward;
use crate::{BedLabel, HealthNumber, HospitalError, HospitalResult, NonEmptyText};

#[derive(Clone, Debug)]
pub struct HospitalSystem {
    pub(crate) patients: Registry<HealthNumber, Patient>,
    pub(crate) doctors: Registry<NonEmptyText, Doctor>,
    pub(crate) ward: Ward,
}

impl HospitalSystem {
    /// Creates an empty hospital around a ward laid out by `cfg`.
    pub fn new(cfg: &WardConfig) -> Self {
        tracing::info!(
            "ward {} opened with beds {} to {}",
            cfg.name(),
            cfg.first_bed(),
            cfg.last_bed()
        );
        Self {
            patients: Registry::new(),
            doctors: Registry::new(),
            ward: Ward::from_config(cfg),
        }
    }

    /// Registers a new patient with no bed and no doctors.
    ///
    /// # Errors
    ///
    /// - [`HospitalError::Validation`] if `name` is empty or whitespace.
    /// - [`HospitalError::DuplicatePatient`] if `health_number` is already registered; the
    ///   existing record is not modified.
    pub fn add_patient(
        &mut self,
        name: &str,
        health_number: HealthNumber,
    ) -> HospitalResult<&Patient> {
        let name = NonEmptyText::new(name)?;
        let patient: &Patient = self
            .patients
            .insert_if_absent(health_number, Patient::new(name, health_number))
            .map_err(|_| HospitalError::DuplicatePatient(health_number))?;
        tracing::info!("patient {} registered", health_number);
        Ok(patient)
    }

    /// Registers a new doctor, tagged as a surgeon when `is_surgeon` is set.
    ///
    /// # Errors
    ///
    /// - [`HospitalError::Validation`] if `name` is empty or whitespace.
    /// - [`HospitalError::DuplicateDoctor`] if a doctor with this name exists; the existing
    ///   record is not modified.
    pub fn add_doctor(&mut self, name: &str, is_surgeon: bool) -> HospitalResult<&Doctor> {
        let name = NonEmptyText::new(name)?;
        let doctor = Doctor::new(name.clone(), DoctorKind::from_is_surgeon(is_surgeon));
        let doctor: &Doctor = self
            .doctors
            .insert_if_absent(name.clone(), doctor)
            .map_err(|_| HospitalError::DuplicateDoctor(name))?;
        tracing::info!("{} {} registered", doctor.kind(), doctor.name());
        Ok(doctor)
    }

    pub fn patient(&self, health_number: HealthNumber) -> HospitalResult<&Patient> {
        self.patients
            .get(&health_number)
            .ok_or(HospitalError::PatientNotFound(health_number))
    }

    /// Looks up a doctor by name. Surrounding whitespace in `name` is ignored.
    pub fn doctor(&self, name: &str) -> HospitalResult<&Doctor> {
        let name = name.trim();
        self.doctors
            .get(name)
            .ok_or_else(|| HospitalError::DoctorNotFound(name.to_string()))
    }

    pub fn has_doctor(&self, name: &str) -> bool {
        self.doctors.contains(name.trim())
    }

    /// All patients in health number order.
    pub fn patients(&self) -> impl Iterator<Item = &Patient> {
        self.patients.values()
    }

    /// All doctors in name order.
    pub fn doctors(&self) -> impl Iterator<Item = &Doctor> {
        self.doctors.values()
    }

    pub fn ward(&self) -> &Ward {
        &self.ward
    }

    /// The patient occupying bed `label`, if any.
    pub fn occupant(&self, label: BedLabel) -> HospitalResult<Option<&Patient>> {
        self.ward
            .get_patient(label)?
            .map(|health_number| self.patient(health_number))
            .transpose()
    }

    /// Associates a doctor with a patient, updating both records together.
    ///
    /// Assigning a pair that is already associated succeeds without change.
    pub fn assign_doctor_to_patient(
        &mut self,
        health_number: HealthNumber,
        doctor_name: &str,
    ) -> HospitalResult<()> {
        let patient = self
            .patients
            .get_mut(&health_number)
            .ok_or(HospitalError::PatientNotFound(health_number))?;
        let doctor_name = doctor_name.trim();
        let doctor = self
            .doctors
            .get_mut(doctor_name)
            .ok_or_else(|| HospitalError::DoctorNotFound(doctor_name.to_string()))?;

        patient.doctors.insert(doctor.name().clone());
        doctor.patients.insert(health_number);
        tracing::info!("doctor {} assigned to patient {}", doctor_name, health_number);
        Ok(())
    }

    /// Labels of the currently empty beds, in ascending order.
    pub fn display_empty_beds(&self) -> Vec<BedLabel> {
        self.ward.available_beds()
    }

    /// Places a patient in an empty bed.
    ///
    /// # Errors
    ///
    /// Checked in this order:
    /// - [`HospitalError::PatientNotFound`]
    /// - [`HospitalError::AlreadyAssigned`] if the patient already has a bed
    /// - [`HospitalError::InvalidBed`] if `label` is outside the ward
    /// - [`HospitalError::BedOccupied`] if another patient holds the bed
    pub fn assign_bed(
        &mut self,
        health_number: HealthNumber,
        label: BedLabel,
    ) -> HospitalResult<()> {
        let patient = self
            .patients
            .get_mut(&health_number)
            .ok_or(HospitalError::PatientNotFound(health_number))?;
        if let Some(current) = patient.bed_label {
            return Err(HospitalError::AlreadyAssigned {
                health_number,
                label: current,
            });
        }

        self.ward.assign_patient_to_bed(health_number, label)?;
        patient.bed_label = Some(label);
        tracing::info!("patient {} assigned to bed {}", health_number, label);
        Ok(())
    }

    /// Releases a patient from their bed and returns the freed label.
    ///
    /// The patient record itself is kept.
    ///
    /// # Errors
    ///
    /// - [`HospitalError::PatientNotFound`]
    /// - [`HospitalError::NoBedAssigned`] if the patient has no bed
    /// - [`HospitalError::BedOccupantMismatch`] if the ward does not hold this patient in the bed
    ///   stored with the patient
    pub fn release_patient(&mut self, health_number: HealthNumber) -> HospitalResult<BedLabel> {
        let patient = self
            .patients
            .get_mut(&health_number)
            .ok_or(HospitalError::PatientNotFound(health_number))?;
        let label = patient
            .bed_label
            .ok_or(HospitalError::NoBedAssigned(health_number))?;

        let found = self.ward.get_patient(label).ok().flatten();
        if found != Some(health_number) {
            tracing::error!(
                "bed {} does not hold patient {} although the patient record says so",
                label,
                health_number
            );
            return Err(HospitalError::BedOccupantMismatch {
                health_number,
                label,
                found,
            });
        }

        self.ward.free_bed(label);
        patient.bed_label = None;
        tracing::info!("patient {} released from bed {}", health_number, label);
        Ok(label)
    }

    /// Dissolves the association between a doctor and a patient, updating both records together.
    ///
    /// # Errors
    ///
    /// - [`HospitalError::PatientNotFound`] / [`HospitalError::DoctorNotFound`]
    /// - [`HospitalError::NotAssociated`] if the doctor does not list the patient
    /// - [`HospitalError::AssociationAsymmetry`] if the doctor lists the patient but the patient
    ///   does not list the doctor
    pub fn drop_association(
        &mut self,
        health_number: HealthNumber,
        doctor_name: &str,
    ) -> HospitalResult<()> {
        let patient = self
            .patients
            .get_mut(&health_number)
            .ok_or(HospitalError::PatientNotFound(health_number))?;
        let doctor_name = doctor_name.trim();
        let doctor = self
            .doctors
            .get_mut(doctor_name)
            .ok_or_else(|| HospitalError::DoctorNotFound(doctor_name.to_string()))?;

        if !doctor.has_patient(health_number) {
            return Err(HospitalError::NotAssociated {
                health_number,
                doctor: doctor.name().clone(),
            });
        }
        if !patient.has_doctor(doctor_name) {
            tracing::error!(
                "doctor {} lists patient {} but the patient does not list the doctor",
                doctor_name,
                health_number
            );
            return Err(HospitalError::AssociationAsymmetry {
                health_number,
                doctor: doctor.name().clone(),
            });
        }

        patient.doctors.remove(doctor_name);
        doctor.patients.remove(&health_number);
        tracing::info!("doctor {} no longer cares for patient {}", doctor_name, health_number);
        Ok(())
    }
}

//! # Ward Core
//!
//! Core business logic for a single-ward hospital.
//!
//! This crate holds the in-memory model and the operations that keep it consistent:
//! - patient and doctor directories keyed by health number and name
//! - the many-to-many doctor–patient association
//! - the one-to-one patient–bed assignment inside a bounded ward
//!
//! **No I/O**: prompting, input parsing and printing belong in `ward-console` and `ward-cli`.
//! Operations return a [`HospitalResult`] for the caller to render.

pub mod config;
pub mod constants;
pub mod doctor;
pub mod error;
pub mod hospital;
pub mod patient;
pub mod registry;
pub mod report;
pub mod ward;

pub use config::WardConfig;
pub use doctor::{Doctor, DoctorKind};
pub use error::{ErrorKind, HospitalError, HospitalResult};
pub use hospital::HospitalSystem;
pub use patient::Patient;
pub use report::HospitalSnapshot;
pub use ward::Ward;
pub use ward_types::{HealthNumber, NonEmptyText, TextError};

/// A bed label. Valid labels are the contiguous range configured for the ward.
pub type BedLabel = i64;

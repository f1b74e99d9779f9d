/// Menu shown before every selection.
pub const MENU: &str = "Please select an operation to do\
\n0: quit\
\n1: add a new patient\
\n2: add a new doctor\
\n3: assign a doctor to a patient\
\n4: display the empty beds of the ward\
\n5: assign a patient a bed\
\n6: release a patient\
\n7: drop doctor-patient association\
\n8: display current system state\
\nEnter the number of your selection: ";

/// One operator request, identified by its menu selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Quit,
    AddPatient,
    AddDoctor,
    AssignDoctorToPatient,
    DisplayEmptyBeds,
    AssignBed,
    ReleasePatient,
    DropAssociation,
    DisplaySystem,
}

impl Command {
    /// Map a menu selector to its command; `None` for anything outside `0..=8`.
    pub fn from_selector(selector: i64) -> Option<Self> {
        let command = match selector {
            0 => Command::Quit,
            1 => Command::AddPatient,
            2 => Command::AddDoctor,
            3 => Command::AssignDoctorToPatient,
            4 => Command::DisplayEmptyBeds,
            5 => Command::AssignBed,
            6 => Command::ReleasePatient,
            7 => Command::DropAssociation,
            8 => Command::DisplaySystem,
            _ => return None,
        };
        Some(command)
    }
}

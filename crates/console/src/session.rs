use crate::command::{Command, MENU};
use crate::{ConsoleError, ConsoleResult};
use std::io::{BufRead, Write};
use std::str::FromStr;
use ward_core::{BedLabel, HealthNumber, HospitalError, HospitalSystem, WardConfig};

/// Interactive session over an injected reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Run a whole session and return the final system state.
    ///
    /// When `cfg` is `None` the operator is asked to lay out the ward first. The loop ends on
    /// selector `0` or at end of input, and the system state is printed at shutdown.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Io`] if the console cannot be read or written, and
    /// [`ConsoleError::EndOfInput`] if input ends before the ward is laid out.
    pub fn run(&mut self, cfg: Option<WardConfig>) -> ConsoleResult<HospitalSystem> {
        let cfg = match cfg {
            Some(cfg) => cfg,
            None => self.create_ward()?,
        };
        let mut system = HospitalSystem::new(&cfg);

        loop {
            let selector = match self.read_selector() {
                Ok(selector) => selector,
                Err(ConsoleError::EndOfInput) => break,
                Err(e) => return Err(e),
            };
            let Some(command) = Command::from_selector(selector) else {
                writeln!(self.output, "Invalid task specification; try again\n")?;
                continue;
            };
            if command == Command::Quit {
                break;
            }

            match self.dispatch(&mut system, command) {
                Ok(()) => {}
                Err(ConsoleError::Hospital(err)) => self.report_failure(&err)?,
                Err(ConsoleError::EndOfInput) => break,
                Err(e) => return Err(e),
            }
        }

        tracing::info!("session finished");
        writeln!(self.output, "The system at shutdown is as follows: {system}")?;
        self.output.flush()?;
        Ok(system)
    }

    /// Prompt for the ward name and bed range until they form a valid ward.
    pub fn create_ward(&mut self) -> ConsoleResult<WardConfig> {
        loop {
            self.prompt("Enter the name of the ward: ")?;
            let name = self.read_line()?;
            self.prompt("Enter the integer label of the first bed: ")?;
            let first_bed = self.read_int()?;
            self.prompt("Enter the integer label of the last bed: ")?;
            let last_bed = self.read_int()?;

            match WardConfig::new(&name, first_bed, last_bed) {
                Ok(cfg) => return Ok(cfg),
                Err(err) => {
                    tracing::warn!("ward layout rejected: {}", err);
                    writeln!(self.output, "{err}\nTry again.")?;
                }
            }
        }
    }

    /// Read one integer, asking again until the line parses.
    pub fn read_int(&mut self) -> ConsoleResult<i64> {
        self.read_parsed()
    }

    fn read_health_number(&mut self) -> ConsoleResult<HealthNumber> {
        self.read_parsed()
    }

    fn read_parsed<T: FromStr>(&mut self) -> ConsoleResult<T> {
        loop {
            let line = self.read_line()?;
            match line.trim().parse::<T>() {
                Ok(value) => return Ok(value),
                Err(_) => {
                    write!(
                        self.output,
                        "You entered \"{line}\" which is not an int.\nPlease try again: "
                    )?;
                    self.output.flush()?;
                }
            }
        }
    }

    fn read_selector(&mut self) -> ConsoleResult<i64> {
        self.prompt(MENU)?;
        self.read_int()
    }

    fn read_line(&mut self) -> ConsoleResult<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::EndOfInput);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn prompt(&mut self, text: &str) -> ConsoleResult<()> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    fn report_failure(&mut self, err: &HospitalError) -> ConsoleResult<()> {
        if err.is_internal() {
            tracing::error!("internal consistency failure: {}", err);
        } else {
            tracing::warn!("operation rejected: {}", err);
        }
        writeln!(self.output, "{err}")?;
        Ok(())
    }

    fn dispatch(&mut self, system: &mut HospitalSystem, command: Command) -> ConsoleResult<()> {
        tracing::debug!("dispatching {:?}", command);
        match command {
            Command::Quit => {}
            Command::AddPatient => {
                self.prompt("Enter the name of the patient: ")?;
                let name = self.read_line()?;
                self.prompt("Enter the health number of the patient: ")?;
                let health_number = self.read_health_number()?;
                system.add_patient(&name, health_number)?;
                writeln!(self.output, "Patient {health_number} added.")?;
            }
            Command::AddDoctor => {
                self.prompt("Enter the name of the doctor: ")?;
                let name = self.read_line()?;
                if let Ok(existing) = system.doctor(&name) {
                    return Err(HospitalError::DuplicateDoctor(existing.name().clone()).into());
                }
                self.prompt("Is the doctor a surgeon? (yes or no)")?;
                let response = self.read_line()?;
                let is_surgeon = response.trim_start().starts_with(['y', 'Y']);
                let doctor = system.add_doctor(&name, is_surgeon)?;
                writeln!(self.output, "{} {} added.", doctor.kind(), doctor.name())?;
            }
            Command::AssignDoctorToPatient => {
                let health_number = self.obtain_patient(system)?;
                self.prompt("Enter the name of the doctor: ")?;
                let name = self.read_line()?;
                system.assign_doctor_to_patient(health_number, &name)?;
            }
            Command::DisplayEmptyBeds => {
                let beds = system.display_empty_beds();
                writeln!(self.output, "The empty beds of the ward are {beds:?}")?;
            }
            Command::AssignBed => {
                let health_number = self.obtain_patient(system)?;
                if let Some(label) = system.patient(health_number)?.bed_label() {
                    return Err(HospitalError::AlreadyAssigned {
                        health_number,
                        label,
                    }
                    .into());
                }
                self.prompt("Enter the bed number for the patient: ")?;
                let label: BedLabel = self.read_int()?;
                system.assign_bed(health_number, label)?;
            }
            Command::ReleasePatient => {
                let health_number = self.obtain_patient(system)?;
                let label = system.release_patient(health_number)?;
                writeln!(self.output, "Patient {health_number} released from bed {label}.")?;
            }
            Command::DropAssociation => {
                let health_number = self.obtain_patient(system)?;
                self.prompt("Enter the name of the doctor: ")?;
                let name = self.read_line()?;
                system.drop_association(health_number, &name)?;
            }
            Command::DisplaySystem => {
                writeln!(self.output, "The system is as follows: {system}")?;
            }
        }
        Ok(())
    }

    /// Read a health number and confirm the patient exists.
    fn obtain_patient(&mut self, system: &HospitalSystem) -> ConsoleResult<HealthNumber> {
        self.prompt("Enter the health number of the patient: ")?;
        let health_number = self.read_health_number()?;
        system.patient(health_number)?;
        Ok(health_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use ward_core::ErrorKind;

    fn east() -> WardConfig {
        WardConfig::new("East", 1, 3).expect("valid ward layout")
    }

    fn run_script(cfg: Option<WardConfig>, script: &str) -> (HospitalSystem, String) {
        let mut console = Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        let system = console.run(cfg).expect("session should finish");
        let (_, output) = console.into_inner();
        (system, String::from_utf8(output).expect("utf8 output"))
    }

    #[test]
    fn add_patient_and_assign_bed() {
        let (system, output) = run_script(Some(east()), "1\nAnn\n100\n5\n100\n2\n4\n0\n");

        let ann = system.patient(HealthNumber::new(100)).expect("Ann registered");
        assert_eq!(ann.bed_label(), Some(2));
        assert!(output.contains("Patient 100 added."));
        assert!(output.contains("The empty beds of the ward are [1, 3]"));
        assert!(output.contains("The system at shutdown is as follows:"));
    }

    #[test]
    fn surgeon_answer_is_read_from_first_letter() {
        let (system, output) = run_script(Some(east()), "2\nLee\nYes\n2\nKim\nno\n0\n");

        assert!(system.doctor("Lee").unwrap().is_surgeon());
        assert!(!system.doctor("Kim").unwrap().is_surgeon());
        assert!(output.contains("Surgeon Lee added."));
        assert!(output.contains("Doctor Kim added."));
    }

    #[test]
    fn duplicate_doctor_is_rejected_before_the_surgeon_prompt() {
        // The second "2" request stops after the name, so "0" is read as the next selector.
        let (system, output) = run_script(Some(east()), "2\nLee\ny\n2\nLee\n0\n");

        assert_eq!(system.doctors().count(), 1);
        assert!(system.doctor("Lee").unwrap().is_surgeon());
        assert!(output.contains("Doctor not added as there already is a doctor with the name Lee"));
    }

    #[test]
    fn assign_bed_to_bedded_patient_fails_before_bed_prompt() {
        let (system, output) = run_script(Some(east()), "1\nAnn\n100\n5\n100\n1\n5\n100\n0\n");

        assert_eq!(system.patient(HealthNumber::new(100)).unwrap().bed_label(), Some(1));
        assert!(output.contains("is already in bed 1 so cannot be assigned a new bed"));
    }

    #[test]
    fn doctor_association_round_trip() {
        let script = "1\nAnn\n100\n2\nLee\nn\n3\n100\nLee\n7\n100\nLee\n7\n100\nLee\n0\n";
        let (system, output) = run_script(Some(east()), script);

        assert!(!system.doctor("Lee").unwrap().has_patient(HealthNumber::new(100)));
        assert!(!system.patient(HealthNumber::new(100)).unwrap().has_doctor("Lee"));
        assert!(output.contains("Doctor Lee is not associated with the patient 100"));
    }

    #[test]
    fn release_frees_the_bed() {
        let (system, output) = run_script(Some(east()), "1\nAnn\n100\n5\n100\n3\n6\n100\n6\n100\n0\n");

        assert_eq!(system.display_empty_beds(), vec![1, 2, 3]);
        assert!(output.contains("Patient 100 released from bed 3."));
        assert!(output.contains("Patient 100 must already have a bed to be released"));
    }

    #[test]
    fn failures_are_reported_and_session_continues() {
        let (system, output) = run_script(Some(east()), "3\n42\n1\nAnn\n100\n5\n100\n9\n8\n0\n");

        assert!(output.contains("There is no patient with health number 42"));
        assert!(output.contains("Bed label 9 is not valid, as the value must be between 1 and 3"));
        assert!(output.contains("The system is as follows:"));
        assert_eq!(system.patient(HealthNumber::new(100)).unwrap().bed_label(), None);
    }

    #[test]
    fn invalid_selector_and_malformed_integers_are_retried() {
        let (system, output) = run_script(Some(east()), "12\nabc\n1\nAnn\nx1\n100\n0\n");

        assert!(output.contains("Invalid task specification; try again"));
        assert!(output.contains("You entered \"abc\" which is not an int."));
        assert!(output.contains("You entered \"x1\" which is not an int."));
        assert!(system.patient(HealthNumber::new(100)).is_ok());
    }

    #[test]
    fn malformed_health_numbers_are_retried_at_every_prompt() {
        let (system, output) = run_script(Some(east()), "1\nAnn\n1e2\n100\n5\n 100x\n100\n2\n0\n");

        assert!(output.contains("You entered \"1e2\" which is not an int."));
        assert!(output.contains("You entered \" 100x\" which is not an int."));
        assert_eq!(system.patient(HealthNumber::new(100)).unwrap().bed_label(), Some(2));
    }

    #[test]
    fn ward_layout_is_prompted_until_valid() {
        let (system, output) = run_script(None, "\n1\n3\nEast\n5\n2\nEast\n1\n3\n0\n");

        assert!(output.contains("Try again."));
        assert_eq!(system.ward().name().as_str(), "East");
        assert_eq!(system.display_empty_beds(), vec![1, 2, 3]);
    }

    #[test]
    fn end_of_input_ends_session_gracefully() {
        let (system, output) = run_script(Some(east()), "1\nAnn\n100\n1\nBob\n");

        assert_eq!(system.patients().count(), 1);
        assert!(output.contains("The system at shutdown is as follows:"));
    }

    #[test]
    fn end_of_input_before_ward_layout_is_an_error() {
        let mut console = Console::new(Cursor::new(b"East\n1\n".to_vec()), Vec::new());
        let err = console.run(None).expect_err("ward never laid out");
        assert!(matches!(err, ConsoleError::EndOfInput));
    }

    #[test]
    fn empty_patient_name_is_reported_as_validation_failure() {
        let (system, output) = run_script(Some(east()), "1\n   \n7\n0\n");

        assert_eq!(system.patients().count(), 0);
        assert!(output.contains("invalid input: Text cannot be empty"));
        let err = system.patient(HealthNumber::new(7)).expect_err("not added");
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}

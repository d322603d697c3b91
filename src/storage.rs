use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::RegistryError;
use crate::models::{Appointment, AppointmentStatus};

/// One line of the appointment log. Written, never read back.
#[derive(Debug, Serialize)]
struct AppointmentRecord<'a> {
    patient_id: &'a str,
    patient: &'a str,
    doctor_id: &'a str,
    doctor: &'a str,
    status: AppointmentStatus,
    booked_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl<'a> From<&'a Appointment> for AppointmentRecord<'a> {
    fn from(a: &'a Appointment) -> Self {
        Self {
            patient_id: &a.patient_id,
            patient: &a.patient_name,
            doctor_id: &a.doctor_id,
            doctor: &a.doctor_name,
            status: a.status,
            booked_at: a.booked_at,
            completed_at: a.completed_at,
        }
    }
}

/// Append every current appointment to the log file, one JSON object per
/// line, creating the file if needed. Returns the number of lines written.
pub fn save_appointments(path: &Path, appointments: &[Appointment]) -> Result<usize, RegistryError> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| RegistryError::Internal(format!("file error: {e}")))?;

    for appointment in appointments {
        let line = serde_json::to_string(&AppointmentRecord::from(appointment))
            .map_err(|e| RegistryError::Internal(format!("serialize error: {e}")))?;
        writeln!(file, "{line}")
            .map_err(|e| RegistryError::Internal(format!("file error: {e}")))?;
    }

    tracing::info!(count = appointments.len(), path = %path.display(), "saved appointments");
    Ok(appointments.len())
}

/// Truncate the log file to empty, creating it if needed.
pub fn clear_appointments_file(path: &Path) -> Result<(), RegistryError> {
    File::create(path).map_err(|e| RegistryError::Internal(format!("file error: {e}")))?;
    tracing::info!(path = %path.display(), "cleared appointment log");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Registry;
    use crate::ops::{appointment_ops, doctor_ops, patient_ops};
    use assert_matches::assert_matches;
    use tempfile::tempdir;

    fn booked_registry() -> Registry {
        let mut reg = Registry::new();
        doctor_ops::register_doctor(&mut reg, "Ram").unwrap();
        patient_ops::register_patient(&mut reg, "Sita").unwrap();
        appointment_ops::book_appointment(&mut reg, "P1").unwrap();
        reg
    }

    #[test]
    fn save_writes_one_line_with_ids_names_and_status() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("appointments.txt");
        let reg = booked_registry();

        let written = save_appointments(&path, &reg.appointments).unwrap();
        assert_eq!(written, 1);

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.contains("\"patient_id\":\"P1\""));
        assert!(text.contains("\"patient\":\"Sita\""));
        assert!(text.contains("\"doctor_id\":\"D1\""));
        assert!(text.contains("\"doctor\":\"Ram\""));
        assert!(text.contains("\"status\":\"booked\""));
    }

    #[test]
    fn save_is_append_only() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("appointments.txt");
        let reg = booked_registry();

        save_appointments(&path, &reg.appointments).unwrap();
        save_appointments(&path, &reg.appointments).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn completed_status_is_recorded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("appointments.txt");
        let mut reg = booked_registry();
        appointment_ops::complete_appointment(&mut reg, 0).unwrap();

        save_appointments(&path, &reg.appointments).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"status\":\"completed\""));
        assert!(text.contains("completed_at"));
    }

    #[test]
    fn clear_truncates_to_zero_bytes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("appointments.txt");
        let reg = booked_registry();

        save_appointments(&path, &reg.appointments).unwrap();
        clear_appointments_file(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");

        // clearing a missing file creates it empty
        let fresh = dir.path().join("fresh.txt");
        clear_appointments_file(&fresh).unwrap();
        assert_eq!(std::fs::read_to_string(&fresh).unwrap(), "");
    }

    #[test]
    fn save_into_a_missing_directory_is_an_internal_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope").join("appointments.txt");
        let reg = booked_registry();
        assert_matches!(
            save_appointments(&path, &reg.appointments),
            Err(RegistryError::Internal(_))
        );
    }
}

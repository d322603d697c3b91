use chrono::Utc;

use crate::error::RegistryError;
use crate::models::{AppointmentStatus, Doctor, Registry};

pub fn register_doctor(reg: &mut Registry, name: &str) -> Result<Doctor, RegistryError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(RegistryError::blank_name());
    }

    let doctor = Doctor {
        id: reg.next_doctor_id(),
        name: name.to_string(),
        available: true,
        registered_at: Utc::now(),
    };
    reg.doctors.push(doctor.clone());

    tracing::info!(id = %doctor.id, "registered doctor");
    Ok(doctor)
}

/// Remove the first doctor matching `doctor_id`. Historical appointments
/// keep their copied doctor id/name; open ones are not cascaded, the
/// doctor is simply gone from lookups afterwards.
pub fn remove_doctor(reg: &mut Registry, doctor_id: &str) -> Result<Doctor, RegistryError> {
    let doctor_id = doctor_id.trim();
    if reg.doctors.is_empty() {
        return Err(RegistryError::empty_doctor_list());
    }

    let pos = reg
        .doctors
        .iter()
        .position(|d| d.id == doctor_id)
        .ok_or_else(|| RegistryError::doctor_not_found(doctor_id))?;
    let removed = reg.doctors.remove(pos);

    let open = reg
        .appointments
        .iter()
        .filter(|a| a.doctor_id == removed.id && a.status == AppointmentStatus::Booked)
        .count();
    if open > 0 {
        tracing::warn!(id = %removed.id, open, "removed doctor still had open appointments");
    }

    tracing::info!(id = %removed.id, "removed doctor");
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::{appointment_ops, patient_ops};
    use assert_matches::assert_matches;

    fn three_doctors() -> Registry {
        let mut reg = Registry::new();
        register_doctor(&mut reg, "Ram").unwrap();
        register_doctor(&mut reg, "Laxman").unwrap();
        register_doctor(&mut reg, "Bharat").unwrap();
        reg
    }

    #[test]
    fn registration_assigns_increasing_ids_and_availability() {
        let mut reg = Registry::new();
        let first = register_doctor(&mut reg, "Ram").unwrap();
        let second = register_doctor(&mut reg, "Laxman").unwrap();
        assert_eq!(first.id, "D1");
        assert_eq!(second.id, "D2");
        assert!(first.available);
        assert!(second.available);
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut reg = Registry::new();
        assert_matches!(
            register_doctor(&mut reg, ""),
            Err(RegistryError::InvalidInput(..))
        );
        assert!(reg.doctors.is_empty());
    }

    #[test]
    fn remove_by_valid_id_removes_exactly_that_doctor() {
        let mut reg = three_doctors();
        let removed = remove_doctor(&mut reg, "D2").unwrap();
        assert_eq!(removed.name, "Laxman");
        assert_eq!(reg.doctors.len(), 2);
        assert!(reg.doctors.iter().all(|d| d.id != "D2"));
        // insertion order of the others is preserved
        assert_eq!(reg.doctors[0].id, "D1");
        assert_eq!(reg.doctors[1].id, "D3");
    }

    #[test]
    fn remove_unknown_id_leaves_the_list_unchanged() {
        let mut reg = three_doctors();
        assert_matches!(
            remove_doctor(&mut reg, "D9999"),
            Err(RegistryError::NotFound("DOCTOR_NOT_FOUND", _))
        );
        assert_eq!(reg.doctors.len(), 3);
    }

    #[test]
    fn remove_from_empty_list_reports_no_doctors() {
        let mut reg = Registry::new();
        assert_matches!(
            remove_doctor(&mut reg, "D1"),
            Err(RegistryError::NotFound("NO_DOCTORS", _))
        );
    }

    #[test]
    fn removal_with_open_appointment_keeps_the_record_readable() {
        let mut reg = Registry::new();
        register_doctor(&mut reg, "Ram").unwrap();
        patient_ops::register_patient(&mut reg, "Sita").unwrap();
        appointment_ops::book_appointment(&mut reg, "P1").unwrap();

        remove_doctor(&mut reg, "D1").unwrap();

        assert!(reg.doctors.is_empty());
        assert_eq!(reg.appointments.len(), 1);
        assert_eq!(reg.appointments[0].doctor_id, "D1");
        assert_eq!(reg.appointments[0].doctor_name, "Ram");
        assert_eq!(reg.appointments[0].status, AppointmentStatus::Booked);
    }
}

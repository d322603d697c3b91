use chrono::Utc;

use crate::error::RegistryError;
use crate::models::{Appointment, AppointmentStatus, Registry};
use crate::ops::patient_ops;

/// Book the given patient with the first available doctor, in insertion
/// order. The selected doctor becomes unavailable until the appointment
/// is completed.
pub fn book_appointment(reg: &mut Registry, patient_id: &str) -> Result<Appointment, RegistryError> {
    let patient = patient_ops::find_patient(reg, patient_id)?;

    let doctor = reg
        .doctors
        .iter_mut()
        .find(|d| d.available)
        .ok_or_else(RegistryError::no_doctor_available)?;
    doctor.available = false;

    let appointment = Appointment {
        patient_id: patient.id.clone(),
        patient_name: patient.name.clone(),
        doctor_id: doctor.id.clone(),
        doctor_name: doctor.name.clone(),
        status: AppointmentStatus::Booked,
        booked_at: Utc::now(),
        completed_at: None,
    };
    reg.appointments.push(appointment.clone());

    tracing::info!(
        patient = %appointment.patient_id,
        doctor = %appointment.doctor_id,
        "booked appointment"
    );
    Ok(appointment)
}

/// Mark the appointment at `index` completed and free its doctor. An
/// already-completed appointment is returned as-is; in particular the
/// doctor flag is left alone, since the doctor may have been re-booked
/// after the first completion.
pub fn complete_appointment(
    reg: &mut Registry,
    index: usize,
) -> Result<Appointment, RegistryError> {
    let len = reg.appointments.len();
    if index >= len {
        return Err(RegistryError::bad_index(index, len));
    }
    if reg.appointments[index].status == AppointmentStatus::Completed {
        return Ok(reg.appointments[index].clone());
    }

    reg.appointments[index].status = AppointmentStatus::Completed;
    reg.appointments[index].completed_at = Some(Utc::now());

    let doctor_id = reg.appointments[index].doctor_id.clone();
    match reg.doctors.iter_mut().find(|d| d.id == doctor_id) {
        Some(doctor) => doctor.available = true,
        // the admin removed this doctor after booking
        None => tracing::warn!(doctor = %doctor_id, "completed appointment of a removed doctor"),
    }

    tracing::info!(index, doctor = %doctor_id, "completed appointment");
    Ok(reg.appointments[index].clone())
}

pub fn appointments_by_doctor(reg: &Registry, doctor_id: &str) -> Vec<Appointment> {
    let doctor_id = doctor_id.trim();
    reg.appointments
        .iter()
        .filter(|a| a.doctor_id == doctor_id)
        .cloned()
        .collect()
}

pub fn appointments_by_patient(reg: &Registry, patient_id: &str) -> Vec<Appointment> {
    let patient_id = patient_id.trim();
    reg.appointments
        .iter()
        .filter(|a| a.patient_id == patient_id)
        .cloned()
        .collect()
}

use chrono::Utc;

use crate::error::RegistryError;
use crate::models::{Patient, Registry};

pub fn register_patient(reg: &mut Registry, name: &str) -> Result<Patient, RegistryError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(RegistryError::blank_name());
    }

    let patient = Patient {
        id: reg.next_patient_id(),
        name: name.to_string(),
        registered_at: Utc::now(),
    };
    reg.patients.push(patient.clone());

    tracing::info!(id = %patient.id, "registered patient");
    Ok(patient)
}

pub fn find_patient(reg: &Registry, id: &str) -> Result<Patient, RegistryError> {
    let id = id.trim();
    reg.patients
        .iter()
        .find(|p| p.id == id)
        .cloned()
        .ok_or_else(|| RegistryError::patient_not_found(id))
}

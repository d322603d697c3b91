use chrono::{DateTime, Utc};
use serde::Serialize;

/* -------------------------
   People
--------------------------*/

/// Common surface of everyone the registry knows about.
pub trait Person {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn profile(&self) -> String;
}

#[derive(Debug, Clone)]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub registered_at: DateTime<Utc>,
}

impl Person for Patient {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn profile(&self) -> String {
        format!("Patient ID: {}, Name: {}", self.id, self.name)
    }
}

#[derive(Debug, Clone)]
pub struct Doctor {
    pub id: String,
    pub name: String,
    /// False exactly while the doctor holds one open appointment.
    pub available: bool,
    pub registered_at: DateTime<Utc>,
}

impl Person for Doctor {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn profile(&self) -> String {
        format!(
            "Doctor ID: {}, Name: {}, Available: {}",
            self.id,
            self.name,
            if self.available { "yes" } else { "no" }
        )
    }
}

#[derive(Debug, Clone)]
pub struct Admin {
    pub id: String,
    pub name: String,
}

impl Person for Admin {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn profile(&self) -> String {
        format!("Admin ID: {}, Name: {}", self.id, self.name)
    }
}

/* -------------------------
   Appointments
--------------------------*/

/// booked -> completed only; completed is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Booked,
    Completed,
}

impl AppointmentStatus {
    pub fn label(self) -> &'static str {
        match self {
            AppointmentStatus::Booked => "booked",
            AppointmentStatus::Completed => "completed",
        }
    }
}

/// Patient and doctor are copied in by id and name at booking time, so the
/// record stays readable even if the doctor is later removed.
#[derive(Debug, Clone)]
pub struct Appointment {
    pub patient_id: String,
    pub patient_name: String,
    pub doctor_id: String,
    pub doctor_name: String,
    pub status: AppointmentStatus,
    pub booked_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Appointment {
    pub fn summary(&self) -> String {
        format!(
            "Patient {} ({}) with Doctor {} ({}) - {}",
            self.patient_id,
            self.patient_name,
            self.doctor_id,
            self.doctor_name,
            self.status.label()
        )
    }
}

/* -------------------------
   Registry state
--------------------------*/

/// The in-memory state: three insertion-ordered lists plus the id
/// sequences. Passed by reference to every operation.
#[derive(Debug, Default)]
pub struct Registry {
    pub patients: Vec<Patient>,
    pub doctors: Vec<Doctor>,
    pub appointments: Vec<Appointment>,
    patient_seq: u32,
    doctor_seq: u32,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn next_patient_id(&mut self) -> String {
        self.patient_seq += 1;
        format!("P{}", self.patient_seq)
    }

    pub(crate) fn next_doctor_id(&mut self) -> String {
        self.doctor_seq += 1;
        format!("D{}", self.doctor_seq)
    }
}

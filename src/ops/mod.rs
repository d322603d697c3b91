pub mod appointment_ops;
pub mod doctor_ops;
pub mod patient_ops;

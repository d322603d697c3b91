use thiserror::Error;

/// Registry error taxonomy. Every variant carries a stable machine code
/// plus a human message; the menu layer renders both and prompts again.
/// None of these abort the process.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("{1}")]
    InvalidInput(&'static str, String),
    #[error("{1}")]
    NotFound(&'static str, String),
    #[error("{1}")]
    NoneAvailable(&'static str, String),
    #[error("{1}")]
    OutOfRange(&'static str, String),
    #[error("{1}")]
    Forbidden(&'static str, String),
    #[error("{0}")]
    Internal(String),
}

impl RegistryError {
    pub fn blank_name() -> Self {
        RegistryError::InvalidInput("VALIDATION_ERROR", "name must not be blank".into())
    }

    pub fn bad_number(raw: &str) -> Self {
        RegistryError::InvalidInput("VALIDATION_ERROR", format!("not a number: {raw}"))
    }

    pub fn patient_not_found(id: &str) -> Self {
        RegistryError::NotFound("PATIENT_NOT_FOUND", format!("no patient with id {id}"))
    }

    pub fn doctor_not_found(id: &str) -> Self {
        RegistryError::NotFound("DOCTOR_NOT_FOUND", format!("no doctor with id {id}"))
    }

    pub fn empty_doctor_list() -> Self {
        RegistryError::NotFound("NO_DOCTORS", "no doctor in the list".into())
    }

    pub fn no_doctor_available() -> Self {
        RegistryError::NoneAvailable(
            "NO_DOCTOR_AVAILABLE",
            "no doctor is available right now".into(),
        )
    }

    pub fn bad_index(index: usize, len: usize) -> Self {
        RegistryError::OutOfRange(
            "INDEX_OUT_OF_RANGE",
            format!("appointment index {index} out of range (list has {len})"),
        )
    }

    pub fn not_admin() -> Self {
        RegistryError::Forbidden("FORBIDDEN", "Only the admin can manage doctors".into())
    }

    pub fn code(&self) -> &'static str {
        match self {
            RegistryError::InvalidInput(code, _)
            | RegistryError::NotFound(code, _)
            | RegistryError::NoneAvailable(code, _)
            | RegistryError::OutOfRange(code, _)
            | RegistryError::Forbidden(code, _) => code,
            RegistryError::Internal(_) => "INTERNAL",
        }
    }
}

use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct Config {
    pub appointments_file: PathBuf,
    pub admin_name: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let appointments_file =
            env::var("APPOINTMENTS_FILE").unwrap_or_else(|_| "appointments.txt".to_string());
        if appointments_file.trim().is_empty() {
            anyhow::bail!("APPOINTMENTS_FILE must not be blank");
        }
        let admin_name = env::var("ADMIN_NAME").unwrap_or_else(|_| "admin".to_string());

        Ok(Self {
            appointments_file: PathBuf::from(appointments_file),
            admin_name,
        })
    }
}

use crate::config::Config;
use crate::error::RegistryError;
use crate::models::Admin;

/// There is a single admin account; its id is fixed.
pub const ADMIN_ID: &str = "A1";

/// Check an entered name against the configured admin name and mint the
/// admin actor on success. The menu runs this before any admin-only
/// operation; the operations themselves stay role-free.
pub fn authorize_admin(cfg: &Config, entered_name: &str) -> Result<Admin, RegistryError> {
    let entered = entered_name.trim();
    if entered.is_empty() || !entered.eq_ignore_ascii_case(cfg.admin_name.trim()) {
        return Err(RegistryError::not_admin());
    }

    Ok(Admin {
        id: ADMIN_ID.to_string(),
        name: cfg.admin_name.clone(),
    })
}

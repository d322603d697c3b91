use std::io::{BufRead, Write};

use crate::auth;
use crate::config::Config;
use crate::error::RegistryError;
use crate::models::{Person, Registry};
use crate::ops::{appointment_ops, doctor_ops, patient_ops};
use crate::storage;

const MENU: &str = "\
=== Medical Appointment Registry ===
 1. Register patient
 2. Register doctor
 3. Book appointment
 4. Complete appointment
 5. Show all doctors
 6. Show all appointments
 7. Appointments by doctor id
 8. Appointments by patient id
 9. Find patient by id
10. Remove doctor (admin)
11. Save appointments to file
12. Clear appointments file
 0. Exit";

/// Run the menu loop until `0` or EOF. Generic over the streams so a
/// whole session can be scripted from a test.
pub fn run<R: BufRead, W: Write>(
    reg: &mut Registry,
    cfg: &Config,
    mut input: R,
    mut out: W,
) -> anyhow::Result<()> {
    loop {
        writeln!(out, "{MENU}")?;
        let Some(choice) = prompt(&mut input, &mut out, "> ")? else {
            break;
        };

        match choice.as_str() {
            "1" => {
                let Some(name) = prompt(&mut input, &mut out, "Patient name: ")? else {
                    break;
                };
                match patient_ops::register_patient(reg, &name) {
                    Ok(p) => writeln!(out, "Registered. {}", p.profile())?,
                    Err(e) => report(&mut out, &e)?,
                }
            }
            "2" => {
                let Some(name) = prompt(&mut input, &mut out, "Doctor name: ")? else {
                    break;
                };
                match doctor_ops::register_doctor(reg, &name) {
                    Ok(d) => writeln!(out, "Registered. {}", d.profile())?,
                    Err(e) => report(&mut out, &e)?,
                }
            }
            "3" => {
                let Some(id) = prompt(&mut input, &mut out, "Patient id: ")? else {
                    break;
                };
                match appointment_ops::book_appointment(reg, &id) {
                    Ok(a) => writeln!(out, "Booked. {}", a.summary())?,
                    Err(e) => report(&mut out, &e)?,
                }
            }
            "4" => {
                let Some(raw) = prompt(&mut input, &mut out, "Appointment index: ")? else {
                    break;
                };
                let result = raw
                    .parse::<usize>()
                    .map_err(|_| RegistryError::bad_number(&raw))
                    .and_then(|index| appointment_ops::complete_appointment(reg, index));
                match result {
                    Ok(a) => writeln!(out, "Completed. {}", a.summary())?,
                    Err(e) => report(&mut out, &e)?,
                }
            }
            "5" => {
                if reg.doctors.is_empty() {
                    writeln!(out, "No doctors registered.")?;
                }
                for doctor in &reg.doctors {
                    writeln!(out, "{}", doctor.profile())?;
                }
            }
            "6" => {
                if reg.appointments.is_empty() {
                    writeln!(out, "No appointments booked.")?;
                }
                for (index, appointment) in reg.appointments.iter().enumerate() {
                    writeln!(out, "{index}. {}", appointment.summary())?;
                }
            }
            "7" => {
                let Some(id) = prompt(&mut input, &mut out, "Doctor id: ")? else {
                    break;
                };
                list_appointments(
                    &mut out,
                    &appointment_ops::appointments_by_doctor(reg, &id),
                    &id,
                )?;
            }
            "8" => {
                let Some(id) = prompt(&mut input, &mut out, "Patient id: ")? else {
                    break;
                };
                list_appointments(
                    &mut out,
                    &appointment_ops::appointments_by_patient(reg, &id),
                    &id,
                )?;
            }
            "9" => {
                let Some(id) = prompt(&mut input, &mut out, "Patient id: ")? else {
                    break;
                };
                match patient_ops::find_patient(reg, &id) {
                    Ok(p) => writeln!(out, "{}", p.profile())?,
                    Err(e) => report(&mut out, &e)?,
                }
            }
            "10" => {
                let Some(name) = prompt(&mut input, &mut out, "Admin name: ")? else {
                    break;
                };
                let admin = match auth::authorize_admin(cfg, &name) {
                    Ok(admin) => admin,
                    Err(e) => {
                        report(&mut out, &e)?;
                        continue;
                    }
                };
                let Some(id) = prompt(&mut input, &mut out, "Doctor id: ")? else {
                    break;
                };
                match doctor_ops::remove_doctor(reg, &id) {
                    Ok(removed) => {
                        tracing::info!(admin = %admin.id, doctor = %removed.id, "admin removed doctor");
                        writeln!(out, "Doctor removed. {}", removed.profile())?;
                    }
                    Err(e) => report(&mut out, &e)?,
                }
            }
            "11" => match storage::save_appointments(&cfg.appointments_file, &reg.appointments) {
                Ok(written) => writeln!(
                    out,
                    "Saved {written} appointment(s) to {}.",
                    cfg.appointments_file.display()
                )?,
                Err(e) => report(&mut out, &e)?,
            },
            "12" => match storage::clear_appointments_file(&cfg.appointments_file) {
                Ok(()) => writeln!(out, "Appointment log cleared.")?,
                Err(e) => report(&mut out, &e)?,
            },
            "0" => break,
            other => writeln!(out, "Unknown option: {other}")?,
        }
        writeln!(out)?;
    }

    writeln!(out, "Goodbye.")?;
    Ok(())
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> anyhow::Result<Option<String>> {
    write!(out, "{label}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None); // EOF
    }
    Ok(Some(line.trim().to_string()))
}

fn report<W: Write>(out: &mut W, err: &RegistryError) -> anyhow::Result<()> {
    writeln!(out, "[{}] {err}", err.code())?;
    Ok(())
}

fn list_appointments<W: Write>(
    out: &mut W,
    appointments: &[crate::models::Appointment],
    id: &str,
) -> anyhow::Result<()> {
    if appointments.is_empty() {
        writeln!(out, "No appointments for {id}.")?;
    }
    for appointment in appointments {
        writeln!(out, "{}", appointment.summary())?;
    }
    Ok(())
}

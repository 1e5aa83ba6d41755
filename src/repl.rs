use std::io::{self, BufRead, Write};
use std::time::Instant;

use tracing::{debug, info};

use crate::command::{self, Command, CommandError};
use crate::lot::{Lot, LotError};
use crate::model::SlotStatus;
use crate::observability;

/// Outcome of executing one command.
#[derive(Debug)]
pub enum Reply {
    Message(String),
    Table(Vec<SlotStatus>),
    Quit,
}

#[derive(Debug)]
pub enum SessionError {
    /// A command other than `create_parking_lot` arrived before any lot
    /// exists.
    NotCreated,
    Lot(LotError),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::NotCreated => write!(f, "parking lot has not been created"),
            SessionError::Lot(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SessionError {}

/// One interactive session. Owns the lot; there is no other copy of the
/// state anywhere.
#[derive(Default)]
pub struct Session {
    lot: Option<Lot>,
}

impl Session {
    pub fn new() -> Self {
        Self { lot: None }
    }

    pub fn lot(&self) -> Option<&Lot> {
        self.lot.as_ref()
    }

    pub fn execute(&mut self, cmd: Command) -> Result<Reply, SessionError> {
        match cmd {
            Command::CreateLot { capacity } => {
                let lot = Lot::new(capacity).map_err(SessionError::Lot)?;
                // Re-issuing the command replaces the previous lot.
                self.lot = Some(lot);
                info!(capacity, "parking lot created");
                Ok(Reply::Message(format!(
                    "Created a parking lot with {capacity} slots"
                )))
            }
            Command::Park {
                registration,
                vehicle_type,
                color,
            } => {
                let lot = self.lot_mut()?;
                match lot.park(&registration, &color, &vehicle_type) {
                    Ok(slot) => Ok(Reply::Message(format!("Allocated slot number: {slot}"))),
                    Err(LotError::LotFull(_)) => {
                        Ok(Reply::Message("Sorry, parking lot is full".to_string()))
                    }
                    Err(e) => Err(SessionError::Lot(e)),
                }
            }
            Command::Leave { slot } => {
                self.lot_mut()?.leave(slot).map_err(SessionError::Lot)?;
                Ok(Reply::Message(format!("Slot number {slot} is free")))
            }
            Command::Status => Ok(Reply::Table(self.lot_ref()?.status())),
            Command::CountByType { vehicle_type } => {
                let count = self.lot_ref()?.count_by_vehicle_type(&vehicle_type);
                Ok(Reply::Message(count.to_string()))
            }
            Command::PlateParity { parity } => {
                let registrations = self
                    .lot_ref()?
                    .registrations_by_parity(parity)
                    .map_err(SessionError::Lot)?;
                Ok(Reply::Message(registrations.join(", ")))
            }
            Command::RegistrationsByColor { color } => Ok(Reply::Message(
                self.lot_ref()?.registrations_by_color(&color).join(", "),
            )),
            Command::SlotsByColor { color } => {
                let slots: Vec<String> = self
                    .lot_ref()?
                    .slots_by_color(&color)
                    .iter()
                    .map(u32::to_string)
                    .collect();
                Ok(Reply::Message(slots.join(", ")))
            }
            Command::SlotForRegistration { registration } => {
                match self.lot_ref()?.slot_for_registration(&registration) {
                    Some(slot) => Ok(Reply::Message(slot.to_string())),
                    None => Ok(Reply::Message("Not found".to_string())),
                }
            }
            Command::Exit => Ok(Reply::Quit),
        }
    }

    fn lot_ref(&self) -> Result<&Lot, SessionError> {
        self.lot.as_ref().ok_or(SessionError::NotCreated)
    }

    fn lot_mut(&mut self) -> Result<&mut Lot, SessionError> {
        self.lot.as_mut().ok_or(SessionError::NotCreated)
    }
}

/// Drive a session over line-oriented input: prompt, read, parse, execute,
/// render, repeat. Returns on `exit` or end of input.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    mut output: W,
) -> io::Result<()> {
    let mut lines = input.lines();
    loop {
        write!(output, "$ ")?;
        output.flush()?;
        let Some(line) = lines.next() else { break };
        let line = line?;

        let cmd = match command::parse_command(&line) {
            Ok(cmd) => cmd,
            Err(CommandError::Empty) => continue,
            Err(CommandError::Unknown(_)) => {
                writeln!(output, "Invalid command")?;
                continue;
            }
            Err(e) => {
                writeln!(output, "error: {e}")?;
                continue;
            }
        };

        let label = observability::command_label(&cmd);
        let start = Instant::now();
        let result = session.execute(cmd);
        metrics::histogram!(observability::COMMAND_DURATION_SECONDS, "command" => label)
            .record(start.elapsed().as_secs_f64());
        let status = if result.is_ok() { "ok" } else { "error" };
        metrics::counter!(observability::COMMANDS_TOTAL, "command" => label, "status" => status)
            .increment(1);
        if let Some(lot) = session.lot() {
            metrics::gauge!(observability::SLOTS_OCCUPIED).set(lot.occupied_count() as f64);
        }
        debug!(command = label, status, "command handled");

        match result {
            Ok(Reply::Message(msg)) => writeln!(output, "{msg}")?,
            Ok(Reply::Table(rows)) => render_table(&mut output, &rows)?,
            Ok(Reply::Quit) => {
                writeln!(output, "Exiting program. Goodbye!")?;
                break;
            }
            Err(SessionError::NotCreated) => {
                writeln!(output, "Parking lot has not been created")?;
            }
            Err(e) => writeln!(output, "error: {e}")?,
        }
    }
    Ok(())
}

fn render_table<W: Write>(output: &mut W, rows: &[SlotStatus]) -> io::Result<()> {
    writeln!(
        output,
        "{:<10}{:<20}{:<12}{}",
        "Slot No.", "Registration No", "Type", "Colour"
    )?;
    for row in rows {
        writeln!(
            output,
            "{:<10}{:<20}{:<12}{}",
            row.slot, row.occupancy.registration, row.occupancy.vehicle_type, row.occupancy.color
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Parity;

    fn created(capacity: u32) -> Session {
        let mut session = Session::new();
        session
            .execute(Command::CreateLot { capacity })
            .unwrap();
        session
    }

    fn message(reply: Reply) -> String {
        match reply {
            Reply::Message(msg) => msg,
            other => panic!("expected Message, got {other:?}"),
        }
    }

    #[test]
    fn commands_before_create_are_rejected() {
        let mut session = Session::new();
        let result = session.execute(Command::Status);
        assert!(matches!(result, Err(SessionError::NotCreated)));

        let result = session.execute(Command::Park {
            registration: "KA-01-HH-1234".to_string(),
            vehicle_type: "car".to_string(),
            color: "white".to_string(),
        });
        assert!(matches!(result, Err(SessionError::NotCreated)));
    }

    #[test]
    fn exit_works_without_a_lot() {
        let mut session = Session::new();
        assert!(matches!(session.execute(Command::Exit), Ok(Reply::Quit)));
    }

    #[test]
    fn create_reports_capacity() {
        let mut session = Session::new();
        let reply = session
            .execute(Command::CreateLot { capacity: 6 })
            .unwrap();
        assert_eq!(message(reply), "Created a parking lot with 6 slots");
    }

    #[test]
    fn park_reports_slot_and_full_lot() {
        let mut session = created(1);
        let park = |registration: &str| Command::Park {
            registration: registration.to_string(),
            vehicle_type: "car".to_string(),
            color: "white".to_string(),
        };

        let reply = session.execute(park("KA-01-HH-1234")).unwrap();
        assert_eq!(message(reply), "Allocated slot number: 1");

        let reply = session.execute(park("KA-01-HH-9999")).unwrap();
        assert_eq!(message(reply), "Sorry, parking lot is full");
    }

    #[test]
    fn leave_out_of_range_surfaces_lot_error() {
        let mut session = created(2);
        let result = session.execute(Command::Leave { slot: 9 });
        assert!(matches!(
            result,
            Err(SessionError::Lot(LotError::SlotOutOfRange { slot: 9, .. }))
        ));
    }

    #[test]
    fn empty_query_renders_empty_message() {
        let mut session = created(3);
        let reply = session
            .execute(Command::PlateParity {
                parity: Parity::Odd,
            })
            .unwrap();
        assert_eq!(message(reply), "");
    }

    #[test]
    fn recreate_replaces_the_lot() {
        let mut session = created(1);
        session
            .execute(Command::Park {
                registration: "KA-01-HH-1234".to_string(),
                vehicle_type: "car".to_string(),
                color: "white".to_string(),
            })
            .unwrap();
        session.execute(Command::CreateLot { capacity: 2 }).unwrap();
        assert_eq!(session.lot().unwrap().occupied_count(), 0);
        assert_eq!(session.lot().unwrap().capacity(), 2);
    }
}

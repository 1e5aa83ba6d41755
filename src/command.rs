use crate::model::Parity;

/// Parsed command from one line of input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    CreateLot {
        capacity: u32,
    },
    Park {
        registration: String,
        vehicle_type: String,
        color: String,
    },
    Leave {
        slot: u32,
    },
    Status,
    CountByType {
        vehicle_type: String,
    },
    PlateParity {
        parity: Parity,
    },
    RegistrationsByColor {
        color: String,
    },
    SlotsByColor {
        color: String,
    },
    SlotForRegistration {
        registration: String,
    },
    Exit,
}

pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let mut tokens = line.split_whitespace();
    let Some(verb) = tokens.next() else {
        return Err(CommandError::Empty);
    };
    let args: Vec<&str> = tokens.collect();

    match verb {
        "create_parking_lot" => {
            expect_arity("create_parking_lot", &args, 1)?;
            Ok(Command::CreateLot {
                capacity: parse_u32(args[0])?,
            })
        }
        "park" => {
            expect_arity("park", &args, 3)?;
            Ok(Command::Park {
                registration: args[0].to_string(),
                vehicle_type: args[1].to_string(),
                color: args[2].to_string(),
            })
        }
        "leave" => {
            expect_arity("leave", &args, 1)?;
            Ok(Command::Leave {
                slot: parse_u32(args[0])?,
            })
        }
        "status" => {
            expect_arity("status", &args, 0)?;
            Ok(Command::Status)
        }
        "type_of_vehicles" => {
            expect_arity("type_of_vehicles", &args, 1)?;
            Ok(Command::CountByType {
                vehicle_type: args[0].to_string(),
            })
        }
        "registration_numbers_for_vehicles_with_odd_plate" => {
            expect_arity("registration_numbers_for_vehicles_with_odd_plate", &args, 0)?;
            Ok(Command::PlateParity {
                parity: Parity::Odd,
            })
        }
        "registration_numbers_for_vehicles_with_even_plate" => {
            expect_arity("registration_numbers_for_vehicles_with_even_plate", &args, 0)?;
            Ok(Command::PlateParity {
                parity: Parity::Even,
            })
        }
        "registration_numbers_for_vehicles_with_colour" => {
            expect_arity("registration_numbers_for_vehicles_with_colour", &args, 1)?;
            Ok(Command::RegistrationsByColor {
                color: args[0].to_string(),
            })
        }
        "slot_numbers_for_vehicles_with_colour" => {
            expect_arity("slot_numbers_for_vehicles_with_colour", &args, 1)?;
            Ok(Command::SlotsByColor {
                color: args[0].to_string(),
            })
        }
        "slot_number_for_registration_number" => {
            expect_arity("slot_number_for_registration_number", &args, 1)?;
            Ok(Command::SlotForRegistration {
                registration: args[0].to_string(),
            })
        }
        "exit" => {
            expect_arity("exit", &args, 0)?;
            Ok(Command::Exit)
        }
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

fn expect_arity(verb: &'static str, args: &[&str], expected: usize) -> Result<(), CommandError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(CommandError::WrongArity(verb, expected, args.len()))
    }
}

fn parse_u32(token: &str) -> Result<u32, CommandError> {
    token
        .parse()
        .map_err(|_| CommandError::BadNumber(token.to_string()))
}

// ── Errors ────────────────────────────────────────────────────

#[derive(Debug)]
pub enum CommandError {
    Empty,
    Unknown(String),
    WrongArity(&'static str, usize, usize),
    BadNumber(String),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::Empty => write!(f, "empty command"),
            CommandError::Unknown(verb) => write!(f, "unknown command: {verb}"),
            CommandError::WrongArity(verb, expected, got) => {
                write!(f, "{verb}: expected {expected} arguments, got {got}")
            }
            CommandError::BadNumber(token) => write!(f, "not a number: {token}"),
        }
    }
}

impl std::error::Error for CommandError {}

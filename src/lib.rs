pub mod command;
pub mod limits;
pub mod lot;
pub mod model;
pub mod observability;
pub mod plate;
pub mod repl;

use std::net::SocketAddr;

use crate::command::Command;

// ── RED metrics (command-driven) ────────────────────────────────

/// Counter: total commands executed. Labels: command, status.
pub const COMMANDS_TOTAL: &str = "valet_commands_total";

/// Histogram: command latency in seconds. Labels: command.
pub const COMMAND_DURATION_SECONDS: &str = "valet_command_duration_seconds";

// ── USE metrics (lot utilization) ───────────────────────────────

/// Gauge: currently occupied slots.
pub const SLOTS_OCCUPIED: &str = "valet_slots_occupied";

/// Install Prometheus metrics exporter on the given port. No-op if port is None.
pub fn init(port: Option<u16>) {
    let Some(port) = port else { return };
    let addr: SocketAddr = ([0, 0, 0, 0], port).into();
    metrics_exporter_prometheus::PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .expect("failed to install Prometheus metrics exporter");
    tracing::info!("metrics endpoint: http://0.0.0.0:{port}/metrics");
}

/// Map a Command variant to a short label for metrics.
pub fn command_label(cmd: &Command) -> &'static str {
    match cmd {
        Command::CreateLot { .. } => "create_parking_lot",
        Command::Park { .. } => "park",
        Command::Leave { .. } => "leave",
        Command::Status => "status",
        Command::CountByType { .. } => "type_of_vehicles",
        Command::PlateParity { .. } => "plate_parity",
        Command::RegistrationsByColor { .. } => "registrations_by_colour",
        Command::SlotsByColor { .. } => "slots_by_colour",
        Command::SlotForRegistration { .. } => "slot_for_registration",
        Command::Exit => "exit",
    }
}

use std::io;

use tracing::info;

use valet::repl::{self, Session};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so they never interleave with command replies.
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let metrics_port: Option<u16> = std::env::var("VALET_METRICS_PORT")
        .ok()
        .and_then(|s| s.parse().ok());
    valet::observability::init(metrics_port);

    info!("valet session starting");
    info!(
        "  metrics: {}",
        metrics_port.map_or("disabled".to_string(), |p| format!(
            "http://0.0.0.0:{p}/metrics"
        ))
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new();
    repl::run(&mut session, stdin.lock(), stdout.lock())?;

    info!("valet session ended");
    Ok(())
}

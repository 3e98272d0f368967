//! Rotary Pendulum Monitor - Main Entry Point
//!
//! Reads pendulum telemetry from a serial-connected microcontroller, plots
//! the angle and PID output live, and saves the collected samples to a CSV
//! file when the window is closed.

use pendulum_monitor::{
    config::{BAUD_RATE, OUTPUT_FILENAME, READ_TIMEOUT, SERIAL_PORT},
    frontend::MonitorApp,
    serial::SerialLineSource,
    session::MonitorSession,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,pendulum_monitor=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Rotary Pendulum Monitor");

    // Connection failure at startup is fatal: no retry, no port scan.
    let source = match SerialLineSource::connect(SERIAL_PORT, BAUD_RATE, READ_TIMEOUT) {
        Ok(source) => {
            tracing::info!("Connected to {} at {} baud", SERIAL_PORT, BAUD_RATE);
            source
        }
        Err(e) => {
            tracing::error!("Cannot open serial port {}: {}", SERIAL_PORT, e);
            tracing::error!(
                "Check that the port name is correct and not in use by another program."
            );
            std::process::exit(1);
        }
    };

    let session = MonitorSession::new(source, OUTPUT_FILENAME);

    // Configure eframe options
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 600.0])
            .with_min_inner_size([640.0, 360.0])
            .with_title("Monitoring Rotary Pendulum Real-Time"),
        ..Default::default()
    };

    // Run the eframe application; the session exports and releases the
    // connection when the window closes.
    eframe::run_native(
        "Rotary Pendulum Monitor",
        native_options,
        Box::new(|cc| Ok(Box::new(MonitorApp::new(cc, session)))),
    )
}

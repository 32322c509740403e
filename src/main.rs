use gitversion::build_info::ToolVersion;
use gitversion::cli;
use gitversion::ui;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    // Diagnostics go to stderr so stdout carries only the JSON document.
    let filter = std::env::var("RUST_LOG")
        .ok()
        .filter(|raw| !raw.trim().is_empty())
        .and_then(|raw| EnvFilter::try_new(raw.trim()).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();

    let tool_version = ToolVersion::from_build_env();
    let cli = cli::parse_with_version(&tool_version);

    if let Err(err) = cli.run() {
        ui::display_error(&format!("{:#}", err));
        std::process::exit(1);
    }
}

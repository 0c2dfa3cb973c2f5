use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Convert GlobalAudio/icon.svg into GlobalAudio/app.ico (16 to 256 px frames).
#[derive(Parser, Debug)]
#[command(name = "appico", version, about)]
struct Cli {}

fn main() -> anyhow::Result<ExitCode> {
    let _cli = Cli::parse();
    init_tracing();

    let job = appico::IconJob::default();

    if let appico::Capability::Unavailable(reason) = appico::probe() {
        tracing::error!(%reason, "rasterizer/encoder unavailable");
        for line in appico::guide::missing_capability_guide(&job) {
            println!("{line}");
        }
        return Ok(ExitCode::FAILURE);
    }

    match appico::convert(&job)? {
        appico::ConvertOutcome::Created { output, .. } => {
            println!("{}", appico::guide::success_line(&output));
        }
        appico::ConvertOutcome::InputMissing { input } => {
            println!("{}", appico::guide::not_found_line(&input));
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

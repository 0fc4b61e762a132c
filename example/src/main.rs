//! Plays scripted gestures against a snapping sheet and logs what happens.
//!
//! Set `RUST_LOG=tessera_sheet=trace` to see every frame decision.

mod scenario;
mod spring;

use anyhow::Result;
use clap::Parser;
use tessera_sheet::{SheetArgs, SheetController, ViewportState};
use tracing::info;

use crate::{scenario::Scenario, spring::SpringAnimator};

#[derive(Parser)]
#[command(name = "example")]
#[command(version, about = "Drive a snapping sheet with scripted gestures", long_about = None)]
struct Cli {
    /// Viewport height in pixels
    #[arg(long, default_value_t = 800.0)]
    height: f32,
    /// Snap points as fractions of the viewport height
    #[arg(long = "snap", value_delimiter = ',', default_values_t = [0.0, 0.4, 0.8])]
    snap_points: Vec<f32>,
    /// Minimum visible height at the most hidden position
    #[arg(long, default_value_t = 0.0)]
    min_visible_height: f32,
    /// Gesture script to play
    #[arg(long, value_enum, default_value_t = Scenario::Basic)]
    scenario: Scenario,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let args = SheetArgs::default()
        .snap_points(cli.snap_points)
        .min_visible_height(cli.min_visible_height);
    let spring = SpringAnimator::new(0.0);
    let sheet = SheetController::new(args, ViewportState::new(cli.height), spring.clone())?;
    spring.set_value(sheet.position());

    let rest = scenario::run(cli.scenario, sheet, spring)?;
    info!("Sheet at rest on {rest}");
    Ok(())
}

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new("error,tessera_sheet=debug,example=info")
        {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .try_init();
}

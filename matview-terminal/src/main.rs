/// Matview Terminal - Transform Matrix Display
///
/// Prints the orthographic, perspective and viewport matrices every frame.
/// Controls:
///   - ESC: Quit

use clap::Parser;
use matview_core::ShowcaseConfig;
use matview_terminal::{AppError, MatViewApp};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "matview", about = "Display projection and viewport matrices")]
struct Cli {
    /// TOML file overriding the matrix parameters
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<(), AppError> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => {
            log::info!("loading configuration from {}", path.display());
            ShowcaseConfig::load_from_file(path)?
        }
        None => ShowcaseConfig::default(),
    };

    if cli.print_config {
        print!("{}", config.to_toml_string()?);
        return Ok(());
    }

    let mut app = MatViewApp::new(config);
    app.run()?;

    log::info!("shutdown complete");
    Ok(())
}

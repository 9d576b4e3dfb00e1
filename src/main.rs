// open-docs - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading
// 3. Logging initialisation (debug mode support)
// 4. A single launch attempt and its exit status

use clap::Parser;
use open_docs::app::launcher::{report, Launcher};
use open_docs::platform::config::{self, PlatformPaths};
use open_docs::platform::probe::PlatformProbe;
use open_docs::platform::process::SystemRunner;
use open_docs::util;
use std::path::PathBuf;

/// open-docs - open the generated API documentation in the default browser.
///
/// Works on native Linux, Windows, macOS, and inside WSL (where the Windows
/// browser is used). Run without arguments from the project root.
#[derive(Parser, Debug)]
#[command(name = "open-docs", version, about)]
struct Cli {
    /// Documentation entry file (defaults to docs/rust/nu_analytics/index.html).
    #[arg(long = "doc-path", value_name = "PATH")]
    doc_path: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    let platform_paths = PlatformPaths::resolve();
    let (app_config, config_warnings) = config::load_config(&platform_paths.config_file());

    util::logging::init(cli.debug, app_config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "open-docs starting"
    );
    for warning in &config_warnings {
        tracing::warn!("{}", warning);
    }

    // CLI override > config.toml > built-in default
    let doc_path = cli.doc_path.unwrap_or_else(|| app_config.doc_path.clone());

    let launcher = Launcher::from_config(SystemRunner, PlatformProbe::host(), &app_config);
    let result = launcher.open_in_browser(&doc_path);

    let code = report(&result, &mut std::io::stdout(), &mut std::io::stderr())
        .unwrap_or(util::constants::FAILURE_EXIT_CODE);
    std::process::exit(code);
}

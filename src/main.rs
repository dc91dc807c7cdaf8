use std::process::ExitCode;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use clap::Parser;
use signal_hook::consts::{SIGINT, SIGTERM};
use tracing::{error, info, warn};

use stackpulse::app::{self, App};
use stackpulse::directory::StackDirectory;
use stackpulse::docker::DockerGateway;
use stackpulse::error::StartupError;
use stackpulse::view::Theme;
use stackpulse::{logging, swarm};

/// Browse Docker Swarm stacks, their containers and logs.
#[derive(Parser, Debug)]
#[command(name = "stackpulse", version, about)]
struct Cli {
    /// Show the debug overlay (state, cursors, viewport)
    #[arg(long)]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let _log_guard = logging::init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            app::restore_terminal();
            error!("{}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), StartupError> {
    info!(debug = cli.debug, log = %logging::log_path().display(), "stackpulse starting");

    let should_quit = Arc::new(AtomicBool::new(false));
    for signal in [SIGINT, SIGTERM] {
        if let Err(e) = signal_hook::flag::register(signal, Arc::clone(&should_quit)) {
            warn!(signal, "failed to register signal handler: {}", e);
        }
    }

    let rt = Arc::new(
        tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .worker_threads(2)
            .build()
            .map_err(StartupError::Runtime)?,
    );

    let gateway = DockerGateway::connect(Arc::clone(&rt)).map_err(StartupError::Connect)?;

    match swarm::detect_swarm() {
        Some(info) if info.is_manager => {
            info!(node = %info.node_id, managers = info.managers, nodes = info.nodes_total, "swarm manager detected");
        }
        Some(info) => warn!(node = %info.node_id, "node is a swarm worker; stack operations need a manager"),
        None => warn!("swarm mode is not active on this engine"),
    }

    let mut app = App::new(StackDirectory::new(gateway), cli.debug).map_err(StartupError::InitialListing)?;
    app::run(&mut app, &Theme::default(), should_quit)?;

    info!("stackpulse exiting");
    Ok(())
}

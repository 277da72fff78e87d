//! Entry point for the **swaycycle** command.
//!
//! Parses the command line, sets up logging, picks a transport and runs a
//! single focus cycle.  Any failure is logged and ends the process with a
//! non-zero status.

use clap::Parser;
use log::{debug, error, info, warn};
use std::fs::OpenOptions;
use std::os::unix::fs::OpenOptionsExt;
use std::path::{Path, PathBuf};
use std::process;
use swaycycle::command::Direction;
use swaycycle::config::{self, Config, Transport};
use swaycycle::sway::ipc::SwayIpc;
use swaycycle::sway::swaymsg::Swaymsg;
use swaycycle::switcher::{FocusSwitcher, SwitcherError};
use swaycycle::traits::WindowManager;

#[derive(Parser, Debug)]
#[command(name = "swaycycle")]
#[command(about = "Cycle focus through all visible windows on a sway workspace")]
#[command(version)]
struct Cli {
    /// Cycle to the previous window instead of the next one
    #[arg(short, long)]
    prev: bool,

    /// Do not switch windows, only report the target
    #[arg(short = 'n', long)]
    no_switch: bool,

    /// How to talk to sway (overrides the config file)
    #[arg(short, long, value_enum)]
    transport: Option<Transport>,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debugging
    #[arg(short, long)]
    debug: bool,

    /// Dump the sway tree (needs -d as well)
    #[arg(short = 'D', long)]
    dump: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Write log output to this file
    #[arg(short, long)]
    logfile: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = setup_logging(&cli) {
        eprintln!("failed to open logfile: {}", e);
        process::exit(1);
    }

    let config = load_config(cli.config.as_deref());
    let transport = cli.transport.unwrap_or(config.transport);
    let direction = Direction::from_backward(cli.prev);

    // The window manager is moved into `run` and dropped there, so the
    // connection is closed before any exit below.
    let result = match transport {
        Transport::Socket => match SwayIpc::connect() {
            Ok(wm) => {
                debug!("using socket {}", wm.path().display());
                run(wm, &cli, direction)
            }
            Err(e) => {
                error!("{}", e);
                process::exit(1);
            }
        },
        Transport::Swaymsg => match Swaymsg::from_command_line(&config.swaymsg) {
            Some(wm) => run(wm, &cli, direction),
            None => {
                error!("config error: empty swaymsg command line");
                process::exit(1);
            }
        },
    };

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}

/// Run one cycle against `wm`.
fn run<W: WindowManager>(wm: W, cli: &Cli, direction: Direction) -> Result<(), SwitcherError> {
    let mut switcher = FocusSwitcher::new(wm);
    switcher.set_dump_tree(cli.debug && cli.dump);

    match switcher.cycle(direction, cli.no_switch)? {
        Some(id) => debug!("cycled {} to con_id {}", direction, id),
        None => info!("no window to switch to"),
    }
    Ok(())
}

/// Configure `env_logger`: warnings by default, `-v` for info, `-d` for
/// debug with source locations.  `RUST_LOG` still wins when set.
fn setup_logging(cli: &Cli) -> std::io::Result<()> {
    let level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else {
        "warn"
    };

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level));

    if cli.debug {
        builder.format_file(true).format_line_number(true);
    } else {
        builder.format_target(false);
    }

    if let Some(path) = &cli.logfile {
        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .mode(0o600)
            .open(path)?;
        builder
            .target(env_logger::Target::Pipe(Box::new(file)))
            .write_style(env_logger::WriteStyle::Never);
    }

    builder.init();
    Ok(())
}

/// Load the config from `explicit` if given (failure is fatal), otherwise
/// from the default location, falling back to compiled-in defaults.
fn load_config(explicit: Option<&Path>) -> Config {
    if let Some(path) = explicit {
        return match Config::load(path) {
            Ok(cfg) => {
                debug!("loaded config from {}", path.display());
                cfg
            }
            Err(e) => {
                error!("{}", e);
                process::exit(1);
            }
        };
    }

    match config::default_path() {
        Some(path) if path.exists() => match Config::load(&path) {
            Ok(cfg) => {
                debug!("loaded config from {}", path.display());
                cfg
            }
            Err(e) => {
                warn!("{}, using defaults", e);
                Config::default()
            }
        },
        _ => {
            debug!("no config file, using defaults");
            Config::default()
        }
    }
}

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use seafreight_cli::output::OutputFormat;
use seafreight_lib::{ContainerId, PortId, ShipId, DEFAULT_CONTAINER_PORT};

mod commands;

use commands::ScenarioArgs;

#[derive(Parser, Debug)]
#[command(author, version, about = "Seafreight port, ship and container scenarios")]
struct Cli {
    /// Scenario JSON file (defaults to $SEAFREIGHT_INPUT, then ./input.json).
    #[arg(long, global = true)]
    input: Option<PathBuf>,

    /// Port where every container of the scenario is placed.
    #[arg(long, global = true, default_value_t = DEFAULT_CONTAINER_PORT)]
    container_port: PortId,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Report every port with its containers and docked ships (default).
    Report,
    /// Great-circle distance between two ports in kilometres.
    Distance {
        #[arg(long = "from")]
        from: PortId,
        #[arg(long = "to")]
        to: PortId,
    },
    /// Sail a ship to another port if it has enough fuel.
    Sail {
        #[arg(long)]
        ship: ShipId,
        /// Destination port.
        #[arg(long = "to")]
        to: PortId,
        /// Fuel to add before sailing.
        #[arg(long)]
        refuel: Option<f64>,
    },
    /// Move a container from a ship's current port onto the ship.
    Load {
        #[arg(long)]
        ship: ShipId,
        #[arg(long)]
        container: ContainerId,
    },
    /// Run a JSON list of refuel, sail, load and unload steps in order.
    Simulate {
        /// Steps file, e.g. `[{"action": "load", "ship": 1, "container": 4}]`.
        #[arg(long)]
        steps: PathBuf,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let scenario = ScenarioArgs {
        input: cli.input,
        container_port: cli.container_port,
    };
    let format = cli.format;

    match cli.command.unwrap_or(Command::Report) {
        Command::Report => commands::report::handle_report(&scenario, format),
        Command::Distance { from, to } => {
            commands::distance::handle_distance(&scenario, from, to, format)
        }
        Command::Sail { ship, to, refuel } => {
            commands::sail::handle_sail(&scenario, ship, to, refuel, format)
        }
        Command::Load { ship, container } => {
            commands::load::handle_load(&scenario, ship, container, format)
        }
        Command::Simulate { steps } => {
            commands::steps::handle_simulate(&scenario, &steps, format)
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use pawpal_core::{Owner, PriorityGreedyScheduler, Scheduler, today_in};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod config;
mod household;
mod render;

#[derive(Parser, Debug)]
#[command(name = "pawpal", version, about = "Plan a day of pet care")]
struct Cli {
    /// Log scheduling decisions (same as RUST_LOG=debug)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Schedule the built-in two-pet demo household
    Demo {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Schedule a household described in a TOML file
    Plan {
        /// Path to the household file
        #[arg(long)]
        household: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Write a default config.toml into $PAWPAL_HOME (~/.pawpal)
    Init,
}

#[derive(clap::Args, Debug)]
struct OutputArgs {
    /// Day to plan, YYYY-MM-DD (default: today in the configured timezone)
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Print the schedule as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Demo { output } => {
            let owner = household::demo_household()?;
            run_plan(&owner, &output)?;
        }

        Command::Plan { household, output } => {
            let owner = household::load_household(&household)?;
            run_plan(&owner, &output)?;
        }

        Command::Init => {
            config::init_config()?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run_plan(owner: &Owner, output: &OutputArgs) -> Result<()> {
    let cfg = config::load_config()?;
    debug!(timezone = %cfg.timezone, "config loaded");

    let date = match output.date {
        Some(d) => d,
        None => today_in(&cfg.timezone).context("resolve today's date")?,
    };

    let scheduler = PriorityGreedyScheduler::new(owner, date).with_weights(cfg.weights);
    let schedule = scheduler.generate_schedule();

    if output.json {
        let json = serde_json::to_string_pretty(&schedule.to_view())?;
        println!("{json}");
        return Ok(());
    }

    render::print_household(owner);
    render::print_schedule(&schedule);
    Ok(())
}

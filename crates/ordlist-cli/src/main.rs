//! `ordlist` command-line entry point

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use ordlist_cli::{logging, render_items, replay_str, Replay, DEMO_SCRIPT};
use ordlist_core::EditorConfig;
use ordlist_stopwatch::format_elapsed;
use std::path::PathBuf;
use std::time::Duration;

fn cli() -> Command {
    Command::new("ordlist")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Ordered list editor driver")
        .subcommand_required(true)
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON on stderr"),
        )
        .subcommand(
            Command::new("replay")
                .about("Replay an edit script and print its snapshots")
                .arg(
                    Arg::new("script")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("Path to the edit script"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .value_parser(value_parser!(PathBuf))
                        .help("TOML editor configuration"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        )
        .subcommand(
            Command::new("demo")
                .about("Run the built-in reorder walkthrough")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        )
        .subcommand(
            Command::new("stopwatch")
                .about("Format a duration as MM:SS:CC")
                .arg(
                    Arg::new("millis")
                        .long("millis")
                        .required(true)
                        .value_parser(value_parser!(u64))
                        .help("Elapsed milliseconds"),
                ),
        )
}

fn main() -> Result<()> {
    let matches = cli().get_matches();
    logging::init(matches.get_flag("log-json"));

    match matches.subcommand() {
        Some(("replay", args)) => run_replay(args),
        Some(("demo", args)) => {
            let replay = replay_str(DEMO_SCRIPT, &EditorConfig::default())
                .context("built-in walkthrough failed")?;
            print_replay(&replay, args.get_flag("json"))
        }
        Some(("stopwatch", args)) => {
            let millis = args
                .get_one::<u64>("millis")
                .copied()
                .context("--millis is required")?;
            println!("{}", format_elapsed(Duration::from_millis(millis)));
            Ok(())
        }
        _ => Ok(()),
    }
}

fn run_replay(args: &ArgMatches) -> Result<()> {
    let script_path = args
        .get_one::<PathBuf>("script")
        .context("script path is required")?;

    let config = match args.get_one::<PathBuf>("config") {
        Some(path) => EditorConfig::load(path)?,
        None => EditorConfig::default(),
    };

    let text = std::fs::read_to_string(script_path)
        .with_context(|| format!("failed to read script {}", script_path.display()))?;
    let replay = replay_str(&text, &config)
        .with_context(|| format!("replay of {} failed", script_path.display()))?;

    print_replay(&replay, args.get_flag("json"))
}

fn print_replay(replay: &Replay, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(replay)?);
        return Ok(());
    }

    if replay.snapshots.is_empty() {
        println!("Final:");
        print!("{}", render_items(&replay.final_items));
        return Ok(());
    }

    for snapshot in &replay.snapshots {
        println!("After line {}:", snapshot.line);
        print!("{}", render_items(&snapshot.items));
    }
    Ok(())
}

//! File round-trip helper.
//!
//! Creates a file, writes text to it, reports the byte count, then reads the
//! file back and prints it. Defaults come from `roundtrip.toml`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use roundtrip::core::policy::FailurePolicy;
use roundtrip::exit_codes;
use roundtrip::fatal::halt;
use roundtrip::io::config::{DEFAULT_CONFIG_FILE, RoundTripConfig, load_config};
use roundtrip::io::files::{create_and_write, open_existing, read_all};
use roundtrip::io::init::{InitOptions, init_workspace};
use roundtrip::output;
use roundtrip::trip::run_round_trip;

#[derive(Parser)]
#[command(
    name = "roundtrip",
    version,
    about = "Write a file, then read it back"
)]
struct Cli {
    /// Config file with default path, content and failure policy.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// How a fatal error stops the process (overrides the config file).
    #[arg(long, global = true, value_enum)]
    policy: Option<FailurePolicy>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a default config file and create the target's directory.
    Init {
        /// Overwrite an existing config file.
        #[arg(short, long)]
        force: bool,
    },
    /// Write content, read it back, and check both match.
    Run {
        #[arg(long)]
        path: Option<PathBuf>,
        #[arg(long)]
        content: Option<String>,
        /// Print the report as JSON instead of status lines.
        #[arg(long)]
        json: bool,
    },
    /// Create (or truncate) the target and write content to it.
    Write {
        #[arg(long)]
        path: Option<PathBuf>,
        #[arg(long)]
        content: Option<String>,
    },
    /// Print the whole target file.
    Read {
        #[arg(long)]
        path: Option<PathBuf>,
    },
    /// Check that the target can be opened; failure is reported, not fatal.
    Open {
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

fn main() {
    roundtrip::logging::init();
    let cli = Cli::parse();
    let mut policy = cli.policy.unwrap_or_default();
    match run(cli, &mut policy) {
        Ok(code) => std::process::exit(code),
        Err(err) => halt(policy, &err),
    }
}

/// Dispatch the command. Once the config is loaded, `policy` is updated to the
/// one it names unless `--policy` was given.
fn run(cli: Cli, policy: &mut FailurePolicy) -> Result<i32> {
    let Cli {
        config,
        policy: policy_flag,
        command,
    } = cli;

    let resolve = |policy: &mut FailurePolicy,
                   path: Option<PathBuf>,
                   content: Option<String>|
     -> Result<RoundTripConfig> {
        let base = load_config(&config).with_context(|| "load config")?;
        if policy_flag.is_none() {
            *policy = base.failure_policy;
        }
        base.with_overrides(path, content, policy_flag)
    };

    match command {
        Command::Init { force } => cmd_init(&config, force),
        Command::Run {
            path,
            content,
            json,
        } => cmd_run(&resolve(policy, path, content)?, json),
        Command::Write { path, content } => cmd_write(&resolve(policy, path, content)?),
        Command::Read { path } => cmd_read(&resolve(policy, path, None)?),
        Command::Open { path } => cmd_open(&resolve(policy, path, None)?),
    }
}

fn cmd_init(config: &Path, force: bool) -> Result<i32> {
    let root = std::env::current_dir().context("resolve working directory")?;
    let paths = init_workspace(&root, config, &InitOptions { force })?;
    println!("wrote {}", paths.config_path.display());
    println!("created {}", paths.target_dir.display());
    Ok(exit_codes::OK)
}

fn cmd_run(cfg: &RoundTripConfig, json: bool) -> Result<i32> {
    let report = run_round_trip(&cfg.path, &cfg.content)?;
    if json {
        let payload = serde_json::to_string_pretty(&report).context("serialize report")?;
        println!("{payload}");
    } else {
        println!("{}", output::write_line(&report.write));
        println!("{}", report.read.content);
        println!("{}", output::verification_line(&report.verification));
    }
    if report.is_match() {
        Ok(exit_codes::OK)
    } else {
        Ok(exit_codes::MISMATCH)
    }
}

fn cmd_write(cfg: &RoundTripConfig) -> Result<i32> {
    let written = create_and_write(&cfg.path, &cfg.content)?;
    println!("{}", output::write_line(&written));
    Ok(exit_codes::OK)
}

fn cmd_read(cfg: &RoundTripConfig) -> Result<i32> {
    let read = read_all(&cfg.path)?;
    println!("{}", read.content);
    Ok(exit_codes::OK)
}

fn cmd_open(cfg: &RoundTripConfig) -> Result<i32> {
    match open_existing(&cfg.path) {
        Ok(handle) => {
            let len = handle.len()?;
            println!("{}", output::opened_line(handle.path(), len));
            handle.close()?;
        }
        Err(err) => println!("{}", output::open_failed_line(&err)),
    }
    Ok(exit_codes::OK)
}

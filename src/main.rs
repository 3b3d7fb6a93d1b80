use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use taskhost::config::{Config, DEFAULT_CONFIG, DEFAULT_CONFIG_FILE};
use taskhost::Workflow;

/// CLI entry point for taskhost
#[derive(Parser)]
#[command(author, version, about = "Runs build tasks from Lua scripts", long_about = None)]
struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
enum Commands {
    /// Runs the `main` function of a Lua script
    Run {
        /// Path to the script
        file: PathBuf,
        /// Extra arguments passed to the script
        #[arg(trailing_var_arg = true)]
        args: Vec<String>,
    },
    /// Creates a flows directory, a default config and a sample script
    Init {
        /// Directory to initialise (defaults to the current one)
        #[arg(default_value = ".")]
        path: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { file, args } => {
            let config = Config::load(&cli.config)?;
            init_tracing(&config);
            run_workflow(file, args, &config)?
        }
        Commands::Init { path } => init_workspace(path, &cli.config)?,
    }

    Ok(())
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log.filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn run_workflow(file: PathBuf, args: Vec<String>, config: &Config) -> anyhow::Result<()> {
    let mut wf_args = vec![std::env::args().next().unwrap_or_else(|| "taskhost".into())];
    wf_args.push(file.to_string_lossy().into_owned());
    wf_args.extend(args);

    if !Workflow::new(&file, config)?.execute(wf_args)? {
        anyhow::bail!("Workflow returned false: {}", file.display());
    }
    Ok(())
}

fn init_workspace(path: PathBuf, config_file: &Path) -> anyhow::Result<()> {
    let flows_dir = path.join("flows");
    fs::create_dir_all(&flows_dir)?;

    let config_path = path.join(config_file);
    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)?;
    }
    if !config_path.exists() {
        fs::write(&config_path, DEFAULT_CONFIG)?;
    }

    let sample_path = flows_dir.join("hello.lua");
    if !sample_path.exists() {
        fs::write(&sample_path, SAMPLE_FLOW)?;
    }

    println!("Initialised taskhost in {}", path.display());
    Ok(())
}

const SAMPLE_FLOW: &str = r#"local flow = {}

function flow.main(args)
  run_task(tasks.message{ text = "Hello from " .. args[2] })
  run_task(tasks.make_dir{ directories = { "out" } })

  local ok, err = try_run_task(tasks.exec{ command = "git --version" })
  if not ok then
    host.warn("git is not available: " .. err)
  end

  return true
end

return flow
"#;

use clap::{Parser, Subcommand};
use reconflow::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

/// Order tool pipelines and synthesize their commands
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true, env = "RECONFLOW_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the commands generated from a saved workflow
    #[command(name = "commands")]
    List {
        /// Path to the saved workflow JSON (a document or the saved list)
        workflow_path: String,
        /// Also write the ordered plan to this file
        #[arg(long)]
        save_plan: Option<String>,
    },
    /// Send every generated command to the execution endpoint, in order
    Execute {
        /// Path to the saved workflow JSON (a document or the saved list)
        workflow_path: String,
        /// Base URL of the backend serving /api/execute-command
        #[arg(long)]
        endpoint: Option<String>,
        /// Stop at the first failed command
        #[arg(long)]
        abort_on_failure: bool,
        /// Per-command timeout in seconds (0 disables it)
        #[arg(long)]
        timeout: Option<u64>,
    },
    /// Print a plan previously written with --save-plan
    ShowPlan {
        /// Path to the plan file
        plan_path: String,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("reconflow=info,warn")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => FlowConfig::load(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load config: {}", e))),
        None => FlowConfig::default(),
    };

    match cli.command {
        Commands::List {
            workflow_path,
            save_plan,
        } => run_commands(&workflow_path, save_plan.as_deref()),
        Commands::Execute {
            workflow_path,
            endpoint,
            abort_on_failure,
            timeout,
        } => {
            let mut dispatch = config.dispatch;
            if let Some(endpoint) = endpoint {
                dispatch.endpoint = endpoint;
            }
            if abort_on_failure {
                dispatch.failure_policy = FailurePolicy::Abort;
            }
            if let Some(secs) = timeout {
                dispatch.timeout_secs = secs;
            }
            run_execute(&workflow_path, &dispatch).await;
        }
        Commands::ShowPlan { plan_path } => {
            let plan = Plan::from_file(&plan_path).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to load plan '{}': {}", plan_path, e))
            });
            print_lines(&plan.listing());
        }
    }
}

/// Loads a saved workflow and plans it.
fn load_plan(workflow_path: &str) -> Plan {
    let json = fs::read_to_string(workflow_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read workflow file '{}': {}",
            workflow_path, e
        ))
    });

    let document = WorkflowDocument::from_json(&json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse workflow: {}", e)));
    if let Some(name) = &document.name {
        println!("Loaded workflow '{}'", name);
    }
    let workflow = document
        .into_workflow()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert workflow: {}", e)));

    let start = Instant::now();
    let plan = Planner::builder(workflow).build().plan();
    tracing::debug!(elapsed = ?start.elapsed(), steps = plan.len(), "planning finished");
    plan
}

fn run_commands(workflow_path: &str, save_plan: Option<&str>) {
    let plan = load_plan(workflow_path);
    print_lines(&plan.listing());

    if let Some(path) = save_plan {
        plan.save(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to save plan: {}", e)));
        println!("  -> Wrote plan to '{}'", path);
    }
}

async fn run_execute(workflow_path: &str, dispatch: &DispatchConfig) {
    let plan = load_plan(workflow_path);

    let executor = HttpExecutor::new(&dispatch.endpoint);
    println!("Dispatching to {}", executor.endpoint());
    let dispatcher = Dispatcher::from_config(Box::new(executor), dispatch);

    let start = Instant::now();
    let report = dispatcher.run(&plan).await;
    let elapsed: Duration = start.elapsed();

    print_lines(&report.lines());
    println!("Total Execution: {:?}", elapsed);

    if !report.succeeded() {
        std::process::exit(1);
    }
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}

//! Task board CLI.
//!
//! Drives the board store against a configured REST backend.
//! Configuration via CLI flags, environment variables, or config file
//! (`~/.config/taskboard/config.toml`).
//!
//! ```bash
//! # List the board, filtered
//! taskboard --api-url http://localhost:3000 list --filter "bug"
//!
//! # Create a task under a project
//! taskboard task add --project p1 --title "Fix login bug" --description "urgent"
//!
//! # Mark done / assign / move
//! taskboard task done t1
//! taskboard task assign t1 alice
//! taskboard task move t1 p2
//!
//! # Create a project
//! taskboard project add --name "Backend"
//! ```

use clap::Parser;

use taskboard::config::{CliArgs, ClientConfig};
use taskboard::gateway::{ProjectGateway, TaskGateway};
use taskboard::store::BoardStore;
use taskboard_api::project::Project;

#[derive(clap::Parser, Debug)]
#[command(version, about = "Task board client")]
struct Cli {
    #[command(flatten)]
    args: CliArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// List projects and their tasks.
    List {
        /// Case-insensitive substring filter on task title or description.
        #[arg(long, default_value = "")]
        filter: String,
    },
    /// Task operations.
    #[command(subcommand)]
    Task(TaskCommand),
    /// Project operations.
    #[command(subcommand)]
    Project(ProjectCommand),
}

#[derive(clap::Subcommand, Debug)]
enum TaskCommand {
    /// Create a task under a project.
    Add {
        /// Project id to create the task under (default: first project).
        #[arg(long)]
        project: Option<String>,
        /// Task title.
        #[arg(long)]
        title: String,
        /// Task description.
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Mark a task as done.
    Done {
        /// Task id.
        task_id: String,
    },
    /// Assign a task to a user.
    Assign {
        /// Task id.
        task_id: String,
        /// User id.
        user_id: String,
    },
    /// Move a task to another project.
    Move {
        /// Task id.
        task_id: String,
        /// Target project id.
        project_id: String,
    },
}

#[derive(clap::Subcommand, Debug)]
enum ProjectCommand {
    /// Create a project.
    Add {
        /// Project name.
        #[arg(long)]
        name: String,
        /// Project description.
        #[arg(long, default_value = "")]
        description: String,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load config from CLI args + config file + env vars + defaults.
    let config = match ClientConfig::load(&cli.args) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading configuration: {e}");
            std::process::exit(1);
        }
    };

    // Initialize tracing with the resolved log level.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tracing::debug!(base_url = %config.api.base_url, "taskboard starting");

    let store = match build_store(&config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(store, cli.command).await {
        tracing::error!(error = %e, "command failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Builds the store with both gateways pointed at the configured API.
fn build_store(config: &ClientConfig) -> Result<BoardStore, taskboard::gateway::GatewayError> {
    Ok(BoardStore::new(
        TaskGateway::new(&config.api)?,
        ProjectGateway::new(&config.api)?,
    ))
}

/// Runs one command against the store.
async fn run(mut store: BoardStore, command: Command) -> Result<(), taskboard::store::StoreError> {
    match command {
        Command::List { filter } => {
            store.load_projects().await?;
            store.set_filter(filter);
            print_board(&store.filtered_view());
        }
        Command::Task(TaskCommand::Add {
            project,
            title,
            description,
        }) => {
            store.load_projects().await?;
            if let Some(project_id) = project {
                store.select_project(project_id);
            }
            store.set_draft_title(title);
            store.set_draft_description(description);
            let task = store.submit_new_task().await?;
            println!("created task {} ({})", task.id, task.title);
        }
        Command::Task(TaskCommand::Done { task_id }) => {
            let task = store.complete_task(&task_id).await?;
            println!("task {} is now {}", task.id, task.status);
        }
        Command::Task(TaskCommand::Assign { task_id, user_id }) => {
            let task = store.assign_task(&task_id, &user_id).await?;
            println!(
                "task {} assigned to {}",
                task.id,
                task.assigned_user_id.as_deref().unwrap_or("nobody")
            );
        }
        Command::Task(TaskCommand::Move {
            task_id,
            project_id,
        }) => {
            let task = store.move_task(&task_id, &project_id).await?;
            println!(
                "task {} moved to project {}",
                task.id,
                task.project_id.as_deref().unwrap_or("none")
            );
        }
        Command::Project(ProjectCommand::Add { name, description }) => {
            let project = store.create_project(&name, &description).await?;
            println!("created project {} ({})", project.id, project.name);
        }
    }
    Ok(())
}

/// Prints the filtered board, one project header per block.
fn print_board(projects: &[Project]) {
    if projects.is_empty() {
        println!("no matching tasks");
        return;
    }
    for project in projects {
        println!("{} ({})", project.name, project.id);
        for task in &project.tasks {
            let assignee = task
                .assigned_user_id
                .as_deref()
                .map(|u| format!(" @{u}"))
                .unwrap_or_default();
            println!("  [{}] {} ({}){assignee}", task.status, task.title, task.id);
        }
    }
}

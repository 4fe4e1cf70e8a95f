use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;

use rbi_client::ApiClient;
use rbi_core::{
    Action, NewScriptRequest, RouteRegistry, RunScriptRequest, UpdateActionsRequest,
    UpdateGraphRequest, UpdateScriptRequest, ViewCatalog, ViewLoader,
};
use rbi_shared::config::AppConfig;

#[derive(Parser)]
#[command(name = "rbi")]
#[command(about = "Command-line console for the RBI backend")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Backend base URL; overrides `client.base_url`
    #[arg(long, global = true, env = "RBI_API_URL")]
    api_url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List automation scripts
    Scripts,
    /// Create an automation script
    NewScript {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value_t = 0)]
        user_id: i64,
        /// JSON array of actions
        #[arg(long, default_value = "[]")]
        actions: String,
    },
    /// Delete an automation script
    DelScript {
        #[arg(long)]
        id: String,
    },
    /// Replace a script's name, description and actions
    UpdateScript {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "[]")]
        actions: String,
    },
    /// Replace only the actions of a script
    UpdateActions {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        actions: String,
    },
    /// Replay a script against a remote browser
    RunScript {
        #[arg(long)]
        id: i64,
        /// DevTools endpoint of the target browser
        #[arg(long)]
        remote_url: String,
    },
    /// List running containers
    Containers,
    /// Launch a container opening a document
    Launch {
        /// Defaults to `client.launch_file_url`
        #[arg(long)]
        file_url: Option<String>,
    },
    /// Stop a container
    Stop {
        #[arg(long)]
        container_id: String,
    },
    /// Show the graph of an automation script
    Graph {
        #[arg(long)]
        automation_id: i64,
    },
    /// Replace the graph of an automation script
    UpdateGraph {
        #[arg(long)]
        automation_id: i64,
        /// Graph document as JSON
        #[arg(long)]
        data: String,
    },
    /// Fetch the menu listing from the backend
    MenuList,
    /// Print the console's navigation tree
    Routes,
    /// Print the primary navigation menu
    Menu,
    /// Resolve a console path to its view
    Navigate { path: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    rbi_shared::telemetry::init_stderr_telemetry("warn")?;
    let cli = Cli::parse();

    let mut config = AppConfig::load().context("loading configuration")?;
    if let Some(url) = cli.api_url {
        config.client.base_url = url;
    }
    debug!(base_url = %config.client.base_url, "configuration loaded");

    match cli.command {
        Commands::Routes => print_routes(&config)?,
        Commands::Menu => print_json(&registry()?.menu())?,
        Commands::Navigate { path } => print_json(&registry()?.navigate(&path).await?)?,
        command => run_remote(command, ApiClient::from_settings(&config.client)?).await?,
    }

    Ok(())
}

async fn run_remote(command: Commands, client: ApiClient) -> anyhow::Result<()> {
    match command {
        Commands::Scripts => print_json(&client.get_scripts().await?)?,
        Commands::NewScript {
            name,
            description,
            user_id,
            actions,
        } => {
            let request = NewScriptRequest {
                user_id,
                name,
                description,
                actions: parse_actions(&actions)?,
            };
            println!("{}", client.add_new_script(&request).await?);
        }
        Commands::DelScript { id } => println!("{}", client.del_script(&id).await?),
        Commands::UpdateScript {
            id,
            name,
            description,
            actions,
        } => {
            let request = UpdateScriptRequest {
                automation_id: id,
                name,
                description,
                actions: parse_actions(&actions)?,
            };
            println!("{}", client.update_script(&request).await?);
        }
        Commands::UpdateActions { id, actions } => {
            let request = UpdateActionsRequest {
                automation_id: id,
                actions: parse_actions(&actions)?,
            };
            println!("{}", client.update_actions(&request).await?);
        }
        Commands::RunScript { id, remote_url } => {
            let request = RunScriptRequest {
                automation_id: id,
                remote_url,
            };
            println!("{}", client.run_script(&request).await?);
        }
        Commands::Containers => print_json(&client.get_data().await?)?,
        Commands::Launch { file_url } => {
            let launched = match file_url {
                Some(url) => client.launch_container(&url).await?,
                None => client.launch_default_container().await?,
            };
            print_json(&launched)?;
        }
        Commands::Stop { container_id } => {
            println!("{}", client.stop_container(&container_id).await?)
        }
        Commands::Graph { automation_id } => print_json(&client.get_graph(automation_id).await?)?,
        Commands::UpdateGraph {
            automation_id,
            data,
        } => {
            let request = UpdateGraphRequest {
                automation_id,
                data: serde_json::from_str(&data).context("graph data is not valid JSON")?,
            };
            println!("{}", client.update_graph(&request).await?);
        }
        Commands::MenuList => print_json(&client.list_menu().await?)?,
        Commands::Routes | Commands::Menu | Commands::Navigate { .. } => {
            anyhow::bail!("command does not talk to the backend")
        }
    }
    Ok(())
}

fn registry() -> anyhow::Result<RouteRegistry> {
    let loader: Arc<dyn ViewLoader> = Arc::new(ViewCatalog::default());
    Ok(RouteRegistry::with_default_fragments(loader)?)
}

fn print_routes(config: &AppConfig) -> anyhow::Result<()> {
    println!("{}", config.website.title);
    for entry in registry()?.routes() {
        let icon = entry.meta.icon.map(|i| i.to_string()).unwrap_or_default();
        println!("{:>3}  {:<16} {} {}", entry.sort_key(), entry.path, entry.meta.title, icon);
        for child in &entry.children {
            let module = child.view().map(|v| v.module()).unwrap_or("-");
            println!("     {:<16} {} -> {}", entry.child_path(child), child.meta.title, module);
        }
    }
    Ok(())
}

fn parse_actions(raw: &str) -> anyhow::Result<Vec<Action>> {
    serde_json::from_str(raw).context("actions must be a JSON array of actions")
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

use std::path::PathBuf;
use std::sync::Arc;

use banking_tools::{default_registry, Catalog, RegistryToolExecutor, ToolServiceConfig};
use clap::{Parser, Subcommand};
use tool_core::{ToolContext, ToolExecutor, ToolRequest};
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Parser)]
#[command(name = "tool-cli")]
#[command(about = "List and call the banking tools against a product catalog")]
struct Args {
    /// Catalog JSON file. Falls back to BANKING_CATALOG_PATH, then products.json.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the tool definitions a host would discover
    List,

    /// Call a tool and print its result
    Call {
        /// Tool name, e.g. get_products_by_type
        tool: String,

        /// Tool arguments as a JSON object
        #[arg(long, default_value = "{}")]
        args: String,

        /// Agent id passed as caller context
        #[arg(long)]
        agent_id: Option<String>,

        /// Session id passed as caller context
        #[arg(long)]
        session_id: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = ToolServiceConfig::from_env()?;
    if let Some(path) = args.catalog {
        config.catalog_path = path;
    }

    let catalog = Arc::new(Catalog::load(&config.catalog_path)?);
    let executor = RegistryToolExecutor::with_policy(default_registry(catalog), config.policy());

    match args.command {
        Command::List => {
            let definitions = executor.registry().get_definitions();
            println!("{}", serde_json::to_string_pretty(&definitions)?);
        }
        Command::Call {
            tool,
            args,
            agent_id,
            session_id,
        } => {
            let context = ToolContext {
                agent_id,
                session_id,
                customer_id: None,
            };
            let request = ToolRequest::from_call(Uuid::new_v4().to_string(), tool, &args)?
                .with_context(context);

            info!("Calling {} ({})", request.name, request.id);
            let result = executor.execute(request).await;
            if !result.success {
                return Err(result.content.into());
            }

            let value: serde_json::Value = serde_json::from_str(&result.content)?;
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }

    Ok(())
}

use assistant_client::{health_with_config_path, run_with_config_path};
use clap::Parser;
use dotenv::dotenv;

/// Command line client for the local assistant agent service
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Probe the agent's health endpoint instead of sending a prompt
    #[arg(long)]
    health: bool,

    /// Prompt to send to the agent
    #[arg(required_unless_present = "health")]
    prompt: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from `.env` file into std::env (optional)
    dotenv().ok();

    // Parse command line arguments
    let args = Args::parse();

    let reply = if args.health {
        health_with_config_path(&args.config).await?
    } else {
        run_with_config_path(&args.config, args.prompt.as_deref().unwrap_or_default()).await?
    };
    let rendered = serde_json::to_string_pretty(&reply)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
    println!("{rendered}");
    Ok(())
}

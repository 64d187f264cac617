use std::path::PathBuf;

use fellowship_lib::bootstrap::{
    create_runtime, init_tracing_subscriber, load_config, resolve_config,
};
use fellowship_lib::commands::wizard;
use fw_core::config::AppConfig;
use tracing::{debug, info, warn};

const CONFIG_FILE_NAME: &str = "config.toml";

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("fellowship").join(CONFIG_FILE_NAME))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(default_config_path);
    let file_config = match config_path {
        Some(path) if path.exists() => load_config(path)?,
        _ => AppConfig::empty(),
    };
    let config = resolve_config(file_config);

    init_tracing_subscriber(&config)?;
    info!(log_dir = %config.log_dir.display(), "fellowship starting");

    let (runtime, mut events) = create_runtime(&config)?;
    tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            debug!(?event, "wizard ui event");
        }
    });

    match wizard::get_wizard_state(&runtime).await {
        Ok(state) => println!("{}", serde_json::to_string_pretty(&state)?),
        Err(err) => warn!(error = %err, "failed to read wizard state"),
    }

    Ok(())
}

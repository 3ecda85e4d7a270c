use std::{fs, path::Path};

use anyhow::Context;
use tracing::info;
use waymark_routing::routing_config::RoutingConfig;

/// Reads the routing settings from `path`, or the defaults without a file.
pub fn load(path: Option<&Path>) -> Result<RoutingConfig, anyhow::Error> {
    let Some(path) = path else {
        return Ok(RoutingConfig::default());
    };

    let content = fs::read_to_string(path)
        .with_context(|| format!("Could not read config file {}", path.display()))?;
    let config: RoutingConfig = serde_json::from_str(&content)
        .with_context(|| format!("Invalid config file {}", path.display()))?;

    info!("Loaded config from {}", path.display());

    Ok(config)
}

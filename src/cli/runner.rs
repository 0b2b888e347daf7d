//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::config::TapConfig;
use crate::error::{Error, Result};
use crate::schema::{build_custom_field_schema, parse_resource_types, JsonSchema};
use crate::sell::SellClient;
use crate::types::ResourceType;
use serde_json::json;
use std::collections::BTreeSet;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Check { config_json } => self.check(config_json.as_deref()).await,
            Commands::Discover {
                config_json,
                resources,
            } => {
                self.discover(config_json.as_deref(), resources.as_deref())
                    .await
            }
        }
    }

    /// Load configuration from inline JSON or the config file flag
    fn load_config(&self, config_json: Option<&str>) -> Result<TapConfig> {
        if let Some(contents) = config_json {
            return TapConfig::from_str_json(contents);
        }
        let path = self
            .cli
            .config
            .as_ref()
            .ok_or_else(|| Error::config("Config not specified (use -C or --config-json)"))?;
        TapConfig::from_file(path)
    }

    /// Verify the configured credentials
    async fn check(&self, config_json: Option<&str>) -> Result<()> {
        let config = self.load_config(config_json)?;
        let client = SellClient::new(&config)?;

        match client.check().await {
            Ok(()) => {
                println!("{}", json!({"status": "ok"}));
                Ok(())
            }
            Err(e) => {
                println!("{}", json!({"status": "failed", "message": e.to_string()}));
                Err(e)
            }
        }
    }

    /// Build and print the merged custom-field schema
    async fn discover(&self, config_json: Option<&str>, resources: Option<&str>) -> Result<()> {
        let config = self.load_config(config_json)?;
        let client = SellClient::new(&config)?;

        let resource_set = resolve_resource_set(resources)?;
        info!(resources = ?resource_set, "building custom field schema");

        let properties = build_custom_field_schema(&client, &resource_set).await?;
        info!(fields = properties.len(), "schema built");

        let document = JsonSchema::new()
            .with_title("custom_fields")
            .with_properties(properties);
        println!("{}", document.to_json_pretty());
        Ok(())
    }
}

/// Resolve an optional comma-separated resource list to a validated set.
///
/// `None` means all resource types; validation happens before any request.
fn resolve_resource_set(resources: Option<&str>) -> Result<BTreeSet<ResourceType>> {
    match resources {
        None => Ok(ResourceType::ALL.iter().copied().collect()),
        Some(list) => {
            let names: Vec<&str> = list
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .collect();
            parse_resource_types(&names)
        }
    }
}

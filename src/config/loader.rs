use anyhow::{bail, Context, Result};
use log::info;
use serde::Deserialize;
use std::{fs, path::Path, path::PathBuf};

use super::menu::Menu;
use crate::core::workspace::{Titled, Workspace};

#[derive(Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(default)]
    pub menu: Menu,
    #[serde(default)]
    pub workspaces: Vec<Workspace>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config = Self::parse(&content)?;
        info!(
            "Loaded {} workspaces from {}",
            config.workspaces.len(),
            path.display()
        );

        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse config file")?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        for (index, workspace) in self.workspaces.iter().enumerate() {
            if workspace.title().trim().is_empty() {
                bail!("Workspace {} has an empty title", index);
            }
        }
        Ok(())
    }

    pub fn get_config_path() -> Result<PathBuf> {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .context("Failed to get HOME directory")?;

        Ok(PathBuf::from(home).join(".config/workspaces/config.toml"))
    }

    fn create_default_config(path: &Path) -> Result<()> {
        let default_config = r###"# Menu behaviour
[menu]
# Go back to the first page after a bad selection
reset_page_on_error = false

# Workspaces
# Every workspace needs a title. urls, files and programs are optional and
# are opened in that order.
# Paths should use forward slashes, also on Windows.
#
# [[workspaces]]
# title = "Writing"
# urls = ["https://www.thesaurus.com"]
# files = ["C:/Users/me/Documents/thesis", "C:/Users/me/Documents/notes.txt"]
# programs = ["C:/Program Files/Notepad++/notepad++.exe"]
"###;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        info!("Writing default config to {}", path.display());
        fs::write(path, default_config).context("Failed to write default config")
    }
}

use anyhow::{Context, Result};
use log::debug;
use std::path::Path;
use std::process::{Command as ProcessCommand, Stdio};

/// Operating system services the menu needs: launching targets and clearing
/// the terminal.
pub trait Platform {
    /// Opens `url` in a new tab of the default browser.
    fn open_url(&self, url: &str) -> Result<()>;

    /// Opens a regular file with its default handler.
    fn open_file(&self, path: &Path) -> Result<()>;

    /// Shows a directory in the file browser.
    fn open_directory(&self, path: &Path) -> Result<()>;

    /// Starts a program without waiting for it.
    fn start_program(&self, program: &str) -> Result<()>;

    fn clear_screen(&self) -> Result<()>;
}

pub struct SystemPlatform;

impl SystemPlatform {
    fn spawn_detached(mut command: ProcessCommand) -> Result<()> {
        debug!("Spawning {:?}", command);
        let program = command.get_program().to_string_lossy().into_owned();

        command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("Failed to spawn {}", program))?;

        Ok(())
    }

    /// The command that hands `target` to the desktop's default handler.
    /// `target` is always passed as a single argument, never through a shell.
    fn default_open_command(target: &str) -> ProcessCommand {
        let opener = if cfg!(target_os = "windows") {
            "explorer"
        } else if cfg!(target_os = "macos") {
            "open"
        } else {
            "xdg-open"
        };

        let mut command = ProcessCommand::new(opener);
        command.arg(target);
        command
    }

    fn open_with_default(target: &str) -> Result<()> {
        Self::spawn_detached(Self::default_open_command(target))
    }
}

impl Platform for SystemPlatform {
    fn open_url(&self, url: &str) -> Result<()> {
        Self::open_with_default(url)
    }

    fn open_file(&self, path: &Path) -> Result<()> {
        Self::open_with_default(&path.to_string_lossy())
    }

    fn open_directory(&self, path: &Path) -> Result<()> {
        Self::open_with_default(&path.to_string_lossy())
    }

    fn start_program(&self, program: &str) -> Result<()> {
        Self::spawn_detached(ProcessCommand::new(program))
    }

    fn clear_screen(&self) -> Result<()> {
        let mut command = if cfg!(target_os = "windows") {
            let mut cls = ProcessCommand::new("cmd");
            cls.args(["/C", "cls"]);
            cls
        } else {
            ProcessCommand::new("clear")
        };
        let status = command.status().context("Failed to clear the screen")?;

        debug!("Screen cleared with {}", status);
        Ok(())
    }
}

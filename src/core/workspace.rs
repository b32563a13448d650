use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::Deserialize;
use std::io::Write;
use std::path::Path;

use crate::utils::platform::Platform;

/// Anything the selection menu can list.
pub trait Titled {
    fn title(&self) -> &str;
}

/// A named set of websites, files and programs that are opened together.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Workspace {
    title: String,
    #[serde(default)]
    urls: Option<Vec<String>>,
    #[serde(default)]
    files: Option<Vec<String>>,
    #[serde(default)]
    programs: Option<Vec<String>>,
}

impl Workspace {
    /// Creates a workspace with no entries. `title` must not be blank.
    pub fn new(title: impl Into<String>) -> Self {
        let title = title.into();
        debug_assert!(!title.trim().is_empty(), "workspace title must not be blank");

        Self {
            title,
            urls: None,
            files: None,
            programs: None,
        }
    }

    pub fn with_urls<I, S>(mut self, urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.urls = Some(urls.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.files = Some(files.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_programs<I, S>(mut self, programs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.programs = Some(programs.into_iter().map(Into::into).collect());
        self
    }

    pub fn urls(&self) -> Option<&[String]> {
        self.urls.as_deref()
    }

    pub fn files(&self) -> Option<&[String]> {
        self.files.as_deref()
    }

    pub fn programs(&self) -> Option<&[String]> {
        self.programs.as_deref()
    }

    /// Opens every URL, then every file or directory, then every program.
    /// Missing or empty lists are skipped without output.
    ///
    /// Each entry is attempted on its own; a failed launch is logged and the
    /// remaining entries are still opened. Paths that are neither a file nor
    /// a directory are skipped.
    ///
    /// A status line is written to `out` before each category that has
    /// entries. Only a failure to write that line is returned.
    pub fn open<W: Write>(&self, platform: &dyn Platform, out: &mut W) -> Result<()> {
        info!("Opening workspace {}", self.title);

        self.open_urls(platform, out)?;
        self.open_files(platform, out)?;
        self.start_programs(platform, out)
    }

    fn open_urls<W: Write>(&self, platform: &dyn Platform, out: &mut W) -> Result<()> {
        let Some(urls) = self.urls().filter(|urls| !urls.is_empty()) else {
            return Ok(());
        };

        writeln!(out, "Opening URLs...").context("Failed to write status line")?;
        for url in urls {
            if let Err(e) = platform.open_url(url) {
                warn!("Failed to open {}: {:#}", url, e);
            }
        }

        Ok(())
    }

    fn open_files<W: Write>(&self, platform: &dyn Platform, out: &mut W) -> Result<()> {
        let Some(files) = self.files().filter(|files| !files.is_empty()) else {
            return Ok(());
        };

        writeln!(out, "Opening files...").context("Failed to write status line")?;
        for file in files {
            let path = Path::new(file);
            let result = if path.is_file() {
                platform.open_file(path)
            } else if path.is_dir() {
                platform.open_directory(path)
            } else {
                debug!("Skipping {}, not a file or directory", file);
                continue;
            };

            if let Err(e) = result {
                warn!("Failed to open {}: {:#}", file, e);
            }
        }

        Ok(())
    }

    fn start_programs<W: Write>(&self, platform: &dyn Platform, out: &mut W) -> Result<()> {
        let Some(programs) = self.programs().filter(|programs| !programs.is_empty()) else {
            return Ok(());
        };

        writeln!(out, "Starting programs...").context("Failed to write status line")?;
        for program in programs {
            if let Err(e) = platform.start_program(program) {
                warn!("Failed to start {}: {:#}", program, e);
            }
        }

        Ok(())
    }
}

impl Titled for Workspace {
    fn title(&self) -> &str {
        &self.title
    }
}

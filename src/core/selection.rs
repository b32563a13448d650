use anyhow::{Context, Result};
use log::debug;
use std::io::{BufRead, Write};

use super::workspace::Titled;
use crate::ui::{banner, console::Console};
use crate::utils::platform::Platform;

pub const PAGE_SIZE: usize = 10;

const NEXT_PAGE: &str = "+";
const PREVIOUS_PAGE: &str = "-";

/// Outcome of one selection prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Absolute indices in the order they were typed. Not range checked.
    Indices(Vec<usize>),
    /// The line contained something other than digits.
    Invalid,
}

/// A console menu that shows `items` ten at a time and lets the user pick
/// entries of the current page by typing their digits.
pub struct PageableSelection<'a, T> {
    items: &'a [T],
    current_page: usize,
    notice: Option<String>,
}

impl<'a, T: Titled> PageableSelection<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        Self {
            items,
            current_page: 0,
            notice: None,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Index of the last page. An empty list still has one page.
    pub fn page_count(&self) -> usize {
        self.items.len().max(1).div_ceil(PAGE_SIZE) - 1
    }

    pub fn next_page(&mut self) {
        self.current_page = (self.current_page + 1).min(self.page_count());
    }

    pub fn previous_page(&mut self) {
        self.current_page = self.current_page.saturating_sub(1);
    }

    pub fn reset(&mut self) {
        self.current_page = 0;
    }

    /// Shows `message` below the banner on the next redraw only.
    pub fn notify(&mut self, message: impl Into<String>) {
        self.notice = Some(message.into());
    }

    /// Items shown on the current page, with their absolute start index.
    pub fn page_items(&self) -> (usize, &'a [T]) {
        let start = self.current_page * PAGE_SIZE;
        let end = (start + PAGE_SIZE).min(self.items.len());
        (start, &self.items[start.min(end)..end])
    }

    /// Maps each digit of `line` to an absolute index on the current page.
    pub fn resolve(&self, line: &str) -> Selection {
        let offset = self.current_page * PAGE_SIZE;
        let mut indices = Vec::with_capacity(line.len());

        for c in line.chars() {
            match c.to_digit(10) {
                Some(digit) => indices.push(digit as usize + offset),
                None => return Selection::Invalid,
            }
        }

        Selection::Indices(indices)
    }

    pub fn render<W: Write>(&self, out: &mut W) -> Result<()> {
        banner::draw(out).context("Failed to draw banner")?;

        if let Some(notice) = &self.notice {
            writeln!(out, "{}", notice)?;
            writeln!(out)?;
        }

        writeln!(
            out,
            "Page {} / {}",
            self.current_page + 1,
            self.page_count() + 1
        )?;

        let left_hint = if self.current_page > 0 { "<< -" } else { "    " };
        let right_hint = if self.current_page < self.page_count() {
            "+ >>"
        } else {
            "    "
        };
        writeln!(out, "{}     {}", left_hint, right_hint)?;

        let (_, items) = self.page_items();
        for (i, item) in items.iter().enumerate() {
            writeln!(out, "{}) {}", i, item.title())?;
        }

        Ok(())
    }

    /// Shows the current page and reads lines until the user either turns
    /// the page or makes a selection. Page turns redraw and ask again.
    pub fn display_and_select<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
        platform: &dyn Platform,
    ) -> Result<Selection> {
        loop {
            if let Err(e) = platform.clear_screen() {
                debug!("Could not clear screen: {:#}", e);
            }
            self.render(console.output())?;

            let line = console.read_line()?;
            self.notice = None;
            match line.as_str() {
                NEXT_PAGE => self.next_page(),
                PREVIOUS_PAGE => self.previous_page(),
                _ => return Ok(self.resolve(&line)),
            }

            debug!("Switched to page {}", self.current_page);
        }
    }
}

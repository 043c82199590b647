//! Surface writing status lines to a terminal stream.

use crossterm::style::Stylize;
use std::io::{self, Write};
use tracing::warn;
use vizload_core::traits::Surface;
use vizload_core::types::{StatusBlock, StatusKind};

/// Terminal-backed surface. Content already printed cannot be taken back, so
/// `clear` only forgets it; each appended block is printed on its own line.
pub struct ConsoleSurface<W: Write + Send> {
    id: String,
    writer: W,
    color: bool,
    blocks: Vec<StatusBlock>,
}

impl ConsoleSurface<io::Stderr> {
    /// Surface on stderr, keeping stdout free for data.
    pub fn stderr(id: impl Into<String>) -> Self {
        Self::new(id, io::stderr(), true)
    }
}

impl<W: Write + Send> ConsoleSurface<W> {
    pub fn new(id: impl Into<String>, writer: W, color: bool) -> Self {
        Self {
            id: id.into(),
            writer,
            color,
            blocks: Vec::new(),
        }
    }

    /// Blocks appended since the last clear.
    pub fn blocks(&self) -> &[StatusBlock] {
        &self.blocks
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    fn print(&mut self, block: &StatusBlock) -> io::Result<()> {
        if self.color {
            match block.kind {
                StatusKind::Loading => writeln!(self.writer, "{}", block.text.as_str().dark_grey())?,
                StatusKind::Error => writeln!(self.writer, "{}", block.text.as_str().red().bold())?,
            }
        } else {
            writeln!(self.writer, "{}", block.text)?;
        }
        self.writer.flush()
    }
}

impl<W: Write + Send> Surface for ConsoleSurface<W> {
    fn id(&self) -> &str {
        &self.id
    }

    fn clear(&mut self) {
        self.blocks.clear();
    }

    fn append(&mut self, block: StatusBlock) {
        if let Err(e) = self.print(&block) {
            warn!(surface = %self.id, error = %e, "failed to write status");
        }
        self.blocks.push(block);
    }
}

//! Output collaborators: line sinks and named display surfaces.

use std::collections::HashMap;
use std::io::{self, Write};

use stockroom_core::{DomainError, DomainResult};

/// Handle of the surface the inventory list is rendered onto.
pub const INVENTORY_DISPLAY: &str = "inventoryDisplay";

/// Line-oriented log/console collaborator.
pub trait OutputSink {
    fn append_line(&mut self, line: &str);
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn append_line(&mut self, line: &str) {
        (**self).append_line(line)
    }
}

/// Sink writing each line to an `io::Write`.
///
/// The sink contract has no failure channel, so write errors are logged and dropped.
#[derive(Debug)]
pub struct WriteSink<W> {
    writer: W,
}

/// Console sink.
pub type StdoutSink = WriteSink<io::Stdout>;

impl StdoutSink {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> WriteSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for WriteSink<W> {
    fn append_line(&mut self, line: &str) {
        if let Err(err) = writeln!(self.writer, "{line}") {
            tracing::warn!(error = %err, "failed to write output line");
        }
    }
}

/// Sink collecting lines in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySink {
    lines: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl OutputSink for MemorySink {
    fn append_line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

/// A named region that holds one rendered list at a time.
pub trait DisplaySurface {
    /// Stable handle the surface is located by.
    fn handle(&self) -> &str;

    /// Drop whatever was rendered before.
    fn clear(&mut self);

    /// Render `lines` as a list.
    fn write_list(&mut self, lines: Vec<String>);
}

/// In-memory surface; `lines()` is the currently rendered list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemorySurface {
    handle: String,
    lines: Vec<String>,
}

impl MemorySurface {
    pub fn new(handle: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            lines: Vec::new(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl DisplaySurface for MemorySurface {
    fn handle(&self) -> &str {
        &self.handle
    }

    fn clear(&mut self) {
        self.lines.clear();
    }

    fn write_list(&mut self, lines: Vec<String>) {
        self.lines.extend(lines);
    }
}

/// Surface rendering onto a text stream as a `handle:` header plus bullet rows.
///
/// A stream can't be rewound, so each render is emitted as a fresh block.
#[derive(Debug)]
pub struct TextSurface<W> {
    handle: String,
    writer: W,
}

impl<W: Write> TextSurface<W> {
    pub fn new(handle: impl Into<String>, writer: W) -> Self {
        Self {
            handle: handle.into(),
            writer,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn render(&mut self, lines: &[String]) -> io::Result<()> {
        writeln!(self.writer, "{}:", self.handle)?;
        for line in lines {
            writeln!(self.writer, "  - {line}")?;
        }
        self.writer.flush()
    }
}

impl<W: Write> DisplaySurface for TextSurface<W> {
    fn handle(&self) -> &str {
        &self.handle
    }

    fn clear(&mut self) {}

    fn write_list(&mut self, lines: Vec<String>) {
        if let Err(err) = self.render(&lines) {
            tracing::warn!(surface = %self.handle, error = %err, "failed to render list");
        }
    }
}

/// Surfaces available to the process, keyed by handle.
#[derive(Default)]
pub struct Surfaces<'a> {
    inner: HashMap<String, Box<dyn DisplaySurface + 'a>>,
}

impl<'a> Surfaces<'a> {
    pub fn new() -> Self {
        Self {
            inner: HashMap::new(),
        }
    }

    /// Register a surface under its own handle, replacing any previous one.
    pub fn insert(&mut self, surface: Box<dyn DisplaySurface + 'a>) {
        self.inner.insert(surface.handle().to_string(), surface);
    }

    pub fn get_mut(&mut self, handle: &str) -> Option<&mut (dyn DisplaySurface + 'a)> {
        self.inner.get_mut(handle).map(|surface| &mut **surface)
    }

    /// Like `get_mut`, but a missing surface is a setup error.
    pub fn require(&mut self, handle: &str) -> DomainResult<&mut (dyn DisplaySurface + 'a)> {
        self.get_mut(handle)
            .ok_or_else(|| DomainError::not_found(format!("display surface `{handle}`")))
    }
}

impl core::fmt::Debug for Surfaces<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut handles: Vec<&String> = self.inner.keys().collect();
        handles.sort();
        f.debug_struct("Surfaces").field("handles", &handles).finish()
    }
}

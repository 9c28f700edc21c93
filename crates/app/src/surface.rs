//! Display surfaces: where rendered views and user notices end up.

use std::io::Write;

use stockroom_inventory::{RenderedView, SummaryLabels};

/// One full render: the list (or placeholder) and its summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub view: RenderedView,
    pub summary: SummaryLabels,
}

pub trait DisplaySurface {
    /// Replace whatever was displayed with `frame`.
    fn render(&mut self, frame: &Frame);

    /// Short user-visible notice (toast).
    fn notify(&mut self, message: &str);
}

/// Keeps every frame and notice; for tests and headless use.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    frames: Vec<Frame>,
    notices: Vec<String>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }

    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    pub fn last_notice(&self) -> Option<&str> {
        self.notices.last().map(String::as_str)
    }
}

impl DisplaySurface for RecordingSurface {
    fn render(&mut self, frame: &Frame) {
        self.frames.push(frame.clone());
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}

/// Plain-text table on any writer.
#[derive(Debug)]
pub struct TerminalSurface<W> {
    out: W,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_frame(&mut self, frame: &Frame) -> std::io::Result<()> {
        match &frame.view {
            RenderedView::Placeholder { message } => writeln!(self.out, "{message}")?,
            RenderedView::Rows { rows } => {
                writeln!(
                    self.out,
                    "{:>4}  {:<36} {:<12} {:<10} {:>6} {:>12}",
                    "ID", "Nombre", "Categoría", "Ingreso", "Cant.", "Precio"
                )?;
                for row in rows {
                    writeln!(
                        self.out,
                        "{:>4}  {:<36} {:<12} {:<10} {:>6} {:>12}",
                        row.id,
                        row.name,
                        row.category.label(),
                        row.date_in,
                        format!("x{}", row.quantity),
                        row.price
                    )?;
                }
            }
        }
        writeln!(self.out, "{} · {}", frame.summary.units, frame.summary.value)?;
        self.out.flush()
    }
}

impl<W: Write> DisplaySurface for TerminalSurface<W> {
    fn render(&mut self, frame: &Frame) {
        if let Err(error) = self.write_frame(frame) {
            tracing::error!(%error, "failed to write frame to terminal");
        }
    }

    fn notify(&mut self, message: &str) {
        if let Err(error) = writeln!(self.out, "Sistema: {message}") {
            tracing::error!(%error, "failed to write notice to terminal");
        }
    }
}

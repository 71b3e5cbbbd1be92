//! Rendering seam for guide lines.
//!
//! The scene graph lives outside this crate. The guide pool only needs a way
//! to create a line once, move its endpoints, and toggle its visibility.

use blockboard_core::Point;

/// Renderer-side identity of a line.
pub type LineId = usize;

pub trait GuideRenderer {
    /// Creates a hidden line and registers it with the scene.
    fn create_line(&mut self) -> LineId;

    fn set_endpoints(&mut self, line: LineId, start: Point, end: Point);

    fn set_visible(&mut self, line: LineId, visible: bool);
}

/// Current state of one recorded line.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RenderedLine {
    pub start: Point,
    pub end: Point,
    pub visible: bool,
}

/// A single renderer call, in the order it was made.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderCall {
    Create(LineId),
    SetEndpoints(LineId, Point, Point),
    SetVisible(LineId, bool),
}

/// In-memory renderer that records every call.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    lines: Vec<RenderedLine>,
    calls: Vec<RenderCall>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[RenderedLine] {
        &self.lines
    }

    pub fn line(&self, id: LineId) -> Option<&RenderedLine> {
        self.lines.get(id)
    }

    pub fn visible_lines(&self) -> impl Iterator<Item = &RenderedLine> {
        self.lines.iter().filter(|l| l.visible)
    }

    /// Number of lines ever created.
    pub fn created_count(&self) -> usize {
        self.lines.len()
    }

    pub fn calls(&self) -> &[RenderCall] {
        &self.calls
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl GuideRenderer for RecordingRenderer {
    fn create_line(&mut self) -> LineId {
        let id = self.lines.len();
        self.lines.push(RenderedLine::default());
        self.calls.push(RenderCall::Create(id));
        id
    }

    fn set_endpoints(&mut self, line: LineId, start: Point, end: Point) {
        if let Some(l) = self.lines.get_mut(line) {
            l.start = start;
            l.end = end;
        }
        self.calls.push(RenderCall::SetEndpoints(line, start, end));
    }

    fn set_visible(&mut self, line: LineId, visible: bool) {
        if let Some(l) = self.lines.get_mut(line) {
            l.visible = visible;
        }
        self.calls.push(RenderCall::SetVisible(line, visible));
    }
}

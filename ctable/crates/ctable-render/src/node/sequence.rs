use super::{Frame, Renderer};
use crate::sink::Output;

/// Children placed side by side.
///
/// Every line renders one line of each child, left to right. Children
/// shorter than the sequence contribute blank lines once exhausted.
#[derive(Debug, Clone)]
pub struct HSeq<R> {
    frame: Frame,
    children: Vec<R>,
}

impl<R: Renderer> HSeq<R> {
    /// Creates a sequence over `children`.
    pub fn new(children: Vec<R>) -> Self {
        Self {
            frame: Frame::new(),
            children,
        }
    }

    /// Appends a child while configuring.
    pub fn push(&mut self, child: R) {
        debug_assert!(!self.is_frozen(), "child added after freeze");
        self.children.push(child);
    }

    /// The children in order.
    pub fn children(&self) -> &[R] {
        &self.children
    }

    /// The children in order, mutably.
    pub fn children_mut(&mut self) -> &mut [R] {
        &mut self.children
    }
}

impl<R> Default for HSeq<R> {
    fn default() -> Self {
        Self {
            frame: Frame::new(),
            children: Vec::new(),
        }
    }
}

impl<R: Renderer> Renderer for HSeq<R> {
    fn frame(&self) -> &Frame {
        &self.frame
    }

    fn frame_mut(&mut self) -> &mut Frame {
        &mut self.frame
    }

    fn measure_width(&self) -> usize {
        self.children.iter().map(Renderer::width).sum()
    }

    fn measure_height(&self) -> usize {
        self.children.iter().map(Renderer::height).max().unwrap_or(0)
    }

    fn freeze_children(&mut self) {
        for child in &mut self.children {
            child.freeze();
        }
    }

    fn render_line(&mut self, out: &mut Output<'_>) {
        for child in &mut self.children {
            child.render_next_line(out);
        }
    }
}

/// Children stacked top to bottom.
///
/// Each child renders all of its lines before the next one starts; a child
/// of height zero is skipped. Narrower children are padded on the right to
/// the sequence width.
#[derive(Debug, Clone)]
pub struct VSeq<R> {
    frame: Frame,
    children: Vec<R>,
    current: usize,
}

impl<R: Renderer> VSeq<R> {
    /// Creates a sequence over `children`.
    pub fn new(children: Vec<R>) -> Self {
        Self {
            frame: Frame::new(),
            children,
            current: 0,
        }
    }

    /// Appends a child while configuring.
    pub fn push(&mut self, child: R) {
        debug_assert!(!self.is_frozen(), "child added after freeze");
        self.children.push(child);
    }

    /// The children in order.
    pub fn children(&self) -> &[R] {
        &self.children
    }

    /// The children in order, mutably.
    pub fn children_mut(&mut self) -> &mut [R] {
        &mut self.children
    }
}

impl<R> Default for VSeq<R> {
    fn default() -> Self {
        Self {
            frame: Frame::new(),
            children: Vec::new(),
            current: 0,
        }
    }
}

impl<R: Renderer> Renderer for VSeq<R> {
    fn frame(&self) -> &Frame {
        &self.frame
    }

    fn frame_mut(&mut self) -> &mut Frame {
        &mut self.frame
    }

    fn measure_width(&self) -> usize {
        self.children.iter().map(Renderer::width).max().unwrap_or(0)
    }

    fn measure_height(&self) -> usize {
        self.children.iter().map(Renderer::height).sum()
    }

    fn freeze_children(&mut self) {
        for child in &mut self.children {
            child.freeze();
        }
    }

    fn render_line(&mut self, out: &mut Output<'_>) {
        let width = self.width();
        while let Some(child) = self.children.get_mut(self.current) {
            if child.has_more_lines() {
                child.render_next_line(out);
                out.blank(width.saturating_sub(child.width()));
                return;
            }
            self.current += 1;
        }
        out.blank(width);
    }
}

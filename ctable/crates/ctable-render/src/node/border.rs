use super::{Frame, Renderer};
use crate::pattern;
use crate::sink::Output;
use ctable_core::color::ColorState;
use ctable_core::style::{BoxStyle, Side, Sides, StyledGlyph};

/// A one-cell border strip around an inner node.
///
/// An edge is present when its side's `margin` is non-zero; sizers may turn
/// edges off while configuring. Glyphs are expanded from each side's pattern
/// when the node freezes, once the inner size is final: `inner.width + 2`
/// glyphs for the top and bottom rules, `inner.height + 2` for the sides.
/// The first and last glyph of every edge are its corners.
#[derive(Debug, Clone)]
pub struct Bordered<'a, R> {
    frame: Frame,
    inner: R,
    style: &'a BoxStyle,
    enabled: Sides,
    edges: [Vec<StyledGlyph>; 4],
}

impl<'a, R: Renderer> Bordered<'a, R> {
    /// Wraps `inner` with the edges `style` configures a border for.
    pub fn new(inner: R, style: &'a BoxStyle) -> Self {
        Self {
            frame: Frame::new(),
            inner,
            style,
            enabled: style.border_sides(),
            edges: Default::default(),
        }
    }

    /// Whether the edge on `side` is drawn.
    pub fn is_enabled(&self, side: Side) -> bool {
        self.enabled.has(side)
    }

    /// Turns the edge on `side` on or off while configuring.
    pub fn set_enabled(&mut self, side: Side, enabled: bool) {
        debug_assert!(!self.is_frozen(), "border changed after freeze");
        self.enabled.set(Sides::from(side), enabled);
    }

    /// Expanded glyphs of one edge; empty until frozen or when the edge is off.
    pub fn edge(&self, side: Side) -> &[StyledGlyph] {
        &self.edges[side.index()]
    }

    /// The style this border draws.
    pub fn style(&self) -> &'a BoxStyle {
        self.style
    }

    /// The wrapped node.
    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// The wrapped node, mutably.
    pub fn inner_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    /// Replaces the four corner glyphs with the merge of the meeting edges.
    ///
    /// Freezes the node first. Does nothing without a corner merge in the
    /// style. Merging is not idempotent: call this once per render.
    pub fn combine_corners(&mut self) {
        self.freeze();
        let Some(corners) = self.style.corners else {
            return;
        };

        let [top, right, bottom, left] = &mut self.edges;
        if let (Some(&upper), Some(&lower)) = (left.first(), left.last()) {
            if let Some(glyph) = top.first_mut() {
                *glyph = corners.merge(*glyph, upper, Side::Top, Side::Left);
            }
            if let Some(glyph) = bottom.first_mut() {
                *glyph = corners.merge(*glyph, lower, Side::Bottom, Side::Left);
            }
        }
        if let (Some(&upper), Some(&lower)) = (right.first(), right.last()) {
            if let Some(glyph) = top.last_mut() {
                *glyph = corners.merge(*glyph, upper, Side::Top, Side::Right);
            }
            if let Some(glyph) = bottom.last_mut() {
                *glyph = corners.merge(*glyph, lower, Side::Bottom, Side::Right);
            }
        }
    }

    fn generate_edges(&mut self) {
        let style = self.style;
        let side_colors = |side: Side| {
            style
                .side(side)
                .foreground
                .or_relative(style.fg, style.bg)
        };

        for side in Side::ALL {
            if !self.is_enabled(side) {
                continue;
            }
            let len = 2 + if side.is_horizontal() {
                self.inner.width()
            } else {
                self.inner.height()
            };
            let side_fg = side_colors(side);
            self.edges[side.index()] = pattern::expand(style.side(side).pattern.as_deref(), len)
                .into_iter()
                .map(|glyph| StyledGlyph {
                    glyph: glyph.glyph,
                    fg: glyph.fg.or_relative(side_fg, style.bg),
                    bg: glyph.bg.or_relative(style.bg, side_fg),
                })
                .collect();
        }
    }

    fn render_rule(&self, out: &mut Output<'_>, side: Side, boxed: ColorState) {
        let edge = self.edge(side);
        if self.is_enabled(Side::Left) {
            out.glyph(boxed, edge.first().copied().unwrap_or_default());
        }
        for index in 1..=self.inner.width() {
            match edge.get(index).filter(|_| index + 1 < edge.len()) {
                Some(&glyph) => out.glyph(boxed, glyph),
                None => {
                    out.set_color(boxed);
                    out.blank(1);
                }
            }
        }
        if self.is_enabled(Side::Right) {
            out.glyph(boxed, edge.last().copied().unwrap_or_default());
        }
    }

    fn render_side(&self, out: &mut Output<'_>, side: Side, boxed: ColorState, inside_line: usize) {
        let edge = self.edge(side);
        if edge.is_empty() {
            return;
        }
        out.set_color(boxed);
        match edge.get(inside_line + 1) {
            Some(&glyph) => out.glyph(boxed, glyph),
            None => out.blank(1),
        }
    }
}

impl<R: Renderer> Renderer for Bordered<'_, R> {
    fn frame(&self) -> &Frame {
        &self.frame
    }

    fn frame_mut(&mut self) -> &mut Frame {
        &mut self.frame
    }

    fn measure_width(&self) -> usize {
        self.inner.width()
            + usize::from(self.is_enabled(Side::Left))
            + usize::from(self.is_enabled(Side::Right))
    }

    fn measure_height(&self) -> usize {
        self.inner.height()
            + usize::from(self.is_enabled(Side::Top))
            + usize::from(self.is_enabled(Side::Bottom))
    }

    fn freeze_children(&mut self) {
        self.inner.freeze();
        self.generate_edges();
    }

    fn render_line(&mut self, out: &mut Output<'_>) {
        let base = out.color();
        let boxed = base.resolve(self.style.fg, self.style.bg);
        out.set_color(boxed);

        let line = self.frame.line();
        let top = self.is_enabled(Side::Top);
        if line == 0 && top {
            self.render_rule(out, Side::Top, boxed);
        } else if line + 1 == self.height() && self.is_enabled(Side::Bottom) {
            self.render_rule(out, Side::Bottom, boxed);
        } else {
            let inside_line = line - usize::from(top);
            self.render_side(out, Side::Left, boxed, inside_line);
            out.set_color(base);
            self.inner.render_next_line(out);
            self.render_side(out, Side::Right, boxed, inside_line);
        }

        out.set_color(base);
    }
}

use crate::assembly::{shrink_pair, CellRenderer};
use ctable_core::style::Side;

/// Width bounds of one grid column, accumulated over its cells.
///
/// External width is margin plus border, kept per side as the widest of any
/// cell so that borders line up. Internal width is padding plus text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSizer {
    left_external: usize,
    right_external: usize,
    pref_internal: usize,
    min_internal: usize,
    max_internal: usize,
}

impl Default for ColumnSizer {
    fn default() -> Self {
        Self {
            left_external: 0,
            right_external: 0,
            pref_internal: 0,
            min_internal: 0,
            max_internal: usize::MAX,
        }
    }
}

impl ColumnSizer {
    /// An empty column.
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one cell's bounds into the column.
    pub fn add(&mut self, cell: &CellRenderer<'_>) {
        let layers = cell.layers();
        let padding = layers.padding().horizontal();
        let text = cell.text();

        self.left_external = self.left_external.max(layers.external(Side::Left));
        self.right_external = self.right_external.max(layers.external(Side::Right));
        self.pref_internal = self.pref_internal.max(padding + text.pref_width());
        self.min_internal = self.min_internal.max(padding + text.min_width());
        self.max_internal = self
            .max_internal
            .min(padding + text.max_width())
            .max(self.min_internal);
    }

    /// Margin plus border on both sides.
    pub fn external_width(&self) -> usize {
        self.left_external + self.right_external
    }

    /// Widest preferred padding plus text.
    pub fn pref_internal_width(&self) -> usize {
        self.pref_internal
    }

    /// Widest minimum padding plus text.
    pub fn min_internal_width(&self) -> usize {
        self.min_internal
    }

    /// Narrowest maximum padding plus text, never below the minimum.
    pub fn max_internal_width(&self) -> usize {
        self.max_internal
    }

    /// Preferred internal width clamped into the column bounds.
    pub fn clamped_pref_width(&self) -> usize {
        self.pref_internal.clamp(self.min_internal, self.max_internal)
    }

    /// Gives the column `total_width` cells, external width included.
    ///
    /// External width shrinks first if it does not fit, then each cell's
    /// padding if the rest is too narrow for it; text takes what is left.
    /// Every cell gets the column's external width, so a side shrunk to zero
    /// loses its border.
    pub fn set_widths<'c, 'a: 'c>(
        &mut self,
        total_width: usize,
        cells: impl IntoIterator<Item = &'c mut CellRenderer<'a>>,
    ) {
        let deficit = self.external_width().saturating_sub(total_width);
        shrink_pair(&mut self.left_external, &mut self.right_external, deficit);
        let internal = total_width.saturating_sub(self.external_width());

        for cell in cells {
            let layers = cell.layers_mut();
            let padding = layers.padding().horizontal();
            layers.shrink_padding(Side::Left, Side::Right, padding.saturating_sub(internal));
            let text_width = internal.saturating_sub(layers.padding().horizontal());
            layers.set_external(Side::Left, self.left_external);
            layers.set_external(Side::Right, self.right_external);
            cell.text_mut().set_width(text_width);
        }
    }
}

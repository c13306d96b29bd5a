use crate::assembly::RowRenderer;
use ctable_core::style::Side;

/// Height bounds of one row, accumulated over its cells.
///
/// Heights are derived from the text widths already assigned, so run this
/// after the column widths are set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSizer {
    top_external: usize,
    bottom_external: usize,
    pref_internal: usize,
    min_internal: usize,
    max_internal: usize,
}

impl RowSizer {
    /// Collects the bounds of every cell in `row`.
    pub fn new(row: &RowRenderer<'_>) -> Self {
        let mut sizer = Self {
            top_external: 0,
            bottom_external: 0,
            pref_internal: 0,
            min_internal: 0,
            max_internal: usize::MAX,
        };

        for cell in row.cells() {
            let layers = cell.layers();
            let padding = layers.padding().vertical();
            let text = cell.text();

            sizer.top_external = sizer.top_external.max(layers.external(Side::Top));
            sizer.bottom_external = sizer.bottom_external.max(layers.external(Side::Bottom));
            sizer.pref_internal = sizer
                .pref_internal
                .max(padding + text.pref_height(text.text_width()));
            sizer.min_internal = sizer.min_internal.max(padding + text.min_height());
            sizer.max_internal = sizer
                .max_internal
                .min(padding + text.max_height())
                .max(sizer.min_internal);
        }
        sizer
    }

    /// Margin plus border above and below.
    pub fn external_height(&self) -> usize {
        self.top_external + self.bottom_external
    }

    /// The padding plus text height every cell of the row gets.
    pub fn internal_height(&self) -> usize {
        self.pref_internal.clamp(self.min_internal, self.max_internal)
    }

    /// Gives every cell of `row` the shared internal height and the row's
    /// external height, shrinking padding that does not fit.
    pub fn set_heights(&self, row: &mut RowRenderer<'_>) {
        let internal = self.internal_height();
        for cell in row.cells_mut() {
            let layers = cell.layers_mut();
            let padding = layers.padding().vertical();
            layers.shrink_padding(Side::Top, Side::Bottom, padding.saturating_sub(internal));
            let text_height = internal.saturating_sub(layers.padding().vertical());
            layers.set_external(Side::Top, self.top_external);
            layers.set_external(Side::Bottom, self.bottom_external);
            cell.text_mut().set_height(text_height);
        }
    }
}

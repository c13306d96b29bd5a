//! Output width detection.

/// Width used when neither the terminal nor `COLUMNS` tell us anything.
pub const FALLBACK_WIDTH: usize = 79;

/// The width budget for output to the current terminal.
///
/// One less than the terminal width, so that a full-width line does not wrap
/// the cursor. Falls back to `COLUMNS - 1`, then to [`FALLBACK_WIDTH`].
pub fn output_width() -> usize {
    let width = crossterm::terminal::size()
        .ok()
        .and_then(|(columns, _)| budget(usize::from(columns)))
        .or_else(|| columns_budget(std::env::var("COLUMNS").ok().as_deref()))
        .unwrap_or(FALLBACK_WIDTH);
    tracing::trace!(width, "detected output width");
    width
}

fn budget(columns: usize) -> Option<usize> {
    columns.checked_sub(1).filter(|&width| width > 0)
}

fn columns_budget(value: Option<&str>) -> Option<usize> {
    budget(value?.trim().parse().ok()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_variable() {
        assert_eq!(columns_budget(Some("120")), Some(119));
        assert_eq!(columns_budget(Some(" 40\n")), Some(39));
        assert_eq!(columns_budget(Some("wide")), None);
        assert_eq!(columns_budget(Some("0")), None);
        assert_eq!(columns_budget(None), None);
    }

    #[test]
    fn output_width_is_never_zero() {
        assert!(output_width() > 0);
    }
}

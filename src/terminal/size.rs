//! Terminal window size.

/// Columns and rows of the controlling terminal, if any.
pub fn size() -> Option<(u16, u16)> {
    crossterm::terminal::size()
        .ok()
        .filter(|&(cols, rows)| cols > 0 && rows > 0)
}

/// Output grid that fills the terminal, keeping the last row free so the
/// trailing newline does not scroll the frame.
pub fn fit_grid(cols: u16, rows: u16) -> (u32, u32) {
    (cols.max(1) as u32, rows.saturating_sub(1).max(1) as u32)
}

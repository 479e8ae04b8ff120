use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Picker layout: project list above a one-row query/status bar
pub struct PickerLayout {
    pub list_area: Rect,
    pub status_area: Rect,
}

impl PickerLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Project list (at least 3 rows)
                Constraint::Length(1), // Query/status bar (1 row)
            ])
            .split(area);

        Self { list_area: chunks[0], status_area: chunks[1] }
    }
}

//! Picker application state and event loop.
//!
//! The `App` owns the fuzzy matcher and the selection cursor. Typing narrows
//! the list through `nucleo`; the list order with an empty query is the
//! order the labels were supplied in (recency-ranked by the caller). Enter
//! resolves to the highlighted label, Esc clears the query or dismisses, and
//! a dismissal yields `None`.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use nucleo::{Config, Nucleo};
use ratatui::Terminal;
use ratatui::backend::Backend;

use super::events::{Action, poll_event};
use super::rendering::render_ui;

pub struct App {
    nucleo: Nucleo<String>,
    total_count: usize,
    selected_idx: usize,
    query: String,
    should_quit: bool,
    selection: Option<String>,
    // Dirty state tracking for efficient rendering
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl App {
    pub fn new(labels: Vec<String>) -> Self {
        // Single matcher thread is plenty for a directory listing
        let nucleo = Nucleo::new(Config::DEFAULT, Arc::new(|| {}), None, 1);

        let injector = nucleo.injector();
        for label in &labels {
            let text = label.clone();
            injector.push(label.clone(), move |_label, cols| {
                cols[0] = text.clone().into();
            });
        }

        Self {
            nucleo,
            total_count: labels.len(),
            selected_idx: 0,
            query: String::new(),
            should_quit: false,
            selection: None,
            needs_redraw: true, // Initial draw needed
            last_draw_time: Instant::now(),
        }
    }

    /// Run the event loop until a selection or dismissal
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<Option<String>> {
        while !self.should_quit {
            // Tick nucleo to process matches
            self.nucleo.tick(10);

            let matched = self.collect_matched_labels();
            let matched_count = matched.len();

            // Draw if dirty or if it's been >100ms (for terminal resize handling)
            let now = Instant::now();
            let elapsed = now.duration_since(self.last_draw_time);
            if self.needs_redraw || elapsed >= Duration::from_millis(100) {
                terminal.draw(|f| {
                    render_ui(f, &matched, self.selected_idx, &self.query, self.total_count);
                })?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            let action = poll_event(Duration::from_millis(100))?;
            self.handle_action(action, matched_count);
        }

        Ok(self.selection.clone())
    }

    /// Collect matched labels from the nucleo snapshot (extracted for testing)
    fn collect_matched_labels(&self) -> Vec<&String> {
        let snapshot = self.nucleo.snapshot();
        snapshot.matched_items(..snapshot.matched_item_count()).map(|item| item.data).collect()
    }

    /// Handle a user action (extracted for testing)
    fn handle_action(&mut self, action: Action, total_items: usize) {
        match action {
            Action::Dismiss => self.should_quit = true,
            Action::ClearQuery => {
                if self.query.is_empty() {
                    self.should_quit = true;
                } else {
                    self.query.clear();
                    self.update_nucleo_pattern();
                    self.selected_idx = 0;
                    self.needs_redraw = true;
                }
            }
            Action::MoveUp => self.move_selection(-1, total_items),
            Action::MoveDown => self.move_selection(1, total_items),
            Action::PageUp => self.move_selection(-10, total_items),
            Action::PageDown => self.move_selection(10, total_items),
            Action::UpdateQuery(c) => self.update_query(c),
            Action::DeleteChar => self.delete_char(),
            Action::Select => {
                let choice =
                    self.collect_matched_labels().get(self.selected_idx).map(|l| (*l).clone());
                if let Some(label) = choice {
                    self.selection = Some(label);
                    self.should_quit = true;
                }
                // Enter with nothing matched is a no-op, not a dismissal
            }
            Action::None => {}
        }
    }

    fn move_selection(&mut self, delta: isize, total: usize) {
        if total == 0 {
            self.selected_idx = 0;
            return;
        }

        let old_idx = self.selected_idx;
        let new_idx = (self.selected_idx as isize + delta).max(0) as usize;
        self.selected_idx = new_idx.min(total - 1);

        if old_idx != self.selected_idx {
            self.needs_redraw = true;
        }
    }

    fn update_query(&mut self, c: char) {
        // Keep the query bounded; nobody types a 256-char project name
        if self.query.len() < 256 {
            self.query.push(c);
            self.update_nucleo_pattern();
            self.selected_idx = 0; // Reset selection on query change
            self.needs_redraw = true;
        }
    }

    fn delete_char(&mut self) {
        if self.query.pop().is_some() {
            self.update_nucleo_pattern();
            self.selected_idx = 0;
            self.needs_redraw = true;
        }
    }

    fn update_nucleo_pattern(&mut self) {
        self.nucleo.pattern.reparse(
            0,
            &self.query,
            nucleo::pattern::CaseMatching::Smart,
            nucleo::pattern::Normalization::Smart,
            false,
        );
        // Tick to apply the new pattern
        self.nucleo.tick(10);
    }
}

//! `Model` trait implementation for the storefront application.
//!
//! Handles initialisation from module-level storage, update dispatch, and
//! view rendering clamped to the terminal size.

use std::any::Any;

use bubbletea_rs::{Cmd, Model};
use unicode_width::UnicodeWidthChar;

use super::StorefrontApp;
use super::view_mode::ViewMode;
use crate::tui::input::{InputContext, map_key_to_message_with_context, map_mouse_to_message};
use crate::tui::messages::AppMsg;

impl Model for StorefrontApp {
    fn init() -> (Self, Option<Cmd>) {
        let mut model = Self::new(crate::tui::storage::get_app_settings())
            .with_telemetry_sink(crate::tui::storage::get_telemetry_sink());
        if let Some(provider) = crate::tui::storage::get_data_provider() {
            model = model.with_provider(provider);
        }

        // The fetches start when `AppMsg::Initialized` is handled.
        (model, Some(Self::immediate_init_cmd()))
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            if self.show_help {
                return self.handle_message(&AppMsg::ToggleHelp);
            }
            let mapped = map_key_to_message_with_context(key_msg, self.input_context());
            return mapped.and_then(|app_msg| self.handle_message(&app_msg));
        }

        if let Some(mouse_msg) = msg.downcast_ref::<bubbletea_rs::event::MouseMsg>() {
            let mapped = map_mouse_to_message(mouse_msg);
            return mapped.and_then(|app_msg| self.handle_message(&app_msg));
        }

        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            let resize_msg = AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            };
            return self.handle_message(&resize_msg);
        }

        None
    }

    fn view(&self) -> String {
        if self.show_help {
            return self.normalise_viewport(&self.render_help_overlay());
        }

        let mut output = String::new();
        output.push_str(&self.render_header());
        output.push_str(&self.render_body());

        // Pin the status bar to the last row.
        let body_lines = output.lines().count();
        let rows = usize::from(self.height).max(1);
        let padding = rows.saturating_sub(1).saturating_sub(body_lines);
        output.push_str(&"\n".repeat(padding));
        output.push_str(&self.render_status_bar());

        self.normalise_viewport(&output)
    }
}

impl StorefrontApp {
    /// Creates a command that emits `Initialized` immediately.
    ///
    /// This synthetic startup event triggers the first render cycle and the
    /// initial fetches without waiting for user input.
    pub(super) fn immediate_init_cmd() -> Cmd {
        Box::pin(async { Some(Box::new(AppMsg::Initialized) as Box<dyn Any + Send>) })
    }

    /// Returns the current input context for context-aware key mapping.
    pub(super) const fn input_context(&self) -> InputContext {
        match self.view_mode {
            ViewMode::Storefront => InputContext::Storefront,
            ViewMode::ProductDetail => InputContext::ProductDetail,
            ViewMode::ReviewList => InputContext::ReviewList,
            ViewMode::ReviewDetail => InputContext::ReviewDetail,
        }
    }

    /// Normalises the rendered frame to terminal dimensions.
    ///
    /// Rows are clamped to one column less than the terminal width to avoid
    /// autowrap, and padded with spaces to clear stale cells after resize.
    fn normalise_viewport(&self, output: &str) -> String {
        let width = usize::from(self.width).max(1);
        let safe_width = width.saturating_sub(1).max(1);
        let height = usize::from(self.height).max(1);

        let mut lines: Vec<String> = output
            .lines()
            .map(|line| pad_or_truncate_line(line, safe_width))
            .collect();
        lines.truncate(height);

        let missing = height.saturating_sub(lines.len());
        let blank = " ".repeat(safe_width);
        lines.extend(std::iter::repeat_with(|| blank.clone()).take(missing));

        let mut normalised = lines.join("\n");
        normalised.push('\n');
        normalised
    }
}

fn pad_or_truncate_line(line: &str, width: usize) -> String {
    let mut output = String::new();
    let mut visible_width = 0_usize;

    for ch in line.chars() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if visible_width.saturating_add(char_width) > width {
            break;
        }
        output.push(ch);
        visible_width = visible_width.saturating_add(char_width);
    }

    output.push_str(&" ".repeat(width.saturating_sub(visible_width)));
    output
}

//! Status bar widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::{Store, View};

/// Status bar widget.
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let view_name = match store.app.current_view {
            View::Discover => "Discover",
            View::Details => "Details",
        };

        let brand = if store.ui.unicode_symbols {
            " 📈 Stratdeck "
        } else {
            " Stratdeck "
        };

        let bookmarks = Span::styled(
            format!(" {} bookmarked ", store.catalog.bookmarked.len()),
            Style::default().fg(Color::Yellow),
        );

        let help_hint = Span::styled(" Press ? for help ", Style::default().fg(Color::DarkGray));

        let left_content = vec![
            Span::styled(
                brand,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::styled(view_name, Style::default().fg(Color::Yellow)),
            Span::raw(" | "),
            bookmarks,
        ];

        let status_line = Line::from(left_content);

        // Pad by display width, not byte length; the brand glyph is wide.
        let left_width: usize = status_line.spans.iter().map(|s| s.width()).sum();
        let right_width = help_hint.width();
        let padding = (area.width as usize).saturating_sub(left_width + right_width);

        let mut full_line = status_line.spans;
        full_line.push(Span::raw(" ".repeat(padding)));
        full_line.push(help_hint);

        let paragraph =
            Paragraph::new(Line::from(full_line)).style(Style::default().bg(Color::DarkGray));

        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::strategy;
    use crate::state::tests::test_store;
    use crate::ui::test_util::render_text;

    #[test]
    fn help_hint_is_flush_with_the_right_edge() {
        // The default brand includes a double-width glyph; the hint must
        // still land on the last column.
        let store = test_store(vec![strategy("1")]);
        let text = render_text(80, 1, |frame| {
            StatusBar::render(frame, frame.area(), &store);
        });

        let row = text.lines().next().unwrap();
        assert!(row.ends_with("Press ? for help "), "row: {row:?}");
    }
}

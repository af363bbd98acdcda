//! Help panel widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::super::layout::centered_rect;

/// Help panel showing keybindings.
pub struct HelpPanel;

impl HelpPanel {
    /// Render the help panel.
    pub fn render(frame: &mut Frame, area: Rect) {
        let popup_area = centered_rect(60, 80, area);

        // Clear the area behind the popup
        frame.render_widget(Clear, popup_area);

        let section = |title: &'static str| {
            Line::from(vec![Span::styled(
                title,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )])
        };
        let entry = |key: &'static str, action: &'static str| {
            Line::from(vec![
                Span::styled(key, Style::default().fg(Color::Cyan)),
                Span::raw(action),
            ])
        };

        let help_text = vec![
            section("Navigation"),
            Line::from(""),
            entry("  j/↓  ", "Move down"),
            entry("  k/↑  ", "Move up"),
            entry("  Home ", "First strategy"),
            entry("  End  ", "Last strategy"),
            Line::from(""),
            section("Views"),
            Line::from(""),
            entry("  1    ", "Discover strategies"),
            entry("  2    ", "Strategy details"),
            entry("  Esc  ", "Back / dismiss"),
            Line::from(""),
            section("Catalog"),
            Line::from(""),
            entry("  b    ", "Bookmark strategy"),
            entry("  s    ", "Share strategy"),
            entry("  m    ", "Show full description"),
            entry("  Enter", "Open strategy details"),
            Line::from(""),
            section("Deploy"),
            Line::from(""),
            entry("  ←/→  ", "Switch deploy mode"),
            entry("  d    ", "Deploy with selected mode"),
            Line::from(""),
            section("General"),
            Line::from(""),
            entry("  ?    ", "Toggle help"),
            entry("  q    ", "Quit"),
        ];

        let help = Paragraph::new(help_text)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .style(Style::default().fg(Color::White));

        frame.render_widget(help, popup_area);
    }
}

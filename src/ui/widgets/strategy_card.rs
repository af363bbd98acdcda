//! Strategy card widget.
//!
//! A card is a pure function of the strategy and the flags passed in;
//! bookmark state in particular is owned by the catalog state so every
//! card sees the same membership.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::catalog::{Strategy, StrategyStatus, TagKind};
use crate::ui::Theme;

/// Strategy card widget.
pub struct StrategyCard;

impl StrategyCard {
    /// Render one strategy card.
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        strategy: &Strategy,
        bookmarked: bool,
        selected: bool,
        theme: &Theme,
    ) {
        let border_style = if selected {
            Style::default().fg(theme.primary)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let mut block = Block::default()
            .title(
                Line::from(format!(" {} ", strategy.name))
                    .style(Style::default().add_modifier(Modifier::BOLD)),
            )
            .borders(Borders::ALL)
            .border_style(border_style);

        if bookmarked {
            block = block.title_top(
                Line::from(" 🔖 bookmarked ")
                    .right_aligned()
                    .style(Style::default().fg(theme.primary)),
            );
        }

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Tags and last-deployed badge
                Constraint::Min(1),    // Description
                Constraint::Length(1), // Stats row
            ])
            .split(inner);

        frame.render_widget(Paragraph::new(Self::tag_line(strategy)), rows[0]);
        frame.render_widget(
            Paragraph::new(strategy.description.as_str()).wrap(Wrap { trim: true }),
            rows[1],
        );
        frame.render_widget(Paragraph::new(Self::stats_line(strategy, theme)), rows[2]);
    }

    fn tag_line(strategy: &Strategy) -> Line<'_> {
        let mut spans = Vec::new();
        for tag in strategy.display_tags() {
            spans.push(Span::styled(
                format!(" {} ", tag.label),
                Style::default()
                    .fg(tag_color(tag.kind))
                    .add_modifier(Modifier::REVERSED),
            ));
            spans.push(Span::raw(" "));
        }
        if let Some(last_deployed) = &strategy.last_deployed {
            spans.push(Span::styled(
                format!("Last deployed {last_deployed}"),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ));
        }
        Line::from(spans)
    }

    fn stats_line<'a>(strategy: &'a Strategy, theme: &Theme) -> Line<'a> {
        let status_color = match strategy.status {
            StrategyStatus::Deployed => theme.success,
            StrategyStatus::Available => theme.warning,
        };

        let label_style = Style::default().fg(Color::DarkGray);
        let mut spans = vec![
            Span::styled("Min Capital ", label_style),
            Span::styled(
                strategy.min_capital.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" │ "),
            Span::styled("Avg Return ", label_style),
            Span::styled(
                strategy.avg_return.as_str(),
                Style::default()
                    .fg(theme.gradient_start)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("*", Style::default().fg(Color::DarkGray)),
            Span::raw(" │ "),
            Span::styled("Status ", label_style),
            Span::styled(
                strategy.status.to_string(),
                Style::default().fg(status_color).add_modifier(Modifier::BOLD),
            ),
        ];

        if strategy.needs_show_more() {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                "Show more [m]",
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::UNDERLINED),
            ));
        }

        Line::from(spans)
    }
}

fn tag_color(kind: TagKind) -> Color {
    match kind {
        TagKind::Intraday => Color::Cyan,
        TagKind::Medium => Color::Magenta,
        TagKind::Nifty => Color::Green,
        TagKind::Options => Color::Yellow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::strategy;
    use crate::ui::test_util::render_text;

    fn card_text(strategy: &Strategy, bookmarked: bool) -> String {
        render_text(100, 12, |frame| {
            StrategyCard::render(
                frame,
                frame.area(),
                strategy,
                bookmarked,
                false,
                &Theme::default(),
            );
        })
    }

    #[test]
    fn available_card_shows_all_tags_and_warning_status() {
        let s = strategy("2");
        let text = card_text(&s, false);

        for label in ["Intraday", "Medium", "Nifty", "Options"] {
            assert!(text.contains(label), "missing tag {label}");
        }
        assert!(text.contains("Available"));
        assert!(text.contains("₹75k"));
        assert!(!text.contains("Last deployed"));
    }

    #[test]
    fn deployed_card_caps_tags_and_shows_badge() {
        let mut s = strategy("1");
        s.last_deployed = Some("2 days ago".to_string());
        let text = card_text(&s, false);

        assert!(text.contains("Intraday"));
        assert!(text.contains("Medium"));
        assert!(!text.contains("Nifty"));
        assert!(!text.contains("Options"));
        assert!(text.contains("Last deployed 2 days ago"));
    }

    #[test]
    fn show_more_hint_tracks_description_length() {
        let mut s = strategy("1");
        assert!(!card_text(&s, false).contains("Show more"));

        s.description = "a ".repeat(125);
        assert!(card_text(&s, false).contains("Show more"));
    }

    #[test]
    fn bookmark_indicator_follows_flag() {
        let s = strategy("1");
        assert!(!card_text(&s, false).contains("bookmarked"));
        assert!(card_text(&s, true).contains("bookmarked"));
    }
}

//! Strategy details page.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::deploy_section::DeploySection;
use crate::state::Store;

/// Strategy details page: read-only header and description with the
/// embedded deploy section.
pub struct StrategyDetails;

impl StrategyDetails {
    /// Render the details page for the selected strategy.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let Some(strategy) = store.catalog.selected_strategy() else {
            let placeholder = Paragraph::new("No strategy selected · press 1 to browse the catalog")
                .style(
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                )
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(placeholder, area);
            return;
        };

        let block = Block::default()
            .title(format!(" {} ", strategy.name))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),  // Tags and stats
                Constraint::Min(3),     // Description
                Constraint::Length(12), // Deploy section
            ])
            .split(inner);

        Self::render_meta(frame, rows[0], store);

        let description = Paragraph::new(strategy.detail_text()).wrap(Wrap { trim: true });
        frame.render_widget(description, rows[1]);

        DeploySection::render(frame, rows[2], strategy, store.deploy.mode, &store.theme);
    }

    fn render_meta(frame: &mut Frame, area: Rect, store: &Store) {
        // Caller guarantees a selection.
        let Some(strategy) = store.catalog.selected_strategy() else {
            return;
        };

        let mut tag_spans = Vec::new();
        for tag in &strategy.tags {
            tag_spans.push(Span::styled(
                tag.label.as_str(),
                Style::default().fg(Color::Cyan),
            ));
            tag_spans.push(Span::raw(" · "));
        }
        tag_spans.pop();

        let label_style = Style::default().fg(Color::DarkGray);
        let stats = Line::from(vec![
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
                    .fg(store.theme.gradient_start)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("* ({})", strategy.backtest_tooltip),
                label_style,
            ),
        ]);

        let meta = Paragraph::new(vec![Line::from(tag_spans), stats]);
        frame.render_widget(meta, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::strategy;
    use crate::state::tests::test_store;
    use crate::ui::test_util::render_text;

    #[test]
    fn details_show_full_description_and_tooltip() {
        let mut s = strategy("1");
        s.full_description = Some("The complete long-form description.".to_string());
        let store = test_store(vec![s]);

        let text = render_text(100, 30, |frame| {
            StrategyDetails::render(frame, frame.area(), &store);
        });

        assert!(text.contains("Strategy 1"));
        assert!(text.contains("The complete long-form description."));
        assert!(text.contains("Information is based on last 6 month trades"));
        assert!(text.contains("Deploy Strategy"));
    }

    #[test]
    fn empty_catalog_renders_placeholder() {
        let store = test_store(Vec::new());

        let text = render_text(100, 30, |frame| {
            StrategyDetails::render(frame, frame.area(), &store);
        });

        assert!(text.contains("No strategy selected"));
        assert!(!text.contains("Deploy Strategy"));
    }
}

//! Deploy section widget.
//!
//! Two-option mode selector with contextual nudges. Selecting a mode is
//! side-effect free; the deploy key is the single explicit commit step,
//! so live trading can never be triggered by one click.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
};

use crate::catalog::{DeployMode, Strategy};
use crate::ui::Theme;

const FORWARD_TEST_NOTICE: &str = "No real money will be used and no real trades will be \
placed on the exchange. This is a simulation mode to test your strategy performance using \
historical and live market data without any financial risk.";

const CAPITAL_NOTICE: &str = "Capital requirements are different for Expiry Day and \
Non-Expiry Day. Please ensure you have sufficient capital available.";

/// Deploy section widget.
pub struct DeploySection;

impl DeploySection {
    /// Render the deploy section for a strategy.
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        strategy: &Strategy,
        mode: DeployMode,
        theme: &Theme,
    ) {
        let block = Block::default()
            .title(" Deploy Strategy ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Mode options
                Constraint::Length(1), // Commit hint
                Constraint::Min(0),    // Contextual nudge
            ])
            .split(inner);

        Self::render_options(frame, rows[0], mode, theme);

        let hint = Paragraph::new(Line::from(Span::styled(
            " ←/→ switch mode · press d to deploy",
            Style::default().fg(Color::DarkGray),
        )));
        frame.render_widget(hint, rows[1]);

        match mode {
            DeployMode::ForwardTest => Self::render_forward_test_nudge(frame, rows[2], theme),
            DeployMode::LiveTrading => {
                // Graceful degradation: no capital data, no panel.
                if let Some((expiry, non_expiry)) = strategy.capital_split() {
                    Self::render_capital_nudge(frame, rows[2], expiry, non_expiry, theme);
                }
            }
        }
    }

    fn render_options(frame: &mut Frame, area: Rect, mode: DeployMode, theme: &Theme) {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        Self::render_option(
            frame,
            halves[0],
            "Forward Test",
            "Simulation Trade",
            mode == DeployMode::ForwardTest,
            theme,
        );
        Self::render_option(
            frame,
            halves[1],
            "Live Trading",
            "Real money and real trades",
            mode == DeployMode::LiveTrading,
            theme,
        );
    }

    fn render_option(
        frame: &mut Frame,
        area: Rect,
        label: &str,
        subtitle: &str,
        selected: bool,
        theme: &Theme,
    ) {
        let (border_style, marker) = if selected {
            (Style::default().fg(theme.primary), "● ")
        } else {
            (Style::default().fg(Color::DarkGray), "○ ")
        };

        let block = Block::default().borders(Borders::ALL).border_style(border_style);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let line = Line::from(vec![
            Span::styled(marker, border_style),
            Span::styled(label, Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                format!("  {subtitle}"),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), inner);
    }

    fn render_forward_test_nudge(frame: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .title(" ℹ Forward Test Mode ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.gradient_end));

        let body = Paragraph::new(FORWARD_TEST_NOTICE)
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(body, area);
    }

    fn render_capital_nudge(
        frame: &mut Frame,
        area: Rect,
        expiry: &str,
        non_expiry: &str,
        theme: &Theme,
    ) {
        let block = Block::default()
            .title(" ⚠ Capital Requirements Vary ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.warning));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(3)])
            .split(inner);

        let message = Paragraph::new(CAPITAL_NOTICE).wrap(Wrap { trim: true });
        frame.render_widget(message, rows[0]);

        let header = Row::new(
            ["Day Type", "Minimum Capital Required"].iter().map(|h| {
                Cell::from(*h).style(
                    Style::default()
                        .fg(theme.warning)
                        .add_modifier(Modifier::BOLD),
                )
            }),
        )
        .height(1);

        let table = Table::new(
            [
                Row::new([
                    Cell::from("Expiry Day"),
                    Cell::from(expiry.to_string())
                        .style(Style::default().add_modifier(Modifier::BOLD)),
                ]),
                Row::new([
                    Cell::from("Non-Expiry Day"),
                    Cell::from(non_expiry.to_string())
                        .style(Style::default().add_modifier(Modifier::BOLD)),
                ]),
            ],
            [Constraint::Length(16), Constraint::Min(10)],
        )
        .header(header);

        frame.render_widget(table, rows[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::strategy;
    use crate::ui::test_util::render_text;

    fn section_text(strategy: &Strategy, mode: DeployMode) -> String {
        render_text(100, 20, |frame| {
            DeploySection::render(frame, frame.area(), strategy, mode, &Theme::default());
        })
    }

    #[test]
    fn forward_test_always_shows_simulation_notice() {
        let s = strategy("1");
        let text = section_text(&s, DeployMode::ForwardTest);
        assert!(text.contains("Forward Test Mode"));
        assert!(text.contains("No real money will be used"));
        assert!(!text.contains("Capital Requirements Vary"));
    }

    #[test]
    fn live_trading_without_capital_data_shows_no_panel() {
        let s = strategy("1");
        let text = section_text(&s, DeployMode::LiveTrading);
        assert!(!text.contains("Capital Requirements Vary"));
        assert!(!text.contains("Forward Test Mode"));
    }

    #[test]
    fn live_trading_with_capital_data_shows_both_rows() {
        let mut s = strategy("1");
        s.expiry_day_capital = Some("₹50,000".to_string());
        s.non_expiry_day_capital = Some("₹35,000".to_string());

        let text = section_text(&s, DeployMode::LiveTrading);
        assert!(text.contains("Capital Requirements Vary"));
        assert!(text.contains("Expiry Day"));
        assert!(text.contains("Non-Expiry Day"));
        assert!(text.contains("₹50,000"));
        assert!(text.contains("₹35,000"));
    }

    #[test]
    fn selected_option_is_marked() {
        let s = strategy("1");
        let forward = section_text(&s, DeployMode::ForwardTest);
        let live = section_text(&s, DeployMode::LiveTrading);
        // Exactly one filled marker per rendering.
        assert_eq!(forward.matches('●').count(), 1);
        assert_eq!(live.matches('●').count(), 1);
    }
}

//! Strategy catalog list (the discover page).

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use super::strategy_card::StrategyCard;
use crate::state::Store;

/// Strategy catalog list widget.
pub struct StrategyList;

impl StrategyList {
    /// Render the catalog as a stack of cards, windowed around the
    /// selection.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let block = Block::default()
            .title(format!(
                " Discover Strategies ({}) ",
                store.catalog.strategies.len()
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        if store.catalog.strategies.is_empty() {
            let placeholder = Paragraph::new("No strategies available").style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            );
            frame.render_widget(placeholder, inner);
            return;
        }

        let card_height = store.ui.card_height.max(5);
        let visible = ((inner.height / card_height).max(1)) as usize;
        let selected = store.catalog.selected_index.unwrap_or(0);
        let offset = selected.saturating_sub(visible - 1);

        for (slot, (index, strategy)) in store
            .catalog
            .strategies
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .enumerate()
        {
            let y = inner.y + slot as u16 * card_height;
            let height = card_height.min(inner.bottom().saturating_sub(y));
            if height < 3 {
                break;
            }
            let card_area = Rect {
                x: inner.x,
                y,
                width: inner.width,
                height,
            };
            StrategyCard::render(
                frame,
                card_area,
                strategy,
                store.catalog.is_bookmarked(&strategy.id),
                store.catalog.selected_index == Some(index),
                &store.theme,
            );
        }
    }
}

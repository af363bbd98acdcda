//! Full-description modal widget.
//!
//! The modal is a controlled overlay: it is rendered only while
//! `ModalState.open` is set and owns no state of its own, so the same
//! widget serves any subject.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::super::layout::centered_rect;
use crate::state::Store;

/// Width of the close affordance in the top border, in cells.
const CLOSE_BUTTON_WIDTH: u16 = 4;

/// Result of hit-testing a mouse position against the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalHit {
    /// The close affordance in the top-right corner.
    CloseButton,
    /// Inside the popup; clicks here must not close the modal.
    Content,
    /// Outside the popup.
    Backdrop,
}

/// Full-description modal.
pub struct StrategyModal;

impl StrategyModal {
    /// The popup rect for a given screen area.
    pub fn popup_area(area: Rect) -> Rect {
        centered_rect(60, 60, area)
    }

    /// Classify a mouse position relative to the popup.
    pub fn hit_test(popup: Rect, column: u16, row: u16) -> ModalHit {
        let inside = column >= popup.x
            && column < popup.right()
            && row >= popup.y
            && row < popup.bottom();
        if !inside {
            return ModalHit::Backdrop;
        }
        if row == popup.y && column >= popup.right().saturating_sub(CLOSE_BUTTON_WIDTH) {
            return ModalHit::CloseButton;
        }
        ModalHit::Content
    }

    /// Render the modal. Callers must only invoke this while the modal
    /// is open.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let popup = Self::popup_area(area);

        // Clear the area behind the popup
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .title(Line::from(format!(" {} ", store.modal_title())).style(
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .title_top(Line::from(" × ").right_aligned())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(store.theme.primary));

        let body = Paragraph::new(store.modal_body())
            .wrap(Wrap { trim: true })
            .block(block);

        frame.render_widget(body, popup);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn hit_test_partitions_the_screen() {
        let popup = Rect::new(20, 8, 60, 24);

        assert_eq!(StrategyModal::hit_test(popup, 0, 0), ModalHit::Backdrop);
        assert_eq!(StrategyModal::hit_test(popup, 19, 10), ModalHit::Backdrop);
        assert_eq!(StrategyModal::hit_test(popup, 80, 10), ModalHit::Backdrop);
        assert_eq!(StrategyModal::hit_test(popup, 50, 20), ModalHit::Content);
        assert_eq!(StrategyModal::hit_test(popup, 20, 8), ModalHit::Content);
    }

    #[test]
    fn close_button_occupies_the_top_right_corner() {
        let popup = Rect::new(20, 8, 60, 24);

        assert_eq!(StrategyModal::hit_test(popup, 78, 8), ModalHit::CloseButton);
        assert_eq!(StrategyModal::hit_test(popup, 76, 8), ModalHit::CloseButton);
        // Same column one row down is content, not the close button.
        assert_eq!(StrategyModal::hit_test(popup, 78, 9), ModalHit::Content);
        assert_eq!(StrategyModal::hit_test(popup, 50, 8), ModalHit::Content);
    }
}

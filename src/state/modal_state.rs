//! Read-more modal state.

/// State for the full-description modal.
///
/// Visibility and subject are owned here; the modal widget itself is
/// stateless. Closing clears only the open flag and retains the subject,
/// so the content stays stable if a close animation is ever added.
#[derive(Debug, Default)]
pub struct ModalState {
    /// Whether the modal is visible.
    pub open: bool,
    /// ID of the strategy shown in the modal.
    pub subject: Option<String>,
}

impl ModalState {
    /// Open the modal for a strategy.
    pub fn open_for(&mut self, id: impl Into<String>) {
        self.subject = Some(id.into());
        self.open = true;
    }

    /// Close the modal, retaining the subject.
    pub fn close(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn open_sets_subject_and_flag_together() {
        let mut modal = ModalState::default();
        modal.open_for("42");
        assert!(modal.open);
        assert_eq!(modal.subject.as_deref(), Some("42"));
    }

    #[test]
    fn close_retains_subject() {
        let mut modal = ModalState::default();
        modal.open_for("42");
        modal.close();
        assert!(!modal.open);
        assert_eq!(modal.subject.as_deref(), Some("42"));
    }

    #[test]
    fn reopening_replaces_subject() {
        let mut modal = ModalState::default();
        modal.open_for("1");
        modal.close();
        modal.open_for("2");
        assert!(modal.open);
        assert_eq!(modal.subject.as_deref(), Some("2"));
    }
}

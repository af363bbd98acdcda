//! Deploy mode selection state.

use crate::catalog::DeployMode;

/// State for the deploy section.
///
/// Selecting a mode is side-effect free; only the explicit deploy action
/// commits it. The user can toggle between modes indefinitely.
#[derive(Debug, Default)]
pub struct DeployState {
    /// Currently selected deploy mode.
    pub mode: DeployMode,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn initial_mode_is_forward_test() {
        assert_eq!(DeployState::default().mode, DeployMode::ForwardTest);
    }
}

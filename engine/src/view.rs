//! View-state selector for the popover surface.
//!
//! A small finite-state machine: the shell feeds it discrete user actions
//! and renders whichever of the three surfaces is selected. Independent of
//! the layout engine.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewState {
    #[default]
    Main,
    Settings,
    About,
}

/// Discrete user actions that drive view transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewAction {
    ShowMain,
    OpenSettings,
    OpenAbout,
    SaveSettings,
}

impl ViewState {
    /// Next state for a user action; total over every (state, action) pair.
    pub fn apply(self, action: ViewAction) -> ViewState {
        match action {
            ViewAction::OpenSettings => ViewState::Settings,
            ViewAction::OpenAbout => ViewState::About,
            ViewAction::ShowMain | ViewAction::SaveSettings => ViewState::Main,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transitions_from_every_state() {
        for state in [ViewState::Main, ViewState::Settings, ViewState::About] {
            assert_eq!(state.apply(ViewAction::OpenSettings), ViewState::Settings);
            assert_eq!(state.apply(ViewAction::OpenAbout), ViewState::About);
            assert_eq!(state.apply(ViewAction::ShowMain), ViewState::Main);
            assert_eq!(state.apply(ViewAction::SaveSettings), ViewState::Main);
        }
    }

    #[test]
    fn test_default_is_main() {
        assert_eq!(ViewState::default(), ViewState::Main);
    }
}

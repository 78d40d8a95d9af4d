use serde::{Deserialize, Serialize};

/// Lifecycle state of a modal instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModalState {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
    Destroyed,
}

impl ModalState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModalState::Closed => "closed",
            ModalState::Opening => "opening",
            ModalState::Open => "open",
            ModalState::Closing => "closing",
            ModalState::Destroyed => "destroyed",
        }
    }

    /// Open classes are applied (or being applied) to the root node.
    pub fn is_visible(&self) -> bool {
        matches!(self, ModalState::Opening | ModalState::Open)
    }

    /// The transition type may only be swapped while nothing is shown.
    pub fn accepts_transition_change(&self) -> bool {
        matches!(self, ModalState::Closed | ModalState::Closing)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ModalState::Destroyed)
    }
}

impl std::fmt::Display for ModalState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

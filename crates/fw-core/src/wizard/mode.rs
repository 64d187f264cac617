//! Mode controller.
//!
//! `PageMode` decides whether the page shows the wizard at all and, if so,
//! how the access gate behaves. The server-reported application status sets
//! it externally; the user can only toggle between display and edit.

use serde::{Deserialize, Serialize};

/// Mode seen by the access gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardMode {
    /// First-time completion.
    Setup,
    /// Revising a submitted, not yet approved record.
    Edit,
    /// Read-only re-inspection of every step.
    Review,
}

/// Page-level mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageMode {
    /// Read-only summary instead of the wizard.
    Display,
    Setup,
    Edit,
    Review,
}

/// Application status reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    #[default]
    NotStarted,
    Draft,
    Submitted,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModeEvent {
    ServerStatusLoaded { status: ApplicationStatus },
    RequestEdit,
    CancelEdit,
    Submitted,
}

impl PageMode {
    pub fn gate_mode(self) -> WizardMode {
        match self {
            PageMode::Setup => WizardMode::Setup,
            PageMode::Edit => WizardMode::Edit,
            PageMode::Review | PageMode::Display => WizardMode::Review,
        }
    }

    pub fn is_read_only(self) -> bool {
        match self {
            PageMode::Display | PageMode::Review => true,
            PageMode::Setup | PageMode::Edit => false,
        }
    }

    pub fn shows_wizard(self) -> bool {
        !matches!(self, PageMode::Display)
    }
}

impl From<ApplicationStatus> for PageMode {
    fn from(status: ApplicationStatus) -> Self {
        match status {
            ApplicationStatus::NotStarted | ApplicationStatus::Draft => PageMode::Setup,
            ApplicationStatus::Submitted => PageMode::Display,
            ApplicationStatus::Approved => PageMode::Review,
            ApplicationStatus::Rejected => PageMode::Edit,
        }
    }
}

/// Pure mode transition function.
pub struct ModeController;

impl ModeController {
    pub fn transition(mode: PageMode, event: ModeEvent) -> PageMode {
        match (mode, event) {
            (_, ModeEvent::ServerStatusLoaded { status }) => PageMode::from(status),
            (PageMode::Display, ModeEvent::RequestEdit) => PageMode::Edit,
            (PageMode::Edit, ModeEvent::CancelEdit) => PageMode::Display,
            (PageMode::Setup | PageMode::Edit, ModeEvent::Submitted) => PageMode::Display,
            (mode, _) => mode,
        }
    }
}

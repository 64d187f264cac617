//! Step registry.
//!
//! The wizard steps form a fixed, ordered sequence. Every other wizard
//! component derives ordering and required-ness from here.

use std::fmt;
use std::str::FromStr;

/// One tab of the supporter background wizard.
///
/// Declaration order is the wizard order; `Ord` follows it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum WizardStep {
    PersonalStory,
    AddictionTypes,
    Credentials,
    Specializations,
    Availability,
    Communication,
    Review,
}

/// Static description of a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepDescriptor {
    pub id: WizardStep,
    pub required: bool,
    pub title: &'static str,
}

/// Ordered registry of every wizard step.
pub const STEP_REGISTRY: [StepDescriptor; 7] = [
    StepDescriptor {
        id: WizardStep::PersonalStory,
        required: true,
        title: "Personal Story",
    },
    StepDescriptor {
        id: WizardStep::AddictionTypes,
        required: true,
        title: "Addiction Types",
    },
    StepDescriptor {
        id: WizardStep::Credentials,
        required: false,
        title: "Credentials",
    },
    StepDescriptor {
        id: WizardStep::Specializations,
        required: false,
        title: "Specializations",
    },
    StepDescriptor {
        id: WizardStep::Availability,
        required: true,
        title: "Availability",
    },
    StepDescriptor {
        id: WizardStep::Communication,
        required: false,
        title: "Communication",
    },
    StepDescriptor {
        id: WizardStep::Review,
        required: false,
        title: "Review",
    },
];

impl WizardStep {
    pub const ALL: [WizardStep; 7] = [
        WizardStep::PersonalStory,
        WizardStep::AddictionTypes,
        WizardStep::Credentials,
        WizardStep::Specializations,
        WizardStep::Availability,
        WizardStep::Communication,
        WizardStep::Review,
    ];

    /// First step of the wizard, always reachable.
    pub const fn first() -> Self {
        WizardStep::PersonalStory
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn descriptor(self) -> &'static StepDescriptor {
        &STEP_REGISTRY[self.index()]
    }

    pub fn required(self) -> bool {
        self.descriptor().required
    }

    pub fn title(self) -> &'static str {
        self.descriptor().title
    }

    /// Next step in the fixed order, `None` after the last one.
    pub fn next(self) -> Option<Self> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn previous(self) -> Option<Self> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    /// Steps strictly before this one, in order.
    pub fn predecessors(self) -> &'static [WizardStep] {
        const ORDER: &[WizardStep] = &WizardStep::ALL;
        &ORDER[..self.index()]
    }

    /// Steps whose completion is mandatory.
    pub fn required_steps() -> impl Iterator<Item = WizardStep> {
        Self::ALL.into_iter().filter(|step| step.required())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WizardStep::PersonalStory => "personal-story",
            WizardStep::AddictionTypes => "addiction-types",
            WizardStep::Credentials => "credentials",
            WizardStep::Specializations => "specializations",
            WizardStep::Availability => "availability",
            WizardStep::Communication => "communication",
            WizardStep::Review => "review",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown wizard step: {0}")]
pub struct UnknownStep(pub String);

impl FromStr for WizardStep {
    type Err = UnknownStep;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|step| step.as_str() == s)
            .ok_or_else(|| UnknownStep(s.to_string()))
    }
}

pub mod channel_events;

pub use channel_events::{ChannelWizardEventPort, WizardUiEvent};

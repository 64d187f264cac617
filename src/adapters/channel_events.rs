//! Event forwarding - forward wizard events to the UI over a channel

use async_trait::async_trait;
use fw_core::ports::WizardEventPort;
use fw_core::wizard::WizardState;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::{self, error::TrySendError};
use tracing::warn;

/// Wizard events delivered to the frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum WizardUiEvent {
    StateChanged { state: Box<WizardState> },
    SubmissionFailed { message: String },
    Navigate { route: String },
}

pub struct ChannelWizardEventPort {
    tx: mpsc::Sender<WizardUiEvent>,
}

impl ChannelWizardEventPort {
    pub fn new(tx: mpsc::Sender<WizardUiEvent>) -> Self {
        Self { tx }
    }

    /// Creates the port together with the receiving end for the UI.
    pub fn channel(buffer: usize) -> (Self, mpsc::Receiver<WizardUiEvent>) {
        let (tx, rx) = mpsc::channel(buffer);
        (Self::new(tx), rx)
    }

    /// Never waits on the UI: the orchestrator calls this while holding its
    /// dispatch lock, so a full buffer drops the event instead.
    fn forward(&self, event: WizardUiEvent) {
        match self.tx.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(event)) => {
                warn!(event = ?event, "wizard event dropped, UI event buffer full");
            }
            Err(TrySendError::Closed(event)) => {
                warn!(event = ?event, "wizard event dropped, UI receiver closed");
            }
        }
    }
}

#[async_trait]
impl WizardEventPort for ChannelWizardEventPort {
    async fn emit_wizard_state_changed(&self, state: WizardState) {
        self.forward(WizardUiEvent::StateChanged {
            state: Box::new(state),
        });
    }

    async fn emit_submission_failed(&self, message: String) {
        self.forward(WizardUiEvent::SubmissionFailed { message });
    }

    async fn emit_navigation(&self, route: String) {
        self.forward(WizardUiEvent::Navigate { route });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wizard_event_serializes_with_type_tag() {
        let navigate = serde_json::to_value(WizardUiEvent::Navigate {
            route: "/profile".to_string(),
        })
        .unwrap();
        assert_eq!(
            navigate,
            serde_json::json!({ "type": "Navigate", "route": "/profile" })
        );
    }

    #[tokio::test]
    async fn forwards_events_in_order() {
        let (port, mut rx) = ChannelWizardEventPort::channel(4);

        port.emit_submission_failed("try again".to_string()).await;
        port.emit_navigation("/profile".to_string()).await;

        assert_eq!(
            rx.recv().await,
            Some(WizardUiEvent::SubmissionFailed {
                message: "try again".to_string()
            })
        );
        assert_eq!(
            rx.recv().await,
            Some(WizardUiEvent::Navigate {
                route: "/profile".to_string()
            })
        );
    }

    #[tokio::test]
    async fn closed_receiver_does_not_fail_emitter() {
        let (port, rx) = ChannelWizardEventPort::channel(1);
        drop(rx);

        port.emit_wizard_state_changed(WizardState::default()).await;
    }

    #[tokio::test]
    async fn full_buffer_drops_events_without_blocking() {
        let (port, mut rx) = ChannelWizardEventPort::channel(1);

        tokio::time::timeout(std::time::Duration::from_secs(1), async {
            port.emit_navigation("/first".to_string()).await;
            port.emit_navigation("/second".to_string()).await;
        })
        .await
        .expect("emitting must not wait for the receiver");

        assert_eq!(
            rx.recv().await,
            Some(WizardUiEvent::Navigate {
                route: "/first".to_string()
            })
        );
        assert!(rx.try_recv().is_err());
    }
}

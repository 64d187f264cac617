use std::sync::Arc;

use fw_core::ports::{ApiError, BackgroundApiPort};
use fw_core::wizard::BackgroundFormData;
use tracing::{info, info_span, Instrument};

/// Use case for submitting the whole background aggregate.
///
/// A single attempt; callers decide what to do with the error.
pub struct SubmitSupporterBackground {
    api: Arc<dyn BackgroundApiPort>,
}

impl SubmitSupporterBackground {
    pub fn new(api: Arc<dyn BackgroundApiPort>) -> Self {
        Self { api }
    }

    pub fn from_ports(api: Arc<dyn BackgroundApiPort>) -> Self {
        Self::new(api)
    }

    pub async fn execute(&self, form: &BackgroundFormData) -> Result<(), ApiError> {
        let span = info_span!(
            "usecase.submit_supporter_background.execute",
            credentials = form.credentials.len()
        );
        async {
            self.api.submit_background(form).await?;
            info!("supporter background submitted");
            Ok(())
        }
        .instrument(span)
        .await
    }
}

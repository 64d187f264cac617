use std::sync::Arc;

use fw_core::ports::{ApiError, BackgroundApiPort};
use fw_core::wizard::BackgroundRecord;
use tracing::{debug, info_span, Instrument};

/// Use case for fetching the current user's background record.
pub struct LoadSupporterBackground {
    api: Arc<dyn BackgroundApiPort>,
}

impl LoadSupporterBackground {
    pub fn new(api: Arc<dyn BackgroundApiPort>) -> Self {
        Self { api }
    }

    pub fn from_ports(api: Arc<dyn BackgroundApiPort>) -> Self {
        Self::new(api)
    }

    pub async fn execute(&self) -> Result<Option<BackgroundRecord>, ApiError> {
        let span = info_span!("usecase.load_supporter_background.execute");
        async {
            let record = self.api.fetch_background().await?;
            match &record {
                Some(record) => debug!(status = ?record.status, "background record loaded"),
                None => debug!("no background record yet"),
            }
            Ok(record)
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use fw_core::wizard::{ApplicationStatus, BackgroundFormData};

    mockall::mock! {
        pub Api {}

        #[async_trait]
        impl BackgroundApiPort for Api {
            async fn fetch_background(&self) -> Result<Option<BackgroundRecord>, ApiError>;
            async fn submit_background(&self, form: &BackgroundFormData) -> Result<(), ApiError>;
        }
    }

    #[tokio::test]
    async fn returns_none_when_user_never_started() {
        let mut api = MockApi::new();
        api.expect_fetch_background().times(1).returning(|| Ok(None));

        let use_case = LoadSupporterBackground::new(Arc::new(api));

        assert_eq!(use_case.execute().await, Ok(None));
    }

    #[tokio::test]
    async fn propagates_api_errors() {
        let mut api = MockApi::new();
        api.expect_fetch_background()
            .returning(|| Err(ApiError::Unauthorized));

        let use_case = LoadSupporterBackground::new(Arc::new(api));

        assert_eq!(use_case.execute().await, Err(ApiError::Unauthorized));
    }

    #[tokio::test]
    async fn returns_server_record() {
        let mut api = MockApi::new();
        api.expect_fetch_background().returning(|| {
            Ok(Some(BackgroundRecord {
                status: ApplicationStatus::Submitted,
                form: BackgroundFormData::default(),
            }))
        });

        let use_case = LoadSupporterBackground::from_ports(Arc::new(api));
        let record = use_case.execute().await.unwrap().unwrap();

        assert_eq!(record.status, ApplicationStatus::Submitted);
    }
}

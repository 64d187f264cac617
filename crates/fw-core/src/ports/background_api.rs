use async_trait::async_trait;

use crate::ports::errors::ApiError;
use crate::wizard::{BackgroundFormData, BackgroundRecord};

#[async_trait]
pub trait BackgroundApiPort: Send + Sync {
    /// Fetch the current user's background record.
    /// - Ok(None) if the user never started one
    async fn fetch_background(&self) -> Result<Option<BackgroundRecord>, ApiError>;

    /// Submit the full aggregate. Not retried.
    async fn submit_background(&self, form: &BackgroundFormData) -> Result<(), ApiError>;
}

#[cfg(test)]
mockall::mock! {
    pub BackgroundApi {}

    #[async_trait]
    impl BackgroundApiPort for BackgroundApi {
        async fn fetch_background(&self) -> Result<Option<BackgroundRecord>, ApiError>;
        async fn submit_background(&self, form: &BackgroundFormData) -> Result<(), ApiError>;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::ApplicationStatus;

    #[tokio::test]
    async fn mock_background_api_returns_configured_record() {
        let mut api = MockBackgroundApi::new();
        api.expect_fetch_background().returning(|| {
            Ok(Some(BackgroundRecord {
                status: ApplicationStatus::Draft,
                form: BackgroundFormData::default(),
            }))
        });
        api.expect_submit_background()
            .returning(|_| Err(ApiError::Server(503)));

        let port: &dyn BackgroundApiPort = &api;
        let record = port.fetch_background().await.unwrap().unwrap();
        assert_eq!(record.status, ApplicationStatus::Draft);
        assert_eq!(
            port.submit_background(&record.form).await,
            Err(ApiError::Server(503))
        );
    }
}

pub mod background_client;

pub use background_client::{HttpBackgroundApi, HttpBackgroundApiConfig, DEFAULT_REQUEST_TIMEOUT};

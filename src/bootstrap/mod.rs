pub mod config;
pub mod runtime;
pub mod tracing;

pub use config::{load_config, resolve_config};
pub use runtime::{create_runtime, AppDeps, AppRuntime, UseCases};
pub use self::tracing::init_tracing_subscriber;

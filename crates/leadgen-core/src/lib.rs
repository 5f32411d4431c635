pub mod app_config;
pub mod config;
pub mod filter;
pub mod job;
pub mod lead;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use filter::{FilterParseError, FilterSpec, PresenceFilter, RatingFilter};
pub use job::{JobRequest, JobRequestBuilder, JobRequestError};
pub use lead::{LeadCollection, LeadRecord};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

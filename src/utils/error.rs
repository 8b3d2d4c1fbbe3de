use crate::domain::model::{Point, TravelProfile};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    /// Caller bug: malformed coordinates, non-positive totals and the like.
    /// Never retried.
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// The external directions provider was unreachable, answered non-2xx,
    /// or returned geometry we could not use. Carries the leg that failed.
    #[error("Routing failed for leg {from} -> {to} [{profile}]: {reason}")]
    UpstreamRoutingFailure {
        from: Point,
        to: Point,
        profile: TravelProfile,
        reason: String,
    },

    /// The station feed could not be fetched or merged.
    #[error("Station feed error: {message}")]
    Feed { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid config value for '{field}' = '{value}': {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PlannerError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        PlannerError::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn feed(message: impl Into<String>) -> Self {
        PlannerError::Feed {
            message: message.into(),
        }
    }

    pub fn routing(from: Point, to: Point, profile: TravelProfile, reason: impl Into<String>) -> Self {
        PlannerError::UpstreamRoutingFailure {
            from,
            to,
            profile,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PlannerError>;

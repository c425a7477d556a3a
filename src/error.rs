use miette::Diagnostic;
use thiserror::Error;

/// Main error type for the crate
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Invalid time '{0}', expected HH:MM")]
    #[diagnostic(code(barbershop_hours::invalid_time))]
    InvalidTime(String),

    #[error("Invalid schedule: {0}")]
    #[diagnostic(code(barbershop_hours::invalid_schedule))]
    InvalidSchedule(String),

    #[error("Working hours rejected: {}", .0.join("; "))]
    #[diagnostic(
        code(barbershop_hours::validation),
        help("barber hours must fit inside the barbershop's opening hours")
    )]
    Validation(Vec<String>),

    #[error("Not found: {0}")]
    #[diagnostic(code(barbershop_hours::not_found))]
    NotFound(String),

    #[error("Environment error: {0}")]
    #[diagnostic(code(barbershop_hours::environment))]
    Environment(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(barbershop_hours::config))]
    Config(String),

    #[error(transparent)]
    #[diagnostic(code(barbershop_hours::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(barbershop_hours::serialization))]
    Serialization(String),

    #[error("Other error: {0}")]
    #[diagnostic(code(barbershop_hours::other))]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Type alias for Result with our Error type
pub type ScheduleResult<T> = Result<T, Error>;

/// Helper to create environment errors
pub fn env_error(var: &str) -> Error {
    Error::Environment(format!("Invalid environment variable: {}", var))
}

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}

/// Helper to create schedule invariant errors
pub fn schedule_error(message: impl Into<String>) -> Error {
    Error::InvalidSchedule(message.into())
}

/// Helper to create lookup errors
pub fn not_found(what: &str, id: &str) -> Error {
    Error::NotFound(format!("{} '{}'", what, id))
}

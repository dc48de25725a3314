use thiserror::Error;

pub type BuilderResult<T> = Result<T, BuilderError>;

#[derive(Error, Debug, Clone)]
pub enum BuilderError {
    #[error("Unknown component type '{type_tag}'")]
    UnknownComponentType { type_tag: String },

    #[error("No component instance with id '{id}'")]
    UnknownInstance { id: String },

    #[error("Invalid custom component: {reason}")]
    InvalidCustomComponent { reason: String },

    #[error("Duplicate property key '{key}'")]
    DuplicatePropKey { key: String },

    #[error("Invalid page data: {0}")]
    InvalidPage(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Not signed in")]
    NotAuthenticated,

    #[error("Account is not active")]
    AccountInactive,

    #[error("Permission denied: {action}")]
    PermissionDenied { action: String },
}

impl From<serde_json::Error> for BuilderError {
    fn from(err: serde_json::Error) -> Self {
        BuilderError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for BuilderError {
    fn from(err: serde_yaml::Error) -> Self {
        BuilderError::Config(err.to_string())
    }
}

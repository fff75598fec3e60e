use thiserror::Error;

#[derive(Error, Clone, Debug, PartialEq)]
pub enum ConfigurationError {
    #[error("ResourceNotFoundError: [{message}]")]
    ResourceNotFound { message: String },

    #[error("IoFailureError: [{message}]")]
    IoFailure { message: String },

    #[error("InvalidLevelError: [{level}] is not a valid level")]
    InvalidLevel { level: String },

    #[error("ComponentNotFoundError: No appender is registered as [{component}]")]
    ComponentNotFound { component: String },

    #[error("ComponentAccessDeniedError: Appender [{component}] cannot be constructed")]
    ComponentAccessDenied { component: String },

    #[error("ComponentInstantiationFailureError: Failed to construct appender [{component}]\n cause: [{cause}]")]
    ComponentInstantiationFailure { component: String, cause: String },
}

impl ConfigurationError {
    /// Returns whether the error aborts the whole configuration pass.
    /// All the other errors only affect the key or token that caused them.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ConfigurationError::ResourceNotFound { .. } | ConfigurationError::IoFailure { .. }
        )
    }
}

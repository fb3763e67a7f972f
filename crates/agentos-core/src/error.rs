use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentOsError {
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("spec not found: {0}")]
    SpecNotFound(String),

    #[error("{0} required")]
    MissingField(&'static str),

    #[error("invalid spec name '{0}': use letters, digits, '-' or '_'")]
    InvalidSpecName(String),

    #[error("spec already exists: {0}")]
    SpecExists(String),

    #[error("access denied: {0}")]
    AccessDenied(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl AgentOsError {
    /// True for errors caused by the caller's input rather than the disk.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::MissingField(_) | Self::InvalidSpecName(_) | Self::SpecExists(_)
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::FileNotFound(_) | Self::SpecNotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, AgentOsError>;

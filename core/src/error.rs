use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Amount {amount:.2} outside allowed range [0, {max:.0}]")]
    AmountOutOfRange { amount: f64, max: f64 },

    #[error("Time {time}s outside allowed range [0, {max}]")]
    TimeOutOfRange { time: i64, max: i64 },

    #[error("Unknown scenario '{label}'")]
    UnknownScenario { label: String },

    #[error("Invalid config: {reason}")]
    InvalidConfig { reason: String },

    #[error("Config file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DemoError {
    /// True for errors caused by out-of-domain caller input.
    /// These are surfaced to the user and never retried.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::AmountOutOfRange { .. }
                | Self::TimeOutOfRange { .. }
                | Self::UnknownScenario { .. }
                | Self::InvalidConfig { .. }
        )
    }
}

pub type DemoResult<T> = Result<T, DemoError>;

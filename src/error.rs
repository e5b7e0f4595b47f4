use crate::services::config::ConfigError;
use crate::services::docker::SourceError;
use std::fmt;
use std::io;

/// Every way a dashboard session can fail. All of them are fatal.
#[derive(Debug)]
pub enum AppError {
    Terminal(io::Error),
    Source(SourceError),
    Config(ConfigError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Terminal(err) => write!(f, "terminal error: {}", err),
            AppError::Source(err) => write!(f, "{}", err),
            AppError::Config(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Terminal(err) => Some(err),
            AppError::Source(err) => Some(err),
            AppError::Config(err) => Some(err),
        }
    }
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Terminal(err)
    }
}

impl From<SourceError> for AppError {
    fn from(err: SourceError) -> Self {
        AppError::Source(err)
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::Config(err)
    }
}

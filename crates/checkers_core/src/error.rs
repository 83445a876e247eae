use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckersError {
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
    #[error("side to move has no legal moves")]
    NoLegalMoves,
    #[error("invalid config: {message}")]
    Config { message: String },
    #[error("io: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl CheckersError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CheckersError::InvalidInput {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        CheckersError::Config {
            message: message.into(),
        }
    }
}

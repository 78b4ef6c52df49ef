use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{message}")]
    Input { message: String },

    #[error("{message}")]
    Schema { message: String },

    #[error("{message}")]
    Output { message: String },

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, TaskError>;

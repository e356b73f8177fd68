use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResponseError {
    #[error("Response failed: {0}")]
    Failed(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NotifyError {
    #[error("Invalid observer: the referenced observer no longer exists")]
    InvalidObserver,
    #[error("Notification halted at position {position}: {source}")]
    Halted {
        position: usize,
        #[source]
        source: ResponseError,
    },
}

pub type ResponseResult = Result<(), ResponseError>;

pub type NotifyResult = Result<(), NotifyError>;

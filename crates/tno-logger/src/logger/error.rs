use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("Logger has been already initialized")]
    AlreadyInitialized,
}

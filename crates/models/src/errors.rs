use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("database error: {0}")]
    Db(String),
    #[error("scores codec error: {0}")]
    Codec(String),
}

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("cache error: {0}")]
    Cache(#[from] crate::cache::CacheError),

    #[error("client error: {0}")]
    Client(#[from] crate::client::ClientError),

    #[error("source error: {0}")]
    Source(#[from] crate::source::SourceError),

    #[error("config error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

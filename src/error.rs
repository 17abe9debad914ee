use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("message must not be empty")]
    EmptyMessage,
    #[error("{0}")]
    ConfigIo(String),
    #[error("{0}")]
    ConfigParse(String),
    #[error("unsupported config format '{0}'")]
    UnsupportedConfigFormat(String),
    #[error("failed to render output: {0}")]
    Render(String),
    #[error("{0}")]
    Io(String),
}

pub type Result<T> = std::result::Result<T, Error>;

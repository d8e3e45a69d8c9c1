use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Domain validation error: {0}")]
    DomainValidationError(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing environment variable '{0}'")]
    MissingVar(&'static str),

    #[error("Invalid base URL '{0}'")]
    InvalidUrl(String),
}

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Response body is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("Malformed XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Response does not match schema: {0}")]
    Schema(#[from] quick_xml::de::DeError),

    #[error("Unexpected root element <{found}>, expected <{expected}>")]
    UnexpectedRoot {
        expected: &'static str,
        found: String,
    },

    #[error("Response body contains no root element")]
    EmptyDocument,

    #[error("Missing field '{0}' in response")]
    MissingField(&'static str),
}

#[derive(Error, Debug)]
pub enum NamecheapError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Network(#[from] reqwest::Error),

    #[error("Failed to decode response: {0}")]
    Decode(#[from] DecodeError),

    /// First error reported by the remote API.
    #[error("{message} ({number})")]
    Api { message: String, number: String },
}

pub type Result<T, E = NamecheapError> = std::result::Result<T, E>;

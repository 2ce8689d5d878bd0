use thiserror::Error;

#[derive(Debug, Error)]
pub enum ComicError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Missing input: {0}")]
    MissingInput(String),

    #[error("Decode error: {0}")]
    DecodeError(String),

    #[error("Encode error: {0}")]
    EncodeError(String),

    #[error("Transform error: {0}")]
    TransformError(String),

    #[error("Layout error: {0}")]
    LayoutError(String),

    #[error("Invalid image: {0}")]
    InvalidImage(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Generates factory methods for [`ComicError`] variants that wrap a `String`.
macro_rules! error_constructors {
    ($(
        $(#[doc = $doc:expr])*
        $method:ident => $variant:ident
    ),* $(,)?) => {
        impl ComicError {
            $(
                $(#[doc = $doc])*
                pub fn $method(msg: impl Into<String>) -> Self {
                    Self::$variant(msg.into())
                }
            )*
        }
    };
}

error_constructors! {
    /// Create a configuration error.
    config => ConfigError,
    /// Create a missing input error.
    missing_input => MissingInput,
    /// Create a decode error.
    decode => DecodeError,
    /// Create an encode error.
    encode => EncodeError,
    /// Create a transform error.
    transform => TransformError,
    /// Create a layout error.
    layout => LayoutError,
    /// Create an invalid image error.
    invalid_image => InvalidImage,
}

impl From<serde_yml::Error> for ComicError {
    fn from(e: serde_yml::Error) -> Self {
        Self::ConfigError(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ComicError>;

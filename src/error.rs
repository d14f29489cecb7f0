use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("No home directory")]
    NoHomeDir,

    #[error("Invalid amount: {0:?}")]
    InvalidAmount(String),

    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },
}

impl Error {
    /// True for the two rejections an operation attempt can produce.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Error::InvalidAmount(_) | Error::InsufficientFunds { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;

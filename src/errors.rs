use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChsmackError {
    #[error("{option}: \"{value}\" exceeds {limit} characters")]
    LabelTooLong {
        option: &'static str,
        value: String,
        limit: usize,
    },

    #[error("{0}")]
    Nix(#[from] nix::Error),

    #[error("NUL error: {0}")]
    NulError(#[from] std::ffi::NulError),
}

pub type Result<T> = std::result::Result<T, ChsmackError>;

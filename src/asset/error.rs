//! Asset enumeration and resolution errors.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to walk `{dir}`")]
    Walk {
        dir: PathBuf,
        #[source]
        source: jwalk::Error,
    },

    #[error("asset path is not valid UTF-8: `{0}`")]
    NonUtf8Path(PathBuf),

    #[error("cannot resolve `{path}`: {message}")]
    Resolve { path: PathBuf, message: String },
}

//! Cross-cutting error types for LaudoSync.
//!
//! Network errors live in `laudo-client`; configuration errors in
//! `laudo-config`. Everything converges into `anyhow` in `laudo-cli`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// A report file could not be read from disk.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

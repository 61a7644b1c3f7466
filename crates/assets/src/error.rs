//! Asset loading errors.
//!
//! Every variant is fatal at startup.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssetError {
    /// One or more required files do not exist.
    #[error("missing asset file(s): {}", display_paths(.paths))]
    Missing { paths: Vec<PathBuf> },

    /// A file exists but could not be decoded as an image.
    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Actor animation frames must all share one size.
    #[error("actor frame {index} is {}, expected {}", size(.found), size(.expected))]
    FrameSizeMismatch {
        index: usize,
        expected: (u32, u32),
        found: (u32, u32),
    },

    #[error("no actor animation frames")]
    NoFrames,
}

fn size(dims: &(u32, u32)) -> String {
    format!("{}x{}", dims.0, dims.1)
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

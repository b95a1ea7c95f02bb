// Copyright 2021 System76 <info@system76.com>
// SPDX-License-Identifier: MPL-2.0

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::DecodeError;

/// A failure encountered while walking the search paths.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("cannot read directory '{}': {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot decode '{}': {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },
}

impl ScanError {
    pub fn path(&self) -> &Path {
        match self {
            ScanError::ReadDir { path, .. } | ScanError::Decode { path, .. } => path,
        }
    }
}

// Copyright 2021 System76 <info@system76.com>
// SPDX-License-Identifier: MPL-2.0

use std::{collections::VecDeque, fs, io, iter::FusedIterator, path::PathBuf};

use crate::{DesktopEntry, ScanError};

/// Walks the search paths and yields every `*.desktop` file found directly
/// inside them, in listing order.
pub struct Iter {
    directories_to_walk: VecDeque<PathBuf>,
    actively_walking: Option<(PathBuf, fs::ReadDir)>,
}

impl Iter {
    /// Directories will be processed in order.
    pub fn new<I: IntoIterator<Item = PathBuf>>(directories_to_walk: I) -> Self {
        Self {
            directories_to_walk: directories_to_walk.into_iter().collect(),
            actively_walking: None,
        }
    }
}

impl Iterator for Iter {
    type Item = Result<PathBuf, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        'outer: loop {
            let (dir, mut iterator) = match self.actively_walking.take() {
                Some(walking) => walking,
                None => {
                    while let Some(path) = self.directories_to_walk.pop_front() {
                        match fs::read_dir(&path) {
                            Ok(directory) => {
                                self.actively_walking = Some((path, directory));
                                continue 'outer;
                            }

                            Err(why) if why.kind() == io::ErrorKind::NotFound => {
                                tracing::debug!(path = %path.display(), "search path does not exist");
                                continue;
                            }

                            Err(why) => {
                                return Some(Err(ScanError::ReadDir { path, source: why }));
                            }
                        }
                    }

                    return None;
                }
            };

            #[allow(clippy::while_let_on_iterator)]
            while let Some(entry) = iterator.next() {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(why) => {
                        tracing::debug!(dir = %dir.display(), "skipping unreadable entry: {}", why);
                        continue;
                    }
                };

                let file_name = entry.file_name();
                if file_name.as_encoded_bytes().ends_with(b".desktop") {
                    let path = dir.join(file_name);
                    self.actively_walking = Some((dir, iterator));
                    return Some(Ok(path));
                }
            }
        }
    }
}

impl FusedIterator for Iter {}

impl Iter {
    /// Decodes each candidate path, yielding only usable entries.
    ///
    /// Files that fail to decode come through as [`ScanError::Decode`].
    pub fn entries(self) -> impl Iterator<Item = Result<DesktopEntry, ScanError>> {
        self.filter_map(|path| {
            let path = match path {
                Ok(path) => path,
                Err(why) => return Some(Err(why)),
            };

            match DesktopEntry::from_path(&path) {
                Ok(entry) => entry.map(Ok),
                Err(source) => Some(Err(ScanError::Decode { path, source })),
            }
        })
    }

    /// Like [`Iter::entries`], but logs and skips whatever could not be read:
    /// unreadable search paths as well as files that fail to decode.
    pub fn valid_entries(self) -> impl Iterator<Item = DesktopEntry> {
        self.entries().filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(why @ ScanError::ReadDir { .. }) => {
                tracing::warn!("skipping search path: {}", why);
                None
            }
            Err(why @ ScanError::Decode { .. }) => {
                tracing::warn!("skipping malformed desktop entry: {}", why);
                None
            }
        })
    }
}

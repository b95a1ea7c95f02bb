// Copyright 2021 System76 <info@system76.com>
// SPDX-License-Identifier: MPL-2.0

//! Locate freedesktop application entries and look them up by name.
//!
//! ```no_run
//! use deskfind::{default_paths, find_app_by_name, home_dir, Iter};
//!
//! let paths = default_paths(home_dir().as_deref());
//! if let Some(entry) = find_app_by_name("firefox", Iter::new(paths).valid_entries()) {
//!     println!("{}", entry.path().display());
//! }
//! ```

mod decoder;
mod desktop_entry;
mod error;
mod iter;
mod output;

pub use self::decoder::{decode_groups, DecodeError};
pub use self::desktop_entry::DesktopEntry;
pub use self::error::ScanError;
pub use self::iter::Iter;
pub use self::output::{format_entry, Output, ParseOutputError};

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Group(pub BTreeMap<Key, Value>);
pub type Key = String;
pub type Value = String;

impl Group {
    #[inline]
    pub fn entry(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Groups(pub BTreeMap<GroupName, Group>);
pub type GroupName = String;

impl Groups {
    #[inline]
    pub fn group(&self, name: &str) -> Option<&Group> {
        self.0.get(name)
    }

    #[inline]
    pub fn desktop_entry(&self) -> Option<&Group> {
        self.group("Desktop Entry")
    }
}

/// The standard application directories, most specific first.
///
/// The per-user directory is only included when `home` is known.
pub fn default_paths(home: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(3);

    if let Some(home) = home {
        paths.push(home.join(".local/share/applications"));
    }

    paths.push(PathBuf::from("/usr/local/share/applications"));
    paths.push(PathBuf::from("/usr/share/applications"));
    paths
}

/// `$HOME`, falling back to the platform's notion of the home directory.
pub fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .filter(|home| !home.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
}

/// Returns the first entry whose `Name` equals `name`, ignoring case.
///
/// Stops pulling from `entries` as soon as a match is found.
pub fn find_app_by_name<I>(name: &str, entries: I) -> Option<DesktopEntry>
where
    I: IntoIterator<Item = DesktopEntry>,
{
    entries.into_iter().find(|entry| entry.matches_name(name))
}

/// Like [`find_app_by_name`], but gives up on the first error met before a
/// match, for callers of [`Iter::entries`] that want to see every failure.
pub fn try_find_app_by_name<I>(name: &str, entries: I) -> Result<Option<DesktopEntry>, ScanError>
where
    I: IntoIterator<Item = Result<DesktopEntry, ScanError>>,
{
    for entry in entries {
        let entry = entry?;
        if entry.matches_name(name) {
            return Ok(Some(entry));
        }
    }

    Ok(None)
}

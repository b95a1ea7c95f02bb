// Copyright 2021 System76 <info@system76.com>
// SPDX-License-Identifier: MPL-2.0

use std::fmt::{self, Display, Formatter};
use std::path::{Path, PathBuf};

use crate::{Group, Groups};

/// A parsed `.desktop` file that has a `[Desktop Entry]` group with an `Exec` key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopEntry {
    pub path: PathBuf,
    pub groups: Groups,
}

impl DesktopEntry {
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups.group(name)
    }

    /// A field under the `[Desktop Entry]` group.
    #[inline]
    pub fn desktop_entry(&self, key: &str) -> Option<&str> {
        self.groups.desktop_entry()?.entry(key)
    }

    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.desktop_entry("Name")
    }

    #[inline]
    pub fn generic_name(&self) -> Option<&str> {
        self.desktop_entry("GenericName")
    }

    #[inline]
    pub fn exec(&self) -> Option<&str> {
        self.desktop_entry("Exec")
    }

    /// Case-insensitive comparison against the `Name` field.
    ///
    /// An entry without a `Name` never matches.
    #[inline]
    pub fn matches_name(&self, name: &str) -> bool {
        self.name()
            .is_some_and(|n| n.to_lowercase() == name.to_lowercase())
    }
}

impl Display for DesktopEntry {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        for (group_name, group) in &self.groups.0 {
            writeln!(formatter, "[{}]", group_name)?;

            for (key, value) in &group.0 {
                writeln!(formatter, "{}={}", key, value)?;
            }
            writeln!(formatter)?;
        }

        Ok(())
    }
}

// Copyright 2021 System76 <info@system76.com>
// SPDX-License-Identifier: MPL-2.0

use std::str::FromStr;
use thiserror::Error;

use crate::DesktopEntry;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseOutputError {
    #[error("unknown output field '{0}' (expected one of: path, name, executable, exec, generic_name, generic)")]
    UnknownField(String),
}

/// Which fields of an entry get printed.
///
/// Fields are always emitted as path, name, generic name, executable, no
/// matter the order they were selected in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Output {
    pub path: bool,
    pub name: bool,
    pub generic_name: bool,
    pub executable: bool,
}

impl Output {
    pub const NONE: Output = Output {
        path: false,
        name: false,
        generic_name: false,
        executable: false,
    };

    pub const ALL: Output = Output {
        path: true,
        name: true,
        generic_name: true,
        executable: true,
    };

    /// Joins the selected fields with `separator`. Missing optional fields
    /// keep their slot as an empty string.
    pub fn format(&self, entry: &DesktopEntry, separator: &str) -> String {
        let mut slots: Vec<std::borrow::Cow<'_, str>> = Vec::with_capacity(4);

        if self.path {
            slots.push(entry.path().to_string_lossy());
        }
        if self.name {
            slots.push(entry.name().unwrap_or_default().into());
        }
        if self.generic_name {
            slots.push(entry.generic_name().unwrap_or_default().into());
        }
        if self.executable {
            slots.push(entry.exec().unwrap_or_default().into());
        }

        slots.join(separator)
    }
}

impl Default for Output {
    /// `name,path`
    fn default() -> Self {
        Output {
            path: true,
            name: true,
            ..Output::NONE
        }
    }
}

impl FromStr for Output {
    type Err = ParseOutputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut output = Output::NONE;

        for field in s.split(',') {
            match field.trim() {
                "path" => output.path = true,
                "name" => output.name = true,
                "executable" | "exec" => output.executable = true,
                "generic_name" | "generic" => output.generic_name = true,
                other => return Err(ParseOutputError::UnknownField(other.to_string())),
            }
        }

        Ok(output)
    }
}

#[inline]
pub fn format_entry(entry: &DesktopEntry, output: Output, separator: &str) -> String {
    output.format(entry, separator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use speculoos::prelude::*;

    fn entry(input: &str) -> DesktopEntry {
        DesktopEntry::from_str("/tmp/apps/x.desktop", input)
            .unwrap()
            .unwrap()
    }

    #[test]
    fn parse_fields() {
        assert_eq!("name,path".parse::<Output>().unwrap(), Output::default());
        assert_eq!("path,name".parse::<Output>().unwrap(), Output::default());
        assert_eq!(
            "exec,generic,name,path".parse::<Output>().unwrap(),
            Output::ALL
        );
        assert_eq!(
            "executable,generic_name".parse::<Output>().unwrap(),
            Output {
                generic_name: true,
                executable: true,
                ..Output::NONE
            }
        );
    }

    #[test]
    fn parse_unknown_field() {
        assert_that!("name,icon".parse::<Output>()).is_err();
        assert_eq!(
            "name,icon".parse::<Output>(),
            Err(ParseOutputError::UnknownField("icon".into()))
        );
        assert_eq!(
            "".parse::<Output>(),
            Err(ParseOutputError::UnknownField(String::new()))
        );
    }

    #[test]
    fn default_selection() {
        let de = entry("[Desktop Entry]\nName=Foo\nExec=foo-bin\n");

        assert_eq!(
            Output::default().format(&de, "\t"),
            "/tmp/apps/x.desktop\tFoo"
        );
    }

    #[test]
    fn all_fields_keep_their_slots() {
        let de = entry("[Desktop Entry]\nName=Foo\nExec=foo-bin %u\n");
        let line = format_entry(&de, Output::ALL, "|");
        let slots: Vec<&str> = line.split('|').collect();

        assert_that!(slots).is_equal_to(vec!["/tmp/apps/x.desktop", "Foo", "", "foo-bin %u"]);
    }

    #[test]
    fn missing_name_is_empty() {
        let de = entry("[Desktop Entry]\nExec=foo-bin\nGenericName=Tool\n");

        assert_eq!(
            "name,generic".parse::<Output>().unwrap().format(&de, ","),
            ",Tool"
        );
    }

    #[test]
    fn nothing_selected() {
        let de = entry("[Desktop Entry]\nExec=foo-bin\n");

        assert_eq!(Output::NONE.format(&de, "\t"), "");
    }
}

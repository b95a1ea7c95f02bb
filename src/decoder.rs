// Copyright 2021 System76 <info@system76.com>
// SPDX-License-Identifier: MPL-2.0

use std::{fs, path::PathBuf};

use crate::{DesktopEntry, Group, Groups};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("line {line}: key/value pair found before any group header")]
    KeyValueWithoutAGroup { line: usize },
    #[error("line {line}: group header is missing its closing ']'")]
    InvalidGroup { line: usize },
    #[error("line {line}: empty key")]
    InvalidKey { line: usize },
    #[error("line {line}: expected a group header or a key=value pair")]
    InvalidLine { line: usize },
    #[error("group '{group}' is defined more than once")]
    MultipleGroupWithSameName { group: String },
    #[error("key '{key}' is defined more than once in group '{group}'")]
    DuplicateKey { group: String, key: String },
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Line<'a> {
    Group(&'a str),
    Entry(&'a str, &'a str),
    Blank,
}

/// Classifies a single line. `line_no` is 1-based and only used for errors.
pub(crate) fn parse_line(line: &str, line_no: usize) -> Result<Line<'_>, DecodeError> {
    let line = line.trim();

    if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
        return Ok(Line::Blank);
    }

    let bytes = line.as_bytes();

    if bytes[0] == b'[' {
        return match memchr::memrchr(b']', &bytes[1..]) {
            Some(end) => Ok(Line::Group(&line[1..end + 1])),
            None => Err(DecodeError::InvalidGroup { line: line_no }),
        };
    }

    match memchr::memchr(b'=', bytes) {
        Some(delimiter) => {
            let key = line[..delimiter].trim_end();
            if key.is_empty() {
                return Err(DecodeError::InvalidKey { line: line_no });
            }
            Ok(Line::Entry(key, line[delimiter + 1..].trim_start()))
        }
        None => Err(DecodeError::InvalidLine { line: line_no }),
    }
}

/// Parses an INI-style document into its groups.
///
/// Values are stored exactly as written apart from surrounding whitespace:
/// `%`, `$` and `\` sequences are never expanded.
pub fn decode_groups(input: &str) -> Result<Groups, DecodeError> {
    let mut groups = Groups::default();
    let mut active_group: Option<(&str, Group)> = None;

    for (idx, line) in input.lines().enumerate() {
        let line_no = idx + 1;

        match parse_line(line, line_no)? {
            Line::Group(name) => {
                let seen = groups.0.contains_key(name)
                    || active_group.as_ref().is_some_and(|(active, _)| *active == name);

                if seen {
                    return Err(DecodeError::MultipleGroupWithSameName {
                        group: name.to_string(),
                    });
                }

                if let Some((prev_name, prev_group)) = active_group.replace((name, Group::default()))
                {
                    groups.0.insert(prev_name.to_string(), prev_group);
                }
            }
            Line::Entry(key, value) => {
                let (group_name, group) = active_group
                    .as_mut()
                    .ok_or(DecodeError::KeyValueWithoutAGroup { line: line_no })?;

                if group.0.contains_key(key) {
                    return Err(DecodeError::DuplicateKey {
                        group: group_name.to_string(),
                        key: key.to_string(),
                    });
                }

                group.0.insert(key.to_string(), value.to_string());
            }
            Line::Blank => (),
        }
    }

    if let Some((name, group)) = active_group.take() {
        groups.0.insert(name.to_string(), group);
    }

    Ok(groups)
}

impl DesktopEntry {
    /// Decodes `input` as the contents of the file at `path`.
    ///
    /// Returns `Ok(None)` when the document is well formed but is not a usable
    /// application entry: the `[Desktop Entry]` group or its `Exec` key is missing.
    pub fn from_str(
        path: impl Into<PathBuf>,
        input: &str,
    ) -> Result<Option<DesktopEntry>, DecodeError> {
        let path = path.into();
        let groups = decode_groups(input)?;

        let has_exec = groups
            .desktop_entry()
            .is_some_and(|group| group.entry("Exec").is_some());

        if !has_exec {
            tracing::debug!(path = %path.display(), "skipping entry without Desktop Entry/Exec");
            return Ok(None);
        }

        Ok(Some(DesktopEntry { path, groups }))
    }

    /// Reads and decodes the file at `path`.
    #[inline]
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Option<DesktopEntry>, DecodeError> {
        let path: PathBuf = path.into();
        let input = fs::read_to_string(&path)?;
        Self::from_str(path, &input)
    }
}

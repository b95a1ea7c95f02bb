// Copyright 2021 System76 <info@system76.com>
// SPDX-License-Identifier: MPL-2.0

use std::path::{Path, PathBuf};

use clap::Parser;
use deskfind::{default_paths, Output};

#[derive(Debug, Parser)]
#[command(version, about = "Find and list freedesktop application entries")]
pub struct Cli {
    /// Additional paths to search
    #[arg(short = 'p', value_name = "DIR")]
    pub paths: Vec<PathBuf>,

    /// If specified, do not search default paths
    #[arg(long)]
    pub no_defaults: bool,

    /// If specified, the name of the application to search
    #[arg(short = 'n', value_name = "NAME")]
    pub name: Option<String>,

    /// Comma separated list of output fields
    /// (any combination of path, name, executable/exec, generic_name/generic)
    #[arg(long, value_name = "FIELDS", default_value = "name,path")]
    pub output: Output,

    /// Separator placed between output fields
    #[arg(long, value_name = "SEP", default_value = "\t", hide_default_value = true)]
    pub sep: String,
}

impl Cli {
    /// Default paths (unless disabled) followed by every `-p` path.
    pub fn search_paths(&self, home: Option<&Path>) -> Vec<PathBuf> {
        let mut paths = if self.no_defaults {
            Vec::new()
        } else {
            default_paths(home)
        };

        paths.extend(self.paths.iter().cloned());
        paths
    }
}

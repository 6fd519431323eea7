// Copyright 2026 Muvon Un Limited
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "leetfinder")]
#[command(version, author = "Muvon Un Limited <opensource@muvon.io>")]
#[command(about = "Find the LeetCode problem behind a title or description")]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find a problem by its title
    Find {
        /// Problem title, e.g. "1. Two Sum" or "Problem: Two Sum"
        title: String,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Rank problems by similarity to a free-text description
    Analyze {
        /// Problem description (may contain HTML)
        description: Option<String>,

        /// Read the description from a file instead
        #[arg(long, conflicts_with = "description")]
        file: Option<PathBuf>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Find by title, falling back to description analysis
    Search {
        /// Problem title
        title: String,

        /// Description used when the title does not match
        #[arg(short, long)]
        description: Option<String>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Show catalog statistics
    Stats {
        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Show today's daily problem
    Daily {
        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Download the remote catalog into the local snapshot
    Sync,
}

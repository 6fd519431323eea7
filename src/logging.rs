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

use tracing::debug;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, registry::Registry, EnvFilter};

use crate::config::LoggingConfig;

/// Default filter when RUST_LOG is not set
fn default_filter(debug_mode: bool) -> EnvFilter {
    if debug_mode {
        EnvFilter::new("warn,leetfinder=debug")
    } else {
        EnvFilter::new("warn")
    }
}

/// Initialize logging for the CLI.
///
/// Human readable output goes to stderr so stdout stays clean for results
/// (including `--format json`). With `file = true` a daily-rotated JSON log is
/// also written under the storage directory.
pub fn init_logging(config: &LoggingConfig, verbose: bool) -> Result<(), anyhow::Error> {
    let debug_mode = verbose || config.debug;
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(debug_mode));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let file_layer = if config.file {
        let log_dir = crate::storage::get_log_dir()?;
        let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "leetfinder.log");
        Some(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .json(),
        )
    } else {
        None
    };

    Registry::default()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    debug!(
        debug_mode = debug_mode,
        file_logging = config.file,
        "Logging initialized"
    );

    Ok(())
}

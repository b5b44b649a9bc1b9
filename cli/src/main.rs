//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Termspan
//!
//! Reads terminal output on stdin and writes it to stdout with every SGR
//! escape sequence replaced by HTML span markup.
//!
//! ## Usage
//!
//! ```bash
//! ls --color=always | termspan > listing.html
//! ```
//!
//! The class prefix defaults to `ansi` and can be changed with the
//! `TERMSPAN_CLASS_PREFIX` environment variable. Diagnostics go to stderr and
//! are filtered with `RUST_LOG`.

use std::process::ExitCode;
use termspan_spancodec::{SpanConfig, convert_async};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let mut config = SpanConfig::new();
    if let Ok(prefix) = std::env::var("TERMSPAN_CLASS_PREFIX") {
        config = config.with_class_prefix(prefix);
    }

    match convert_async(tokio::io::stdin(), tokio::io::stdout(), config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("Conversion failed: {}", err);
            ExitCode::FAILURE
        }
    }
}

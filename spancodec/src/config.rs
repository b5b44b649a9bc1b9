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

//! Converter configuration
//!
//! ```
//! use termspan_spancodec::SpanConfig;
//!
//! let config = SpanConfig::new()
//!     .with_class_prefix("term")
//!     .with_max_instruction_length(64);
//! ```

use crate::consts::{DEFAULT_CLASS_PREFIX, MAX_INSTRUCTION_LENGTH};
use crate::state::SpanClass;
use tokio_util::bytes::{BufMut, BytesMut};

/// Markup settings for a [`SpanConverter`](crate::SpanConverter)
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SpanConfig {
    /// Label prepended to every span class (`<prefix>-<class>`)
    pub class_prefix: String,
    /// Maximum buffered length of one SGR sequence body
    pub max_instruction_length: usize,
}

impl Default for SpanConfig {
    fn default() -> Self {
        Self {
            class_prefix: DEFAULT_CLASS_PREFIX.to_string(),
            max_instruction_length: MAX_INSTRUCTION_LENGTH,
        }
    }
}

impl SpanConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the class prefix
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    /// Set the maximum buffered instruction length
    pub fn with_max_instruction_length(mut self, length: usize) -> Self {
        self.max_instruction_length = length;
        self
    }

    /// Write the opening tag for `class` into `dst`.
    pub fn open_tag(&self, class: SpanClass, dst: &mut BytesMut) {
        dst.put_slice(b"<span class='");
        dst.put_slice(self.class_prefix.as_bytes());
        dst.put_u8(b'-');
        class.put(dst);
        dst.put_slice(b"'>");
    }
}

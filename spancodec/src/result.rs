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

//! Error types for the spancodec crate.
//!
//! Unsupported SGR fields, malformed escape introducers and unterminated
//! sequences are not errors; they are absorbed by the converter. The only
//! failure a conversion can surface is an I/O fault on the byte source or sink.

use thiserror::Error;

/// Result type alias for operations that may fail with a [`SpanError`].
pub type SpanResult<T> = Result<T, SpanError>;

/// Errors that can occur while converting a byte stream.
#[derive(Debug, Error)]
pub enum SpanError {
    /// I/O error from the underlying byte source or sink
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SpanError {
    /// Check if the error terminates processing
    ///
    /// Every current variant is fatal: output integrity cannot be guaranteed
    /// once a read or write has failed.
    pub fn is_fatal(&self) -> bool {
        match self {
            SpanError::Io(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "sink closed");
        let error = SpanError::from(io);
        assert!(error.is_fatal());
        assert_eq!(error.to_string(), "I/O error: sink closed");
    }
}

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

use crate::{SpanConfig, SpanConverter, SpanError, SpanResult};
use tokio_util::bytes::BytesMut;
use tokio_util::codec::Decoder;
use tracing::instrument;

/// Codec turning a raw terminal byte stream into HTML span markup.
///
/// Each call to `decode` consumes every buffered input byte and yields the
/// markup produced so far, if any. At end of stream `decode_eof` closes any
/// open spans once and then reports exhaustion.
#[derive(Debug)]
pub struct SpanCodec {
    converter: SpanConverter,
    finished: bool,
}

impl SpanCodec {
    /// Creates a new span codec with the given configuration.
    pub fn new(config: SpanConfig) -> Self {
        Self {
            converter: SpanConverter::new(config),
            finished: false,
        }
    }

    /// Get a reference to the inner converter
    pub fn converter(&self) -> &SpanConverter {
        &self.converter
    }

    fn drain(&mut self, src: &mut BytesMut) -> BytesMut {
        let mut dst = BytesMut::with_capacity(src.len());
        let input = src.split();
        self.converter.feed(&input, &mut dst);
        dst
    }
}

impl Default for SpanCodec {
    fn default() -> Self {
        Self::new(SpanConfig::default())
    }
}

impl Decoder for SpanCodec {
    type Item = BytesMut;
    type Error = SpanError;

    #[instrument(skip_all)]
    fn decode(&mut self, src: &mut BytesMut) -> SpanResult<Option<Self::Item>> {
        if src.is_empty() {
            return Ok(None);
        }
        self.finished = false;
        let dst = self.drain(src);
        if dst.is_empty() {
            Ok(None)
        } else {
            Ok(Some(dst))
        }
    }

    #[instrument(skip_all)]
    fn decode_eof(&mut self, src: &mut BytesMut) -> SpanResult<Option<Self::Item>> {
        if self.finished && src.is_empty() {
            return Ok(None);
        }
        let mut dst = self.drain(src);
        self.converter.finish(&mut dst);
        self.finished = true;
        if dst.is_empty() {
            Ok(None)
        } else {
            Ok(Some(dst))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_consumes_input() {
        let mut codec = SpanCodec::default();
        let mut src = BytesMut::from(&b"\x1b[1mA"[..]);
        let frame = codec.decode(&mut src).unwrap().unwrap();
        assert!(src.is_empty());
        assert_eq!(&frame[..], b"<span class='ansi-bold'>A");
        assert!(codec.converter().attributes().bold);
    }

    #[test]
    fn test_decode_partial_sequence() {
        let mut codec = SpanCodec::default();
        let mut src = BytesMut::from(&b"\x1b[3"[..]);
        assert!(codec.decode(&mut src).unwrap().is_none());
        src.extend_from_slice(b"2mG");
        let frame = codec.decode(&mut src).unwrap().unwrap();
        assert_eq!(&frame[..], b"<span class='ansi-fg-2'>G");
    }

    #[test]
    fn test_decode_eof_closes_once() {
        let mut codec = SpanCodec::default();
        let mut src = BytesMut::from(&b"\x1b[4mU"[..]);
        codec.decode(&mut src).unwrap();
        let frame = codec.decode_eof(&mut src).unwrap().unwrap();
        assert_eq!(&frame[..], b"</span>");
        assert!(codec.decode_eof(&mut src).unwrap().is_none());
        assert!(codec.converter().attributes().is_default());
    }

    #[test]
    fn test_decode_eof_without_open_spans() {
        let mut codec = SpanCodec::default();
        let mut src = BytesMut::new();
        assert!(codec.decode_eof(&mut src).unwrap().is_none());
    }
}

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

//! Whole-stream conversion over blocking and async byte sources and sinks.
//!
//! Output already written before an I/O failure is left as is; the error is
//! returned to the caller.

use crate::{SpanCodec, SpanConfig, SpanConverter, SpanResult};
use futures::StreamExt;
use std::io::{ErrorKind, Read, Write};
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use tokio_util::bytes::BytesMut;
use tokio_util::codec::FramedRead;
use tracing::{debug, instrument};

const READ_BUFFER_SIZE: usize = 8192;

/// Convert everything readable from `source` into `sink`, then flush it.
#[instrument(skip_all)]
pub fn convert<R, W>(mut source: R, mut sink: W, config: &SpanConfig) -> SpanResult<()>
where
    R: Read,
    W: Write,
{
    let mut converter = SpanConverter::new(config.clone());
    let mut input = [0u8; READ_BUFFER_SIZE];
    let mut output = BytesMut::with_capacity(READ_BUFFER_SIZE);
    let mut total = 0usize;

    loop {
        let read = match source.read(&mut input) {
            Ok(0) => break,
            Ok(read) => read,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(err.into()),
        };
        total += read;
        converter.feed(&input[..read], &mut output);
        sink.write_all(&output)?;
        output.clear();
    }

    converter.finish(&mut output);
    sink.write_all(&output)?;
    sink.flush()?;
    debug!("Converted {} input bytes", total);
    Ok(())
}

/// Convert everything readable from `source` into `sink` using a
/// [`SpanCodec`], then flush it.
#[instrument(skip_all)]
pub async fn convert_async<R, W>(source: R, mut sink: W, config: SpanConfig) -> SpanResult<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut frames = FramedRead::new(source, SpanCodec::new(config));
    while let Some(frame) = frames.next().await {
        let frame = frame?;
        sink.write_all(&frame).await?;
    }
    sink.flush().await?;
    Ok(())
}

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

//! Tests for SpanCodec driven through tokio framed I/O

use futures::StreamExt;
use termspan_spancodec::{SpanCodec, SpanConfig, convert_async};
use tokio::io::AsyncWriteExt;
use tokio_util::bytes::BytesMut;
use tokio_util::codec::{Decoder, FramedRead};

#[test]
fn test_decode_across_chunk_boundaries() {
    let mut codec = SpanCodec::default();
    let mut output = BytesMut::new();
    for chunk in [&b"ab\x1b"[..], b"[", b"1;", b"3", b"4mcd", b"\n", b"ef"] {
        let mut src = BytesMut::from(chunk);
        if let Some(frame) = codec.decode(&mut src).unwrap() {
            output.extend_from_slice(&frame);
        }
    }
    let mut src = BytesMut::new();
    while let Some(frame) = codec.decode_eof(&mut src).unwrap() {
        output.extend_from_slice(&frame);
    }
    assert_eq!(
        String::from_utf8(output.to_vec()).unwrap(),
        "ab<span class='ansi-bold'><span class='ansi-fg-4'>cd</span></span>\n\
         <span class='ansi-bold'><span class='ansi-fg-4'>ef</span></span>"
    );
}

#[tokio::test]
async fn test_framed_read_over_duplex() {
    let (mut writer, reader) = tokio::io::duplex(16);
    let producer = tokio::spawn(async move {
        writer
            .write_all(b"\x1b[5mblink\x1b[0m steady\n\x1b[35mmagenta")
            .await
            .unwrap();
    });

    let mut frames = FramedRead::new(reader, SpanCodec::new(SpanConfig::default()));
    let mut output = Vec::new();
    while let Some(frame) = frames.next().await {
        output.extend_from_slice(&frame.unwrap());
    }
    producer.await.unwrap();

    assert_eq!(
        String::from_utf8(output).unwrap(),
        "<span class='ansi-blink'>blink</span> steady\n\
         <span class='ansi-fg-5'>magenta</span>"
    );
}

#[tokio::test]
async fn test_convert_async_with_custom_prefix() {
    let input: &[u8] = b"\x1b[4mu\x1b[0m";
    let mut output = Vec::new();
    convert_async(input, &mut output, SpanConfig::new().with_class_prefix("log"))
        .await
        .unwrap();
    assert_eq!(output, b"<span class='log-underscore'>u</span>");
}

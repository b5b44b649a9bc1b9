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

use crate::consts::{CLOSE_TAG, CSI, ESC, NEWLINE, SGR};
use crate::parser::{classify, fields};
use crate::state::{AttributeState, OutputInstruction};
use crate::SpanConfig;
use tokio_util::bytes::{BufMut, BytesMut};
use tracing::{debug, trace, warn};

/// Scanner states.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum State {
    /// Plain text; bytes are copied through.
    Plain,
    /// Saw ESC, waiting to see whether `[` follows.
    Escape,
    /// Inside `ESC [`, buffering the body until the terminating `m`.
    Instruction,
}

/// Byte-at-a-time converter from SGR-annotated text to HTML spans.
///
/// The converter owns the [`AttributeState`] of one stream. Output is written
/// into a caller supplied [`BytesMut`] so it can be driven directly from a
/// codec or from a blocking read loop.
///
/// Spans never cross a newline: every open span is closed before the newline
/// is written and the full set is reopened before the next plain byte. Call
/// [`finish`](Self::finish) at end of input to close whatever is still open.
#[derive(Debug)]
pub struct SpanConverter {
    config: SpanConfig,
    attributes: AttributeState,
    state: State,
    /// Set after a newline: nothing is open in the output, but the spans for
    /// `attributes` have to be rendered before the next plain byte.
    reopen: bool,
    instruction: Vec<u8>,
    truncated: bool,
}

impl SpanConverter {
    /// Creates a converter at the start of a stream.
    pub fn new(config: SpanConfig) -> Self {
        Self {
            config,
            attributes: AttributeState::new(),
            state: State::Plain,
            reopen: false,
            instruction: Vec::new(),
            truncated: false,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &SpanConfig {
        &self.config
    }

    /// The attributes currently in effect.
    pub fn attributes(&self) -> &AttributeState {
        &self.attributes
    }

    /// Discards all stream state without emitting anything.
    pub fn clear(&mut self) {
        self.attributes = AttributeState::new();
        self.state = State::Plain;
        self.reopen = false;
        self.instruction.clear();
        self.truncated = false;
    }

    /// Converts a complete input buffer, including end-of-stream handling.
    pub fn convert_all(&mut self, src: &[u8]) -> BytesMut {
        let mut dst = BytesMut::with_capacity(src.len());
        self.feed(src, &mut dst);
        self.finish(&mut dst);
        dst
    }

    /// Process a run of input bytes.
    pub fn feed(&mut self, src: &[u8], dst: &mut BytesMut) {
        for byte in src {
            self.push(*byte, dst);
        }
    }

    /// Process the next input byte, appending any output to `dst`.
    pub fn push(&mut self, byte: u8, dst: &mut BytesMut) {
        match self.state {
            State::Plain => self.process_plain(byte, dst),
            State::Escape => self.process_escape(byte, dst),
            State::Instruction => self.process_instruction(byte, dst),
        }
    }

    /// Handle end of input.
    ///
    /// A dangling ESC is written verbatim, an unterminated instruction is
    /// dropped, and every span still open is closed. The converter is then
    /// ready for a new stream.
    pub fn finish(&mut self, dst: &mut BytesMut) {
        match self.state {
            State::Plain => {}
            State::Escape => {
                self.reopen_if_armed(dst);
                dst.put_u8(ESC);
            }
            State::Instruction => {
                debug!(
                    "Discarding unterminated SGR sequence of {} bytes",
                    self.instruction.len()
                );
            }
        }
        if !self.reopen {
            self.close_all(dst);
        }
        self.clear();
    }

    fn process_plain(&mut self, byte: u8, dst: &mut BytesMut) {
        match byte {
            ESC => self.state = State::Escape,
            NEWLINE => self.process_newline(dst),
            _ => {
                self.reopen_if_armed(dst);
                dst.put_u8(byte);
            }
        }
    }

    fn process_newline(&mut self, dst: &mut BytesMut) {
        if !self.reopen {
            self.close_all(dst);
        }
        dst.put_u8(NEWLINE);
        self.reopen = true;
    }

    fn process_escape(&mut self, byte: u8, dst: &mut BytesMut) {
        match byte {
            CSI => {
                self.state = State::Instruction;
                self.instruction.clear();
                self.truncated = false;
            }
            NEWLINE => {
                self.state = State::Plain;
                self.reopen_if_armed(dst);
                dst.put_u8(ESC);
                self.process_newline(dst);
            }
            _ => {
                self.state = State::Plain;
                self.reopen_if_armed(dst);
                dst.put_u8(ESC);
                dst.put_u8(byte);
            }
        }
    }

    fn process_instruction(&mut self, byte: u8, dst: &mut BytesMut) {
        if byte == SGR {
            self.state = State::Plain;
            self.execute(dst);
            return;
        }
        if self.instruction.len() < self.config.max_instruction_length {
            self.instruction.push(byte);
        } else if !self.truncated {
            warn!(
                "SGR sequence exceeds {} bytes, truncating",
                self.config.max_instruction_length
            );
            self.truncated = true;
        }
    }

    /// Apply each field of the buffered instruction in order.
    fn execute(&mut self, dst: &mut BytesMut) {
        let instruction = std::mem::take(&mut self.instruction);
        for field in fields(&instruction) {
            let Some(mutation) = classify(field) else {
                trace!(
                    "Ignoring unsupported SGR field {:?}",
                    String::from_utf8_lossy(field)
                );
                continue;
            };
            let output = self.attributes.apply(mutation);
            // While a reopen is pending nothing is open; the next plain byte
            // renders the full state.
            if self.reopen {
                continue;
            }
            if let Some(output) = output {
                self.emit(output, dst);
            }
        }
        self.instruction = instruction;
        self.instruction.clear();
    }

    fn emit(&self, output: OutputInstruction, dst: &mut BytesMut) {
        match output {
            OutputInstruction::Incremental(class) => self.config.open_tag(class, dst),
            OutputInstruction::Rebuild(count) => {
                for _ in 0..count {
                    dst.put_slice(CLOSE_TAG);
                }
                self.open_all(dst);
            }
        }
    }

    fn open_all(&self, dst: &mut BytesMut) {
        for class in self.attributes.classes() {
            self.config.open_tag(class, dst);
        }
    }

    fn close_all(&self, dst: &mut BytesMut) {
        for _ in 0..self.attributes.differing_count() {
            dst.put_slice(CLOSE_TAG);
        }
    }

    fn reopen_if_armed(&mut self, dst: &mut BytesMut) {
        if self.reopen {
            self.open_all(dst);
            self.reopen = false;
        }
    }
}

impl Default for SpanConverter {
    fn default() -> Self {
        Self::new(SpanConfig::default())
    }
}

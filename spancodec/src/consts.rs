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

/// Escape introducer.
pub const ESC: u8 = 0x1B;

/// Second byte of a Control Sequence Introducer (`ESC [`).
pub const CSI: u8 = b'[';

/// Final byte of a Select Graphic Rendition sequence.
pub const SGR: u8 = b'm';

/// Separator between SGR parameter fields.
pub const SEPARATOR: u8 = b';';

/// Line feed.
pub const NEWLINE: u8 = b'\n';

/// Closing tag for every span.
pub const CLOSE_TAG: &[u8] = b"</span>";

/// Default label prepended to every span class.
pub const DEFAULT_CLASS_PREFIX: &str = "ansi";

/// Maximum number of bytes buffered for the body of one `ESC [ ... m` sequence.
///
/// Standard SGR sequences are well under 20 bytes. Bytes beyond this limit are
/// dropped while the converter keeps waiting for the terminating `m`, which
/// bounds memory use on malformed input.
pub const MAX_INSTRUCTION_LENGTH: usize = 256;

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

//! Conversion of ANSI SGR escape sequences into class-annotated HTML spans.
//!
//! Plain bytes pass through untouched. Every `ESC [ <fields> m` sequence is
//! replaced by zero or more `<span class='<prefix>-<class>'>` / `</span>`
//! fragments, and spans are closed before and reopened after every newline so
//! that no span ever crosses a line boundary.

mod codec;
mod config;
mod consts;
mod converter;
mod parser;
mod result;
mod state;
mod stream;

pub use self::codec::SpanCodec;
pub use self::config::SpanConfig;
pub use self::consts::{DEFAULT_CLASS_PREFIX, MAX_INSTRUCTION_LENGTH};
pub use self::converter::SpanConverter;
pub use self::parser::{Mutation, classify, fields};
pub use self::result::{SpanError, SpanResult};
pub use self::state::{AttributeState, OutputInstruction, SpanClass};
pub use self::stream::{convert, convert_async};

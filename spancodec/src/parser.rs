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

use crate::consts::SEPARATOR;

/// A single classified SGR instruction.
///
/// Produced by [`classify`] from one parameter field and consumed immediately by
/// [`AttributeState::apply`](crate::AttributeState::apply).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Mutation {
    /// `0` or an empty field: return every attribute to its default.
    Reset,
    /// `1`
    BoldEnable,
    /// `4`
    UnderscoreEnable,
    /// `5`
    BlinkEnable,
    /// `8`
    HiddenEnable,
    /// `30`-`37` map to 0-7, `90`-`97` map to 8-15.
    Foreground(u8),
    /// `40`-`47` map to 0-7, `100`-`107` map to 8-15.
    Background(u8),
}

/// Split the body of an `ESC [ ... m` sequence into its parameter fields.
///
/// An empty body yields one empty field and a trailing `;` yields a trailing
/// empty field; both classify as [`Mutation::Reset`].
pub fn fields(body: &[u8]) -> impl Iterator<Item = &[u8]> {
    body.split(|byte| *byte == SEPARATOR)
}

/// Classify one SGR parameter field.
///
/// Leading `'0'` characters are ignored. Returns `None` for anything this
/// converter does not render: unknown codes, 256/true color introducers (`38`,
/// `48`), default color resets (`39`, `49`) and non-numeric garbage.
pub fn classify(field: &[u8]) -> Option<Mutation> {
    let start = field
        .iter()
        .position(|byte| *byte != b'0')
        .unwrap_or(field.len());

    match &field[start..] {
        [] => Some(Mutation::Reset),
        [b'1'] => Some(Mutation::BoldEnable),
        [b'4'] => Some(Mutation::UnderscoreEnable),
        [b'5'] => Some(Mutation::BlinkEnable),
        [b'8'] => Some(Mutation::HiddenEnable),
        [b'3', color @ b'0'..=b'7'] => Some(Mutation::Foreground(color - b'0')),
        [b'9', color @ b'0'..=b'7'] => Some(Mutation::Foreground(8 + (color - b'0'))),
        [b'4', color @ b'0'..=b'7'] => Some(Mutation::Background(color - b'0')),
        // Bright backgrounds (100-107): only the middle and last digit are checked.
        [_, b'0', color @ b'0'..=b'7'] => Some(Mutation::Background(8 + (color - b'0'))),
        _ => None,
    }
}

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

//! Rendering attribute tracking.
//!
//! [`AttributeState`] holds the six independent attribute slots and decides,
//! for each [`Mutation`], what markup has to change. Switching a color while
//! another color of the same category is active always tears down and rebuilds
//! the whole span stack rather than closing only the conflicting span.

use crate::parser::Mutation;
use std::fmt;
use tokio_util::bytes::{BufMut, BytesMut};

/// The class carried by one open span.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SpanClass {
    /// `bold`
    Bold,
    /// `underscore`
    Underscore,
    /// `blink`
    Blink,
    /// `hidden`
    Hidden,
    /// `fg-<index>`, index 0-15
    Foreground(u8),
    /// `bg-<index>`, index 0-15
    Background(u8),
}

impl fmt::Display for SpanClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpanClass::Bold => f.write_str("bold"),
            SpanClass::Underscore => f.write_str("underscore"),
            SpanClass::Blink => f.write_str("blink"),
            SpanClass::Hidden => f.write_str("hidden"),
            SpanClass::Foreground(index) => write!(f, "fg-{}", index),
            SpanClass::Background(index) => write!(f, "bg-{}", index),
        }
    }
}

impl SpanClass {
    /// Write the class name into `dst` without going through `Display`.
    pub fn put(&self, dst: &mut BytesMut) {
        let (family, index): (&[u8], u8) = match self {
            SpanClass::Bold => return dst.put_slice(b"bold"),
            SpanClass::Underscore => return dst.put_slice(b"underscore"),
            SpanClass::Blink => return dst.put_slice(b"blink"),
            SpanClass::Hidden => return dst.put_slice(b"hidden"),
            SpanClass::Foreground(index) => (b"fg-", *index),
            SpanClass::Background(index) => (b"bg-", *index),
        };
        dst.put_slice(family);
        if index >= 10 {
            dst.put_u8(b'0' + index / 10);
        }
        dst.put_u8(b'0' + index % 10);
    }
}

/// Markup change required after applying a [`Mutation`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OutputInstruction {
    /// Open one span nested inside whatever is already open.
    Incremental(SpanClass),
    /// Close this many spans, then reopen every span of the current state.
    Rebuild(usize),
}

/// Currently active rendering attributes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttributeState {
    pub bold: bool,
    pub underscore: bool,
    pub blink: bool,
    pub hidden: bool,
    /// Color index 0-15
    pub foreground: Option<u8>,
    /// Color index 0-15
    pub background: Option<u8>,
}

/// Attribute slots in the order spans are opened when the stack is rendered.
static FIELDS: [fn(&AttributeState) -> Option<SpanClass>; 6] = [
    bold_class,
    underscore_class,
    blink_class,
    hidden_class,
    foreground_class,
    background_class,
];

fn bold_class(state: &AttributeState) -> Option<SpanClass> {
    state.bold.then_some(SpanClass::Bold)
}

fn underscore_class(state: &AttributeState) -> Option<SpanClass> {
    state.underscore.then_some(SpanClass::Underscore)
}

fn blink_class(state: &AttributeState) -> Option<SpanClass> {
    state.blink.then_some(SpanClass::Blink)
}

fn hidden_class(state: &AttributeState) -> Option<SpanClass> {
    state.hidden.then_some(SpanClass::Hidden)
}

fn foreground_class(state: &AttributeState) -> Option<SpanClass> {
    state.foreground.map(SpanClass::Foreground)
}

fn background_class(state: &AttributeState) -> Option<SpanClass> {
    state.background.map(SpanClass::Background)
}

impl AttributeState {
    /// Creates a state with every attribute off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no attribute differs from its default.
    pub fn is_default(&self) -> bool {
        self.differing_count() == 0
    }

    /// Number of attributes differing from their default.
    ///
    /// This is also the number of spans open for this state.
    pub fn differing_count(&self) -> usize {
        self.classes().count()
    }

    /// Span classes for every non-default attribute, in rendering order:
    /// the boolean flags, then foreground, then background.
    pub fn classes(&self) -> impl Iterator<Item = SpanClass> + '_ {
        FIELDS.iter().filter_map(move |class| class(self))
    }

    /// Apply a mutation and report the markup it requires.
    ///
    /// Returns `None` when the mutation changes nothing visible.
    pub fn apply(&mut self, mutation: Mutation) -> Option<OutputInstruction> {
        match mutation {
            Mutation::Reset => {
                let open = self.differing_count();
                if open == 0 {
                    return None;
                }
                *self = Self::default();
                Some(OutputInstruction::Rebuild(open))
            }
            Mutation::BoldEnable => Self::enable(&mut self.bold, SpanClass::Bold),
            Mutation::UnderscoreEnable => {
                Self::enable(&mut self.underscore, SpanClass::Underscore)
            }
            Mutation::BlinkEnable => Self::enable(&mut self.blink, SpanClass::Blink),
            Mutation::HiddenEnable => Self::enable(&mut self.hidden, SpanClass::Hidden),
            Mutation::Foreground(color) => {
                let open = self.differing_count();
                Self::recolor(&mut self.foreground, color, open, SpanClass::Foreground)
            }
            Mutation::Background(color) => {
                let open = self.differing_count();
                Self::recolor(&mut self.background, color, open, SpanClass::Background)
            }
        }
    }

    fn enable(flag: &mut bool, class: SpanClass) -> Option<OutputInstruction> {
        if *flag {
            return None;
        }
        *flag = true;
        Some(OutputInstruction::Incremental(class))
    }

    fn recolor(
        slot: &mut Option<u8>,
        color: u8,
        open: usize,
        class: fn(u8) -> SpanClass,
    ) -> Option<OutputInstruction> {
        match slot.replace(color) {
            Some(previous) if previous == color => None,
            Some(_) => Some(OutputInstruction::Rebuild(open)),
            None => Some(OutputInstruction::Incremental(class(color))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = AttributeState::new();
        assert!(state.is_default());
        assert_eq!(state.differing_count(), 0);
        assert_eq!(state.classes().count(), 0);
    }

    #[test]
    fn test_class_names() {
        assert_eq!(SpanClass::Bold.to_string(), "bold");
        assert_eq!(SpanClass::Underscore.to_string(), "underscore");
        assert_eq!(SpanClass::Blink.to_string(), "blink");
        assert_eq!(SpanClass::Hidden.to_string(), "hidden");
        assert_eq!(SpanClass::Foreground(0).to_string(), "fg-0");
        assert_eq!(SpanClass::Background(15).to_string(), "bg-15");
    }

    #[test]
    fn test_enable_is_idempotent() {
        let mut state = AttributeState::new();
        assert_eq!(
            state.apply(Mutation::BoldEnable),
            Some(OutputInstruction::Incremental(SpanClass::Bold))
        );
        let before = state.clone();
        assert_eq!(state.apply(Mutation::BoldEnable), None);
        assert_eq!(state, before);
    }

    #[test]
    fn test_reset_on_default_is_noop() {
        let mut state = AttributeState::new();
        assert_eq!(state.apply(Mutation::Reset), None);
        assert!(state.is_default());
    }

    #[test]
    fn test_reset_counts_open_spans() {
        let mut state = AttributeState::new();
        state.apply(Mutation::BoldEnable);
        state.apply(Mutation::HiddenEnable);
        state.apply(Mutation::Foreground(3));
        assert_eq!(
            state.apply(Mutation::Reset),
            Some(OutputInstruction::Rebuild(3))
        );
        assert!(state.is_default());
    }

    #[test]
    fn test_color_from_off_is_incremental() {
        let mut state = AttributeState::new();
        state.apply(Mutation::UnderscoreEnable);
        assert_eq!(
            state.apply(Mutation::Foreground(9)),
            Some(OutputInstruction::Incremental(SpanClass::Foreground(9)))
        );
        assert_eq!(
            state.apply(Mutation::Background(2)),
            Some(OutputInstruction::Incremental(SpanClass::Background(2)))
        );
        assert!(state.underscore);
    }

    #[test]
    fn test_same_color_is_noop() {
        let mut state = AttributeState::new();
        state.apply(Mutation::Background(4));
        assert_eq!(state.apply(Mutation::Background(4)), None);
        assert_eq!(state.background, Some(4));
    }

    #[test]
    fn test_color_switch_rebuilds() {
        let mut state = AttributeState::new();
        state.apply(Mutation::BoldEnable);
        state.apply(Mutation::Foreground(1));
        state.apply(Mutation::Background(0));
        assert_eq!(
            state.apply(Mutation::Foreground(2)),
            Some(OutputInstruction::Rebuild(3))
        );
        assert_eq!(state.foreground, Some(2));
        assert_eq!(
            state.apply(Mutation::Background(8)),
            Some(OutputInstruction::Rebuild(3))
        );
        assert_eq!(state.background, Some(8));
        assert!(state.bold);
    }

    #[test]
    fn test_classes_order() {
        let mut state = AttributeState::new();
        state.apply(Mutation::Background(5));
        state.apply(Mutation::Foreground(12));
        state.apply(Mutation::HiddenEnable);
        state.apply(Mutation::BoldEnable);
        let classes: Vec<SpanClass> = state.classes().collect();
        assert_eq!(
            classes,
            vec![
                SpanClass::Bold,
                SpanClass::Hidden,
                SpanClass::Foreground(12),
                SpanClass::Background(5),
            ]
        );
        assert_eq!(state.differing_count(), 4);
    }
}

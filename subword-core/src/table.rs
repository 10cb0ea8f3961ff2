//! Transition table over `(prev, cur, next)` class contexts
//!
//! The table is a flat bitset. Class codes are packed with shifts, so each
//! class gets a stride of the next power of two above [`CharClass::COUNT`].

use crate::char_class::CharClass;
use std::fmt;

/// Bits used per class code in a packed table index
pub const CLASS_SHIFT: u32 = CharClass::COUNT.next_power_of_two().trailing_zeros();

/// Number of slots reserved per class
pub const CLASS_STRIDE: usize = 1 << CLASS_SHIFT;

/// Number of addressable contexts (`CLASS_STRIDE³`)
pub const CONTEXT_COUNT: usize = CLASS_STRIDE * CLASS_STRIDE * CLASS_STRIDE;

const WORD_BITS: usize = u64::BITS as usize;
const WORDS: usize = CONTEXT_COUNT.div_ceil(WORD_BITS);

const _: () = assert!(
    CharClass::COUNT <= CLASS_STRIDE,
    "character classes do not fit in the table stride"
);

/// Packed index of a context
#[inline]
pub const fn context_index(prev: CharClass, cur: CharClass, next: CharClass) -> usize {
    let high = prev.code() << CLASS_SHIFT;
    let mid = (high | cur.code()) << CLASS_SHIFT;
    mid | next.code()
}

/// Boolean function over class triples answering "is there a boundary here"
///
/// Built by [`TableBuilder`](crate::TableBuilder) and read-only afterwards.
/// Equality is bit equality, so two tables built from the same options
/// always compare equal.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TransitionTable {
    bits: [u64; WORDS],
}

impl TransitionTable {
    /// Table with every context set to `value`
    pub(crate) fn filled(value: bool) -> Self {
        Self {
            bits: [if value { u64::MAX } else { 0 }; WORDS],
        }
    }

    /// Check whether the context `(prev, cur, next)` is a boundary - hot path
    #[inline]
    pub fn is_boundary(&self, prev: CharClass, cur: CharClass, next: CharClass) -> bool {
        self.get(context_index(prev, cur, next))
    }

    #[inline]
    fn get(&self, index: usize) -> bool {
        self.bits[index / WORD_BITS] & (1u64 << (index % WORD_BITS)) != 0
    }

    pub(crate) fn set(&mut self, prev: CharClass, cur: CharClass, next: CharClass, value: bool) {
        let index = context_index(prev, cur, next);
        let mask = 1u64 << (index % WORD_BITS);
        if value {
            self.bits[index / WORD_BITS] |= mask;
        } else {
            self.bits[index / WORD_BITS] &= !mask;
        }
    }

    /// Set `(prev, cur, x)` for every class `x`
    pub(crate) fn set_range(&mut self, prev: CharClass, cur: CharClass, value: bool) {
        for next in CharClass::ALL {
            self.set(prev, cur, next, value);
        }
    }

    /// Number of real-class contexts that report a boundary
    pub fn boundary_count(&self) -> usize {
        self.contexts().filter(|&(_, _, _, b)| b).count()
    }

    /// Iterate over every real-class context with its value
    ///
    /// Padding slots past [`CharClass::COUNT`] are skipped.
    pub fn contexts(&self) -> impl Iterator<Item = (CharClass, CharClass, CharClass, bool)> + '_ {
        CharClass::ALL.into_iter().flat_map(move |prev| {
            CharClass::ALL.into_iter().flat_map(move |cur| {
                CharClass::ALL
                    .into_iter()
                    .map(move |next| (prev, cur, next, self.is_boundary(prev, cur, next)))
            })
        })
    }

    /// Raw bit words, for bit-identical comparisons and hashing
    pub fn as_words(&self) -> &[u64] {
        &self.bits
    }
}

impl fmt::Debug for TransitionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionTable")
            .field("boundaries", &self.boundary_count())
            .field("contexts", &(CharClass::COUNT * CharClass::COUNT * CharClass::COUNT))
            .finish()
    }
}

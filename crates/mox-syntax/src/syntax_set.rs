//! Compact bitset of `SyntaxKind`s for cheap membership checks.

use crate::SyntaxKind;

const SIZE: usize = 1;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SyntaxSet {
    bits: [u64; SIZE],
}

impl SyntaxSet {
    pub const EMPTY: Self = Self { bits: [0; SIZE] };

    pub const TRIVIA: Self = Self::new([SyntaxKind::WHITESPACE, SyntaxKind::COMMENT]);

    pub const LITERALS: Self =
        Self::new([SyntaxKind::STRING_DOUBLE, SyntaxKind::STRING_GRAVE, SyntaxKind::CHARACTER]);

    pub const OPEN_DELIMITERS: Self =
        Self::new([SyntaxKind::LEFT_PAREN, SyntaxKind::LEFT_BRACKET, SyntaxKind::LEFT_BRACE]);

    pub const CLOSE_DELIMITERS: Self =
        Self::new([SyntaxKind::RIGHT_PAREN, SyntaxKind::RIGHT_BRACKET, SyntaxKind::RIGHT_BRACE]);

    pub const DELIMITERS: Self = Self::OPEN_DELIMITERS.union(&Self::CLOSE_DELIMITERS);

    /// Kinds that are rendered next to each other only with a separating space.
    pub const WORDS: Self = Self::new([SyntaxKind::IDENT, SyntaxKind::NUMBER]);

    const BITS_PER_SLOT: u16 = u64::BITS as u16;

    const fn from_kind(kind: SyntaxKind) -> Self {
        let kind = kind as u16;

        let slot_index = (kind / Self::BITS_PER_SLOT) as usize;

        debug_assert!(
            slot_index < Self::EMPTY.bits.len(),
            "Index out of bounds. Increase the size of the bitset array."
        );

        let bit_index = kind % Self::BITS_PER_SLOT;
        let mask = 1 << bit_index;

        let mut bits = Self::EMPTY.bits;
        bits[slot_index] = mask;

        Self { bits }
    }

    pub const fn union(mut self, other: &Self) -> Self {
        let mut i = 0;

        while i < self.bits.len() {
            self.bits[i] |= other.bits[i];
            i += 1;
        }

        self
    }

    pub const fn new<const N: usize>(kinds: [SyntaxKind; N]) -> Self {
        let mut set = Self::EMPTY;

        let mut i = 0;
        while i < kinds.len() {
            set = set.union(&Self::from_kind(kinds[i]));
            i += 1;
        }

        set
    }

    pub const fn contains(&self, kind: SyntaxKind) -> bool {
        let kind = kind as u16;
        let slot_index = (kind / Self::BITS_PER_SLOT) as usize;
        let bit_index = kind % Self::BITS_PER_SLOT;
        let mask = 1 << bit_index;

        self.bits[slot_index] & mask != 0
    }
}

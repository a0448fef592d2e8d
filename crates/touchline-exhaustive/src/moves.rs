// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Bit-packed move sequences.
//!
//! Bit `k` of the mask (least significant first) is the `k`-th move: `1` moves
//! right, `0` moves down. Enumerating the masks `0..2^n` therefore yields every
//! sequence of `n` moves exactly once.

/// The longest sequence a `u64` mask can enumerate, leaving room for the
/// exclusive upper bound `2^n`.
pub const MAX_MOVES: usize = 63;

/// A single step of a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// One column to the right.
    Right,
    /// One row down.
    Down,
}

impl Move {
    #[inline(always)]
    fn from_bit(bit: u64) -> Self {
        if bit & 1 == 1 { Move::Right } else { Move::Down }
    }

    /// Returns the character used when rendering sequences, `R` or `D`.
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Move::Right => 'R',
            Move::Down => 'D',
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A sequence of up to `MAX_MOVES` moves, stored as a bit mask.
///
/// # Examples
///
/// ```rust
/// # use touchline_exhaustive::moves::{Move, MoveSequence};
/// let seq = MoveSequence::new(0b0011, 4);
/// let moves: Vec<Move> = seq.iter().collect();
/// assert_eq!(moves, vec![Move::Right, Move::Right, Move::Down, Move::Down]);
/// assert_eq!(seq.to_string(), "RRDD");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveSequence {
    bits: u64,
    len: usize,
}

impl MoveSequence {
    /// Creates a sequence of `len` moves from the low `len` bits of `bits`.
    /// Higher bits are ignored.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `len > MAX_MOVES`.
    #[inline]
    pub fn new(bits: u64, len: usize) -> Self {
        debug_assert!(
            len <= MAX_MOVES,
            "called `MoveSequence::new` with length out of bounds: the max is {} but the length is {}",
            MAX_MOVES,
            len
        );

        Self {
            bits: bits & Self::mask(len),
            len,
        }
    }

    /// Packs an explicit list of moves. Returns `None` if there are more than
    /// `MAX_MOVES` of them.
    pub fn from_moves(moves: &[Move]) -> Option<Self> {
        if moves.len() > MAX_MOVES {
            return None;
        }

        let bits = moves
            .iter()
            .enumerate()
            .filter(|(_, m)| **m == Move::Right)
            .fold(0u64, |acc, (k, _)| acc | (1 << k));
        Some(Self {
            bits,
            len: moves.len(),
        })
    }

    /// Returns an iterator over all `2^len` sequences of length `len`, in mask order.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `len > MAX_MOVES`.
    #[inline]
    pub fn enumerate(len: usize) -> Candidates {
        debug_assert!(
            len <= MAX_MOVES,
            "called `MoveSequence::enumerate` with length out of bounds: the max is {} but the length is {}",
            MAX_MOVES,
            len
        );

        Candidates {
            next: 0,
            end: 1u64 << len,
            len,
        }
    }

    #[inline(always)]
    fn mask(len: usize) -> u64 {
        if len >= 64 { u64::MAX } else { (1u64 << len) - 1 }
    }

    #[inline]
    pub fn bits(&self) -> u64 {
        self.bits
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the move at position `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[inline]
    pub fn get(&self, index: usize) -> Move {
        assert!(
            index < self.len,
            "called `MoveSequence::get` with index out of bounds: the len is {} but the index is {}",
            self.len,
            index
        );

        Move::from_bit(self.bits >> index)
    }

    /// Returns the number of right moves.
    #[inline]
    pub fn num_rights(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns the number of down moves.
    #[inline]
    pub fn num_downs(&self) -> usize {
        self.len - self.num_rights()
    }

    #[inline]
    pub fn iter(&self) -> Moves {
        Moves {
            bits: self.bits,
            remaining: self.len,
        }
    }
}

impl std::fmt::Display for MoveSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for m in self.iter() {
            write!(f, "{}", m)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a MoveSequence {
    type Item = Move;
    type IntoIter = Moves;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the moves of a `MoveSequence`, in order of application.
#[derive(Debug, Clone)]
pub struct Moves {
    bits: u64,
    remaining: usize,
}

impl Iterator for Moves {
    type Item = Move;

    #[inline(always)]
    fn next(&mut self) -> Option<Move> {
        if self.remaining == 0 {
            return None;
        }
        let m = Move::from_bit(self.bits);
        self.bits >>= 1;
        self.remaining -= 1;
        Some(m)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Moves {}

/// Iterator over every sequence of a fixed length.
#[derive(Debug, Clone)]
pub struct Candidates {
    next: u64,
    end: u64,
    len: usize,
}

impl Candidates {
    /// Returns the number of candidates not yet produced.
    #[inline]
    pub fn remaining(&self) -> u64 {
        self.end - self.next
    }
}

impl Iterator for Candidates {
    type Item = MoveSequence;

    #[inline(always)]
    fn next(&mut self) -> Option<MoveSequence> {
        if self.next == self.end {
            return None;
        }
        let seq = MoveSequence {
            bits: self.next,
            len: self.len,
        };
        self.next += 1;
        Some(seq)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_bit_is_first_move() {
        let seq = MoveSequence::new(0b01, 2);
        assert_eq!(seq.get(0), Move::Right);
        assert_eq!(seq.get(1), Move::Down);
    }

    #[test]
    fn test_new_masks_high_bits() {
        let seq = MoveSequence::new(0b1111_0101, 4);
        assert_eq!(seq.bits(), 0b0101);
        assert_eq!(seq.num_rights(), 2);
        assert_eq!(seq.num_downs(), 2);
    }

    #[test]
    fn test_from_moves_matches_bits() {
        use Move::{Down as D, Right as R};
        let seq = MoveSequence::from_moves(&[D, R, R, D, R]).unwrap();
        assert_eq!(seq.bits(), 0b10110);
        assert_eq!(seq.len(), 5);
        assert_eq!(seq.to_string(), "DRRDR");
        assert_eq!(seq.iter().collect::<Vec<_>>(), vec![D, R, R, D, R]);
    }

    #[test]
    fn test_from_moves_rejects_too_many() {
        let moves = vec![Move::Down; MAX_MOVES + 1];
        assert_eq!(MoveSequence::from_moves(&moves), None);
        assert!(MoveSequence::from_moves(&moves[..MAX_MOVES]).is_some());
    }

    #[test]
    fn test_empty_sequence() {
        let seq = MoveSequence::new(0, 0);
        assert!(seq.is_empty());
        assert_eq!(seq.iter().count(), 0);
        assert_eq!(seq.to_string(), "");
    }

    #[test]
    fn test_enumerate_yields_every_sequence_once() {
        let all: Vec<MoveSequence> = MoveSequence::enumerate(3).collect();
        assert_eq!(all.len(), 8);
        let rendered: std::collections::HashSet<String> =
            all.iter().map(|s| s.to_string()).collect();
        assert_eq!(rendered.len(), 8);
        assert!(rendered.contains("DDD"));
        assert!(rendered.contains("RRR"));
    }

    #[test]
    fn test_enumerate_zero_length_has_one_candidate() {
        let mut candidates = MoveSequence::enumerate(0);
        assert_eq!(candidates.remaining(), 1);
        assert_eq!(candidates.next(), Some(MoveSequence::new(0, 0)));
        assert_eq!(candidates.next(), None);
    }

    #[test]
    fn test_enumerate_max_length_does_not_overflow() {
        let candidates = MoveSequence::enumerate(MAX_MOVES);
        assert_eq!(candidates.remaining(), 1u64 << 63);
    }

    #[test]
    #[should_panic]
    fn test_get_out_of_bounds_panics() {
        MoveSequence::new(0, 2).get(2);
    }
}

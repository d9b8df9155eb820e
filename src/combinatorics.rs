//! Combinatorial utilities for generating permutations.
//!
//! # Examples
//!
//! ```rust
//! use matrica::combinatorics::PermutationIterator;
//!
//! let mut p = PermutationIterator::new(3);
//! let mut count = 0;
//! let mut sign_sum = 0i32;
//! while let Some((_, sign)) = p.next() {
//!     count += 1;
//!     sign_sum += sign as i32;
//! }
//!
//! assert_eq!(count, 6);
//! assert_eq!(sign_sum, 0);
//! ```

use smallvec::SmallVec;

/// An iterator over all permutations of `0..n` together with their sign,
/// using Heap's algorithm. Each successive permutation differs from the
/// previous one by a single transposition, so the sign alternates with
/// every step.
pub struct PermutationIterator {
    perm: SmallVec<[usize; 8]>,
    c: SmallVec<[usize; 8]>,
    i: usize,
    sign: i8,
    started: bool,
}

impl PermutationIterator {
    /// Create a new iterator over the permutations of `0..n`.
    pub fn new(n: usize) -> PermutationIterator {
        PermutationIterator {
            perm: (0..n).collect(),
            c: std::iter::repeat(0).take(n).collect(),
            i: 0,
            sign: 1,
            started: false,
        }
    }

    /// Advance to the next permutation and return it with its sign.
    /// The first permutation is the identity with sign `+1`.
    pub fn next(&mut self) -> Option<(&[usize], i8)> {
        let n = self.perm.len();

        if !self.started {
            if n == 0 {
                return None;
            }
            self.started = true;
            return Some((&self.perm, self.sign));
        }

        while self.i < n {
            if self.c[self.i] < self.i {
                if self.i % 2 == 0 {
                    self.perm.swap(0, self.i);
                } else {
                    let j = self.c[self.i];
                    self.perm.swap(j, self.i);
                }

                self.c[self.i] += 1;
                self.i = 0;
                self.sign = -self.sign;
                return Some((&self.perm, self.sign));
            } else {
                self.c[self.i] = 0;
                self.i += 1;
            }
        }

        None
    }
}

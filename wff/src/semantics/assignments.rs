//! Enumerates the total assignments over a set of propositional symbols.
use super::Assignment;
use crate::syntax::Prop;
use itertools::Itertools;
use std::iter::FusedIterator;

/// Is a lazy iterator over all total assignments to a set of symbols.
///
/// For `n` distinct symbols the iterator yields exactly `2^n` assignments. The symbols are
/// sorted by name, and the assignments follow a binary counter from `0` to `2^n - 1` where
/// `false` is `0`, `true` is `1`, and the first symbol is the most significant bit. With no
/// symbols, the iterator yields a single empty assignment.
///
/// **Example**:
/// ```rust
/// use wff::{prop, semantics::Assignments};
///
/// let rows: Vec<String> = Assignments::new(vec![prop!(q), prop!(p)])
///     .map(|a| a.to_string())
///     .collect();
///
/// assert_eq!(
///     vec![
///         "{p = false, q = false}",
///         "{p = false, q = true}",
///         "{p = true, q = false}",
///         "{p = true, q = true}",
///     ],
///     rows
/// );
/// ```
#[derive(Clone, Debug)]
pub struct Assignments {
    atoms: Vec<Prop>,
    // the bits of the next assignment; `None` when exhausted
    counter: Option<Vec<bool>>,
}

impl Assignments {
    /// Returns the assignments over the distinct symbols of `atoms`.
    pub fn new<I: IntoIterator<Item = Prop>>(atoms: I) -> Self {
        let atoms: Vec<Prop> = atoms.into_iter().sorted().dedup().collect();
        let counter = Some(vec![false; atoms.len()]);
        Self { atoms, counter }
    }

    /// Returns the symbols of the receiver in the order of significance.
    pub fn atoms(&self) -> &[Prop] {
        &self.atoms
    }
}

// Returns the bits after `bits` in counting order, or `None` after the last one.
fn successor(mut bits: Vec<bool>) -> Option<Vec<bool>> {
    for i in (0..bits.len()).rev() {
        if bits[i] {
            bits[i] = false;
        } else {
            bits[i] = true;
            return Some(bits);
        }
    }
    None
}

impl Iterator for Assignments {
    type Item = Assignment;

    fn next(&mut self) -> Option<Self::Item> {
        let bits = self.counter.take()?;
        let assignment = self
            .atoms
            .iter()
            .cloned()
            .zip(bits.iter().copied())
            .collect();
        self.counter = successor(bits);
        Some(assignment)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.counter {
            None => (0, Some(0)),
            Some(bits) => {
                match bits.len() {
                    n if n < usize::BITS as usize => {
                        let total = 1usize << n;
                        let done = bits
                            .iter()
                            .fold(0usize, |acc, &bit| (acc << 1) | bit as usize);
                        (total - done, Some(total - done))
                    }
                    _ => (usize::MAX, None),
                }
            }
        }
    }
}

impl FusedIterator for Assignments {}

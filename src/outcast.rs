//! Outcast detection: the noun least related to the others.

use crate::error::{Error, Result};
use crate::wordnet::WordNet;

/// Picks, from a list of nouns, the one with the largest summed distance to all the others.
#[derive(Debug, Clone, Copy)]
pub struct Outcast<'w> {
    wordnet: &'w WordNet,
}

impl<'w> Outcast<'w> {
    pub fn new(wordnet: &'w WordNet) -> Self {
        Self { wordnet }
    }

    /// `sums[i]` is the total distance from `nouns[i]` to every entry of `nouns`.
    ///
    /// Distance is symmetric, so each unordered pair is queried once.
    pub fn distance_sums<S: AsRef<str>>(&self, nouns: &[S]) -> Result<Vec<usize>> {
        let mut sums = vec![0usize; nouns.len()];
        for i in 0..nouns.len() {
            for j in (i + 1)..nouns.len() {
                let d = self.wordnet.distance(nouns[i].as_ref(), nouns[j].as_ref())?;
                sums[i] += d;
                sums[j] += d;
            }
        }
        // A single noun is never compared, but must still be a known noun.
        if let [only] = nouns {
            self.wordnet.synsets_of(only.as_ref())?;
        }
        Ok(sums)
    }

    /// The outcast of `nouns`. On equal sums the earliest entry wins.
    ///
    /// Fails with [`Error::EmptyNounList`] for an empty list and with
    /// [`Error::UnknownNoun`] if any entry is not a WordNet noun.
    pub fn outcast<'n, S: AsRef<str>>(&self, nouns: &'n [S]) -> Result<&'n str> {
        let sums = self.distance_sums(nouns)?;
        let mut best: Option<(usize, usize)> = None;
        for (i, &sum) in sums.iter().enumerate() {
            if best.map_or(true, |(_, max)| sum > max) {
                best = Some((i, sum));
            }
        }
        best.map(|(i, _)| nouns[i].as_ref()).ok_or(Error::EmptyNounList)
    }
}

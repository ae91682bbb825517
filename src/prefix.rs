/*! Deterministic prefix sampling.

Prefixes are selected by sampling a *suffix length* `l` from a global counter `i`,
which starts at 1 and is bumped once per generated example:

```text
l      = i mod |e|
prefix = e[0 .. |e| - l]
```

`l` lies in `[0, |e| - 1]`, so a prefix always holds between 1 and `|e|` tokens,
and is the full sentence when `l == 0`.

The counter is never reset between rounds, so that the same sentence gets a different prefix
from one round to another while the whole output stays reproducible.
!*/
use itertools::Itertools;

use crate::corpus::Corpus;
use crate::error::Error;

/// Number of trailing tokens to drop from a sentence of `nb_tokens` tokens.
///
/// Panics if `nb_tokens` is 0.
#[inline]
pub fn suffix_length(counter: u64, nb_tokens: usize) -> usize {
    (counter % nb_tokens as u64) as usize
}

/// Build the prefix of `target` for a given counter value.
///
/// Returns [None] if `target` has no whitespace-separated token.
pub fn make_prefix(target: &str, counter: u64) -> Option<String> {
    let tokens: Vec<&str> = target.split_whitespace().collect();
    if tokens.is_empty() {
        return None;
    }
    let l = suffix_length(counter, tokens.len());
    Some(tokens[..tokens.len() - l].iter().join(" "))
}

/// A single generated example.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Example<'a> {
    pub round: usize,
    pub counter: u64,
    pub source: &'a str,
    pub target: &'a str,
    pub prefix: String,
}

/// Iterator over the examples of `rounds` passes over a [Corpus].
///
/// Examples are yielded round-major: every example of round 1, in corpus order,
/// then every example of round 2, and so on.
pub struct Samples<'a> {
    corpus: &'a Corpus,
    len: usize,
    rounds: usize,
    round: usize,
    idx: usize,
    counter: u64,
}

impl<'a> Samples<'a> {
    /// Sample the first `len` pairs of `corpus`, `rounds` times.
    pub fn new(corpus: &'a Corpus, len: usize, rounds: usize) -> Self {
        let len = len.min(corpus.source().len()).min(corpus.target().len());
        Self {
            corpus,
            len,
            rounds,
            round: 1,
            idx: 0,
            counter: 1,
        }
    }

    /// Number of examples emitted so far.
    pub fn nb_examples(&self) -> u64 {
        self.counter - 1
    }
}

impl<'a> Iterator for Samples<'a> {
    type Item = Result<Example<'a>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        if self.idx == self.len {
            self.idx = 0;
            self.round += 1;
        }
        if self.round > self.rounds {
            return None;
        }

        let source = self.corpus.source()[self.idx].as_str();
        let target = self.corpus.target()[self.idx].as_str();
        let prefix = match make_prefix(target, self.counter) {
            Some(p) => p,
            None => {
                // stop there, the counter would be meaningless afterwards
                let line = self.idx + 1;
                self.round = self.rounds + 1;
                return Some(Err(Error::EmptyTarget { line }));
            }
        };

        let example = Example {
            round: self.round,
            counter: self.counter,
            source,
            target,
            prefix,
        };
        self.idx += 1;
        self.counter += 1;
        Some(Ok(example))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.len == 0 || self.round > self.rounds {
            0
        } else {
            (self.rounds - self.round) * self.len + (self.len - self.idx)
        };
        (0, Some(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(src: &[&str], tgt: &[&str]) -> Corpus {
        Corpus::new(
            src.iter().map(|s| s.to_string()).collect(),
            tgt.iter().map(|s| s.to_string()).collect(),
        )
    }

    #[test]
    fn suffix_in_range() {
        for counter in 1..50 {
            for nb_tokens in 1..10 {
                assert!(suffix_length(counter, nb_tokens) < nb_tokens);
            }
        }
    }

    #[test]
    fn prefix_drops_suffix() {
        assert_eq!(make_prefix("x y z", 1).unwrap(), "x y");
        assert_eq!(make_prefix("x y z", 2).unwrap(), "x");
        assert_eq!(make_prefix("x y z", 3).unwrap(), "x y z");
    }

    #[test]
    fn prefix_normalizes_spacing() {
        assert_eq!(make_prefix("a   b\tc d", 4).unwrap(), "a b c d");
        assert_eq!(make_prefix("a   b\tc d", 1).unwrap(), "a b c");
    }

    #[test]
    fn single_token_is_always_full() {
        for counter in 1..10 {
            assert_eq!(make_prefix("word", counter).unwrap(), "word");
        }
    }

    #[test]
    fn empty_target_has_no_prefix() {
        assert!(make_prefix("", 1).is_none());
        assert!(make_prefix(" \t ", 3).is_none());
    }

    #[test]
    fn scenario() {
        let c = corpus(&["a b", "c d e"], &["x y z", "p q"]);
        let examples: Vec<Example> = Samples::new(&c, 2, 1).map(Result::unwrap).collect();

        assert_eq!(examples.len(), 2);
        assert_eq!(examples[0].source, "a b");
        assert_eq!(examples[0].target, "x y z");
        assert_eq!(examples[0].prefix, "x y");
        assert_eq!(examples[1].source, "c d e");
        assert_eq!(examples[1].target, "p q");
        assert_eq!(examples[1].prefix, "p q");
    }

    #[test]
    fn counter_is_global_across_rounds() {
        let c = corpus(&["a b", "c d e"], &["x y z", "p q"]);
        let mut samples = Samples::new(&c, 2, 3);
        let examples: Vec<Example> = samples.by_ref().map(Result::unwrap).collect();

        assert_eq!(samples.nb_examples(), 6);
        let rounds: Vec<usize> = examples.iter().map(|e| e.round).collect();
        assert_eq!(rounds, vec![1, 1, 2, 2, 3, 3]);
        let counters: Vec<u64> = examples.iter().map(|e| e.counter).collect();
        assert_eq!(counters, vec![1, 2, 3, 4, 5, 6]);

        // round 2 starts at i=3: "x y z" is kept whole, round 3 (i=5) keeps only "x"
        let prefixes: Vec<&str> = examples.iter().map(|e| e.prefix.as_str()).collect();
        assert_eq!(prefixes, vec!["x y", "p q", "x y z", "p q", "x", "p q"]);
    }

    #[test]
    fn size_hint_upper_bound() {
        let c = corpus(&["a", "b", "c"], &["x", "y", "z"]);
        let mut samples = Samples::new(&c, 3, 2);
        assert_eq!(samples.size_hint(), (0, Some(6)));
        samples.next();
        assert_eq!(samples.size_hint(), (0, Some(5)));
    }

    #[test]
    fn empty_corpus_yields_nothing() {
        let c = Corpus::default();
        assert_eq!(Samples::new(&c, 0, 4).count(), 0);
    }

    #[test]
    fn empty_target_stops_iteration() {
        let c = corpus(&["a", "b", "c"], &["x", "", "z"]);
        let mut samples = Samples::new(&c, 3, 1);
        assert!(samples.next().unwrap().is_ok());
        assert!(matches!(
            samples.next(),
            Some(Err(Error::EmptyTarget { line: 2 }))
        ));
        assert!(samples.next().is_none());
    }
}

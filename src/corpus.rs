/*! Parallel corpus loading.

A [Corpus] is a pair of line-aligned files: line `n` of the source file is the translation of line `n` of the target file.
Both files are loaded fully in memory, and each line is stripped of its surrounding whitespace.
!*/
use std::path::Path;

use log::{debug, warn};

use crate::error::Error;

/// How to handle source and target files of different lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Fail with [Error::LengthMismatch].
    #[default]
    Strict,
    /// Keep the first `min(source, target)` pairs and drop the rest.
    Truncate,
}

/// Read a UTF-8 file into stripped lines.
pub fn read_lines(path: &Path) -> Result<Vec<String>, Error> {
    let bytes = std::fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let content = String::from_utf8(bytes).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let lines: Vec<String> = content.lines().map(|l| l.trim().to_string()).collect();
    debug!("read {} lines from {:?}", lines.len(), path);
    Ok(lines)
}

/// Source and target sentences, in file order.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    source: Vec<String>,
    target: Vec<String>,
}

impl Corpus {
    pub fn new(source: Vec<String>, target: Vec<String>) -> Self {
        Self { source, target }
    }

    /// Load both sides of the corpus.
    pub fn from_paths(src: &Path, tgt: &Path) -> Result<Self, Error> {
        Ok(Self::new(read_lines(src)?, read_lines(tgt)?))
    }

    /// Number of pairs that will be processed under the given [Alignment].
    pub fn aligned_len(&self, alignment: Alignment) -> Result<usize, Error> {
        let (nb_src, nb_tgt) = (self.source.len(), self.target.len());
        if nb_src == nb_tgt {
            return Ok(nb_src);
        }

        match alignment {
            Alignment::Strict => Err(Error::LengthMismatch {
                source_lines: nb_src,
                target_lines: nb_tgt,
            }),
            Alignment::Truncate => {
                let len = nb_src.min(nb_tgt);
                warn!(
                    "source has {} lines and target has {}: dropping the last {} lines",
                    nb_src,
                    nb_tgt,
                    nb_src.max(nb_tgt) - len
                );
                Ok(len)
            }
        }
    }

    /// Ensure that each of the first `len` target lines has at least one token.
    pub fn check_targets(&self, len: usize) -> Result<(), Error> {
        match self
            .target
            .iter()
            .take(len)
            .position(|e| e.split_whitespace().next().is_none())
        {
            Some(idx) => Err(Error::EmptyTarget { line: idx + 1 }),
            None => Ok(()),
        }
    }

    /// Aligned `(source, target)` pairs, bounded by the shorter side.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> + Clone {
        self.source
            .iter()
            .zip(self.target.iter())
            .map(|(f, e)| (f.as_str(), e.as_str()))
    }

    pub fn source(&self) -> &[String] {
        &self.source
    }

    pub fn target(&self) -> &[String] {
        &self.target
    }
}

/*! Prefix corpus generation.

Reads a parallel corpus, samples `samples_per_sent` prefixes per target sentence and writes them,
along with the replicated source and target lines, into three aligned files.

```no_run
use std::num::NonZeroUsize;
use std::path::PathBuf;
use prefixmaker::pipeline::PrefixPipeline;

let p = PrefixPipeline::new(
    PathBuf::from("dev.fr"),
    PathBuf::from("dev.en"),
    NonZeroUsize::new(4).unwrap(),
);
let nb_examples = p.run().unwrap();
println!("# examples: {}", nb_examples);
```
!*/
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::corpus::{Alignment, Corpus};
use crate::error::Error;
use crate::prefix::Samples;
use crate::writing::{OutputPaths, PrefixWriter};

pub struct PrefixPipeline {
    src: PathBuf,
    tgt: PathBuf,
    samples_per_sent: NonZeroUsize,
    alignment: Alignment,
}

impl PrefixPipeline {
    pub fn new(src: PathBuf, tgt: PathBuf, samples_per_sent: NonZeroUsize) -> Self {
        Self {
            src,
            tgt,
            samples_per_sent,
            alignment: Alignment::default(),
        }
    }

    /// Set the policy for source and target files of different lengths.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Paths of the files that [PrefixPipeline::run] writes.
    pub fn output_paths(&self) -> OutputPaths {
        OutputPaths::from_inputs(&self.src, &self.tgt)
    }

    /// Generate the prefix corpus and return the number of examples written.
    ///
    /// Inputs are checked before any output file is created.
    pub fn run(&self) -> Result<u64, Error> {
        let corpus = Corpus::from_paths(&self.src, &self.tgt)?;
        let len = corpus.aligned_len(self.alignment)?;
        corpus.check_targets(len)?;

        let rounds = self.samples_per_sent.get();
        info!("generating {} samples for {} sentences", rounds, len);

        let mut writer = PrefixWriter::create(&self.output_paths())?;
        let mut samples = Samples::new(&corpus, len, rounds);
        let mut round = 0;
        for example in samples.by_ref() {
            let example = example?;
            if example.round != round {
                round = example.round;
                debug!("starting round {}/{}", round, rounds);
            }
            writer.write_example(&example)?;
        }
        writer.flush()?;

        let nb_examples = samples.nb_examples();
        info!("wrote {} examples", nb_examples);
        Ok(nb_examples)
    }
}

/// Generate a prefix corpus from `src` and `tgt` with default settings.
pub fn generate(src: &Path, tgt: &Path, samples_per_sent: NonZeroUsize) -> Result<u64, Error> {
    PrefixPipeline::new(src.to_path_buf(), tgt.to_path_buf(), samples_per_sent).run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_paths() {
        let p = PrefixPipeline::new(
            PathBuf::from("a.fr"),
            PathBuf::from("a.en"),
            NonZeroUsize::new(1).unwrap(),
        );
        let paths = p.output_paths();
        assert_eq!(paths.source, PathBuf::from("a.fr.out"));
        assert_eq!(paths.prefix, PathBuf::from("a.en.prefix"));
    }

    #[test]
    fn default_is_strict() {
        let p = PrefixPipeline::new(
            PathBuf::from("a.fr"),
            PathBuf::from("a.en"),
            NonZeroUsize::new(1).unwrap(),
        );
        assert_eq!(p.alignment, Alignment::Strict);
        let p = p.with_alignment(Alignment::Truncate);
        assert_eq!(p.alignment, Alignment::Truncate);
    }
}

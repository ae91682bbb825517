//! # prefixmaker
//!
//! Deterministically convert a source/target corpus into a prefix tuning corpus.
//!
//! For each target sentence, `samples_per_sent` prefixes are selected by deterministic sampling of suffixes.
//! Which prefix is selected for a sentence depends on its length and on its position in the output.
//!
//! ## Getting started
//!
//! ```sh
//! prefixmaker dev.fr dev.en -s 4
//! ```
//!
//! writes `dev.fr.out`, `dev.en.out` and `dev.en.prefix`, then prints the number of generated examples.
//!
use structopt::StructOpt;

use prefixmaker::corpus::Alignment;
use prefixmaker::error;
use prefixmaker::pipeline::PrefixPipeline;

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), error::Error> {
    env_logger::init();

    let opt = cli::Prefixmaker::from_args();
    debug!("cli args\n{:#?}", opt);

    let alignment = if opt.truncate {
        Alignment::Truncate
    } else {
        Alignment::Strict
    };

    let p = PrefixPipeline::new(opt.src_file, opt.tgt_file, opt.samples_per_sent)
        .with_alignment(alignment);
    let nb_examples = p.run().map_err(|e| {
        error!("{}", e);
        e
    })?;

    println!("# examples: {}", nb_examples);
    Ok(())
}

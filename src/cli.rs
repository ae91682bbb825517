//! Command line arguments and parameters management/parsing.
use std::num::NonZeroUsize;
use std::path::PathBuf;

use structopt::StructOpt;

/// ```sh
/// prefixmaker 0.1.0
/// Convert a source/target corpus to a prefix tuning corpus.
///
/// USAGE:
///     prefixmaker [FLAGS] [OPTIONS] <src-file> <tgt-file>
///
/// FLAGS:
///     -h, --help        Prints help information
///     -t, --truncate    keep the shorter file length when source and target differ
///     -V, --version     Prints version information
///
/// OPTIONS:
///     -s, --samples-per-sent <samples-per-sent>    Number of samples per sentence [default: 1]
///
/// ARGS:
///     <src-file>    source corpus, one sentence per line
///     <tgt-file>    target corpus, line-aligned with the source
/// ```
#[derive(Debug, StructOpt)]
#[structopt(
    name = "prefixmaker",
    about = "Convert a source/target corpus to a prefix tuning corpus."
)]
pub struct Prefixmaker {
    #[structopt(parse(from_os_str), help = "source corpus, one sentence per line")]
    pub src_file: PathBuf,
    #[structopt(
        parse(from_os_str),
        help = "target corpus, line-aligned with the source"
    )]
    pub tgt_file: PathBuf,
    #[structopt(
        short = "s",
        long = "samples-per-sent",
        default_value = "1",
        help = "Number of samples per sentence"
    )]
    pub samples_per_sent: NonZeroUsize,
    #[structopt(
        short = "t",
        long = "truncate",
        help = "keep the shorter file length when source and target differ"
    )]
    pub truncate: bool,
}

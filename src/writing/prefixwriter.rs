//! Lockstep writers for the three prefix corpus files.
use log::{debug, info};
use std::ffi::OsString;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::prefix::Example;

/// Platform line separator.
#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// Paths of the generated files, derived from the input paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    /// `<src>.out`
    pub source: PathBuf,
    /// `<tgt>.out`
    pub target: PathBuf,
    /// `<tgt>.prefix`
    pub prefix: PathBuf,
}

/// append `.ext` to the whole file name, keeping any existing extension.
fn with_suffix(path: &Path, ext: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".");
    name.push(ext);
    PathBuf::from(name)
}

impl OutputPaths {
    pub fn from_inputs(src: &Path, tgt: &Path) -> Self {
        Self {
            source: with_suffix(src, "out"),
            target: with_suffix(tgt, "out"),
            prefix: with_suffix(tgt, "prefix"),
        }
    }
}

/// Writes source, target and prefix lines to their own files.
///
/// Each call to [PrefixWriter::write_example] appends exactly one line to every file,
/// so that line `n` of each file refers to the same example.
///
/// Files are created (or truncated) on [PrefixWriter::create], and are closed when the writer is dropped.
/// Call [PrefixWriter::flush] to get write errors instead of losing them on drop.
pub struct PrefixWriter {
    source: BufWriter<File>,
    target: BufWriter<File>,
    prefix: BufWriter<File>,
    nb_lines: u64,
}

impl PrefixWriter {
    pub fn create(paths: &OutputPaths) -> Result<Self, Error> {
        Ok(Self {
            source: Self::open(&paths.source)?,
            target: Self::open(&paths.target)?,
            prefix: Self::open(&paths.prefix)?,
            nb_lines: 0,
        })
    }

    fn open(path: &Path) -> Result<BufWriter<File>, Error> {
        let mut options = OpenOptions::new();
        options.write(true).truncate(true).create(true);

        info!("creating {:?}", path);
        Ok(BufWriter::new(options.open(path)?))
    }

    pub fn write_example(&mut self, example: &Example) -> Result<(), Error> {
        write_line(&mut self.source, example.source)?;
        write_line(&mut self.target, example.target)?;
        write_line(&mut self.prefix, &example.prefix)?;
        self.nb_lines += 1;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), Error> {
        debug!("flushing {} lines", self.nb_lines);
        self.source.flush()?;
        self.target.flush()?;
        self.prefix.flush()?;
        Ok(())
    }

    /// Number of lines written in each file.
    pub fn nb_lines(&self) -> u64 {
        self.nb_lines
    }
}

#[inline]
fn write_line<W: Write>(w: &mut W, line: &str) -> std::io::Result<()> {
    w.write_all(line.as_bytes())?;
    w.write_all(LINE_SEPARATOR.as_bytes())
}

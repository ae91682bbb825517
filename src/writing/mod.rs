/*! Prefix corpus writing.

Three files are generated next to the inputs: `<src>.out`, `<tgt>.out` and `<tgt>.prefix`.
!*/
mod prefixwriter;
pub use prefixwriter::{OutputPaths, PrefixWriter, LINE_SEPARATOR};

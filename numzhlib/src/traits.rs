//! Reading numerals and writing transcriptions over std::io::{BufRead, Write}.

use crate::{error::Result, model::Transcription};
use std::io::{BufRead, Write};

pub trait ReadFormat {
    fn read<R: BufRead>(r: R) -> Result<Vec<String>>;
}

pub trait WriteFormat {
    fn write<W: Write>(w: W, rows: &[Transcription]) -> Result<()>;
}

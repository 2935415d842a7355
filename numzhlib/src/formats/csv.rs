//! CSV: input needs a `numeral` column (other columns are ignored),
//! output has the header `input,output,error`.

use crate::{error::Result, model::Transcription, traits::{ReadFormat, WriteFormat}};
use csv::{ReaderBuilder, Trim, WriterBuilder};
use std::io::{BufRead, Write};

#[derive(serde::Deserialize)]
struct CsvRow {
    numeral: String,
}

pub struct Csv;

impl ReadFormat for Csv {
    fn read<R: BufRead>(r: R) -> Result<Vec<String>> {
        let mut rdr = ReaderBuilder::new()
            .flexible(true)
            .trim(Trim::All)
            .from_reader(r);
        let mut numerals = Vec::new();
        for rec in rdr.deserialize::<CsvRow>() {
            let row = rec?;
            if !row.numeral.is_empty() {
                numerals.push(row.numeral);
            }
        }
        Ok(numerals)
    }
}

impl WriteFormat for Csv {
    fn write<W: Write>(mut w: W, rows: &[Transcription]) -> Result<()> {
        let mut wrt = WriterBuilder::new().from_writer(&mut w);
        for row in rows {
            wrt.serialize(row)?;
        }
        wrt.flush()?;
        Ok(())
    }
}

//! One numeral per line; input ends at the first blank line.

use crate::{error::Result, model::Transcription, traits::{ReadFormat, WriteFormat}};
use std::io::{BufRead, Write};

pub struct Text;

impl ReadFormat for Text {
    fn read<R: BufRead>(r: R) -> Result<Vec<String>> {
        let mut numerals = Vec::new();
        for line in r.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                break;
            }
            numerals.push(line.to_owned());
        }
        Ok(numerals)
    }
}

impl WriteFormat for Text {
    /// Rows without output were already reported by the driver and are left out.
    fn write<W: Write>(mut w: W, rows: &[Transcription]) -> Result<()> {
        for output in rows.iter().filter_map(|row| row.output.as_deref()) {
            writeln!(w, "{output}")?;
        }
        w.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_stops_at_blank_line() {
        let numerals = Text::read(Cursor::new("  12 \n-3.5\n\n99\n")).unwrap();
        assert_eq!(numerals, vec!["12".to_string(), "-3.5".to_string()]);
    }

    #[test]
    fn test_read_until_eof() {
        let numerals = Text::read(Cursor::new("1\n2")).unwrap();
        assert_eq!(numerals.len(), 2);
    }

    #[test]
    fn test_write_skips_failed_rows() {
        let rows = vec![
            Transcription { input: "1".into(), output: Some("一".into()), error: None },
            Transcription { input: "x".into(), output: None, error: Some("bad".into()) },
            Transcription { input: "2".into(), output: Some("二".into()), error: None },
        ];
        let mut out = Vec::new();
        Text::write(&mut out, &rows).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "一\n二\n");
    }
}

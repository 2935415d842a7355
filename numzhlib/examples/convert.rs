use numzhlib::{
    convert::{transcribe_all, ErrorPolicy},
    formats::{csv::Csv, text::Text},
    traits::{ReadFormat, WriteFormat},
    Transcriber,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // numerals from stdin, one per line -> CSV on stdout
    let numerals = Text::read(std::io::BufReader::new(std::io::stdin()))?;
    let rows = transcribe_all(&numerals, &Transcriber::default(), ErrorPolicy::Skip)?;
    Csv::write(std::io::stdout(), &rows)?;
    Ok(())
}

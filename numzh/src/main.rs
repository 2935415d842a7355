use clap::{Parser, ValueEnum};
use numzhlib::{
    convert::{transcribe_all, ErrorPolicy},
    error::{NumZhError, Result},
    formats::{csv::Csv, text::Text},
    glyphs::ZeroStyle,
    model::TranscribeOptions,
    traits::{ReadFormat, WriteFormat},
    Transcriber,
};
use std::fs::File;
use std::io::{self, BufReader, Write};
use tracing_subscriber::EnvFilter;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Fmt {
    Text,
    Csv,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Zero {
    /// 零
    Ling,
    /// 〇
    Circle,
}

impl From<Zero> for ZeroStyle {
    fn from(z: Zero) -> Self {
        match z {
            Zero::Ling => ZeroStyle::Ling,
            Zero::Circle => ZeroStyle::Circle,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum OnError {
    Skip,
    Abort,
}

impl From<OnError> for ErrorPolicy {
    fn from(o: OnError) -> Self {
        match o {
            OnError::Skip => ErrorPolicy::Skip,
            OnError::Abort => ErrorPolicy::Abort,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "numzh", version, about = "Transcribe decimal numerals into Chinese numeral words")]
struct Cli {
    /// Numerals to transcribe; when empty, numerals are read from the input
    #[arg(allow_negative_numbers = true)]
    numerals: Vec<String>,

    /// Input file (stdin by default)
    #[arg(short = 'i', long = "input")]
    input: Option<String>,

    /// Output file (stdout by default)
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    #[arg(long = "in-format", value_enum, default_value = "text")]
    in_format: Fmt,

    #[arg(long = "out-format", value_enum, default_value = "text")]
    out_format: Fmt,

    /// Digit separator to drop, e.g. ","
    #[arg(short = 's', long, env = "NUMZH_SEPARATOR", allow_hyphen_values = true)]
    separator: Option<String>,

    /// Read leading integer zeros as bare zeros
    #[arg(long, env = "NUMZH_SIGNIFICANT_ONLY")]
    significant_only: bool,

    #[arg(long, value_enum, env = "NUMZH_ZERO", default_value = "ling")]
    zero: Zero,

    #[arg(long = "on-error", value_enum, env = "NUMZH_ON_ERROR", default_value = "skip")]
    on_error: OnError,
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("NUMZH_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let transcriber = Transcriber::new(TranscribeOptions {
        separator: cli.separator,
        significant_only: cli.significant_only,
        zero: cli.zero.into(),
    });

    // reader
    let numerals = if cli.numerals.is_empty() {
        let reader: Box<dyn io::Read> = match cli.input {
            Some(path) => Box::new(File::open(path)?),
            None => Box::new(io::stdin()),
        };
        let br = BufReader::new(reader);
        match cli.in_format {
            Fmt::Text => Text::read(br),
            Fmt::Csv => Csv::read(br),
        }?
    } else {
        cli.numerals
    };

    let rows = transcribe_all(&numerals, &transcriber, cli.on_error.into())?;

    // writer
    let mut writer: Box<dyn Write> = match cli.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };

    match cli.out_format {
        Fmt::Text => Text::write(&mut writer, &rows),
        Fmt::Csv => Csv::write(&mut writer, &rows),
    }?;

    writer.flush().map_err(NumZhError::from)
}

//! numzhlib — transcription of decimal numerals into Simplified Chinese numeral words
//! (万/亿/兆 grouping, zero elision, signs and fractions).

pub mod error;
pub mod glyphs;
pub mod model;
pub mod sign;
pub mod zeros;
pub mod integer;
pub mod decimal;
pub mod transcribe;
pub mod traits;
pub mod convert;

pub mod formats {
    pub mod text;
    pub mod csv;
}

pub use transcribe::{transcribe, Transcriber};

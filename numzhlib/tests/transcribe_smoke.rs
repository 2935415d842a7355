use numzhlib::{
    error::NumZhError,
    glyphs::ZeroStyle,
    model::TranscribeOptions,
    transcribe, Transcriber,
};

#[test]
fn reference_numerals() {
    let cases = [
        ("0", "零"),
        ("-0", "负零"),
        ("+0", "正零"),
        ("10101010101", "一百零一亿零一百零一万零一百零一"),
        ("-10080038703101.0", "负十兆零八百亿零三千八百七十万三千一百零一点零"),
        ("-12970000000001001.1", "负一万二千九百七十兆零一千零一点一"),
        ("±-000.000100", "正负零点零零零一零零"),
        ("+2020", "正二千零二十"),
        ("3.1415", "三点一四一五"),
    ];
    for (input, expected) in cases {
        assert_eq!(transcribe(input, None, false).unwrap(), expected, "{input}");
    }
}

#[test]
fn significant_only_keeps_every_leading_zero() {
    assert_eq!(
        transcribe("±-000.000100", None, true).unwrap(),
        "正负零零零点零零零一零零"
    );
    assert_eq!(transcribe("007", None, true).unwrap(), "零零七");
    assert_eq!(transcribe("007", None, false).unwrap(), "零七");
}

#[test]
fn separators_are_removed_before_parsing() {
    assert_eq!(
        transcribe("12'345'678", Some("'"), false).unwrap(),
        "一千二百三十四万五千六百七十八"
    );
}

#[test]
fn overflow_above_sixteenth_position() {
    assert!(transcribe("99999999999999999", None, false).is_ok());
    assert!(matches!(
        transcribe("999999999999999999", None, false),
        Err(NumZhError::Overflow { position: 17 })
    ));
}

#[test]
fn malformed_input_is_rejected() {
    assert!(matches!(
        transcribe("12ab", None, false),
        Err(NumZhError::InvalidNumberFormat(_))
    ));
    assert!(matches!(
        transcribe("1.0e-1", None, false),
        Err(NumZhError::InvalidNumberFormat(_))
    ));
}

#[test]
fn options_from_serde_defaults() {
    let t = Transcriber::new(TranscribeOptions {
        zero: ZeroStyle::Circle,
        significant_only: true,
        ..TranscribeOptions::default()
    });
    assert_eq!(t.transcribe("0105").unwrap(), "〇一百〇五");
    assert_eq!(t.options().separator, None);
}

//! Batch driver: runs the transcriber over every numeral read from an input format.

use crate::{error::Result, model::Transcription, transcribe::Transcriber};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// What to do with a numeral that fails to transcribe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Record the error on the row and carry on.
    #[default]
    Skip,
    /// Stop at the first error and return it.
    Abort,
}

pub fn transcribe_all(
    inputs: &[String],
    transcriber: &Transcriber,
    policy: ErrorPolicy,
) -> Result<Vec<Transcription>> {
    let mut rows = Vec::with_capacity(inputs.len());
    for input in inputs {
        match transcriber.transcribe(input) {
            Ok(output) => rows.push(Transcription {
                input: input.clone(),
                output: Some(output),
                error: None,
            }),
            Err(e) if policy == ErrorPolicy::Skip => {
                warn!(input = input.as_str(), error = %e, "skipping numeral");
                rows.push(Transcription {
                    input: input.clone(),
                    output: None,
                    error: Some(e.to_string()),
                });
            }
            Err(e) => return Err(e),
        }
    }
    debug!(count = rows.len(), "transcribed batch");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NumZhError;

    fn inputs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_skip_records_errors() {
        let rows = transcribe_all(
            &inputs(&["12", "abc", "999999999999999999"]),
            &Transcriber::default(),
            ErrorPolicy::Skip,
        )
        .unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].output.as_deref(), Some("十二"));
        assert!(rows[1].output.is_none());
        assert!(rows[1].error.as_deref().unwrap().contains("invalid number format"));
        assert!(rows[2].error.as_deref().unwrap().contains("overflow"));
    }

    #[test]
    fn test_abort_returns_first_error() {
        let err = transcribe_all(
            &inputs(&["1", "999999999999999999", "abc"]),
            &Transcriber::default(),
            ErrorPolicy::Abort,
        )
        .unwrap_err();
        assert!(matches!(err, NumZhError::Overflow { .. }));
    }
}

//! Pre-computed ASR transcripts in Whisper-style JSON.
//!
//! Accepted layouts:
//!
//! ```json
//! {"language": "en", "segments": [{"start": 0.0, "end": 2.5, "text": " Hold on"}]}
//! ```
//!
//! or a bare segment array. Unknown fields are ignored.

use crate::error::{Error, InputError, Result};
use crate::traits::Transcriber;
use crate::types::{Segment, validate_segments};
use serde_json::Value;

const LAYOUT_HINT: &str = "expected a segment array or an object with a \"segments\" array";

/// Segments produced by an earlier transcription run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transcript {
    pub segments: Vec<Segment>,
    /// Language recorded by the transcriber, if any
    pub language: Option<String>,
}

impl Transcript {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self {
            segments,
            language: None,
        }
    }

    /// Parse and validate a JSON transcript.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;

        let (items, language) = match value {
            Value::Array(items) => (items, None),
            Value::Object(mut map) => {
                let items = match map.remove("segments") {
                    Some(Value::Array(items)) => items,
                    _ => return Err(InputError::Layout(LAYOUT_HINT).into()),
                };
                let language = map
                    .get("language")
                    .and_then(Value::as_str)
                    .map(str::to_string);
                (items, language)
            }
            _ => return Err(InputError::Layout(LAYOUT_HINT).into()),
        };

        let segments = items
            .into_iter()
            .zip(1..)
            .map(|(item, index)| {
                serde_json::from_value::<Segment>(item).map_err(|e| {
                    Error::from(InputError::Malformed {
                        index,
                        reason: e.to_string(),
                    })
                })
            })
            .collect::<Result<Vec<_>>>()?;

        validate_segments(&segments)?;

        Ok(Self { segments, language })
    }
}

impl Transcriber for Transcript {
    fn transcribe(&mut self, language: Option<&str>) -> Result<Vec<Segment>> {
        if let (Some(wanted), Some(recorded)) = (language, self.language.as_deref())
            && wanted != recorded
        {
            tracing::warn!(wanted, recorded, "transcript language differs from requested language");
        }

        Ok(self.segments.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_whisper_layout() {
        let json = r#"{
            "text": " Hold on I'm coming",
            "language": "en",
            "segments": [
                {"id": 0, "start": 0.0, "end": 2.5, "text": " Hold on", "tokens": [1, 2]},
                {"id": 1, "start": 2.5, "end": 5.0, "text": " I'm coming"}
            ]
        }"#;

        let transcript = Transcript::from_json(json).unwrap();

        assert_eq!(transcript.language.as_deref(), Some("en"));
        assert_eq!(
            transcript.segments,
            vec![
                Segment::new(" Hold on", 0.0, 2.5),
                Segment::new(" I'm coming", 2.5, 5.0),
            ]
        );
    }

    #[test]
    fn parses_bare_array() {
        let json = r#"[{"start": 1, "end": 2, "text": "hi"}]"#;

        let transcript = Transcript::from_json(json).unwrap();

        assert_eq!(transcript.segments, vec![Segment::new("hi", 1.0, 2.0)]);
        assert!(transcript.language.is_none());
    }

    #[test]
    fn reports_segment_missing_fields() {
        let json = r#"[{"start": 0, "end": 1, "text": "ok"}, {"start": 1, "text": "no end"}]"#;

        match Transcript::from_json(json) {
            Err(Error::Input(InputError::Malformed { index, reason })) => {
                assert_eq!(index, 2);
                assert!(reason.contains("end"), "reason: {reason}");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn rejects_negative_duration() {
        let json = r#"[{"start": 3.0, "end": 2.0, "text": "backwards"}]"#;

        assert!(matches!(
            Transcript::from_json(json),
            Err(Error::Input(InputError::InvalidTimestamps { index: 1, .. }))
        ));
    }

    #[test]
    fn rejects_unknown_layout() {
        assert!(matches!(
            Transcript::from_json(r#"{"text": "no segments"}"#),
            Err(Error::Input(InputError::Layout(_)))
        ));
        assert!(matches!(
            Transcript::from_json("not json"),
            Err(Error::Input(InputError::Json(_)))
        ));
    }

    #[test]
    fn transcribe_returns_segments() {
        let mut transcript = Transcript::new(vec![Segment::new("a", 0.0, 1.0)]);

        let segments = transcript.transcribe(Some("fr")).unwrap();

        assert_eq!(segments.len(), 1);
    }
}

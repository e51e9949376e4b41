//! Upload trigger payload model.
//!
//! The trigger delivers at least one record naming the source bucket and the
//! URL-encoded object key, mirroring the S3 event notification shape. Only
//! the fields the pipeline consumes are modeled.

use serde::Deserialize;

use ventas_model::{ObjectLocation, PipelineError, Result};

/// An upload notification carrying one or more records.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadEvent {
    #[serde(rename = "Records")]
    pub records: Vec<UploadRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadRecord {
    pub s3: S3Entity,
}

#[derive(Debug, Clone, Deserialize)]
pub struct S3Entity {
    pub bucket: BucketRef,
    pub object: ObjectRef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BucketRef {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObjectRef {
    pub key: String,
}

impl UploadEvent {
    /// Parse an event from its JSON payload.
    pub fn from_json(payload: &str) -> Result<Self> {
        serde_json::from_str(payload)
            .map_err(|error| PipelineError::InvalidEvent(error.to_string()))
    }

    /// Source location of the first record, with the key URL-decoded.
    pub fn source_location(&self) -> Result<ObjectLocation> {
        let record = self
            .records
            .first()
            .ok_or_else(|| PipelineError::InvalidEvent("no records in event".to_string()))?;
        let key = decode_key(&record.s3.object.key)?;
        Ok(ObjectLocation::new(record.s3.bucket.name.clone(), key))
    }
}

/// Decode a URL-encoded object key, where `+` stands for a space.
pub fn decode_key(raw: &str) -> Result<String> {
    let plus_decoded = raw.replace('+', " ");
    let decoded = urlencoding::decode(&plus_decoded)
        .map_err(|error| PipelineError::InvalidEvent(format!("undecodable key '{raw}': {error}")))?;
    Ok(decoded.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_notification_shape() {
        let event = UploadEvent::from_json(
            r#"{"Records":[{"s3":{"bucket":{"name":"uploads"},"object":{"key":"raw/ventas+2024.csv"}}}]}"#,
        )
        .unwrap();

        let location = event.source_location().unwrap();
        assert_eq!(location.bucket, "uploads");
        assert_eq!(location.key, "raw/ventas 2024.csv");
    }

    #[test]
    fn decodes_percent_sequences() {
        assert_eq!(decode_key("raw/a%C3%B1o.csv").unwrap(), "raw/año.csv");
        assert_eq!(decode_key("raw/plain.csv").unwrap(), "raw/plain.csv");
    }

    #[test]
    fn empty_records_is_invalid() {
        let event = UploadEvent::from_json(r#"{"Records":[]}"#).unwrap();

        let error = event.source_location().unwrap_err();
        match error {
            PipelineError::InvalidEvent(message) => assert!(message.contains("no records")),
            other => panic!("unexpected error: {other}"),
        }
    }
}

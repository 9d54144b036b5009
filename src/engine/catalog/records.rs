use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// One raw catalog datum: three signed coordinates in arbitrary units.
/// Immutable once read; only exists during ingestion.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StarRecord {
    #[serde(rename = "X")]
    pub x: f64,
    #[serde(rename = "Y")]
    pub y: f64,
    #[serde(rename = "Z")]
    pub z: f64,
}

/// Complete star catalog as a Bevy asset. Mirrors the JSON document
/// exactly: a flat array of coordinate records.
#[derive(Asset, Debug, Clone, Serialize, Deserialize, TypePath)]
#[serde(transparent)]
pub struct StarCatalog {
    pub records: Vec<StarRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialises_flat_record_array() {
        let doc = r#"[{"X":10.0,"Y":0.0,"Z":0.0},{"X":-3.5,"Y":5.0,"Z":1.25}]"#;
        let catalog: StarCatalog = serde_json::from_str(doc).expect("valid catalog document");
        assert_eq!(catalog.records.len(), 2);
        assert_eq!(catalog.records[1].x, -3.5);
    }

    #[test]
    fn rejects_records_with_missing_axes() {
        let doc = r#"[{"X":1.0,"Y":2.0}]"#;
        assert!(serde_json::from_str::<StarCatalog>(doc).is_err());
    }
}

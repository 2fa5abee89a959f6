use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Failures while loading the reference table. All of them are fatal:
/// the service refuses to start without a complete table.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Cannot read reference table at {path}: {reason}")]
    Unreadable { path: String, reason: String },

    #[error("Cannot parse reference table: {0}")]
    Malformed(String),

    #[error("Reference table row {row} ({disease}) has no symptom tokens")]
    SymptomlessRow { row: usize, disease: String },

    #[error("Reference table contains no data rows")]
    Empty,
}

/// One disease entry: a label, its normalized symptom tokens in source
/// order, and the associated treatment text.
#[derive(Debug, Clone)]
pub struct ReferenceRecord {
    pub disease: String,
    pub symptoms: Vec<String>,
    pub treatment: String,
}

/// CSV row shape. Column headers match the published dataset.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Disease")]
    disease: String,
    #[serde(rename = "Symptoms")]
    symptoms: String,
    #[serde(rename = "Ayurvedic Treatment")]
    treatment: String,
}

/// The in-memory reference table. Immutable after construction.
#[derive(Debug)]
pub struct Catalog {
    records: Vec<ReferenceRecord>,
}

impl Catalog {
    /// Load the reference table from a CSV file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|e| CatalogError::Unreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::parse(&raw)
    }

    /// Parse CSV text into a catalog, normalizing every symptom field.
    pub(crate) fn parse(data: &str) -> Result<Self, CatalogError> {
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let mut records = Vec::new();

        for (index, row) in reader.deserialize::<RawRow>().enumerate() {
            let row = row.map_err(|e| CatalogError::Malformed(e.to_string()))?;
            let symptoms = normalize_symptom_field(&row.symptoms);
            if symptoms.is_empty() {
                return Err(CatalogError::SymptomlessRow {
                    row: index + 1,
                    disease: row.disease.trim().to_string(),
                });
            }
            records.push(ReferenceRecord {
                disease: row.disease.trim().to_string(),
                symptoms,
                treatment: row.treatment.trim().to_string(),
            });
        }

        if records.is_empty() {
            return Err(CatalogError::Empty);
        }

        Ok(Self { records })
    }

    /// Build a small fixed table for tests (no file I/O).
    pub fn load_test() -> Self {
        let data = "\
Disease,Symptoms,Ayurvedic Treatment
Common Cold,\"cough, fever, runny nose\",Ginger tea with honey
Influenza,\"fever, body ache, chills\",Giloy kadha and rest
Indigestion,\"bloating, nausea, heaviness\",Hingvastak churna before meals
Insomnia,\"disturbed sleep, irritability\",Ashwagandha with warm milk
";
        Self::parse(data).expect("test table is well formed")
    }

    pub fn records(&self) -> &[ReferenceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Normalize one symptom token: trim whitespace, lowercase.
pub(crate) fn normalize_token(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Split a comma-delimited symptom field into normalized tokens.
/// Empty tokens are dropped; duplicates keep their first occurrence.
fn normalize_symptom_field(field: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    for raw in field.split(',') {
        let token = normalize_token(raw);
        if !token.is_empty() && !tokens.contains(&token) {
            tokens.push(token);
        }
    }
    tokens
}

//! Clinic profile printed in the footer of every sheet.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::LabelError;

/// Clinic and doctor details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClinicProfile {
    pub name: String,
    pub subtitle: String,
    pub doctor: String,
    pub qualifications: String,
    pub speciality: String,
    pub address: String,
    /// Phone numbers, printed with Bangla digits.
    pub phones: Vec<String>,
}

impl Default for ClinicProfile {
    fn default() -> Self {
        Self {
            name: "ত্রিফুল আরোগ্য নিকেতন".into(),
            subtitle: "(আদর্শ হোমিওপ্যাথিক চিকিৎসালয়)".into(),
            doctor: "ডাঃ নীহার রঞ্জন রায়".into(),
            qualifications: "(বি.এস.সি, ডি.এইচ.এম.এস)".into(),
            speciality: "(শুধুমাত্র জটিল ও পুরাতন রোগী চিকিৎসক)".into(),
            address: "কোটালীপাড়া, গোপালগঞ্জ".into(),
            phones: vec![
                "01716954699".into(),
                "01922788466".into(),
                "01871811181".into(),
            ],
        }
    }
}

impl ClinicProfile {
    /// Load a profile from a JSON file. Missing keys keep their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LabelError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        serde_json::from_str(&contents)
            .map_err(|e| LabelError::Config(format!("{}: {}", path.display(), e)))
    }
}

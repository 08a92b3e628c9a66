//! Wire types for the alquran.cloud API.
//!
//! Responses arrive wrapped in an envelope:
//!
//! ```json
//! { "code": 200, "status": "OK", "data": { ...surah... } }
//! ```
//!
//! Field names are camelCase on the wire; payloads are converted into the
//! corpus domain model before leaving this crate.

use core_corpus::{Ayah, Surah};
use serde::Deserialize;

/// Response envelope shared by every API endpoint.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub code: i64,
    pub status: String,
    pub data: Option<T>,
}

/// One surah as delivered by `GET /surah/{number}/{edition}`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurahData {
    pub number: u16,
    pub name: String,
    pub english_name: String,
    #[serde(default)]
    pub english_name_translation: String,
    #[serde(default)]
    pub revelation_type: String,
    pub number_of_ayahs: u16,
    #[serde(default)]
    pub ayahs: Vec<AyahData>,
}

/// One ayah within a surah payload. Audio editions populate `audio` and
/// `audioSecondary`; text editions omit them.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AyahData {
    pub number: u32,
    pub number_in_surah: u16,
    pub text: String,
    #[serde(default)]
    pub audio: Option<String>,
    #[serde(default)]
    pub audio_secondary: Vec<String>,
}

impl SurahData {
    /// Convert the wire payload into the corpus domain model.
    pub fn into_model(self) -> Surah {
        Surah {
            number: self.number,
            name: self.name,
            english_name: self.english_name,
            english_name_translation: self.english_name_translation,
            revelation_type: self.revelation_type,
            number_of_ayahs: self.number_of_ayahs,
            ayahs: self.ayahs.into_iter().map(AyahData::into_model).collect(),
        }
    }
}

impl AyahData {
    fn into_model(self) -> Ayah {
        Ayah {
            number: self.number,
            number_in_surah: self.number_in_surah,
            text: self.text,
            audio: self.audio,
            audio_secondary: self.audio_secondary,
        }
    }
}

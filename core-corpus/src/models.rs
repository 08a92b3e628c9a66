//! Corpus domain model.
//!
//! A content unit is one surah fetched in one edition; its addressable
//! sub-units are the ayahs it contains.

use crate::error::{CorpusError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of surahs in the corpus.
pub const SURAH_COUNT: u16 = 114;

/// Validated surah number in `1..=114`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SurahId(u16);

impl SurahId {
    /// Construct a surah identifier, rejecting out-of-range numbers.
    pub fn new(number: u16) -> Result<Self> {
        if number == 0 || number > SURAH_COUNT {
            return Err(CorpusError::InvalidSurahNumber(number));
        }
        Ok(Self(number))
    }

    /// The canonical surah number.
    pub fn number(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for SurahId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of corpus edition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditionKind {
    /// Original script text (e.g. `quran-uthmani`).
    Text,
    /// Translated text (e.g. `en.asad`).
    Translation,
    /// Recitation audio, identified per reciter (e.g. `ar.alafasy`).
    Audio,
}

/// A corpus edition: the variant dimension of every content read.
///
/// The identifier distinguishes script, translation, and reciter variants,
/// so it is part of the cache key for every fetch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edition {
    id: String,
    kind: EditionKind,
}

impl Edition {
    /// Construct an edition, rejecting empty identifiers.
    pub fn new(id: impl Into<String>, kind: EditionKind) -> Result<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(CorpusError::InvalidEdition(id));
        }
        Ok(Self { id, kind })
    }

    /// Original-script text edition.
    pub fn text(id: impl Into<String>) -> Result<Self> {
        Self::new(id, EditionKind::Text)
    }

    /// Translation edition.
    pub fn translation(id: impl Into<String>) -> Result<Self> {
        Self::new(id, EditionKind::Translation)
    }

    /// Recitation audio edition.
    pub fn audio(id: impl Into<String>) -> Result<Self> {
        Self::new(id, EditionKind::Audio)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> EditionKind {
        self.kind
    }
}

impl fmt::Display for Edition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// One ayah of a surah, as delivered by an edition.
///
/// For audio editions, `audio` carries the resolved location of this ayah's
/// recitation and `audio_secondary` lists mirror locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ayah {
    /// Global ayah number across the whole corpus.
    pub number: u32,
    /// Position of this ayah within its surah, starting at 1.
    pub number_in_surah: u16,
    /// Edition text (script or translation).
    pub text: String,
    /// Recitation audio URL, present for audio editions.
    pub audio: Option<String>,
    /// Mirror audio URLs, if provided by the source.
    #[serde(default)]
    pub audio_secondary: Vec<String>,
}

/// A surah in a specific edition: unit metadata plus the ordered ayah list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Surah {
    pub number: u16,
    pub name: String,
    pub english_name: String,
    pub english_name_translation: String,
    pub revelation_type: String,
    pub number_of_ayahs: u16,
    pub ayahs: Vec<Ayah>,
}

impl Surah {
    /// Look up an ayah by its position within this surah.
    pub fn ayah(&self, number_in_surah: u16) -> Option<&Ayah> {
        self.ayahs
            .iter()
            .find(|a| a.number_in_surah == number_in_surah)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surah_id_range() {
        assert!(SurahId::new(1).is_ok());
        assert!(SurahId::new(114).is_ok());
        assert!(matches!(
            SurahId::new(0),
            Err(CorpusError::InvalidSurahNumber(0))
        ));
        assert!(matches!(
            SurahId::new(115),
            Err(CorpusError::InvalidSurahNumber(115))
        ));
    }

    #[test]
    fn edition_rejects_empty_id() {
        assert!(Edition::text("quran-uthmani").is_ok());
        assert!(matches!(
            Edition::audio("  "),
            Err(CorpusError::InvalidEdition(_))
        ));
    }

    #[test]
    fn ayah_lookup_by_position() {
        let surah = Surah {
            number: 1,
            name: "سُورَةُ ٱلْفَاتِحَةِ".to_string(),
            english_name: "Al-Faatiha".to_string(),
            english_name_translation: "The Opening".to_string(),
            revelation_type: "Meccan".to_string(),
            number_of_ayahs: 2,
            ayahs: vec![
                Ayah {
                    number: 1,
                    number_in_surah: 1,
                    text: "بِسْمِ ٱللَّهِ".to_string(),
                    audio: None,
                    audio_secondary: Vec::new(),
                },
                Ayah {
                    number: 2,
                    number_in_surah: 2,
                    text: "ٱلْحَمْدُ لِلَّهِ".to_string(),
                    audio: None,
                    audio_secondary: Vec::new(),
                },
            ],
        };

        assert_eq!(surah.ayah(2).map(|a| a.number), Some(2));
        assert!(surah.ayah(3).is_none());
    }
}

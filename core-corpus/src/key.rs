//! Cache key derivation.

use crate::models::{Edition, SurahId};
use std::fmt;

/// Deterministic cache key for one content unit in one edition.
///
/// Encodes every dimension that changes the payload (surah number plus the
/// edition identifier, which itself distinguishes script, translation, and
/// reciter variants), so distinct variants never collide or shadow one
/// another.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentKey {
    surah: SurahId,
    edition_id: String,
}

impl ContentKey {
    pub fn new(surah: SurahId, edition: &Edition) -> Self {
        Self {
            surah,
            edition_id: edition.id().to_string(),
        }
    }

    pub fn surah(&self) -> SurahId {
        self.surah
    }

    pub fn edition_id(&self) -> &str {
        &self.edition_id
    }
}

impl fmt::Display for ContentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "surah:{}:{}", self.surah, self.edition_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_variants_produce_distinct_keys() {
        let surah = SurahId::new(36).unwrap();
        let text = Edition::text("quran-uthmani").unwrap();
        let translation = Edition::translation("fr.hamidullah").unwrap();
        let audio = Edition::audio("ar.alafasy").unwrap();

        let keys = [
            ContentKey::new(surah, &text),
            ContentKey::new(surah, &translation),
            ContentKey::new(surah, &audio),
        ];

        assert_ne!(keys[0], keys[1]);
        assert_ne!(keys[1], keys[2]);
        assert_ne!(keys[0], keys[2]);
    }

    #[test]
    fn display_form() {
        let key = ContentKey::new(
            SurahId::new(1).unwrap(),
            &Edition::audio("ar.alafasy").unwrap(),
        );
        assert_eq!(key.to_string(), "surah:1:ar.alafasy");
    }
}

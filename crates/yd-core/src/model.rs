use crate::error::DecodeError;
use crate::payload::{RawPayload, RawTranEntry};

/// Pronunciation direction for phonetics and audio
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Us,
    Uk,
}

/// Phonetic symbols and audio references from the EC block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pronunciations {
    pub uk_phonetic: String,
    pub us_phonetic: String,
    pub uk_audio_ref: String,
    pub us_audio_ref: String,
}

impl Pronunciations {
    pub fn audio_ref(&self, accent: Accent) -> &str {
        match accent {
            Accent::Us => &self.us_audio_ref,
            Accent::Uk => &self.uk_audio_ref,
        }
    }
}

/// One numbered line of the Collins block
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryEntry {
    Definition {
        part_of_speech: String,
        pos_qualifier: String,
        translation: String,
        example_english: String,
        example_chinese: String,
    },
    CrossReference {
        target_word: String,
    },
}

impl DictionaryEntry {
    /// Entries with an example sentence are definitions; otherwise a `seeAlso`
    /// pointer makes a cross-reference. Anything else has no display form.
    pub(crate) fn classify(raw: &RawTranEntry) -> Option<Self> {
        if let Some(sentence) = raw.exam_sents.sent.first() {
            return Some(DictionaryEntry::Definition {
                part_of_speech: raw.pos_entry.pos.clone(),
                pos_qualifier: raw.pos_entry.pos_tips.clone(),
                translation: raw.tran.clone(),
                example_english: sentence.eng_sent.clone(),
                example_chinese: sentence.chn_sent.clone(),
            });
        }

        raw.see_alsos
            .see_also
            .first()
            .map(|see| DictionaryEntry::CrossReference {
                target_word: see.seeword.clone(),
            })
    }
}

/// Decoded dictionary response for one queried word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResult {
    queried_word: String,
    headword: Option<String>,
    exam_tags: Vec<String>,
    pronunciations: Option<Pronunciations>,
    gloss_entries: Vec<String>,
    /// One slot per upstream entry; `None` where the entry had no display form
    dictionary_entries: Vec<Option<DictionaryEntry>>,
}

impl LookupResult {
    /// Decode a raw `jsonapi` payload for `queried_word`.
    ///
    /// Absent blocks decode to their empty state. A successfully decoded
    /// result may still be [`is_invalid`](Self::is_invalid); callers check that.
    pub fn decode(raw: &[u8], queried_word: &str) -> Result<Self, DecodeError> {
        let payload = RawPayload::from_slice(raw)?;
        Ok(Self::project(payload, queried_word))
    }

    fn project(payload: RawPayload, queried_word: &str) -> Self {
        let RawPayload { ec, collins } = payload;

        let first_word = ec.word.into_iter().next();

        let gloss_entries = first_word
            .as_ref()
            .map(|word| {
                word.trs
                    .iter()
                    .filter_map(|group| group.first_sense())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let pronunciations = first_word.map(|word| Pronunciations {
            uk_phonetic: word.ukphone,
            us_phonetic: word.usphone,
            uk_audio_ref: word.ukspeech,
            us_audio_ref: word.usspeech,
        });

        let first_collins = collins.collins_entries.into_iter().next();

        let headword = first_collins
            .as_ref()
            .and_then(|c| c.basic_entries.basic_entry.first())
            .map(|basic| basic.headword.clone())
            .filter(|headword| !headword.is_empty());

        let dictionary_entries = first_collins
            .map(|c| {
                c.entries
                    .entry
                    .iter()
                    .map(|entry| entry.tran_entry.first().and_then(DictionaryEntry::classify))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            queried_word: queried_word.to_string(),
            headword,
            exam_tags: ec.exam_type,
            pronunciations,
            gloss_entries,
            dictionary_entries,
        }
    }

    pub fn queried_word(&self) -> &str {
        &self.queried_word
    }

    /// Collins headword, which may differ from the queried form
    pub fn headword(&self) -> Option<&str> {
        self.headword.as_deref()
    }

    pub fn exam_tags(&self) -> &[String] {
        &self.exam_tags
    }

    pub fn pronunciations(&self) -> Option<&Pronunciations> {
        self.pronunciations.as_ref()
    }

    pub fn gloss_entries(&self) -> &[String] {
        &self.gloss_entries
    }

    pub fn dictionary_entries(&self) -> &[Option<DictionaryEntry>] {
        &self.dictionary_entries
    }

    pub fn has_translations(&self) -> bool {
        self.pronunciations.is_some()
    }

    pub fn has_level_tags(&self) -> bool {
        !self.exam_tags.is_empty()
    }

    pub fn has_dictionary_entries(&self) -> bool {
        !self.dictionary_entries.is_empty()
    }

    /// Neither translation source produced anything
    pub fn is_invalid(&self) -> bool {
        !self.has_translations() && !self.has_dictionary_entries()
    }

    /// Pronunciation audio URL under `api_base`.
    ///
    /// Falls back to the word-synthesized voice (`type=2`) when the EC block
    /// is missing or carries no reference for `accent`.
    pub fn audio_link(&self, accent: Accent, api_base: &str) -> String {
        let reference = self
            .pronunciations
            .as_ref()
            .map(|p| p.audio_ref(accent))
            .filter(|reference| !reference.is_empty());

        match reference {
            Some(reference) => format!("{api_base}/dictvoice?audio={reference}"),
            None => format!("{api_base}/dictvoice?audio={}&type=2", self.queried_word),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{EMPTY_BLOCKS, HELLO, decode};

    const BASE: &str = "http://dict.youdao.com";

    #[test]
    fn test_empty_ec_block_falls_back() {
        let result = decode(EMPTY_BLOCKS, "qwzx");

        assert!(!result.has_translations());
        assert!(result.pronunciations().is_none());
        assert!(result.gloss_entries().is_empty());
        assert_eq!(
            result.audio_link(Accent::Us, BASE),
            "http://dict.youdao.com/dictvoice?audio=qwzx&type=2"
        );
        assert_eq!(
            result.audio_link(Accent::Uk, BASE),
            "http://dict.youdao.com/dictvoice?audio=qwzx&type=2"
        );
    }

    #[test]
    fn test_missing_blocks_decode_empty() {
        let result = decode("{}", "qwzx");

        assert!(!result.has_translations());
        assert!(!result.has_level_tags());
        assert!(!result.has_dictionary_entries());
        assert!(result.headword().is_none());
    }

    #[test]
    fn test_null_blocks_decode_empty() {
        let result = decode(r#"{"ec": null, "collins": {"collins_entries": null}}"#, "qwzx");

        assert!(result.is_invalid());
    }

    #[test]
    fn test_audio_link_uses_upstream_reference() {
        let result = decode(HELLO, "hello");

        assert_eq!(
            result.audio_link(Accent::Us, BASE),
            "http://dict.youdao.com/dictvoice?audio=hello&type=2"
        );
        assert_eq!(
            result.audio_link(Accent::Uk, BASE),
            "http://dict.youdao.com/dictvoice?audio=hello&type=1"
        );
    }

    #[test]
    fn test_empty_reference_falls_back_per_accent() {
        let payload =
            r#"{"ec": {"word": [{"usphone": "x", "usspeech": "", "ukspeech": "uk-ref"}]}}"#;
        let result = decode(payload, "word");

        assert_eq!(
            result.audio_link(Accent::Us, BASE),
            "http://dict.youdao.com/dictvoice?audio=word&type=2"
        );
        assert_eq!(
            result.audio_link(Accent::Uk, BASE),
            "http://dict.youdao.com/dictvoice?audio=uk-ref"
        );
    }

    #[test]
    fn test_fallback_link_inserts_word_verbatim() {
        let result = decode(EMPTY_BLOCKS, "R&D");

        assert_eq!(
            result.audio_link(Accent::Us, BASE),
            "http://dict.youdao.com/dictvoice?audio=R&D&type=2"
        );
    }

    #[test]
    fn test_invalid_combinations() {
        let ec = r#""ec": {"word": [{"usphone": "a"}]}"#;
        let no_ec = r#""ec": {}"#;
        let collins =
            r#""collins": {"collins_entries": [{"entries": {"entry": [{"tran_entry": []}]}}]}"#;
        let no_collins = r#""collins": {}"#;

        let cases = [
            (no_ec, no_collins, true),
            (ec, no_collins, false),
            (no_ec, collins, false),
            (ec, collins, false),
        ];

        for (ec_part, collins_part, invalid) in cases {
            let payload = format!("{{{ec_part}, {collins_part}}}");
            let result = decode(&payload, "w");
            assert_eq!(result.is_invalid(), invalid, "payload: {payload}");
        }
    }

    #[test]
    fn test_word_type_mismatch_is_malformed() {
        let err = LookupResult::decode(br#"{"ec": {"word": "hello"}}"#, "hello").unwrap_err();
        assert!(matches!(err, DecodeError::Malformed(_)));
    }

    #[test]
    fn test_truncated_payload_is_malformed() {
        let err = LookupResult::decode(br#"{"ec": {"word": ["#, "hello").unwrap_err();
        assert!(matches!(err, DecodeError::Malformed(_)));
    }

    #[test]
    fn test_hello_model() {
        let result = decode(HELLO, "hello");

        assert_eq!(result.queried_word(), "hello");
        assert_eq!(result.headword(), Some("hello"));
        assert_eq!(result.exam_tags(), ["初中", "高中"]);
        assert_eq!(result.gloss_entries(), ["int. 哈罗；喂"]);

        let pron = result.pronunciations().unwrap();
        assert_eq!(pron.uk_phonetic, "h?'l??");
        assert_eq!(pron.us_phonetic, "h?'lo?");

        assert_eq!(result.dictionary_entries().len(), 3);
        assert_eq!(
            result.dictionary_entries()[0],
            Some(DictionaryEntry::Definition {
                part_of_speech: "int.".to_string(),
                pos_qualifier: String::new(),
                translation: "用于问候".to_string(),
                example_english: "Hello, John!".to_string(),
                example_chinese: "你好，约翰！".to_string(),
            })
        );
        assert_eq!(
            result.dictionary_entries()[1],
            Some(DictionaryEntry::CrossReference {
                target_word: "hi".to_string()
            })
        );
        assert_eq!(result.dictionary_entries()[2], None);
    }

    #[test]
    fn test_example_wins_over_see_also() {
        let payload = r#"{"collins": {"collins_entries": [{"entries": {"entry": [
            {"tran_entry": [{
                "exam_sents": {"sent": [{"eng_sent": "e", "chn_sent": "c"}]},
                "seeAlsos": {"seeAlso": [{"seeword": "other"}]}
            }]}
        ]}}]}}"#;
        let result = decode(payload, "w");

        assert!(matches!(
            result.dictionary_entries()[0],
            Some(DictionaryEntry::Definition { .. })
        ));
    }

    #[test]
    fn test_gloss_skips_groups_without_sense() {
        let payload = r#"{"ec": {"word": [{"trs": [
            {"tr": []},
            {"tr": [{"l": {"i": ["n. 词"]}}]}
        ]}]}}"#;
        let result = decode(payload, "w");

        assert_eq!(result.gloss_entries(), ["n. 词"]);
    }
}

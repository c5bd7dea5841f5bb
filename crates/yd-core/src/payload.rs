//! Permissive mirror of the Youdao `jsonapi` response.
//!
//! Every field here may be missing or `null` upstream, so each one falls back
//! to its empty value. Only a value of the wrong JSON type is rejected.

use serde::{Deserialize, Deserializer};

/// Treats an explicit `null` the same as a missing field.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawPayload {
    #[serde(deserialize_with = "nullable")]
    pub ec: RawEc,
    #[serde(deserialize_with = "nullable")]
    pub collins: RawCollins,
}

// English-Chinese quick translation block

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawEc {
    #[serde(deserialize_with = "nullable")]
    pub exam_type: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub word: Vec<RawEcWord>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawEcWord {
    #[serde(deserialize_with = "nullable")]
    pub trs: Vec<RawTrans>,
    #[serde(deserialize_with = "nullable")]
    pub ukphone: String,
    #[serde(deserialize_with = "nullable")]
    pub ukspeech: String,
    #[serde(deserialize_with = "nullable")]
    pub usphone: String,
    #[serde(deserialize_with = "nullable")]
    pub usspeech: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawTrans {
    #[serde(deserialize_with = "nullable")]
    pub tr: Vec<RawTr>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawTr {
    #[serde(deserialize_with = "nullable")]
    pub l: RawTrLine,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawTrLine {
    #[serde(deserialize_with = "nullable")]
    pub i: Vec<String>,
}

impl RawTrans {
    /// First sense of a part-of-speech group, if the group carries one.
    pub fn first_sense(&self) -> Option<&str> {
        self.tr
            .first()
            .and_then(|tr| tr.l.i.first())
            .map(String::as_str)
    }
}

// Collins dictionary block

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawCollins {
    #[serde(deserialize_with = "nullable")]
    pub collins_entries: Vec<RawCollinsEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawCollinsEntry {
    #[serde(deserialize_with = "nullable")]
    pub basic_entries: RawBasicEntries,
    #[serde(deserialize_with = "nullable")]
    pub entries: RawEntries,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawBasicEntries {
    #[serde(deserialize_with = "nullable")]
    pub basic_entry: Vec<RawBasicEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawBasicEntry {
    #[serde(deserialize_with = "nullable")]
    pub headword: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawEntries {
    #[serde(deserialize_with = "nullable")]
    pub entry: Vec<RawEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawEntry {
    #[serde(deserialize_with = "nullable")]
    pub tran_entry: Vec<RawTranEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawTranEntry {
    #[serde(deserialize_with = "nullable")]
    pub exam_sents: RawExampleSentences,
    #[serde(deserialize_with = "nullable")]
    pub pos_entry: RawPosEntry,
    #[serde(deserialize_with = "nullable")]
    pub tran: String,
    #[serde(rename = "seeAlsos", deserialize_with = "nullable")]
    pub see_alsos: RawSeeAlsos,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawExampleSentences {
    #[serde(deserialize_with = "nullable")]
    pub sent: Vec<RawSentence>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawSentence {
    #[serde(deserialize_with = "nullable")]
    pub chn_sent: String,
    #[serde(deserialize_with = "nullable")]
    pub eng_sent: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawPosEntry {
    #[serde(deserialize_with = "nullable")]
    pub pos: String,
    #[serde(deserialize_with = "nullable")]
    pub pos_tips: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawSeeAlsos {
    #[serde(rename = "seeAlso", deserialize_with = "nullable")]
    pub see_also: Vec<RawSeeWord>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawSeeWord {
    #[serde(deserialize_with = "nullable")]
    pub seeword: String,
}

impl RawPayload {
    pub fn from_slice(raw: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(raw)
    }
}

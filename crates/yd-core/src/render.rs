//! Terminal report and flashcard rendering for a [`LookupResult`].

use std::fmt;

use minijinja::Environment;
use serde::Serialize;

use crate::error::RenderError;
use crate::model::{DictionaryEntry, LookupResult};

pub const INVALID_WORD_MESSAGE: &str = "may be invalid word";

const DICTIONARY_TITLE: &str = "柯林斯权威释义：\n\n";

const BACK_TEMPLATE_NAME: &str = "flashcard_back";

const BACK_TEMPLATE: &str = r#"
<div align="left">
	<p>{{ phonetic }}</p>
	<p>{{ level }}</p>
	<p>{{ gloss }}</p>
</div>
<div align="left">
	<p><b>{{ dictionary_title }}</b></p>
	{% for entry in entries %}
		{% if entry.has_see_also %}
			<p>{{ entry.see_also }}</p>
		{% else %}
			<p>
				{{ entry.paraphrase }}<br>
				{{ entry.english_example }}<br>
				{{ entry.chinese_example }}<br>
			</p>
		{% endif %}
	{% endfor %}
</div>
"#;

/// Display lines for one numbered dictionary slot
#[derive(Debug, Default, Serialize)]
struct EntryView {
    paraphrase: String,
    english_example: String,
    chinese_example: String,
    see_also: String,
    has_see_also: bool,
}

impl EntryView {
    fn new(position: usize, entry: Option<&DictionaryEntry>) -> Self {
        match entry {
            Some(DictionaryEntry::Definition {
                part_of_speech,
                pos_qualifier,
                translation,
                example_english,
                example_chinese,
            }) => Self {
                paraphrase: format!("{position}. {part_of_speech} {pos_qualifier} {translation}\n"),
                english_example: format!("例：{example_english}\n"),
                chinese_example: format!("{example_chinese}\n\n"),
                ..Default::default()
            },
            Some(DictionaryEntry::CrossReference { target_word }) => Self {
                see_also: format!("{position}. See also：{target_word}\n\n"),
                has_see_also: true,
                ..Default::default()
            },
            None => Self::default(),
        }
    }

    fn write_to(&self, buf: &mut String) {
        if self.has_see_also {
            buf.push_str(&self.see_also);
        } else {
            buf.push_str(&self.paraphrase);
            buf.push_str(&self.english_example);
            buf.push_str(&self.chinese_example);
        }
    }
}

#[derive(Serialize)]
struct BackView {
    phonetic: String,
    level: String,
    gloss: String,
    dictionary_title: &'static str,
    entries: Vec<EntryView>,
}

fn phonetic_line(result: &LookupResult) -> String {
    match result.pronunciations() {
        Some(p) => format!("英音： [{}] \t美音： [{}]", p.uk_phonetic, p.us_phonetic),
        None => String::new(),
    }
}

fn level_line(result: &LookupResult) -> String {
    if !result.has_level_tags() {
        return String::new();
    }

    let mut buf = String::from("Level：");
    for tag in result.exam_tags() {
        buf.push_str(tag);
        buf.push_str("  ");
    }
    buf
}

fn gloss_line(result: &LookupResult) -> String {
    if !result.has_translations() {
        return String::new();
    }

    let mut buf = String::new();
    for gloss in result.gloss_entries() {
        buf.push_str(gloss);
        buf.push('\t');
    }
    buf
}

fn dictionary_title(result: &LookupResult) -> &'static str {
    if result.has_dictionary_entries() {
        DICTIONARY_TITLE
    } else {
        ""
    }
}

fn entry_views(result: &LookupResult) -> Vec<EntryView> {
    result
        .dictionary_entries()
        .iter()
        .enumerate()
        .map(|(i, entry)| EntryView::new(i + 1, entry.as_ref()))
        .collect()
}

/// Plain-text report printed to the terminal.
///
/// ```text
/// word
///
/// phonetics  level
/// glosses
///
///
/// dictionary title
/// 1. ...
/// ```
pub fn render_report(result: &LookupResult) -> String {
    if result.is_invalid() {
        return INVALID_WORD_MESSAGE.to_string();
    }

    let mut buf = String::new();
    buf.push_str(result.queried_word());
    buf.push_str("\n\n");

    if result.has_translations() {
        buf.push_str(&phonetic_line(result));
        buf.push('\t');
        buf.push_str(&level_line(result));
        buf.push('\n');
        buf.push_str(&gloss_line(result));
    }

    if result.has_dictionary_entries() {
        buf.push_str("\n\n");
        buf.push_str(dictionary_title(result));
        // Slots without a display form still emit their separator.
        for view in entry_views(result) {
            view.write_to(&mut buf);
            buf.push('\n');
        }
    }

    buf
}

/// HTML answer side of a flashcard, or an error if the template is broken.
pub fn try_render_flashcard_back(result: &LookupResult) -> Result<String, RenderError> {
    render_back_with(BACK_TEMPLATE, result)
}

/// HTML answer side of a flashcard.
///
/// Empty for invalid results. A template failure is logged and also yields
/// an empty body so the caller can decide whether to continue.
pub fn render_flashcard_back(result: &LookupResult) -> String {
    render_back_or_empty(BACK_TEMPLATE, result)
}

fn render_back_or_empty(source: &str, result: &LookupResult) -> String {
    match render_back_with(source, result) {
        Ok(back) => back,
        Err(e) => {
            tracing::error!("Failed to render flashcard back: {}", e);
            String::new()
        }
    }
}

fn render_back_with(source: &str, result: &LookupResult) -> Result<String, RenderError> {
    if result.is_invalid() {
        return Ok(String::new());
    }

    let view = BackView {
        phonetic: phonetic_line(result),
        level: level_line(result),
        gloss: gloss_line(result),
        dictionary_title: dictionary_title(result),
        entries: entry_views(result),
    };

    let mut env = Environment::new();
    env.add_template(BACK_TEMPLATE_NAME, source)?;
    let back = env.get_template(BACK_TEMPLATE_NAME)?.render(&view)?;

    Ok(back)
}

/// Question side of a flashcard and base name of its audio attachment
pub fn front_label(result: &LookupResult) -> &str {
    result.queried_word()
}

impl fmt::Display for LookupResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_report(self))
    }
}

//! Bundled translations addressed by dot-separated keys.
//!
//! Each locale file under `locales/` holds a `strings` tree (text leaves,
//! list leaves, nested branches) and the locale's glossary. Files are
//! embedded at build time and parsed once at startup.

pub mod keys;

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

const EN_PACK: &str = include_str!("../../locales/en.json");
const HI_PACK: &str = include_str!("../../locales/hi.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Hi];

    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hi => "hi",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "hi" => Some(Self::Hi),
            _ => None,
        }
    }

    /// Key of the language's own name, shown in the language selector.
    pub fn label_key(self) -> &'static str {
        match self {
            Self::En => keys::ENGLISH,
            Self::Hi => keys::HINDI,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum I18nError {
    #[error("locale pack '{language}' could not be parsed: {message}")]
    Parse { language: &'static str, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossaryTerm {
    pub term: String,
    pub definition: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum Node {
    Text(String),
    List(Vec<String>),
    Branch(BTreeMap<String, Node>),
}

#[derive(Debug, Clone, Deserialize)]
struct LocalePack {
    strings: Node,
    #[serde(default)]
    glossary: Vec<GlossaryTerm>,
}

/// A resolved translation leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translation {
    Text(String),
    List(Vec<String>),
}

impl Translation {
    pub fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::List(items) => items.join(", "),
        }
    }

    pub fn into_list(self) -> Vec<String> {
        match self {
            Self::Text(text) => vec![text],
            Self::List(items) => items,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TranslationStore {
    packs: HashMap<Language, LocalePack>,
}

impl TranslationStore {
    pub fn builtin() -> Result<Self, I18nError> {
        Self::from_sources(&[(Language::En, EN_PACK), (Language::Hi, HI_PACK)])
    }

    pub fn from_sources(sources: &[(Language, &str)]) -> Result<Self, I18nError> {
        let mut packs = HashMap::new();
        for (language, raw) in sources {
            let pack: LocalePack =
                serde_json::from_str(raw).map_err(|err| I18nError::Parse {
                    language: language.code(),
                    message: err.to_string(),
                })?;
            packs.insert(*language, pack);
        }
        Ok(Self { packs })
    }

    /// Walk `key` segment by segment. Only leaves resolve; a key that stops
    /// on a branch is treated as missing.
    pub fn resolve(&self, language: Language, key: &str) -> Option<Translation> {
        let mut node = &self.packs.get(&language)?.strings;
        for segment in key.split('.') {
            match node {
                Node::Branch(children) => node = children.get(segment)?,
                _ => return None,
            }
        }

        match node {
            Node::Text(text) => Some(Translation::Text(text.clone())),
            Node::List(items) => Some(Translation::List(items.clone())),
            Node::Branch(_) => None,
        }
    }

    pub fn glossary(&self, language: Language) -> &[GlossaryTerm] {
        self.packs
            .get(&language)
            .map(|pack| pack.glossary.as_slice())
            .unwrap_or(&[])
    }
}

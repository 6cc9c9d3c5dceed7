//! Front-matter parsing
//!
//! A front-matter block opens with `---` on the first line of the file and
//! closes at the next line starting with `---`. Text after the opening
//! delimiter selects the block language:
//!
//! ```text
//! ---json
//! {"title": "Hello"}
//! ---
//! ```
//!
//! YAML is assumed when no language is given.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

const DELIMITER: &str = "---";

/// Errors produced while parsing a front-matter block
#[derive(Error, Debug)]
pub enum FrontMatterError {
    #[error("unsupported front-matter language: {0}")]
    UnknownLanguage(String),

    #[error("invalid YAML front-matter: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON front-matter: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML front-matter: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Custom deserializer that handles both a single string and a list of strings
fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};
    use std::fmt;

    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut vec = Vec::new();
            while let Some(item) = seq.next_element::<String>()? {
                vec.push(item);
            }
            Ok(vec)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(StringOrVec)
}

/// Accepts any scalar and keeps its text; null becomes an empty string.
/// Lets `date: 2024` or `title: 404` through without quoting.
fn scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct ScalarString;

    impl<'de> Visitor<'de> for ScalarString {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string, number or boolean")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            Ok(value.to_string())
        }

        fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
            Ok(value)
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
            Ok(value.to_string())
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
            Ok(value.to_string())
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
            Ok(value.to_string())
        }

        fn visit_bool<E: de::Error>(self, value: bool) -> Result<Self::Value, E> {
            Ok(value.to_string())
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(String::new())
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(String::new())
        }
    }

    deserializer.deserialize_any(ScalarString)
}

/// A boolean flag where an empty value (`draft:` or `draft: ~`) means false
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

/// Front-matter data from a post or project
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    #[serde(deserialize_with = "scalar_string")]
    pub title: String,
    #[serde(deserialize_with = "scalar_string")]
    pub date: String,
    #[serde(deserialize_with = "scalar_string")]
    pub desc: String,
    #[serde(deserialize_with = "string_or_vec")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub demo: String,
    #[serde(deserialize_with = "scalar_string")]
    pub source: String,
    #[serde(deserialize_with = "scalar_string")]
    pub layout: String,
    pub stack: Vec<(String, String)>,
    #[serde(deserialize_with = "flag")]
    pub draft: bool,
    #[serde(deserialize_with = "flag")]
    pub minimal: bool,
    #[serde(rename = "type", deserialize_with = "scalar_string")]
    pub kind: String,

    /// Additional custom fields
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    pub fn parse(content: &str) -> Result<(Self, &str), FrontMatterError> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);

        let Some(rest) = content.strip_prefix(DELIMITER) else {
            return Ok((FrontMatter::default(), content));
        };

        // `----` is a thematic break, not an opening delimiter
        if rest.starts_with('-') {
            return Ok((FrontMatter::default(), content));
        }

        let (language, block) = match rest.find('\n') {
            Some(pos) => (rest[..pos].trim(), &rest[pos + 1..]),
            None => (rest.trim(), ""),
        };

        // The closing delimiter may be missing, in which case the block runs to the end
        let (matter, remaining) = match find_closing(block) {
            Some((end, after)) => (&block[..end], after),
            None => (block, ""),
        };

        if matter.trim().is_empty() {
            return Ok((FrontMatter::default(), remaining));
        }

        let fm = match language {
            "" | "yaml" | "yml" => Self::parse_yaml(matter)?,
            "json" => serde_json::from_str(matter)?,
            "toml" => Self::parse_toml(matter)?,
            other => return Err(FrontMatterError::UnknownLanguage(other.to_string())),
        };

        Ok((fm, remaining))
    }

    fn parse_yaml(matter: &str) -> Result<Self, FrontMatterError> {
        // A block of only comments parses as null
        let value: serde_yaml::Value = serde_yaml::from_str(matter)?;
        if value.is_null() {
            return Ok(FrontMatter::default());
        }
        Ok(serde_yaml::from_value(value)?)
    }

    fn parse_toml(matter: &str) -> Result<Self, FrontMatterError> {
        let table: toml::Table = toml::from_str(matter)?;
        let json = toml_to_json(toml::Value::Table(table));
        Ok(serde_json::from_value(json)?)
    }
}

/// Locate the closing delimiter in the block that follows the opening line.
/// Returns the end of the matter and the text after the closing line.
fn find_closing(block: &str) -> Option<(usize, &str)> {
    let end = if block.starts_with(DELIMITER) {
        0
    } else {
        block.find("\n---")? + 1
    };
    let after = &block[end + DELIMITER.len()..];
    let after = match after.find('\n') {
        Some(pos) => &after[pos + 1..],
        None => "",
    };
    Some((end, after))
}

/// TOML datetimes become their string form so they land in `date` like YAML dates do
fn toml_to_json(value: toml::Value) -> serde_json::Value {
    match value {
        toml::Value::String(s) => serde_json::Value::String(s),
        toml::Value::Integer(i) => serde_json::Value::from(i),
        toml::Value::Float(f) => serde_json::Value::from(f),
        toml::Value::Boolean(b) => serde_json::Value::Bool(b),
        toml::Value::Datetime(dt) => serde_json::Value::String(dt.to_string()),
        toml::Value::Array(items) => {
            serde_json::Value::Array(items.into_iter().map(toml_to_json).collect())
        }
        toml::Value::Table(table) => serde_json::Value::Object(
            table
                .into_iter()
                .map(|(k, v)| (k, toml_to_json(v)))
                .collect(),
        ),
    }
}

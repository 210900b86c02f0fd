//! Text exporters for `(name, value)` color entries.
//!
//! Values are passed through untouched; the exporters don't care whether
//! they hold hex, `rgb()` or anything else.

use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// `--name: value;` per line.
pub fn to_css_variables<I, K, V>(entries: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    declarations("--", entries)
}

/// `$name: value;` per line.
pub fn to_scss_variables<I, K, V>(entries: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    declarations("$", entries)
}

/// A JSON object, pretty-printed with two-space indentation. Keys keep
/// their input order; a repeated key keeps its last value.
pub fn to_json<I, K, V>(entries: I) -> Result<String>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let object: Map<String, Value> = entries
        .into_iter()
        .map(|(name, value)| {
            (
                name.as_ref().to_owned(),
                Value::String(value.as_ref().to_owned()),
            )
        })
        .collect();
    Ok(serde_json::to_string_pretty(&object)?)
}

fn declarations<I, K, V>(sigil: &str, entries: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    entries
        .into_iter()
        .map(|(name, value)| format!("{sigil}{}: {};", name.as_ref(), value.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Css,
    Scss,
    Json,
}

impl ExportFormat {
    pub const ALL: [Self; 3] = [Self::Css, Self::Scss, Self::Json];

    pub fn render<I, K, V>(self, entries: I) -> Result<String>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let text = match self {
            Self::Css => to_css_variables(entries),
            Self::Scss => to_scss_variables(entries),
            Self::Json => to_json(entries)?,
        };
        tracing::debug!(format = %self, bytes = text.len(), "rendered export");
        Ok(text)
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Css => "css",
            Self::Scss => "scss",
            Self::Json => "json",
        })
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "css" => Ok(Self::Css),
            "scss" => Ok(Self::Scss),
            "json" => Ok(Self::Json),
            _ => Err(Error::UnknownExportFormat(s.to_owned())),
        }
    }
}

/// Put `text` on the system clipboard.
#[cfg(feature = "clipboard")]
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|err| Error::Clipboard(err.to_string()))?;
    clipboard
        .set_text(text)
        .map_err(|err| Error::Clipboard(err.to_string()))?;
    tracing::debug!(bytes = text.len(), "copied to clipboard");
    Ok(())
}

use std::collections::HashMap;
use std::path::Path;

use crate::error::ToolError;

/// Parsed MySQL option file: `[section]` groups of `key[=value]` options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionFile {
    sections: HashMap<String, HashMap<String, Option<String>>>,
}

impl OptionFile {
    /// Read and parse the option file at `path`.
    pub fn load(path: &Path) -> Result<Self, ToolError> {
        let text = std::fs::read_to_string(path).map_err(|source| ToolError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, path)
    }

    /// Parse option-file text. `path` only labels errors.
    pub fn parse(text: &str, path: &Path) -> Result<Self, ToolError> {
        let mut file = OptionFile::default();
        let mut current: Option<String> = None;

        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }
            if line.starts_with('!') {
                tracing::debug!(line = idx + 1, directive = line, "skipping include directive");
                continue;
            }

            let line = strip_trailing_comment(line);

            if let Some(header) = line.strip_prefix('[') {
                let Some(name) = header.strip_suffix(']') else {
                    return Err(config_error(path, idx, "unterminated section header"));
                };
                let name = name.trim().to_string();
                file.sections.entry(name.clone()).or_default();
                current = Some(name);
                continue;
            }

            let Some(section) = current.as_ref() else {
                return Err(config_error(path, idx, "option appears before any [section]"));
            };
            let (key, value) = split_option(line);
            if key.is_empty() {
                return Err(config_error(path, idx, "option has no name"));
            }
            file.sections
                .entry(section.clone())
                .or_default()
                .insert(key, value);
        }

        Ok(file)
    }

    /// Look up an option.
    ///
    /// `None` when absent, `Some(None)` when present without a value.
    pub fn get(&self, section: &str, key: &str) -> Option<Option<&str>> {
        self.sections
            .get(section)?
            .get(&normalize_key(key))
            .map(Option::as_deref)
    }

}

fn config_error(path: &Path, idx: usize, message: &str) -> ToolError {
    ToolError::Config {
        path: path.to_path_buf(),
        line: idx + 1,
        message: message.to_string(),
    }
}

/// Drop a ` # comment` tail that sits outside quotes.
///
/// A `#` only opens a comment at the start of the text or after whitespace,
/// so values like `/srv/db#1` survive.
fn strip_trailing_comment(line: &str) -> &str {
    let mut quote: Option<char> = None;
    let mut previous = ' ';
    for (idx, ch) in line.char_indices() {
        let token_start = previous.is_whitespace() || previous == '=' || previous == ':';
        match (quote, ch) {
            (Some(open), c) if c == open => quote = None,
            (None, '"' | '\'') if token_start => quote = Some(ch),
            (None, '#') if previous.is_whitespace() => return line[..idx].trim_end(),
            _ => {}
        }
        previous = ch;
    }
    line
}

/// Split `key = value` / `key: value` / bare `key`.
///
/// Empty values count as missing.
fn split_option(line: &str) -> (String, Option<String>) {
    match line.find(['=', ':']) {
        Some(pos) => {
            let key = normalize_key(&line[..pos]);
            let value = unquote(line[pos + 1..].trim());
            let value = (!value.is_empty()).then(|| value.to_string());
            (key, value)
        }
        None => (normalize_key(line), None),
    }
}

/// MySQL treats `-` and `_` in option names as the same character.
fn normalize_key(key: &str) -> String {
    key.trim().to_ascii_lowercase().replace('_', "-")
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|v| v.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

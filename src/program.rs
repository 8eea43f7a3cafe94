//! Program text: load, save, and iterate lines.

use std::path::Path;

use crate::errors::PendrawError;

/// An ordered list of command lines.
///
/// Lines are stored as [`Program::from_text`] would read them back: trailing
/// carriage returns are dropped on the way in, which the tokenizer ignores
/// anyway. A line must not contain `\n`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    lines: Vec<String>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    /// Split newline-delimited text into lines. `\r\n` endings are accepted.
    pub fn from_text(text: &str) -> Self {
        text.lines().collect()
    }

    /// One line per command, each terminated by `\n`.
    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity(self.lines.iter().map(|l| l.len() + 1).sum());
        for line in &self.lines {
            text.push_str(line);
            text.push('\n');
        }
        text
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, PendrawError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| PendrawError::ReadProgram {
            path: path.display().to_string(),
            source,
        })?;
        crate::log::debug!(path = %path.display(), "loaded program");
        Ok(Self::from_text(&text))
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PendrawError> {
        let path = path.as_ref();
        std::fs::write(path, self.to_text()).map_err(|source| PendrawError::WriteProgram {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(normalize(line.into()));
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }
}

fn normalize(mut line: String) -> String {
    let kept = line.trim_end_matches('\r').len();
    line.truncate(kept);
    line
}

impl<S: Into<String>> FromIterator<S> for Program {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().map(|line| normalize(line.into())).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for Program {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.lines
            .extend(iter.into_iter().map(|line| normalize(line.into())));
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

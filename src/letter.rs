/*!
 * Letters and the fixture letter source.
 *
 * A fixture is a `.txt` file whose first line is `<ROMAN>. <TITLE>` and
 * whose remaining lines are the letter content.
 */

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, error};
use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use crate::errors::LetterError;

/// Extension of fixture letter files
pub const FIXTURE_EXTENSION: &str = "txt";

/// A letter to translate. The translation core reads only `content`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Letter {
    /// Numeric value of `roman`
    pub number: u32,
    /// Roman numeral as written in the source
    pub roman: String,
    pub title: String,
    /// Full raw text
    pub content: String,
}

impl Letter {
    pub fn new(
        number: u32,
        roman: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            number,
            roman: roman.into(),
            title: title.into(),
            content: content.into(),
        }
    }

    /// Parse the fixture format: `<ROMAN>. <TITLE>` on the first line,
    /// content on the lines after it.
    pub fn parse_fixture(text: &str) -> Result<Self, LetterError> {
        if text.trim().is_empty() {
            return Err(LetterError::Empty("letter text has no content".to_string()));
        }

        let (title_line, rest) = text.split_once('\n').unwrap_or((text, ""));
        let title_line = title_line.trim();

        let (roman, title) = title_line
            .split_once('.')
            .ok_or_else(|| LetterError::InvalidTitle(title_line.to_string()))?;
        let roman = roman.trim();
        let number = roman_to_int(roman)?;

        Ok(Self::new(number, roman, title.trim(), rest.trim()))
    }

    /// Read and parse a fixture file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LetterError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LetterError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        if text.trim().is_empty() {
            return Err(LetterError::Empty(path.display().to_string()));
        }
        Self::parse_fixture(&text)
    }
}

/// Convert a Roman numeral to an integer.
///
/// Case-insensitive, with subtractive notation (`IV`, `XLIX`). The value is
/// accumulated right to left: a digit smaller than the largest seen so far
/// is subtracted. Any character outside `IVXLCDM` is an error, as is an
/// empty string.
pub fn roman_to_int(roman: &str) -> Result<u32, LetterError> {
    let invalid = |reason: String| LetterError::InvalidRoman {
        numeral: roman.to_string(),
        reason,
    };

    if roman.is_empty() {
        return Err(invalid("empty numeral".to_string()));
    }

    let mut result: u32 = 0;
    let mut prev_value = 0;

    for c in roman.chars().rev() {
        let value = match c.to_ascii_uppercase() {
            'I' => 1,
            'V' => 5,
            'X' => 10,
            'L' => 50,
            'C' => 100,
            'D' => 500,
            'M' => 1000,
            other => return Err(invalid(format!("invalid character '{}'", other))),
        };

        if value < prev_value {
            result = result.saturating_sub(value);
        } else {
            result += value;
            prev_value = value;
        }
    }

    Ok(result)
}

/// Loads letters from a directory of fixture files
#[derive(Debug, Clone)]
pub struct FixtureLetterSource {
    dir: PathBuf,
}

impl FixtureLetterSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Load every fixture in the directory, sorted by file name.
    ///
    /// Files that fail to parse are logged and skipped. Only an unreadable
    /// directory is an error.
    pub fn fetch_all_letters(&self) -> Result<Vec<Letter>, LetterError> {
        let mut letters = Vec::new();

        let walker = WalkDir::new(&self.dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();

        for entry in walker {
            let entry = entry.map_err(|e| LetterError::Io {
                path: self.dir.clone(),
                source: io::Error::from(e),
            })?;
            let path = entry.path();

            let is_fixture = path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case(FIXTURE_EXTENSION));
            if !is_fixture {
                continue;
            }

            match Letter::from_file(path) {
                Ok(letter) => {
                    debug!("Loaded letter {} from {}", letter.roman, path.display());
                    letters.push(letter);
                }
                Err(e) => error!("Error loading letter from {}: {}", path.display(), e),
            }
        }

        Ok(letters)
    }

    /// Load `<name>.txt`, or `None` when it does not exist.
    pub fn fetch_letter(&self, name: &str) -> Result<Option<Letter>, LetterError> {
        let path = self.dir.join(format!("{}.{}", name, FIXTURE_EXTENSION));
        if !path.exists() {
            return Ok(None);
        }
        Letter::from_file(&path).map(Some)
    }
}

//! Dictionary loading.
//!
//! Reads newline-delimited word lists. Every limit is explicit: a line longer
//! than `max_line_length` is either rejected or skipped with a warning, and a
//! list longer than `max_words` is rejected. Nothing is silently truncated.

mod error;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub use error::{DictionaryError, DictionaryResult};

/// What to do with a line longer than the configured maximum.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OverlongLinePolicy {
    /// Stop reading and report [`DictionaryError::LineTooLong`]
    #[default]
    Error,
    /// Log a warning and drop the line
    Skip,
}

/// Limits applied while reading a dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryOptions {
    /// Maximum line length in characters, newline excluded
    pub max_line_length: usize,

    /// Handling of lines over `max_line_length`
    pub overlong_lines: OverlongLinePolicy,

    /// Maximum number of words, `None` for no limit
    pub max_words: Option<usize>,

    /// Whether empty lines are dropped instead of read as the empty word
    pub skip_blank_lines: bool,
}

impl Default for DictionaryOptions {
    fn default() -> Self {
        Self {
            max_line_length: 100,
            overlong_lines: OverlongLinePolicy::Error,
            max_words: None,
            skip_blank_lines: true,
        }
    }
}

/// Words read from a dictionary source, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
    skipped_lines: usize,
}

impl Dictionary {
    /// The words in source order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Consumes the dictionary, returning its words.
    pub fn into_words(self) -> Vec<String> {
        self.words
    }

    /// Number of words read.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether no word was read.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of overlong lines dropped under [`OverlongLinePolicy::Skip`].
    pub fn skipped_lines(&self) -> usize {
        self.skipped_lines
    }
}

/// Reads word lists with a fixed set of [`DictionaryOptions`].
#[derive(Debug, Clone, Default)]
pub struct DictionaryReader {
    options: DictionaryOptions,
}

impl DictionaryReader {
    /// Creates a reader applying `options`.
    pub fn new(options: DictionaryOptions) -> Self {
        Self { options }
    }

    /// Returns the options of this reader.
    pub fn options(&self) -> &DictionaryOptions {
        &self.options
    }

    /// Reads the dictionary stored at `path`.
    ///
    /// # Errors
    ///
    /// * [`DictionaryError::Open`] if the file cannot be opened.
    /// * Any error of [`DictionaryReader::read`].
    pub fn read_file<P: AsRef<Path>>(&self, path: P) -> DictionaryResult<Dictionary> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DictionaryError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        self.read(BufReader::new(file), &path.display().to_string())
    }

    /// Reads one word per line from `reader`.
    ///
    /// Trailing `\n` and `\r\n` are stripped. `name` identifies the source in
    /// errors and logs.
    pub fn read<R: BufRead>(&self, reader: R, name: &str) -> DictionaryResult<Dictionary> {
        let mut dictionary = Dictionary::default();

        for (index, line) in reader.lines().enumerate() {
            let line_number = index + 1;
            let line = line.map_err(|error| DictionaryError::Read {
                name: name.to_string(),
                line: line_number,
                error,
            })?;

            if line.is_empty() && self.options.skip_blank_lines {
                continue;
            }

            let length = line.chars().count();
            if length > self.options.max_line_length {
                match self.options.overlong_lines {
                    OverlongLinePolicy::Error => {
                        return Err(DictionaryError::LineTooLong {
                            name: name.to_string(),
                            line: line_number,
                            length,
                            max_line_length: self.options.max_line_length,
                        })
                    }
                    OverlongLinePolicy::Skip => {
                        warn!(
                            dictionary = name,
                            line = line_number,
                            length,
                            max_line_length = self.options.max_line_length,
                            "Skipping overlong dictionary line"
                        );
                        dictionary.skipped_lines += 1;
                        continue;
                    }
                }
            }

            if let Some(max_words) = self.options.max_words {
                if dictionary.words.len() == max_words {
                    return Err(DictionaryError::TooManyWords {
                        name: name.to_string(),
                        max_words,
                    });
                }
            }

            dictionary.words.push(line);
        }

        debug!(
            dictionary = name,
            words = dictionary.words.len(),
            skipped = dictionary.skipped_lines,
            "Read dictionary"
        );
        Ok(dictionary)
    }
}

//! Occurrence reports.
//!
//! Looks up a list of words in a trie and renders one `"\t<word> : <count>"`
//! line per word.

use std::fmt::{Display, Formatter};
use std::io::{self, Write};
use std::path::Path;

use tracing::info;

use crate::config::HeluConfig;
use crate::data_structures::{HeluTrie, HeluTrieResult};
use crate::error::HeluResult;

/// Count of one looked-up word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    /// The word looked up
    pub word: String,
    /// Its occurrence count
    pub count: u64,
}

impl Display for ReportRow {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "\t{} : {}", self.word, self.count)
    }
}

/// Counts of a list of words, in query order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryReport {
    rows: Vec<ReportRow>,
}

impl QueryReport {
    /// Looks up every word of `words` in `trie`.
    ///
    /// Fails on the first word the trie rejects.
    pub fn run<I, W>(trie: &HeluTrie, words: I) -> HeluTrieResult<Self>
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let rows = words
            .into_iter()
            .map(|word| -> HeluTrieResult<ReportRow> {
                let word = word.as_ref();
                Ok(ReportRow {
                    word: word.to_string(),
                    count: trie.occurrences(word)?,
                })
            })
            .collect::<HeluTrieResult<Vec<_>>>()?;

        Ok(Self { rows })
    }

    /// The rows of this report.
    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    /// Writes one line per row to `out`.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for row in &self.rows {
            writeln!(out, "{row}")?;
        }
        out.flush()
    }
}

/// Reads `dictionary`, builds a trie, writes the report for `queries` to
/// `out` and destroys the trie.
///
/// An empty `queries` falls back to `config.query.words`.
///
/// # Returns
///
/// The report that was written.
pub fn run_report<W: Write>(
    config: &HeluConfig,
    dictionary: &Path,
    queries: &[String],
    out: &mut W,
) -> HeluResult<QueryReport> {
    let words = config.dictionary.reader().read_file(dictionary)?;
    info!(
        path = %dictionary.display(),
        words = words.len(),
        skipped = words.skipped_lines(),
        "Loaded dictionary"
    );

    let trie = HeluTrie::from_words((&config.trie).into(), words.words())?;
    info!(
        distinct_words = trie.len(),
        nodes = trie.node_count(),
        "Built trie"
    );

    let queries = if queries.is_empty() {
        config.query.words.as_slice()
    } else {
        queries
    };
    let report = QueryReport::run(&trie, queries)?;
    report.write_to(out)?;

    let released = trie.destroy();
    info!(released, "Released trie");
    Ok(report)
}

//! WordWizard analyzer core.
//!
//! Lexical statistics over an in-memory text:
//!
//! - [`analyzer`]: token extraction rules (words, numbers, capitalized, mixed)
//! - [`stats`]: counts, sorted vocabulary, frequency table
//! - [`matcher`]: ordered-subsequence search for letter sequences inside words
//! - [`query`]: validation of JSON query input
//! - [`Document`]: ties them together into an [`AnalysisResult`]
//!
//! Nothing here touches the file system or prints; tracing events are the
//! only side channel.
//!
//! ```
//! use wordwizard_core::Document;
//! use wordwizard_types::SequenceQuery;
//!
//! let doc = Document::from("cat dog concatenate");
//! let result = doc.analyze(&[SequenceQuery::new(["c", "a", "t"])]);
//!
//! assert_eq!(result.word_count, 3);
//! assert_eq!(result.pattern_matches.get("cat").map(<[_]>::len), Some(2));
//! ```

pub mod analyzer;
pub mod document;
pub mod matcher;
pub mod query;
pub mod stats;

pub use document::Document;
pub use matcher::{find_subsequence, match_sequences, CompiledQuery};
pub use query::{parse_queries, parse_query_document};
pub use stats::{
    capitalized_words, count_numbers, count_words, unique_sorted_words, word_frequency,
};
pub use wordwizard_types::{AnalysisResult, SequenceQuery};

//! Service layer containing the word-count pipeline and side-effect helpers.
//!
//! ## Service map
//! - `counter.rs` - tokenize raw text into a frequency table.
//! - `ranking.rs` - order a table by count and cut it to a display limit.
//! - `csv.rs` - serialize a full table as `word,count` rows.
//! - `retrieval.rs` - fetch a document over HTTP(S) or from disk.
//! - `chart.rs` - terminal bar chart renderer.
//! - `download.rs` - save an export blob under a filename.
//! - `config.rs` - config file loading and flag/file/default layering.
//! - `output.rs` - JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod chart;
pub mod config;
pub mod counter;
pub mod csv;
pub mod download;
pub mod output;
pub mod ranking;
pub mod retrieval;

//! Subvocab - Immersion vocabulary sets from YouTube subtitles
//!
//! Reads a list of YouTube video IDs, fetches each video's subtitles, asks an
//! LLM for vocabulary/translation pairs line by line, and writes the result as
//! linked JSONL record sets (resources, vocab, translations, notes).

pub mod cli;
pub mod config;
pub mod workflow;
pub mod input;
pub mod transcript;
pub mod extract;
pub mod records;
pub mod writer;
pub mod error;

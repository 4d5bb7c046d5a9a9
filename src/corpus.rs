// Corpus loading — read text sources into vocabularies.
//
// Each source (a file path, or `-` for stdin) is read into its own
// vocabulary, and the per-source vocabularies are then merged in order.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::vocabulary::Vocabulary;

/// Where a piece of text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl Source {
    /// `-` means stdin; anything else is a file path.
    pub fn parse(arg: &str) -> Self {
        if arg == "-" {
            Source::Stdin
        } else {
            Source::File(PathBuf::from(arg))
        }
    }

    /// Short name for display and error messages.
    pub fn name(&self) -> String {
        match self {
            Source::Stdin => "<stdin>".to_string(),
            Source::File(path) => path.display().to_string(),
        }
    }

    /// Read the whole source as text.
    ///
    /// Invalid UTF-8 (e.g. a Latin-1 file) is decoded lossily. Word tokens
    /// are ASCII, so replacement characters only ever end a word.
    pub fn read(&self) -> Result<String> {
        let bytes = match self {
            Source::Stdin => {
                let mut bytes = Vec::new();
                io::stdin()
                    .read_to_end(&mut bytes)
                    .context("Failed to read text from stdin")?;
                bytes
            }
            Source::File(path) => {
                fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?
            }
        };
        Ok(decode_lossy(bytes))
    }
}

/// Decode bytes as UTF-8, replacing invalid sequences with U+FFFD.
fn decode_lossy(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            let text = String::from_utf8_lossy(err.as_bytes()).into_owned();
            warn!(
                valid_up_to = err.utf8_error().valid_up_to(),
                "Input is not valid UTF-8, decoding lossily"
            );
            text
        }
    }
}

/// Build a vocabulary from the text of a single source.
///
/// With `strict`, a source that has text but no words is an error.
pub fn load_source(source: &Source, strict: bool) -> Result<Vocabulary> {
    let text = source.read()?;
    vocabulary_from_text(&text, strict).with_context(|| format!("In {}", source.name()))
}

/// Build a vocabulary from text, leniently or strictly.
pub fn vocabulary_from_text(text: &str, strict: bool) -> Result<Vocabulary> {
    let mut vocabulary = Vocabulary::new();
    if strict {
        vocabulary.try_add(text)?;
    } else {
        vocabulary.add(text);
    }
    Ok(vocabulary)
}

/// Build one vocabulary from several sources: one accumulator per source,
/// merged sequentially.
pub fn load_all(args: &[String], strict: bool) -> Result<Vocabulary> {
    if args.is_empty() {
        anyhow::bail!("No text sources given. Pass file paths, or `-` for stdin.");
    }

    let mut combined = Vocabulary::new();
    for arg in args {
        let source = Source::parse(arg);
        let vocabulary = load_source(&source, strict)?;
        debug!(
            source = %source.name(),
            words = vocabulary.len(),
            "Loaded source"
        );
        combined.merge_from(&vocabulary);
    }

    info!(
        sources = args.len(),
        words = combined.len(),
        max = combined.max(),
        "Built vocabulary"
    );

    Ok(combined)
}

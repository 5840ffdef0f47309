//! Code → label metadata extracted from dataset README text.
//!
//! The yearly datasets identify their variables by numeric codes; each
//! year's README lists the human-readable meaning as `NNN = Label` lines
//! mixed into prose. The [`CodeBook`] collects those pairs for downstream
//! renderers. The analytics engine itself never consults it.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static CODE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*=\s*(.+)").expect("code-line pattern is valid"));

/// Mapping from variable code to display label.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CodeBook {
    labels: HashMap<String, String>,
}

impl CodeBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extracts every `NNN = Label` pair from free-form README text.
    /// Lines that do not match the pattern are ignored.
    pub fn parse(text: &str) -> Self {
        let mut labels = HashMap::new();
        for caps in CODE_LINE.captures_iter(text) {
            labels.insert(caps[1].to_owned(), caps[2].trim().to_owned());
        }
        Self { labels }
    }

    /// Merges another code book into this one; later entries win.
    pub fn merge(&mut self, other: Self) {
        self.labels.extend(other.labels);
    }

    pub fn insert(&mut self, code: impl Into<String>, label: impl Into<String>) {
        self.labels.insert(code.into(), label.into());
    }

    pub fn label_for(&self, code: &str) -> Option<&str> {
        self.labels.get(code).map(String::as_str)
    }

    /// The label for `code`, or the code itself when no label is known.
    pub fn display_name(&self, code: &str) -> String {
        self.label_for(code).unwrap_or(code).to_owned()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.labels
            .iter()
            .map(|(code, label)| (code.as_str(), label.as_str()))
    }
}

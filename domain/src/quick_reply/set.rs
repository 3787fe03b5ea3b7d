//! Quick reply set value object

use serde::{Deserialize, Serialize};

/// Ordered suggestion strings supplied with a single bot turn (Value Object).
///
/// Blank labels are dropped and the remaining labels are trimmed, so every
/// entry can be resubmitted as a user message as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct QuickReplySet {
    labels: Vec<String>,
}

impl QuickReplySet {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels = labels
            .into_iter()
            .map(Into::into)
            .filter_map(|label| {
                let trimmed = label.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            })
            .collect();
        Self { labels }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl From<Vec<String>> for QuickReplySet {
    fn from(labels: Vec<String>) -> Self {
        Self::new(labels)
    }
}

impl From<QuickReplySet> for Vec<String> {
    fn from(set: QuickReplySet) -> Self {
        set.labels
    }
}

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Ordered category labels defining the shared X domain of one chart.
///
/// Labels keep their insertion order and must be unique; every aligned series
/// maps 1:1 onto this sequence, and scatter samples resolve their label to a
/// positional index here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryAxis {
    labels: IndexSet<String>,
}

impl CategoryAxis {
    pub fn new<I, S>(labels: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = IndexSet::new();
        for label in labels {
            let label = label.into();
            if label.is_empty() {
                return Err(CoreError::Validation(
                    "category label must not be empty".to_owned(),
                ));
            }
            if !set.insert(label.clone()) {
                return Err(CoreError::Validation(format!(
                    "duplicate category label `{label}`"
                )));
            }
        }
        Ok(Self { labels: set })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    #[must_use]
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.labels.get_index_of(label)
    }

    #[must_use]
    pub fn label_at(&self, index: usize) -> Option<&str> {
        self.labels.get_index(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }
}

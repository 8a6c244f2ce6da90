//! Bounded, newest-first draw history.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// One completed draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawRecord {
    pub value: i64,
    /// Epoch milliseconds.
    pub timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prize_name: Option<String>,
}

impl DrawRecord {
    pub fn new(value: i64, timestamp: i64) -> Self {
        Self {
            value,
            timestamp,
            prize_name: None,
        }
    }

    pub fn for_prize(value: i64, timestamp: i64, prize_name: impl Into<String>) -> Self {
        Self {
            value,
            timestamp,
            prize_name: Some(prize_name.into()),
        }
    }
}

/// Draw records, most recent first.
///
/// Every operation returns a new log; the receiver is never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryLog {
    records: Vec<DrawRecord>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend `record`. A positive `limit` keeps only that many of the most
    /// recent records; `None`, zero and negative limits keep everything.
    pub fn append(&self, record: DrawRecord, limit: Option<i64>) -> Self {
        let mut records = Vec::with_capacity(self.records.len() + 1);
        records.push(record);
        records.extend(self.records.iter().cloned());

        if let Some(limit) = limit.filter(|l| *l > 0) {
            let keep = usize::try_from(limit).unwrap_or(usize::MAX);
            if records.len() > keep {
                tracing::debug!(
                    dropped = records.len() - keep,
                    limit,
                    "Evicting oldest history records"
                );
                records.truncate(keep);
            }
        }

        Self { records }
    }

    pub fn clear(&self) -> Self {
        Self::new()
    }

    /// Records attributed to `prize_name` (exact, case-sensitive).
    pub fn consumed_count(&self, prize_name: &str) -> usize {
        self.records
            .iter()
            .filter(|r| r.prize_name.as_deref() == Some(prize_name))
            .count()
    }

    /// Every value still held by the log.
    pub fn values(&self) -> HashSet<i64> {
        self.records.iter().map(|r| r.value).collect()
    }

    pub fn latest(&self) -> Option<&DrawRecord> {
        self.records.first()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DrawRecord> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[DrawRecord] {
        &self.records
    }
}

impl From<Vec<DrawRecord>> for HistoryLog {
    /// Takes records already ordered newest first.
    fn from(records: Vec<DrawRecord>) -> Self {
        Self { records }
    }
}

impl<'a> IntoIterator for &'a HistoryLog {
    type Item = &'a DrawRecord;
    type IntoIter = std::slice::Iter<'a, DrawRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

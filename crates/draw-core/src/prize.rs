//! Named prize buckets and the list operations the settings screen performs.

use serde::{Deserialize, Serialize};

use crate::error::DrawError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prize {
    pub id: String,
    /// Display label, also the key draw records are attributed by.
    pub name: String,
    pub capacity: u32,
}

impl Prize {
    pub fn new(id: impl Into<String>, name: &str, capacity: u32) -> Result<Self, DrawError> {
        Ok(Self {
            id: id.into(),
            name: clean_name(name)?,
            capacity,
        })
    }
}

/// Capacity as typed into a number field: floored, negatives and NaN become zero.
pub fn normalize_capacity(raw: f64) -> u32 {
    if raw.is_nan() || raw <= 0.0 {
        return 0;
    }
    raw.floor().min(f64::from(u32::MAX)) as u32
}

fn clean_name(name: &str) -> Result<String, DrawError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(DrawError::EmptyPrizeName);
    }
    Ok(name.to_string())
}

/// Prizes in display order, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrizeList {
    prizes: Vec<Prize>,
}

impl PrizeList {
    pub fn new() -> Self {
        Self::default()
    }

    /// New list with `prize` placed first.
    pub fn with_added(&self, prize: Prize) -> Self {
        let mut prizes = Vec::with_capacity(self.prizes.len() + 1);
        prizes.push(prize);
        prizes.extend(self.prizes.iter().cloned());
        Self { prizes }
    }

    pub fn with_renamed(&self, id: &str, name: &str) -> Result<Self, DrawError> {
        let name = clean_name(name)?;
        self.with_patched(id, |p| p.name = name)
    }

    pub fn with_capacity(&self, id: &str, capacity: u32) -> Result<Self, DrawError> {
        self.with_patched(id, |p| p.capacity = capacity)
    }

    pub fn without(&self, id: &str) -> Result<Self, DrawError> {
        self.find(id)
            .ok_or_else(|| DrawError::PrizeNotFound(id.to_string()))?;
        Ok(Self {
            prizes: self.prizes.iter().filter(|p| p.id != id).cloned().collect(),
        })
    }

    pub fn find(&self, id: &str) -> Option<&Prize> {
        self.prizes.iter().find(|p| p.id == id)
    }

    /// Resolve by id first, then by exact name.
    pub fn resolve(&self, id_or_name: &str) -> Option<&Prize> {
        self.find(id_or_name)
            .or_else(|| self.prizes.iter().find(|p| p.name == id_or_name))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Prize> {
        self.prizes.iter()
    }

    pub fn len(&self) -> usize {
        self.prizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prizes.is_empty()
    }

    fn with_patched(&self, id: &str, patch: impl FnOnce(&mut Prize)) -> Result<Self, DrawError> {
        let mut prizes = self.prizes.clone();
        let target = prizes
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| DrawError::PrizeNotFound(id.to_string()))?;
        patch(target);
        Ok(Self { prizes })
    }
}

impl From<Vec<Prize>> for PrizeList {
    fn from(prizes: Vec<Prize>) -> Self {
        Self { prizes }
    }
}

impl<'a> IntoIterator for &'a PrizeList {
    type Item = &'a Prize;
    type IntoIter = std::slice::Iter<'a, Prize>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

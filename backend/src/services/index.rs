//! Name-keyed lookup indexes used to join independently fetched row sets

use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Index from key to the first row carrying that key.
///
/// Later rows with an already indexed key are ignored and counted as
/// duplicates; rows without a key are skipped.
#[derive(Debug)]
pub struct FirstMatchIndex<'a, T> {
    entries: HashMap<&'a str, &'a T>,
    duplicates: usize,
}

impl<'a, T> FirstMatchIndex<'a, T> {
    pub fn build<F>(rows: &'a [T], key: F) -> Self
    where
        F: Fn(&'a T) -> Option<&'a str>,
    {
        let mut entries = HashMap::with_capacity(rows.len());
        let mut duplicates = 0;

        for row in rows {
            let Some(k) = key(row) else { continue };
            match entries.entry(k) {
                Entry::Vacant(slot) => {
                    slot.insert(row);
                }
                Entry::Occupied(_) => duplicates += 1,
            }
        }

        Self {
            entries,
            duplicates,
        }
    }

    pub fn get(&self, key: &str) -> Option<&'a T> {
        self.entries.get(key).copied()
    }

    /// Rows ignored because their key was already indexed
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Index from key to every row carrying that key, in row order
#[derive(Debug)]
pub struct GroupIndex<'a, T> {
    groups: HashMap<&'a str, Vec<&'a T>>,
}

impl<'a, T> GroupIndex<'a, T> {
    pub fn build<F>(rows: &'a [T], key: F) -> Self
    where
        F: Fn(&'a T) -> Option<&'a str>,
    {
        let mut groups: HashMap<&'a str, Vec<&'a T>> = HashMap::new();
        for row in rows {
            if let Some(k) = key(row) {
                groups.entry(k).or_default().push(row);
            }
        }
        Self { groups }
    }

    pub fn get(&self, key: &str) -> &[&'a T] {
        self.groups.get(key).map(Vec::as_slice).unwrap_or(&[])
    }
}

use ahash::AHashMap;

/// Occurrence counter that remembers the order keys were first seen.
///
/// `top` relies on that order to break ties: of two keys with the same
/// count, the one seen first ranks first.
#[derive(Debug, Clone, Default)]
pub struct Counter {
    index: AHashMap<String, usize>,
    entries: Vec<(String, u64)>,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, key: &str) {
        if let Some(&i) = self.index.get(key) {
            self.entries[i].1 += 1;
            return;
        }

        self.index.insert(key.to_string(), self.entries.len());
        self.entries.push((key.to_string(), 1));
    }

    /// The `n` highest counts, descending, ties in first-seen order.
    pub fn top(&self, n: usize) -> Vec<(&str, u64)> {
        let mut ranked: Vec<(&str, u64)> = self
            .entries
            .iter()
            .map(|(key, count)| (key.as_str(), *count))
            .collect();

        // sort_by is stable, so equal counts keep insertion order.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}

//! Named counters for controller diagnostics

use std::collections::HashMap;

pub struct Counter {
    counters: HashMap<&'static str, usize>,
}

impl Counter {
    pub fn new() -> Self {
        Self {
            counters: HashMap::new(),
        }
    }

    pub fn increment(&mut self, name: &'static str, value: usize) {
        *self.counters.entry(name).or_insert(0) += value;
    }

    pub fn set(&mut self, name: &'static str, value: usize) {
        self.counters.insert(name, value);
    }

    pub fn get(&self, name: &str) -> usize {
        self.counters.get(name).copied().unwrap_or(0)
    }

    pub fn reset(&mut self, name: &'static str) {
        self.counters.insert(name, 0);
    }

    pub fn reset_all(&mut self) {
        self.counters.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, usize)> + '_ {
        self.counters.iter().map(|(&name, &value)| (name, value))
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_per_name() {
        let mut counter = Counter::new();
        counter.increment("decrease", 1);
        counter.increment("decrease", 2);
        counter.set("hold", 7);

        assert_eq!(counter.get("decrease"), 3);
        assert_eq!(counter.get("hold"), 7);
        assert_eq!(counter.get("increase"), 0);

        counter.reset("hold");
        assert_eq!(counter.get("hold"), 0);

        counter.reset_all();
        assert_eq!(counter.iter().count(), 0);
    }
}

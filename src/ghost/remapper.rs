use std::collections::HashMap;

/// Maps original read names to short sequential surrogates.
///
/// Surrogates are the decimal rendering of a counter starting at 0, handed out
/// in order of first appearance. The table lives for a single run and is never
/// pruned, so memory grows with the number of distinct read names in the input
/// (O(distinct identifiers)).
#[derive(Debug, Default)]
pub struct IdentifierRemapper {
    surrogates: HashMap<Vec<u8>, String>,
    next: u64,
}

impl IdentifierRemapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the surrogate for `original`, assigning the next one on first sight.
    pub fn surrogate_for(&mut self, original: &[u8]) -> &str {
        if !self.surrogates.contains_key(original) {
            let surrogate = self.next.to_string();
            self.next += 1;
            self.surrogates.insert(original.to_vec(), surrogate);
        }
        &self.surrogates[original]
    }

    /// Number of distinct identifiers seen so far.
    pub fn len(&self) -> usize {
        self.surrogates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surrogates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assigns_in_first_seen_order() {
        let mut remapper = IdentifierRemapper::new();
        assert_eq!(remapper.surrogate_for(b"readA"), "0");
        assert_eq!(remapper.surrogate_for(b"readB"), "1");
        assert_eq!(remapper.surrogate_for(b"readA"), "0");
        assert_eq!(remapper.surrogate_for(b"readC"), "2");
        assert_eq!(remapper.len(), 3);
    }

    #[test]
    fn distinct_names_get_distinct_surrogates() {
        let mut remapper = IdentifierRemapper::new();
        let names: Vec<String> = (0..500).map(|i| format!("SRR000{}.{}", i % 250, i)).collect();
        let mut seen = std::collections::HashSet::new();
        for name in &names {
            seen.insert(remapper.surrogate_for(name.as_bytes()).to_owned());
        }
        assert_eq!(seen.len(), names.len());
        assert_eq!(remapper.len(), names.len());
    }

    #[test]
    fn empty_and_odd_names_are_valid() {
        let mut remapper = IdentifierRemapper::new();
        assert!(remapper.is_empty());
        assert_eq!(remapper.surrogate_for(b""), "0");
        assert_eq!(remapper.surrogate_for(&[0xff, 0x00, b'*']), "1");
        assert_eq!(remapper.surrogate_for(b""), "0");
    }
}

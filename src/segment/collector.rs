/// Ordered accumulator for accepted segments.
///
/// Items are owned copies, kept in arrival order with no deduplication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenCollector<T> {
    tokens: Vec<T>,
}

impl<T> TokenCollector<T> {
    pub fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    pub fn push(&mut self, token: T) {
        self.tokens.push(token);
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn finish(self) -> Vec<T> {
        self.tokens
    }
}

impl<T> Default for TokenCollector<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collector_keeps_arrival_order_and_duplicates() {
        let mut collector = TokenCollector::new();
        collector.push("b".to_string());
        collector.push("a".to_string());
        collector.push("b".to_string());
        assert_eq!(collector.len(), 3);
        assert_eq!(collector.finish(), vec!["b", "a", "b"]);
    }

    #[test]
    fn test_empty_collector() {
        let collector: TokenCollector<String> = TokenCollector::default();
        assert!(collector.is_empty());
        assert!(collector.finish().is_empty());
    }
}

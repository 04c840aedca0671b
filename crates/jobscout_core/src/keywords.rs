/// Ordered list of search keywords. Duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeywordList {
    items: Vec<String>,
}

impl KeywordList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the trimmed `draft`. Returns `false` and leaves the list alone
    /// when nothing but whitespace was entered.
    pub fn add(&mut self, draft: &str) -> bool {
        let keyword = draft.trim();
        if keyword.is_empty() {
            return false;
        }
        self.items.push(keyword.to_owned());
        true
    }

    /// Removes every entry equal to `keyword` and returns how many were dropped.
    pub fn remove(&mut self, keyword: &str) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item != keyword);
        before - self.items.len()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.items.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_keeps_insertion_order_and_duplicates() {
        let mut list = KeywordList::new();
        assert!(list.add("rust"));
        assert!(list.add("remote"));
        assert!(list.add("rust"));
        assert_eq!(list.as_slice(), ["rust", "remote", "rust"]);
    }

    #[test]
    fn remove_reports_dropped_count() {
        let mut list = KeywordList::new();
        list.add("a");
        list.add("b");
        list.add("a");
        assert_eq!(list.remove("a"), 2);
        assert_eq!(list.remove("missing"), 0);
        assert_eq!(list.as_slice(), ["b"]);
    }
}

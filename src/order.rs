//! Custom page ordering.
//!
//! Wikis have a handful of pages that belong at the top of the sidebar
//! (`Home`, the install guides) and a long tail that does not. A
//! [`PageOrder`] lists the titles that should come first, in order; every
//! other page follows them in scan order.
//!
//! ```text
//! order:    [B, A]
//! scanned:  [A, C, B]
//! result:   [B, A, C]
//! ```
//!
//! Titles must match exactly (case-sensitive, no extension).

use serde::{Deserialize, Serialize};

/// Ordered list of titles that are pinned to the top of the site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageOrder {
    titles: Vec<String>,
}

impl PageOrder {
    pub fn new<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            titles: titles.into_iter().map(Into::into).collect(),
        }
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    /// Sort rank of `title`: its position in the list, or the list length for
    /// titles that are not listed (so they sort after all listed ones).
    pub fn rank(&self, title: &str) -> usize {
        self.titles
            .iter()
            .position(|t| t == title)
            .unwrap_or(self.titles.len())
    }

    /// Stable-sort `items` by the rank of the title `key` extracts.
    pub fn sort_by_title<T>(&self, items: &mut [T], key: impl Fn(&T) -> &str) {
        items.sort_by_key(|item| self.rank(key(item)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(order: &PageOrder, titles: &[&str]) -> Vec<String> {
        let mut items: Vec<String> = titles.iter().map(|t| t.to_string()).collect();
        order.sort_by_title(&mut items, |t| t.as_str());
        items
    }

    #[test]
    fn listed_titles_come_first_in_list_order() {
        let order = PageOrder::new(["B", "A"]);
        assert_eq!(sorted(&order, &["A", "C", "B"]), vec!["B", "A", "C"]);
    }

    #[test]
    fn unlisted_titles_keep_scan_order() {
        let order = PageOrder::new(["Home"]);
        assert_eq!(
            sorted(&order, &["Zeta", "Alpha", "Home", "Mid"]),
            vec!["Home", "Zeta", "Alpha", "Mid"]
        );
    }

    #[test]
    fn rank_of_unlisted_title_is_list_length() {
        let order = PageOrder::new(["Home", "Install"]);
        assert_eq!(order.rank("Home"), 0);
        assert_eq!(order.rank("Install"), 1);
        assert_eq!(order.rank("Other"), 2);
    }

    #[test]
    fn matching_is_exact() {
        let order = PageOrder::new(["Home"]);
        assert_eq!(order.rank("home"), 1);
        assert_eq!(order.rank("Home.md"), 1);
    }

    #[test]
    fn empty_order_keeps_scan_order() {
        let order = PageOrder::default();
        assert_eq!(sorted(&order, &["b", "a", "c"]), vec!["b", "a", "c"]);
    }

    #[test]
    fn listed_but_missing_titles_are_ignored() {
        let order = PageOrder::new(["Missing", "A"]);
        assert_eq!(sorted(&order, &["C", "A"]), vec!["A", "C"]);
    }

    #[test]
    fn deserializes_from_plain_list() {
        let order: PageOrder = serde_json::from_str(r#"["Home","Install"]"#).unwrap();
        assert_eq!(order.titles(), ["Home", "Install"]);
    }
}

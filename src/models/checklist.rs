use crate::util::progress_store::{count, summary, Progress};

/// An item that can appear in a checklist.
pub trait ItemKey {
    /// Text shown next to the checkbox.
    fn label(&self) -> &str;
    /// Key under which the flag is stored on disk.
    fn storage_key(&self) -> String;
}

impl ItemKey for String {
    fn label(&self) -> &str { self }
    fn storage_key(&self) -> String { self.clone() }
}

/// Ordered catalog items plus their collected flags.
///
/// Item order is the catalog order and never changes; filtering only
/// decides which indices are visible.
#[derive(Debug, Clone)]
pub struct Checklist<K> {
    items: Vec<K>,
    flags: Vec<bool>,
}

impl<K: ItemKey> Checklist<K> {
    /// Build from a catalog, taking flags from `progress`. Keys absent
    /// from `progress` are not collected.
    pub fn from_progress(items: Vec<K>, progress: &Progress) -> Self {
        let flags = items
            .iter()
            .map(|item| progress.get(&item.storage_key()).copied().unwrap_or(false))
            .collect();
        Self { items, flags }
    }

    pub fn empty() -> Self {
        Self { items: Vec::new(), flags: Vec::new() }
    }

    pub fn len(&self) -> usize { self.items.len() }
    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    pub fn item(&self, idx: usize) -> Option<&K> { self.items.get(idx) }

    pub fn is_collected(&self, idx: usize) -> bool {
        self.flags.get(idx).copied().unwrap_or(false)
    }

    /// Returns false when `idx` is out of range.
    pub fn set(&mut self, idx: usize, collected: bool) -> bool {
        match self.flags.get_mut(idx) {
            Some(flag) => { *flag = collected; true }
            None => false,
        }
    }

    pub fn position(&self, label: &str) -> Option<usize> {
        self.items.iter().position(|item| item.label() == label)
    }

    pub fn clear(&mut self) {
        self.flags.iter_mut().for_each(|f| *f = false);
    }

    /// Indices of visible items, in catalog order.
    pub fn visible(&self, show_uncollected_only: bool) -> Vec<usize> {
        self.flags
            .iter()
            .enumerate()
            .filter_map(|(i, &collected)| (!show_uncollected_only || !collected).then_some(i))
            .collect()
    }

    /// Storage key → flag for every item, including uncollected ones.
    pub fn view(&self) -> Progress {
        self.items
            .iter()
            .zip(&self.flags)
            .map(|(item, &flag)| (item.storage_key(), flag))
            .collect()
    }

    pub fn collected(&self) -> usize {
        count(&self.view())
    }

    /// `"<collected> / <len>"`
    pub fn summary(&self) -> String {
        summary(self.collected(), self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn absent_keys_default_to_uncollected() {
        let mut progress = Progress::new();
        progress.insert("b".into(), true);
        progress.insert("stale".into(), true);

        let list = Checklist::from_progress(names(&["a", "b", "c"]), &progress);
        assert!(!list.is_collected(0));
        assert!(list.is_collected(1));
        assert!(!list.is_collected(2));
        // stale store keys do not count toward the view
        assert_eq!(list.collected(), 1);
        assert_eq!(list.summary(), "1 / 3");
    }

    #[test]
    fn filter_keeps_catalog_order() {
        let mut list = Checklist::from_progress(names(&["a", "b", "c", "d", "e"]), &Progress::new());
        list.set(1, true);
        list.set(3, true);

        assert_eq!(list.visible(false), vec![0, 1, 2, 3, 4]);
        assert_eq!(list.visible(true), vec![0, 2, 4]);
    }

    #[test]
    fn filter_matches_uncollected_set_for_every_assignment() {
        let items = names(&["a", "b", "c", "d"]);
        for mask in 0u8..16 {
            let mut list = Checklist::from_progress(items.clone(), &Progress::new());
            for i in 0..4 {
                list.set(i, mask & (1 << i) != 0);
            }
            let expected: Vec<usize> = (0..4).filter(|i| mask & (1 << i) == 0).collect();
            assert_eq!(list.visible(true), expected, "mask {:04b}", mask);
            assert!(list.collected() <= list.view().len());
        }
    }

    #[test]
    fn view_includes_false_flags() {
        let mut list = Checklist::from_progress(names(&["a", "b"]), &Progress::new());
        list.set(0, true);
        let view = list.view();
        assert_eq!(view.get("a"), Some(&true));
        assert_eq!(view.get("b"), Some(&false));
    }

    #[test]
    fn set_out_of_range_is_rejected() {
        let mut list = Checklist::from_progress(names(&["a"]), &Progress::new());
        assert!(!list.set(5, true));
        assert_eq!(list.collected(), 0);
        assert_eq!(list.position("a"), Some(0));
        assert_eq!(list.position("zz"), None);
    }
}

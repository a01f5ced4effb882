//! The immutable practice catalog and its derived summary.

use cmt_core::{Level, Practice};

/// An ordered, immutable collection of practices: every loaded dataset
/// concatenated in load order. Built once at startup; reloading means
/// building a fresh catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    practices: Vec<Practice>,
}

impl Catalog {
    /// Wrap an already-ordered list of practices.
    pub fn new(practices: Vec<Practice>) -> Self {
        Self { practices }
    }

    /// All practices, in load order.
    pub fn practices(&self) -> &[Practice] {
        &self.practices
    }

    /// Number of practices.
    pub fn len(&self) -> usize {
        self.practices.len()
    }

    /// Whether the catalog is empty (all sources failed, or none given).
    pub fn is_empty(&self) -> bool {
        self.practices.is_empty()
    }

    /// Iterate over practices in load order.
    pub fn iter(&self) -> impl Iterator<Item = &Practice> {
        self.practices.iter()
    }

    /// First practice with the given id, if any. Ids are unique within a
    /// level's dataset but the same id may appear at both levels; this
    /// returns the earliest loaded, matching how assessments key on ids.
    pub fn find(&self, id: &str) -> Option<&Practice> {
        self.practices.iter().find(|p| p.id == id)
    }

    /// Sorted, deduplicated list of non-blank domains, for filter menus.
    pub fn domains(&self) -> Vec<String> {
        let mut domains: Vec<String> = self
            .practices
            .iter()
            .map(|p| p.domain.clone())
            .filter(|d| !d.is_empty())
            .collect();
        domains.sort();
        domains.dedup();
        domains
    }

    /// Headline counts for the stats bar.
    pub fn summary(&self) -> CatalogSummary {
        CatalogSummary {
            total: self.practices.len(),
            level1: self
                .practices
                .iter()
                .filter(|p| p.level == Level::L1)
                .count(),
            level2: self
                .practices
                .iter()
                .filter(|p| p.level == Level::L2)
                .count(),
            domains: self.domains().len(),
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Practice;
    type IntoIter = std::slice::Iter<'a, Practice>;

    fn into_iter(self) -> Self::IntoIter {
        self.practices.iter()
    }
}

/// Headline catalog counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogSummary {
    /// Total number of practices.
    pub total: usize,
    /// Number of L1 practices.
    pub level1: usize,
    /// Number of L2 practices.
    pub level2: usize,
    /// Number of distinct non-blank domains.
    pub domains: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn practice(id: &str, domain: &str, level: Level) -> Practice {
        Practice {
            id: id.into(),
            domain: domain.into(),
            name: String::new(),
            description: String::new(),
            source: String::new(),
            level,
        }
    }

    #[test]
    fn summary_counts_levels_and_domains() {
        let catalog = Catalog::new(vec![
            practice("AC.L1-3.1.1", "Access Control", Level::L1),
            practice("AC.L2-3.1.3", "Access Control", Level::L2),
            practice("IA.L1-3.5.1", "Identification & Authentication", Level::L1),
        ]);
        let summary = catalog.summary();
        assert_eq!(summary.total, 3);
        assert_eq!(summary.level1, 2);
        assert_eq!(summary.level2, 1);
        assert_eq!(summary.domains, 2);
    }

    #[test]
    fn domains_are_sorted_unique_and_non_blank() {
        let catalog = Catalog::new(vec![
            practice("b", "Media Protection", Level::L1),
            practice("a", "Access Control", Level::L1),
            practice("c", "", Level::L2),
            practice("d", "Access Control", Level::L2),
        ]);
        assert_eq!(catalog.domains(), vec!["Access Control", "Media Protection"]);
    }

    #[test]
    fn find_returns_earliest_loaded_match() {
        let catalog = Catalog::new(vec![
            practice("AC.1", "First", Level::L1),
            practice("AC.1", "Second", Level::L2),
        ]);
        assert_eq!(catalog.find("AC.1").unwrap().domain, "First");
        assert!(catalog.find("missing").is_none());
    }

    #[test]
    fn empty_catalog_summary_is_all_zero() {
        let summary = Catalog::default().summary();
        assert_eq!(summary.total, 0);
        assert_eq!(summary.domains, 0);
    }
}

//! Read-only lookups over a fetched [`Product`].

use crate::models::{Edition, EditionRef, Feature, Product, Screenshot};

// ---------------------------------------------------------------------------
// DanglingRef
// ---------------------------------------------------------------------------

/// A feature-edition reference whose edition is missing from the product.
#[derive(Debug, Clone, PartialEq)]
pub struct DanglingRef<'a> {
    pub feature_id: &'a str,
    pub edition: &'a EditionRef,
}

// ---------------------------------------------------------------------------
// ProductQuery
// ---------------------------------------------------------------------------

/// Query interface over a product's editions, features and screenshots.
///
/// Lookups are linear scans; documents hold a handful of editions and a few
/// dozen features.
pub struct ProductQuery<'a> {
    product: &'a Product,
}

impl<'a> ProductQuery<'a> {
    /// Create a new `ProductQuery` bound to the given product.
    pub fn new(product: &'a Product) -> Self {
        Self { product }
    }

    pub fn editions(&self) -> &'a [Edition] {
        &self.product.editions.items
    }

    /// Get a single edition by id.
    pub fn edition(&self, id: &str) -> Option<&'a Edition> {
        self.editions().iter().find(|e| e.id == id)
    }

    pub fn features(&self) -> &'a [Feature] {
        &self.product.features.items
    }

    pub fn active_features(&self) -> Vec<&'a Feature> {
        self.features().iter().filter(|f| f.active).collect()
    }

    /// Get a single feature by id.
    pub fn feature(&self, id: &str) -> Option<&'a Feature> {
        self.features().iter().find(|f| f.id == id)
    }

    /// Features that reference the given edition, in document order.
    pub fn features_for_edition(&self, edition_id: &str) -> Vec<&'a Feature> {
        self.features()
            .iter()
            .filter(|f| f.in_edition(edition_id))
            .collect()
    }

    /// Editions a feature belongs to, resolved against the product's edition
    /// list. References to unknown editions are skipped; an unknown feature
    /// yields an empty list.
    pub fn editions_for_feature(&self, feature_id: &str) -> Vec<&'a Edition> {
        match self.feature(feature_id) {
            Some(feature) => feature
                .edition_ids()
                .filter_map(|id| self.edition(id))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Screenshots recorded for a feature, or `None` if the feature is unknown.
    pub fn screenshots(&self, feature_id: &str) -> Option<&'a [Screenshot]> {
        self.feature(feature_id)
            .map(|f| f.screenshots.items.as_slice())
    }

    /// Features flagged for screenshot capture.
    pub fn screenshot_candidates(&self) -> Vec<&'a Feature> {
        self.features()
            .iter()
            .filter(|f| f.wants_screenshot())
            .collect()
    }

    /// Feature-edition references that point at no edition of this product.
    ///
    /// Reported only; documents with dangling references are still accepted.
    pub fn dangling_edition_refs(&self) -> Vec<DanglingRef<'a>> {
        self.features()
            .iter()
            .flat_map(|f| {
                f.feature_editions.iter().map(move |fe| DanglingRef {
                    feature_id: f.id.as_str(),
                    edition: &fe.edition,
                })
            })
            .filter(|r| self.edition(&r.edition.id).is_none())
            .collect()
    }
}

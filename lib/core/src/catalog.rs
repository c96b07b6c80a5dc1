use crate::{Error, Filter, Product, Result};
use ahash::{AHashMap, AHashSet};
use serde::Serialize;
use std::collections::BTreeMap;

/// Number of products in one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Aggregate counts over the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub products: usize,
    pub categories: usize,
    pub brands: usize,
}

/// Ordered, read-only store of products
///
/// A product's index in this store is its identifier everywhere else:
/// term vectors and similarity rows use the same positions.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    // category -> member indices, ascending
    by_category: AHashMap<String, Vec<usize>>,
}

impl Catalog {
    /// Build a catalog, rejecting products with a blank description.
    pub fn new(products: Vec<Product>) -> Result<Self> {
        if let Some(row) = products
            .iter()
            .position(|p| p.description.trim().is_empty())
        {
            return Err(Error::InvalidRecord {
                row,
                message: "description must not be empty".to_string(),
            });
        }

        let mut by_category: AHashMap<String, Vec<usize>> = AHashMap::new();
        for (idx, product) in products.iter().enumerate() {
            by_category
                .entry(product.category.clone())
                .or_default()
                .push(idx);
        }

        Ok(Self {
            products,
            by_category,
        })
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    #[inline]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Get a product by index
    pub fn get(&self, index: usize) -> Result<&Product> {
        self.products.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.products.len(),
        })
    }

    pub fn descriptions(&self) -> Vec<&str> {
        self.products.iter().map(|p| p.description.as_str()).collect()
    }

    /// Indices of every product in `category`, in catalog order
    pub fn category_members(&self, category: &str) -> &[usize] {
        self.by_category
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Indices of products matching `filter`, in catalog order
    pub fn search(&self, filter: &dyn Filter) -> Vec<usize> {
        self.products
            .iter()
            .enumerate()
            .filter(|(_, p)| filter.matches(p))
            .map(|(idx, _)| idx)
            .collect()
    }

    /// First product whose name is exactly `name`
    pub fn find_by_name(&self, name: &str) -> Option<usize> {
        self.products.iter().position(|p| p.name == name)
    }

    /// Distinct categories sorted by name
    pub fn categories(&self) -> Vec<CategoryCount> {
        let sorted: BTreeMap<&str, usize> = self
            .by_category
            .iter()
            .map(|(category, members)| (category.as_str(), members.len()))
            .collect();
        sorted
            .into_iter()
            .map(|(category, count)| CategoryCount {
                category: category.to_string(),
                count,
            })
            .collect()
    }

    pub fn stats(&self) -> CatalogStats {
        let brands: AHashSet<&str> = self
            .products
            .iter()
            .filter_map(|p| p.brand.as_deref())
            .collect();
        CatalogStats {
            products: self.products.len(),
            categories: self.by_category.len(),
            brands: brands.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProductFilter;

    fn sample() -> Catalog {
        Catalog::new(vec![
            Product::new("Earbuds A", "wireless bluetooth earbuds", "Electronics").with_brand("Boat"),
            Product::new("Earbuds B", "bluetooth wireless earbuds", "Electronics").with_brand("boat"),
            Product::new("Kurti", "cotton kurti dress", "Clothing").with_brand("Biba"),
            Product::new("Mystery", "unlabelled item", ""),
        ])
        .unwrap()
    }

    #[test]
    fn test_get_out_of_range() {
        let catalog = sample();
        assert_eq!(catalog.get(2).unwrap().name, "Kurti");
        let err = catalog.get(4).unwrap_err();
        assert!(matches!(err, Error::IndexOutOfRange { index: 4, len: 4 }));
    }

    #[test]
    fn test_blank_description_rejected() {
        let err = Catalog::new(vec![
            Product::new("ok", "fine", "A"),
            Product::new("bad", "   ", "A"),
        ])
        .unwrap_err();
        assert!(matches!(err, Error::InvalidRecord { row: 1, .. }));
    }

    #[test]
    fn test_category_members() {
        let catalog = sample();
        assert_eq!(catalog.category_members("Electronics"), &[0, 1]);
        assert_eq!(catalog.category_members(""), &[3]);
        assert!(catalog.category_members("Toys").is_empty());
    }

    #[test]
    fn test_categories_and_stats() {
        let catalog = sample();
        let categories = catalog.categories();
        assert_eq!(categories.len(), 3);
        assert_eq!(categories[0].category, "");
        assert_eq!(categories[1], CategoryCount { category: "Clothing".into(), count: 1 });
        assert_eq!(categories[2].count, 2);

        let stats = catalog.stats();
        assert_eq!(stats.products, 4);
        assert_eq!(stats.categories, 3);
        // brand set is case-sensitive
        assert_eq!(stats.brands, 3);
    }

    #[test]
    fn test_search_and_find() {
        let catalog = sample();
        let hits = catalog.search(&ProductFilter::query(Some("earbuds"), Some("Electronics")));
        assert_eq!(hits, vec![0, 1]);
        assert_eq!(catalog.find_by_name("Kurti"), Some(2));
        assert_eq!(catalog.find_by_name("kurti"), None);
    }
}

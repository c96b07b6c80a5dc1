// Product filters used by catalog search
use crate::Product;

pub trait Filter {
    fn matches(&self, product: &Product) -> bool;
}

pub struct ProductFilter {
    condition: FilterCondition,
}

#[derive(Debug, Clone)]
pub enum FilterCondition {
    /// Case-insensitive substring match on the product name
    NameContains(String),
    /// Exact, case-sensitive category match
    CategoryEquals(String),
    /// Case-insensitive brand match; products without a brand never match
    BrandEquals(String),
    And(Vec<FilterCondition>),
    Or(Vec<FilterCondition>),
    Not(Box<FilterCondition>),
}

impl ProductFilter {
    pub fn new(condition: FilterCondition) -> Self {
        Self { condition }
    }

    /// Filter matching every product
    pub fn all() -> Self {
        Self::new(FilterCondition::And(Vec::new()))
    }

    /// Name query and optional category, the way a product picker narrows the list.
    /// Empty query or category means "no restriction".
    pub fn query(name: Option<&str>, category: Option<&str>) -> Self {
        let mut conditions = Vec::new();
        if let Some(q) = name.filter(|q| !q.is_empty()) {
            conditions.push(FilterCondition::NameContains(q.to_string()));
        }
        if let Some(c) = category {
            conditions.push(FilterCondition::CategoryEquals(c.to_string()));
        }
        Self::new(FilterCondition::And(conditions))
    }

    fn matches_condition(condition: &FilterCondition, product: &Product) -> bool {
        match condition {
            FilterCondition::NameContains(needle) => product
                .name
                .to_lowercase()
                .contains(&needle.to_lowercase()),
            FilterCondition::CategoryEquals(category) => product.category == *category,
            FilterCondition::BrandEquals(brand) => product
                .brand
                .as_deref()
                .map(|b| b.eq_ignore_ascii_case(brand))
                .unwrap_or(false),
            FilterCondition::And(conditions) => {
                conditions.iter().all(|c| Self::matches_condition(c, product))
            }
            FilterCondition::Or(conditions) => {
                conditions.iter().any(|c| Self::matches_condition(c, product))
            }
            FilterCondition::Not(condition) => !Self::matches_condition(condition, product),
        }
    }
}

impl Filter for ProductFilter {
    fn matches(&self, product: &Product) -> bool {
        Self::matches_condition(&self.condition, product)
    }
}

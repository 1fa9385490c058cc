//! Id-keyed lookup over the categories of one snapshot.

use std::collections::HashMap;

use pulse_domain::{Category, CategoryId, ColorHex, SemanticType};

/// Chart and register label for transactions without a usable category.
pub const UNCATEGORIZED_LABEL: &str = "Uncategorized";

/// Borrowed lookup from category id to category, built once per aggregation.
#[derive(Debug, Clone, Default)]
pub struct CategoryIndex<'a> {
    by_id: HashMap<CategoryId, &'a Category>,
}

impl<'a> CategoryIndex<'a> {
    /// Indexes `categories`; when ids repeat, the later entry wins.
    pub fn new(categories: &'a [Category]) -> Self {
        let mut by_id = HashMap::with_capacity(categories.len());
        for category in categories {
            by_id.insert(category.id, category);
        }
        Self { by_id }
    }

    /// Returns `None` for a null id or one that matches no category.
    pub fn get(&self, id: Option<CategoryId>) -> Option<&'a Category> {
        id.and_then(|id| self.by_id.get(&id).copied())
    }

    pub fn semantic_type(&self, id: Option<CategoryId>) -> Option<SemanticType> {
        self.get(id).map(|category| category.semantic_type)
    }

    pub fn is_savings(&self, id: Option<CategoryId>) -> bool {
        self.semantic_type(id) == Some(SemanticType::Savings)
    }

    pub fn display_name(&self, id: Option<CategoryId>) -> &'a str {
        self.get(id)
            .map(|category| category.name.as_str())
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(UNCATEGORIZED_LABEL)
    }

    pub fn display_color(&self, id: Option<CategoryId>) -> ColorHex {
        self.get(id)
            .map(Category::display_color)
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

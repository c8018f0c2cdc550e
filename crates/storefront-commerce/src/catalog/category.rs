//! Category taxonomy and brand listing.

use serde::{Deserialize, Serialize};

/// A top-level category and its subcategories.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryNode {
    /// Category name as stored on products.
    pub name: String,
    /// Subcategory names, in display order.
    pub subcategories: Vec<String>,
}

impl CategoryNode {
    /// Create a category from its name and subcategories.
    pub fn new<I, S>(name: impl Into<String>, subcategories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            subcategories: subcategories.into_iter().map(Into::into).collect(),
        }
    }

    /// Check if a subcategory belongs here (case-insensitive).
    pub fn has_subcategory(&self, name: &str) -> bool {
        self.subcategories
            .iter()
            .any(|s| s.eq_ignore_ascii_case(name))
    }
}

/// Find a category by name (case-insensitive).
pub fn find_category<'a>(taxonomy: &'a [CategoryNode], name: &str) -> Option<&'a CategoryNode> {
    taxonomy.iter().find(|c| c.name.eq_ignore_ascii_case(name))
}

/// Find the category a subcategory belongs to.
pub fn parent_of<'a>(taxonomy: &'a [CategoryNode], subcategory: &str) -> Option<&'a CategoryNode> {
    taxonomy.iter().find(|c| c.has_subcategory(subcategory))
}

/// A brand with its logo.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Brand {
    pub name: String,
    /// Logo image URL.
    pub logo: String,
}

impl Brand {
    pub fn new(name: impl Into<String>, logo: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            logo: logo.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn taxonomy() -> Vec<CategoryNode> {
        vec![
            CategoryNode::new("Electronics", ["Audio", "TVs", "Cameras"]),
            CategoryNode::new("Home", ["Appliances", "Furniture"]),
        ]
    }

    #[test]
    fn test_find_category_ignores_case() {
        let t = taxonomy();
        assert_eq!(find_category(&t, "electronics").map(|c| c.name.as_str()), Some("Electronics"));
        assert!(find_category(&t, "Garden").is_none());
    }

    #[test]
    fn test_parent_of_subcategory() {
        let t = taxonomy();
        assert_eq!(parent_of(&t, "appliances").map(|c| c.name.as_str()), Some("Home"));
        assert!(parent_of(&t, "Shoes").is_none());
    }
}

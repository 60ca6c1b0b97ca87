//! Task categories and the configurable category vocabulary.

use serde::{Deserialize, Serialize};

/// Category label of a task, normalized to lowercase.
///
/// Unlike priorities, the category vocabulary is deployment data: the set
/// of accepted names lives in the store configuration (`CategorySet`), not
/// in the type system. Normalizing to lowercase at every construction site
/// makes category comparison case-insensitive by construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    /// Creates a category from a raw name, trimming and lowercasing it.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty after trimming.
    pub fn new(name: &str) -> Result<Self, String> {
        let normalized = name.trim().to_lowercase();
        if normalized.is_empty() {
            return Err("Category name must not be empty".to_string());
        }
        Ok(Self(normalized))
    }

    /// The normalized category name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Default for Category {
    fn default() -> Self {
        Self("other".to_string())
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The set of category names accepted when creating or editing tasks.
///
/// Names are stored lowercase in declaration order, deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<String>")]
pub struct CategorySet {
    names: Vec<String>,
}

impl CategorySet {
    /// Builds a set from raw names, normalizing and deduplicating them.
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty or contains a name that is
    /// empty after trimming.
    pub fn new(names: &[String]) -> Result<Self, String> {
        let mut normalized: Vec<String> = Vec::with_capacity(names.len());
        for name in names {
            let category = Category::new(name)?;
            if !normalized.contains(&category.0) {
                normalized.push(category.0);
            }
        }
        if normalized.is_empty() {
            return Err("Category set must not be empty".to_string());
        }
        Ok(Self { names: normalized })
    }

    /// The accepted names, lowercase, in declaration order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns `true` if `category` is in the set.
    #[must_use]
    pub fn contains(&self, category: &Category) -> bool {
        self.names.iter().any(|name| name == category.name())
    }

    /// Resolves a raw user-supplied name against the set.
    ///
    /// # Errors
    ///
    /// Returns an error naming the accepted categories when the input is
    /// empty or not in the set.
    pub fn parse(&self, input: &str) -> Result<Category, String> {
        let category = Category::new(input)?;
        if self.contains(&category) {
            Ok(category)
        } else {
            Err(format!(
                "Unknown category \"{}\" (accepted: {})",
                category.name(),
                self.names.join(", ")
            ))
        }
    }
}

impl Default for CategorySet {
    fn default() -> Self {
        Self {
            names: ["work", "personal", "learning", "health", "finance", "other"]
                .map(String::from)
                .to_vec(),
        }
    }
}

impl TryFrom<Vec<String>> for CategorySet {
    type Error = String;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(&names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_is_normalized() {
        let category = Category::new("  Work ").unwrap();
        assert_eq!(category.name(), "work");
    }

    #[test]
    fn empty_category_rejected() {
        assert!(Category::new("   ").is_err());
    }

    #[test]
    fn default_set_has_the_six_stock_categories() {
        let set = CategorySet::default();
        for name in ["work", "personal", "learning", "health", "finance", "other"] {
            assert!(set.contains(&Category::new(name).unwrap()), "missing {name}");
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        let set = CategorySet::default();
        assert_eq!(set.parse("WORK").unwrap().name(), "work");
    }

    #[test]
    fn parse_rejects_unknown_name_listing_accepted() {
        let set = CategorySet::new(&["focus".to_string(), "errand".to_string()]).unwrap();
        let err = set.parse("work").unwrap_err();
        assert!(err.contains("work"));
        assert!(err.contains("focus, errand"));
    }

    #[test]
    fn new_deduplicates_and_normalizes() {
        let set =
            CategorySet::new(&["Work".to_string(), "work".to_string(), "Home".to_string()])
                .unwrap();
        assert_eq!(set.names(), ["work", "home"]);
    }

    #[test]
    fn empty_set_rejected() {
        assert!(CategorySet::new(&[]).is_err());
    }

    #[test]
    fn deserializes_from_plain_name_list() {
        let set: CategorySet = serde_yaml::from_str("[Work, errand]").unwrap();
        assert_eq!(set.names(), ["work", "errand"]);
    }
}

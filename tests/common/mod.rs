//! Helpers for integration tests.

use pushkind_categories::domain::category::{Category, NewCategory};
use pushkind_categories::repository::InMemoryCategoryRepository;

/// Repository pre-seeded with the given category names, all active.
pub fn seeded_repository(names: &[&str]) -> InMemoryCategoryRepository {
    let categories = names
        .iter()
        .map(|name| sample_category(name, ""))
        .collect();
    InMemoryCategoryRepository::with_categories(categories)
}

pub fn sample_category(name: &str, description: &str) -> Category {
    NewCategory::new(name)
        .description(description)
        .try_into()
        .expect("valid category")
}

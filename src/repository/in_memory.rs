use std::cell::RefCell;

use crate::domain::category::Category;
use crate::domain::types::CategoryId;
use crate::repository::{
    CategoryListQuery, CategoryReader, CategoryWriter, RepositoryError, RepositoryResult,
};

/// Repository keeping categories in an ordered in-process list.
///
/// Intended for single-threaded use: the list lives behind a `RefCell`, so
/// the repository is not `Sync`.
#[derive(Debug, Default)]
pub struct InMemoryCategoryRepository {
    categories: RefCell<Vec<Category>>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_categories(categories: Vec<Category>) -> Self {
        Self {
            categories: RefCell::new(categories),
        }
    }

    /// Snapshot of the stored categories in insertion order.
    pub fn categories(&self) -> Vec<Category> {
        self.categories.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.categories.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.borrow().is_empty()
    }
}

impl CategoryReader for InMemoryCategoryRepository {
    fn list_categories(
        &self,
        query: CategoryListQuery,
    ) -> RepositoryResult<(usize, Vec<Category>)> {
        let categories = self.categories.try_borrow().map_err(|e| {
            RepositoryError::Unavailable(format!("category list is locked: {e}"))
        })?;

        let total = categories.len();
        let items = match &query.pagination {
            Some(pagination) => match pagination
                .page
                .saturating_sub(1)
                .checked_mul(pagination.per_page)
            {
                Some(offset) => categories
                    .iter()
                    .skip(offset)
                    .take(pagination.per_page)
                    .cloned()
                    .collect(),
                // past any addressable item
                None => Vec::new(),
            },
            None => categories.clone(),
        };

        Ok((total, items))
    }

    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>> {
        let categories = self.categories.try_borrow().map_err(|e| {
            RepositoryError::Unavailable(format!("category list is locked: {e}"))
        })?;

        Ok(categories.iter().find(|c| c.id == id).cloned())
    }
}

impl CategoryWriter for InMemoryCategoryRepository {
    fn save_category(&self, category: &Category) -> RepositoryResult<()> {
        let mut categories = self.categories.try_borrow_mut().map_err(|e| {
            RepositoryError::Unavailable(format!("category list is locked: {e}"))
        })?;

        match categories.iter_mut().find(|c| c.id == category.id) {
            Some(existing) => *existing = category.clone(),
            None => categories.push(category.clone()),
        }

        Ok(())
    }
}

use validator::Validate;

use crate::domain::category::{Category, NewCategory};
use crate::dto::categories::{CreateCategoryRequest, CreateCategoryResponse};
use crate::repository::CategoryWriter;

use super::{ServiceError, ServiceResult};

/// Creates a category and hands it to the repository.
///
/// Invalid requests fail with [`ServiceError::InvalidCategoryData`] before
/// the repository is touched. Storage failures are logged and reported as
/// [`ServiceError::Internal`].
pub struct CreateCategory<'a, R> {
    repo: &'a R,
}

impl<'a, R> CreateCategory<'a, R>
where
    R: CategoryWriter,
{
    pub fn new(repo: &'a R) -> Self {
        Self { repo }
    }

    pub fn execute(&self, request: CreateCategoryRequest) -> ServiceResult<CreateCategoryResponse> {
        if let Err(e) = request.validate() {
            log::warn!("Rejected create category request: {e}");
            return Err(e.into());
        }

        let category = Category::try_from(NewCategory::from(request)).map_err(|e| {
            log::warn!("Rejected category data: {e}");
            ServiceError::from(e)
        })?;

        match self.repo.save_category(&category) {
            Ok(()) => {
                log::debug!("Created category {category:?}");
                Ok(CreateCategoryResponse { id: category.id })
            }
            Err(e) => {
                log::error!("Failed to save category: {e}");
                Err(ServiceError::Internal)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::CategoryReader;
    use crate::repository::test::TestRepository;

    fn sample_request() -> CreateCategoryRequest {
        CreateCategoryRequest::new("Filme")
            .description("Categoria para filmes")
            .active(true)
    }

    #[test]
    fn creates_category_with_valid_data() {
        let repo = TestRepository::new();

        let response = CreateCategory::new(&repo).execute(sample_request()).unwrap();

        assert_eq!(response.id.get().get_version_num(), 4);
        assert_eq!(repo.save_calls(), 1);

        let saved = repo.get_category_by_id(response.id).unwrap().unwrap();
        assert_eq!(saved.name, "Filme");
        assert_eq!(saved.description, "Categoria para filmes");
        assert!(saved.is_active);
    }

    #[test]
    fn keeps_requested_inactive_state() {
        let repo = TestRepository::new();

        CreateCategory::new(&repo)
            .execute(sample_request().active(false))
            .unwrap();

        assert!(!repo.saved()[0].is_active);
    }

    #[test]
    fn empty_name_is_rejected_without_saving() {
        let repo = TestRepository::new();

        let err = CreateCategory::new(&repo)
            .execute(CreateCategoryRequest::new(""))
            .unwrap_err();

        assert_eq!(
            err,
            ServiceError::InvalidCategoryData("name cannot be empty".to_string())
        );
        assert_eq!(err.to_string(), "name cannot be empty");
        assert_eq!(repo.save_calls(), 0);
    }

    #[test]
    fn name_is_saved_exactly_as_requested() {
        let repo = TestRepository::new();

        for name in [" Filme ", "   "] {
            let response = CreateCategory::new(&repo)
                .execute(CreateCategoryRequest::new(name))
                .unwrap();

            let saved = repo.get_category_by_id(response.id).unwrap().unwrap();
            assert_eq!(saved.name.as_str(), name);
        }
        assert_eq!(repo.save_calls(), 2);
    }

    #[test]
    fn too_long_name_is_rejected_without_saving() {
        let repo = TestRepository::new();

        let err = CreateCategory::new(&repo)
            .execute(CreateCategoryRequest::new("a".repeat(256)))
            .unwrap_err();

        assert_eq!(
            err,
            ServiceError::InvalidCategoryData("name cannot be longer than 255".to_string())
        );
        assert_eq!(repo.save_calls(), 0);
    }

    #[test]
    fn repository_failure_is_internal_error() {
        let repo = TestRepository::failing();

        let err = CreateCategory::new(&repo)
            .execute(sample_request())
            .unwrap_err();

        assert_eq!(err, ServiceError::Internal);
        assert_eq!(repo.save_calls(), 1);
    }
}

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::category::{Category, NewCategory};
use crate::domain::types::CategoryId;

fn default_active() -> bool {
    true
}

/// Input of the create-category use case.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, message = "name cannot be empty"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl CreateCategoryRequest {
    /// Request for an active category without description.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            is_active: true,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }
}

impl From<CreateCategoryRequest> for NewCategory {
    fn from(value: CreateCategoryRequest) -> Self {
        NewCategory::new(value.name)
            .description(value.description)
            .active(value.is_active)
    }
}

/// Output of the create-category use case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CreateCategoryResponse {
    pub id: CategoryId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryDto {
    pub id: String,
    pub name: String,
    pub description: String,
    pub is_active: bool,
}

impl From<Category> for CategoryDto {
    fn from(value: Category) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name.into_inner(),
            description: value.description,
            is_active: value.is_active,
        }
    }
}

//! Error conversion glue between layers.
//!
//! The domain layer must not depend on service error types, so the
//! conversions live here instead of next to either error definition.

use validator::ValidationErrors;

use crate::domain::types::TypeConstraintError;
use crate::services::ServiceError;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::InvalidCategoryData(val.to_string())
    }
}

/// Surfaces the first custom field message, falling back to the full report.
impl From<ValidationErrors> for ServiceError {
    fn from(val: ValidationErrors) -> Self {
        let message = val
            .field_errors()
            .values()
            .flat_map(|errors| errors.iter())
            .find_map(|error| error.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| val.to_string());
        ServiceError::InvalidCategoryData(message)
    }
}

//! Error conversion glue between the value-object layer and services.
//!
//! The domain layer must not depend on service error types.

use crate::domain::types::TypeConstraintError;
use crate::services::ServiceError;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::TypeConstraint(val.to_string())
    }
}

//! Use case errors.

use crate::application::ports::{CatalogError, DirectoryError, PaymentGatewayError};
use crate::domain::order_fulfillment::errors::{ErrorKind, OrderError};

/// Error returned by every use case.
#[derive(Debug, Clone, thiserror::Error)]
pub enum UseCaseError {
    /// Domain rule violated or order state rejected the operation.
    #[error(transparent)]
    Order(#[from] OrderError),

    /// Catalog store failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Contact directory failed.
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    /// Payment gateway failed.
    #[error(transparent)]
    PaymentGateway(#[from] PaymentGatewayError),
}

impl UseCaseError {
    /// Failure category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Order(e) => e.kind(),
            Self::Catalog(_) | Self::Directory(_) | Self::PaymentGateway(_) => {
                ErrorKind::Dependency
            }
        }
    }
}

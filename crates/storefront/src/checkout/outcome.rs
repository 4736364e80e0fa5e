//! Typed outcomes for gateway synchronization.

use thiserror::Error;
use tracing::warn;

use crate::klarna::KlarnaError;
use crate::klarna::types::CheckoutOrder;

/// Result of one synchronization round against the gateway.
///
/// A failed round is not an error to the caller: the cart is left exactly
/// as it was and synchronization can be retried on a later checkout step.
#[derive(Debug)]
pub enum SyncOutcome {
    /// The gateway accepted the request; the canonical order snapshot.
    Completed(Box<CheckoutOrder>),
    /// Synchronization did not happen this round.
    Failed(SyncFailure),
}

impl SyncOutcome {
    /// Whether the round completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }

    /// The synchronized order, when the round completed.
    #[must_use]
    pub fn order(&self) -> Option<&CheckoutOrder> {
        match self {
            Self::Completed(order) => Some(order),
            Self::Failed(_) => None,
        }
    }

    /// Consume the outcome, yielding the synchronized order if any.
    #[must_use]
    pub fn into_order(self) -> Option<CheckoutOrder> {
        match self {
            Self::Completed(order) => Some(*order),
            Self::Failed(_) => None,
        }
    }
}

/// Why a synchronization round did not happen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncFailure {
    /// The gateway rejected the request.
    #[error("gateway rejected the request: {error_code}")]
    Api {
        error_code: String,
        error_messages: Vec<String>,
        correlation_id: Option<String>,
    },

    /// The request never produced a gateway response.
    #[error("gateway unreachable: {0}")]
    Transport(String),

    /// No usable gateway client for the current language.
    #[error("no gateway client configured")]
    NotConfigured,
}

impl SyncFailure {
    /// Emit the failure's diagnostics.
    pub(crate) fn log(&self, operation: &str) {
        match self {
            Self::Api {
                error_code,
                error_messages,
                correlation_id,
            } => warn!(
                operation,
                error_code,
                error_messages = ?error_messages,
                correlation_id = correlation_id.as_deref().unwrap_or(""),
                "gateway rejected checkout order request"
            ),
            Self::Transport(message) => {
                warn!(operation, message, "checkout order request failed in transit");
            }
            Self::NotConfigured => {
                warn!(operation, "no Klarna Checkout client configured");
            }
        }
    }
}

impl From<KlarnaError> for SyncFailure {
    fn from(error: KlarnaError) -> Self {
        match error {
            KlarnaError::Api { error, .. } => Self::Api {
                error_code: error.error_code,
                error_messages: error.error_messages,
                correlation_id: error.correlation_id,
            },
            KlarnaError::Http(e) => Self::Transport(e.to_string()),
            KlarnaError::Parse(message) => Self::Transport(message),
            KlarnaError::Url(e) => Self::Transport(e.to_string()),
            KlarnaError::NotConfigured => Self::NotConfigured,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::klarna::types::ApiError;

    #[test]
    fn test_api_error_maps_to_api_failure() {
        let error = KlarnaError::Api {
            status: 400,
            error: ApiError {
                error_code: "BAD_VALUE".to_string(),
                error_messages: vec!["purchase_country is invalid".to_string()],
                correlation_id: Some("abc-123".to_string()),
            },
        };

        let failure = SyncFailure::from(error);
        assert_eq!(
            failure,
            SyncFailure::Api {
                error_code: "BAD_VALUE".to_string(),
                error_messages: vec!["purchase_country is invalid".to_string()],
                correlation_id: Some("abc-123".to_string()),
            }
        );
    }

    #[test]
    fn test_not_configured_maps_through() {
        assert_eq!(
            SyncFailure::from(KlarnaError::NotConfigured),
            SyncFailure::NotConfigured
        );
    }

    #[test]
    fn test_failed_outcome_has_no_order() {
        let outcome = SyncOutcome::Failed(SyncFailure::NotConfigured);
        assert!(!outcome.is_completed());
        assert!(outcome.order().is_none());
        assert!(outcome.into_order().is_none());
    }
}

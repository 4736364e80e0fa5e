//! Cart-to-gateway order synchronization.
//!
//! # Architecture
//!
//! [`CheckoutService`] keeps a cart and its Klarna checkout order in step:
//! it creates the gateway order the first time a cart reaches checkout,
//! updates it on subsequent visits, and links the two through a single
//! cart property holding the gateway-assigned order id.
//!
//! One service instance is built per request scope; the gateway
//! connection it resolves through [`GatewayAccessor`] is cached only for
//! that instance's lifetime. All collaborators are injected at
//! construction.
//!
//! Gateway failures never surface as errors from the synchronization
//! entry points - they come back as [`SyncOutcome::Failed`] values
//! carrying the gateway's error code, messages and correlation id, and
//! callers treat them as "synchronization did not happen this round".

pub mod accessor;
pub mod gateway;
pub mod outcome;
pub mod service;

pub use accessor::GatewayAccessor;
pub use gateway::{CheckoutGateway, ConnectionFactory, RestConnectionFactory};
pub use outcome::{SyncFailure, SyncOutcome};
pub use service::CheckoutService;

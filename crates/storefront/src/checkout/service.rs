//! The order synchronization service.

use std::sync::Arc;

use driftwood_core::Money;
use tracing::{debug, info, instrument};

use crate::commerce::{
    Cart, CartSearch, CommerceError, OrderRepository, ShippingMethod, ShippingMethods,
    TotalsCalculator,
};
use crate::klarna::conversions::{checkout_address, order_lines};
use crate::klarna::types::{CheckoutOrder, CheckoutOrderUpdate, MerchantUrls, ShippingOption};
use crate::klarna::{KlarnaError, ORDER_ID_PROPERTY};

use super::accessor::GatewayAccessor;
use super::outcome::{SyncFailure, SyncOutcome};

/// Keeps a cart and its Klarna checkout order in step.
///
/// One instance is built per request scope; see
/// [`GatewayAccessor`] for the connection's lifetime. All collaborators
/// are injected at construction.
pub struct CheckoutService {
    totals: Arc<dyn TotalsCalculator>,
    orders: Arc<dyn OrderRepository>,
    cart_search: Arc<dyn CartSearch>,
    shipping: Arc<dyn ShippingMethods>,
    accessor: GatewayAccessor,
    merchant_urls: MerchantUrls,
    /// Locale sent in gateway payloads, e.g. "en-US".
    locale: String,
}

impl CheckoutService {
    /// Create a service instance for one request scope.
    #[must_use]
    pub fn new(
        totals: Arc<dyn TotalsCalculator>,
        orders: Arc<dyn OrderRepository>,
        cart_search: Arc<dyn CartSearch>,
        shipping: Arc<dyn ShippingMethods>,
        accessor: GatewayAccessor,
        merchant_urls: MerchantUrls,
        locale: impl Into<String>,
    ) -> Self {
        Self {
            totals,
            orders,
            cart_search,
            shipping,
            accessor,
            merchant_urls,
            locale: locale.into(),
        }
    }

    /// Synchronize the cart with its gateway order, creating the order if
    /// the cart is not linked to one yet.
    ///
    /// The stored order-id property is the sole branch driver: blank or
    /// absent means create, anything else means update with that id.
    ///
    /// # Errors
    ///
    /// Returns an error only for commerce-platform faults (saving the
    /// cart). Gateway failures come back as [`SyncOutcome::Failed`].
    pub async fn create_or_update(&self, cart: &mut Cart) -> Result<SyncOutcome, CommerceError> {
        let order_id = cart
            .property(ORDER_ID_PROPERTY)
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string);

        match order_id {
            Some(order_id) => self.update_order(&order_id, cart).await,
            None => self.create_order(cart).await,
        }
    }

    /// Create a new gateway order for the cart and link the cart to it.
    ///
    /// On success the gateway-assigned id is written to the cart's
    /// property bag and the cart is saved. On a gateway failure nothing
    /// is persisted and the failure is returned as the outcome.
    ///
    /// # Errors
    ///
    /// Returns an error only when saving the linked cart fails.
    #[instrument(skip(self, cart), fields(cart_id = %cart.id))]
    pub async fn create_order(&self, cart: &mut Cart) -> Result<SyncOutcome, CommerceError> {
        let Some(gateway) = self.accessor.get().await else {
            return Ok(failed("create", SyncFailure::NotConfigured));
        };

        let payload = self.creation_payload(cart);

        let created = match gateway.create_order(&payload).await {
            Ok(created) => created,
            Err(error) => return Ok(failed("create", error.into())),
        };

        let Some(order_id) = created.order_id else {
            return Ok(failed(
                "create",
                SyncFailure::Transport("creation response carried no order id".to_string()),
            ));
        };

        // Re-fetch the canonical snapshot before linking the cart.
        let snapshot = match gateway.fetch_order(&order_id).await {
            Ok(snapshot) => snapshot,
            Err(error) => return Ok(failed("create", error.into())),
        };

        cart.set_property(
            ORDER_ID_PROPERTY,
            snapshot.order_id.as_deref().unwrap_or(&order_id),
        );
        self.orders.save_cart(cart).await?;

        info!(order_id, "created checkout order");
        Ok(SyncOutcome::Completed(Box::new(snapshot)))
    }

    /// Push the cart's current totals, lines and shipping options to an
    /// existing gateway order.
    ///
    /// The cart's stored order-id property is left untouched whether the
    /// round completes or fails.
    ///
    /// # Errors
    ///
    /// Returns an error only when the shipping catalog lookup fails.
    #[instrument(skip(self, cart), fields(cart_id = %cart.id, order_id = %order_id))]
    pub async fn update_order(
        &self,
        order_id: &str,
        cart: &Cart,
    ) -> Result<SyncOutcome, CommerceError> {
        let Some(gateway) = self.accessor.get().await else {
            return Ok(failed("update", SyncFailure::NotConfigured));
        };

        let totals = self.totals.totals_for(cart);
        let update = CheckoutOrderUpdate {
            order_amount: Money::new(totals.total, cart.currency).minor_units(),
            order_tax_amount: Money::new(totals.tax_total, cart.currency).minor_units(),
            order_lines: order_lines(cart),
            shipping_options: self.shipping_options(cart).await?,
        };

        match gateway.update_order(order_id, &update).await {
            Ok(order) => {
                info!(order_id, "updated checkout order");
                Ok(SyncOutcome::Completed(Box::new(order)))
            }
            Err(error) => Ok(failed("update", error.into())),
        }
    }

    /// Fetch the gateway's snapshot of an order. Pure passthrough, no
    /// mutation.
    ///
    /// # Errors
    ///
    /// Returns the gateway error as-is, including
    /// [`KlarnaError::NotConfigured`] when no client can be built.
    pub async fn get_order(&self, order_id: &str) -> Result<CheckoutOrder, KlarnaError> {
        let gateway = self
            .accessor
            .get()
            .await
            .ok_or(KlarnaError::NotConfigured)?;
        gateway.fetch_order(order_id).await
    }

    /// Find the cart linked to a gateway order id.
    ///
    /// Searches the order index for the cart whose order-id property
    /// matches (first result only) and loads that customer's cart.
    ///
    /// # Errors
    ///
    /// Returns an error when the order index or repository fails.
    #[instrument(skip(self), fields(order_id = %order_id))]
    pub async fn cart_by_order_id(&self, order_id: &str) -> Result<Option<Cart>, CommerceError> {
        // The gateway's view is fetched up front; a fetch failure does
        // not block the lookup.
        match self.get_order(order_id).await {
            Ok(snapshot) => {
                debug!(order_amount = snapshot.order_amount, "fetched gateway snapshot");
            }
            Err(error) => debug!(%error, "gateway snapshot unavailable"),
        }

        let Some(cart_ref) = self
            .cart_search
            .find_cart_by_property(ORDER_ID_PROPERTY, order_id)
            .await?
        else {
            return Ok(None);
        };

        // TODO: reconcile the gateway snapshot's lines and totals against
        // the loaded cart before handing it to callers.
        self.orders.load_cart(cart_ref.customer_id, &cart_ref.name).await
    }

    fn creation_payload(&self, cart: &Cart) -> CheckoutOrder {
        let totals = self.totals.totals_for(cart);

        CheckoutOrder {
            order_id: None,
            status: None,
            purchase_country: cart.market.primary_country(),
            purchase_currency: cart.currency,
            locale: self.locale.clone(),
            order_amount: Money::new(totals.total, cart.currency).minor_units(),
            order_tax_amount: Money::new(totals.tax_total, cart.currency).minor_units(),
            order_lines: order_lines(cart),
            shipping_options: Vec::new(),
            merchant_urls: Some(self.merchant_urls.clone()),
            billing_address: None,
            shipping_address: cart.shipping_address.as_ref().map(checkout_address),
            html_snippet: None,
        }
    }

    async fn shipping_options(&self, cart: &Cart) -> Result<Vec<ShippingOption>, CommerceError> {
        let methods = self.shipping.methods_for_market(&cart.market.id).await?;
        Ok(methods
            .into_iter()
            .map(|method| shipping_option(method, cart))
            .collect())
    }
}

fn failed(operation: &str, failure: SyncFailure) -> SyncOutcome {
    failure.log(operation);
    SyncOutcome::Failed(failure)
}

fn shipping_option(method: ShippingMethod, cart: &Cart) -> ShippingOption {
    ShippingOption {
        id: method.id.to_string(),
        name: method.display_name,
        price: Money::new(method.base_price, cart.currency).minor_units(),
        // Shipping tax is not computed yet; the gateway receives fixed
        // placeholder values.
        tax_amount: 1,
        tax_rate: 1,
        description: method.description,
        preselected: method.is_default,
    }
}

//! Dependency Injection Container
//!
//! Manages creation and wiring of all application components.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use crate::application::ports::{
    CatalogItem, CatalogPort, ContactDirectoryPort, EventPublisherPort, NotificationSenderPort,
    PaymentGatewayPort, RestaurantContact, UserContact,
};
use crate::application::services::{NotificationDispatcher, PaymentSignatureVerifier};
use crate::application::use_cases::{
    CreatePaymentIntentUseCase, ListOrdersUseCase, PlaceOrderUseCase, ResendNotificationUseCase,
    UpdateOrderStatusUseCase, VerifyPaymentUseCase,
};
use crate::config::{CatalogSeed, Config, DirectorySeed, SenderKind};
use crate::domain::order_fulfillment::events::OrderEvent;
use crate::domain::order_fulfillment::repository::OrderRepository;
use crate::domain::shared::{MenuItemId, Money, RestaurantId, UserId};
use crate::infrastructure::catalog::InMemoryCatalog;
use crate::infrastructure::directory::InMemoryContactDirectory;
use crate::infrastructure::http::AppState;
use crate::infrastructure::messaging::ChannelEventPublisher;
use crate::infrastructure::notification::{
    LoggingNotificationSender, NotificationSenderAdapter, WebhookNotificationSender,
};
use crate::infrastructure::payment::razorpay::RazorpayError;
use crate::infrastructure::payment::{RazorpayConfig, RazorpayGatewayAdapter};
use crate::infrastructure::persistence::InMemoryOrderRepository;

/// Errors raised while wiring adapters.
#[derive(Debug, thiserror::Error)]
pub enum ContainerError {
    /// Payment gateway client could not be built.
    #[error("payment gateway: {0}")]
    PaymentGateway(#[from] RazorpayError),
    /// Notification sender could not be built.
    #[error("notification sender: {0}")]
    NotificationSender(String),
}

/// Dependency injection container.
///
/// Holds all wired dependencies for the application. Use
/// [`build_container`] to construct the production wiring from configuration.
pub struct Container<O, C, D, G, E, S>
where
    O: OrderRepository + 'static,
    C: CatalogPort + 'static,
    D: ContactDirectoryPort + 'static,
    G: PaymentGatewayPort + 'static,
    E: EventPublisherPort + 'static,
    S: NotificationSenderPort + 'static,
{
    // Ports
    order_repo: Arc<O>,
    catalog: Arc<C>,
    directory: Arc<D>,
    gateway: Arc<G>,
    event_publisher: Arc<E>,
    notification_sender: Arc<S>,

    verifier: PaymentSignatureVerifier,
    currency: String,
}

impl<O, C, D, G, E, S> Container<O, C, D, G, E, S>
where
    O: OrderRepository + 'static,
    C: CatalogPort + 'static,
    D: ContactDirectoryPort + 'static,
    G: PaymentGatewayPort + 'static,
    E: EventPublisherPort + 'static,
    S: NotificationSenderPort + 'static,
{
    /// Create a new container with all dependencies.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        order_repo: Arc<O>,
        catalog: Arc<C>,
        directory: Arc<D>,
        gateway: Arc<G>,
        event_publisher: Arc<E>,
        notification_sender: Arc<S>,
        verifier: PaymentSignatureVerifier,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            order_repo,
            catalog,
            directory,
            gateway,
            event_publisher,
            notification_sender,
            verifier,
            currency: currency.into(),
        }
    }

    /// Get the order repository.
    pub fn order_repo(&self) -> Arc<O> {
        Arc::clone(&self.order_repo)
    }

    /// Get the event publisher port.
    pub fn event_publisher(&self) -> Arc<E> {
        Arc::clone(&self.event_publisher)
    }

    /// Create a `PlaceOrderUseCase`.
    pub fn place_order_use_case(&self) -> PlaceOrderUseCase<O, C, E> {
        PlaceOrderUseCase::new(
            Arc::clone(&self.order_repo),
            Arc::clone(&self.catalog),
            Arc::clone(&self.event_publisher),
        )
    }

    /// Create an `UpdateOrderStatusUseCase`.
    pub fn update_order_status_use_case(&self) -> UpdateOrderStatusUseCase<O, D, E> {
        UpdateOrderStatusUseCase::new(
            Arc::clone(&self.order_repo),
            Arc::clone(&self.directory),
            Arc::clone(&self.event_publisher),
        )
    }

    /// Create a `ListOrdersUseCase`.
    pub fn list_orders_use_case(&self) -> ListOrdersUseCase<O, D> {
        ListOrdersUseCase::new(Arc::clone(&self.order_repo), Arc::clone(&self.directory))
    }

    /// Create a `CreatePaymentIntentUseCase`.
    pub fn create_payment_intent_use_case(&self) -> CreatePaymentIntentUseCase<O, G> {
        CreatePaymentIntentUseCase::new(
            Arc::clone(&self.order_repo),
            Arc::clone(&self.gateway),
            self.currency.clone(),
        )
    }

    /// Create a `VerifyPaymentUseCase`.
    pub fn verify_payment_use_case(&self) -> VerifyPaymentUseCase<O, E> {
        VerifyPaymentUseCase::new(
            Arc::clone(&self.order_repo),
            self.verifier.clone(),
            Arc::clone(&self.event_publisher),
        )
    }

    /// Create the `NotificationDispatcher` that consumes the event queue.
    pub fn notification_dispatcher(&self) -> NotificationDispatcher<O, D, S> {
        NotificationDispatcher::new(
            Arc::clone(&self.order_repo),
            Arc::clone(&self.directory),
            Arc::clone(&self.notification_sender),
        )
    }

    /// Create a `ResendNotificationUseCase`.
    pub fn resend_notification_use_case(&self) -> ResendNotificationUseCase<O, D, S> {
        ResendNotificationUseCase::new(
            Arc::clone(&self.order_repo),
            Arc::clone(&self.directory),
            Arc::clone(&self.notification_sender),
        )
    }

    /// Build the HTTP application state.
    pub fn app_state(&self, version: impl Into<String>) -> AppState<O, C, D, G, E, S> {
        AppState {
            place_order: Arc::new(self.place_order_use_case()),
            update_order_status: Arc::new(self.update_order_status_use_case()),
            list_orders: Arc::new(self.list_orders_use_case()),
            create_payment_intent: Arc::new(self.create_payment_intent_use_case()),
            verify_payment: Arc::new(self.verify_payment_use_case()),
            resend_notification: Arc::new(self.resend_notification_use_case()),
            version: version.into(),
        }
    }
}

/// Production wiring.
pub type ServiceContainer = Container<
    InMemoryOrderRepository,
    InMemoryCatalog,
    InMemoryContactDirectory,
    RazorpayGatewayAdapter,
    ChannelEventPublisher,
    NotificationSenderAdapter,
>;

/// Build the production container from configuration.
///
/// Returns the container and the receiving half of the event queue, which
/// the caller hands to [`Container::notification_dispatcher`].
///
/// # Errors
///
/// Returns `ContainerError` if an HTTP client cannot be built.
pub fn build_container(
    config: &Config,
) -> Result<(ServiceContainer, mpsc::Receiver<OrderEvent>), ContainerError> {
    let gateway = RazorpayGatewayAdapter::new(
        RazorpayConfig::new(&config.payment.key_id, &config.payment.key_secret)
            .with_base_url(&config.payment.gateway_base_url)
            .with_timeout(Duration::from_secs(config.payment.timeout_secs)),
    )?;

    let notification_sender = match config.notifications.sender {
        SenderKind::Log => NotificationSenderAdapter::Logging(LoggingNotificationSender),
        SenderKind::Webhook => NotificationSenderAdapter::Webhook(
            WebhookNotificationSender::new(
                &config.notifications.webhook_url,
                &config.notifications.from_address,
                Duration::from_secs(config.notifications.timeout_secs),
            )
            .map_err(|e| ContainerError::NotificationSender(e.to_string()))?,
        ),
    };

    let (event_publisher, receiver) =
        ChannelEventPublisher::channel(config.notifications.queue_capacity);

    let container = Container::new(
        Arc::new(InMemoryOrderRepository::new()),
        Arc::new(seed_catalog(&config.catalog)),
        Arc::new(seed_directory(&config.directory)),
        Arc::new(gateway),
        Arc::new(event_publisher),
        Arc::new(notification_sender),
        PaymentSignatureVerifier::new(&config.payment.key_secret),
        config.payment.currency.clone(),
    );

    tracing::info!(
        menu_items = config.catalog.items.len(),
        users = config.directory.users.len(),
        restaurants = config.directory.restaurants.len(),
        sender = ?config.notifications.sender,
        "Container initialized"
    );

    Ok((container, receiver))
}

fn seed_catalog(seed: &CatalogSeed) -> InMemoryCatalog {
    InMemoryCatalog::with_items(seed.items.iter().map(|item| CatalogItem {
        id: MenuItemId::new(&item.id),
        restaurant_id: RestaurantId::new(&item.restaurant_id),
        name: item.name.clone(),
        price: Money::new(item.price),
        is_available: item.is_available,
    }))
}

fn seed_directory(seed: &DirectorySeed) -> InMemoryContactDirectory {
    let directory = InMemoryContactDirectory::new();
    for user in &seed.users {
        directory.add_user(UserContact {
            id: UserId::new(&user.id),
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
        });
    }
    for restaurant in &seed.restaurants {
        directory.add_restaurant(RestaurantContact {
            id: RestaurantId::new(&restaurant.id),
            name: restaurant.name.clone(),
            email: restaurant.email.clone(),
            phone: restaurant.phone.clone(),
            location: restaurant.location.clone(),
        });
    }
    directory
}

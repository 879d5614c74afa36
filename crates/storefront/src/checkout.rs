//! Checkout orchestration.
//!
//! Submits one pet or the whole cart for purchase, reconciles server
//! rejections back into user-facing messages, and clears local cart
//! state on success. Each attempt runs Idle -> Submitting and back; the
//! returned `Result` is the Succeeded/Failed outcome. A failed batch
//! never clears the cart, so the user can remove the problem items and
//! retry.

use tracing::{info, instrument, warn};

use pethaven_core::{Order, Pet, PetId};

use crate::api::ApiError;
use crate::cart::{Cart, CartItem};
use crate::listing::{FetchPets, Listing};

/// Phrase the server embeds in purchase rejections for sold pets.
const ALREADY_SOLD: &str = "already been sold";

/// Remote purchase operations.
///
/// Implemented by [`crate::api::PetStoreClient`]; test code substitutes
/// canned outcomes.
pub trait PurchaseApi {
    /// Purchase a single pet.
    fn purchase_pet(&self, pet_id: PetId) -> impl Future<Output = Result<Order, ApiError>>;

    /// Purchase a batch of pets, all-or-nothing.
    fn purchase_pets(&self, pet_ids: &[PetId]) -> impl Future<Output = Result<Order, ApiError>>;
}

/// Where a checkout attempt currently stands.
///
/// `Submitting` is only observable while an attempt is awaited; callers
/// use it to disable the checkout trigger so at most one purchase is in
/// flight per user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckoutState {
    #[default]
    Idle,
    Submitting,
}

/// A failed checkout attempt, ready for user display.
#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    /// Single purchase: the pet was sold out from under the user.
    #[error("This pet is no longer available for purchase.")]
    NoLongerAvailable,

    /// Batch purchase: these cart items were named in the rejection.
    #[error(
        "The following pets are no longer available: {}. Please remove them from your cart.",
        names.join(", ")
    )]
    ItemsUnavailable {
        /// Matched pet names, in cart order.
        names: Vec<String>,
    },

    /// Batch purchase: pets were sold but none could be identified.
    #[error("Some pets in your cart are no longer available.")]
    SomeUnavailable,

    /// Any other failure; the raw message is surfaced as-is.
    #[error(transparent)]
    Api(ApiError),
}

/// Attribute a bulk rejection message to the currently displayed cart
/// items by substring-matching each item's pet name against the text.
///
/// Best effort: names that are substrings of one another can over-match,
/// and no escaping is attempted. Zero matches falls back to the generic
/// message rather than guessing.
fn attribute_unavailable(message: &str, items: &[CartItem]) -> CheckoutError {
    let names: Vec<String> = items
        .iter()
        .filter(|item| message.contains(&item.pet.name))
        .map(|item| item.pet.name.clone())
        .collect();

    if names.is_empty() {
        CheckoutError::SomeUnavailable
    } else {
        CheckoutError::ItemsUnavailable { names }
    }
}

/// Orchestrates purchase attempts against the remote API.
#[derive(Debug, Default)]
pub struct Checkout {
    state: CheckoutState,
}

impl Checkout {
    /// Create an idle orchestrator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: CheckoutState::Idle,
        }
    }

    /// Current attempt state.
    #[must_use]
    pub const fn state(&self) -> CheckoutState {
        self.state
    }

    /// Purchase a single pet.
    ///
    /// On success the listing is refreshed so the pet disappears from
    /// the available view; a refresh failure is logged but does not
    /// fail the completed purchase.
    ///
    /// # Errors
    ///
    /// [`CheckoutError::NoLongerAvailable`] when the server rejects the
    /// purchase because the pet was already sold; the raw failure
    /// otherwise.
    #[instrument(skip(self, api, pet, listing), fields(pet_id = %pet.id, name = %pet.name))]
    pub async fn purchase_one<A: PurchaseApi + FetchPets>(
        &mut self,
        api: &A,
        pet: &Pet,
        listing: &mut Listing,
    ) -> Result<Order, CheckoutError> {
        self.state = CheckoutState::Submitting;
        let result = api.purchase_pet(pet.id).await;
        self.state = CheckoutState::Idle;

        match result {
            Ok(order) => {
                info!(order_id = %order.id, "purchase completed");
                if let Err(e) = listing.refresh(api).await {
                    warn!(error = %e, "listing refresh after purchase failed");
                }
                Ok(order)
            }
            Err(e) if e.to_string().contains(ALREADY_SOLD) => {
                Err(CheckoutError::NoLongerAvailable)
            }
            Err(e) => Err(CheckoutError::Api(e)),
        }
    }

    /// Purchase the entire cart in one all-or-nothing order.
    ///
    /// An empty cart is a silent no-op: no remote call is made and
    /// `Ok(None)` is returned. On success the cart is cleared (the
    /// caller persists it) and the listing refreshed. On failure the
    /// cart is left untouched so the user can remove problem items and
    /// resubmit.
    ///
    /// # Errors
    ///
    /// [`CheckoutError::ItemsUnavailable`] naming the implicated cart
    /// items when the server rejects sold pets and their names appear
    /// in the message; [`CheckoutError::SomeUnavailable`] when none
    /// match; the raw failure otherwise.
    #[instrument(skip(self, api, cart, listing), fields(count = cart.len()))]
    pub async fn purchase_cart<A: PurchaseApi + FetchPets>(
        &mut self,
        api: &A,
        cart: &mut Cart,
        listing: &mut Listing,
    ) -> Result<Option<Order>, CheckoutError> {
        let pet_ids = cart.pet_ids();
        if pet_ids.is_empty() {
            return Ok(None);
        }

        self.state = CheckoutState::Submitting;
        let result = api.purchase_pets(&pet_ids).await;
        self.state = CheckoutState::Idle;

        match result {
            Ok(order) => {
                info!(order_id = %order.id, pets = order.total_pets, "cart purchase completed");
                cart.clear();
                if let Err(e) = listing.refresh(api).await {
                    warn!(error = %e, "listing refresh after purchase failed");
                }
                Ok(Some(order))
            }
            Err(e) => {
                let message = e.to_string();
                if message.contains(ALREADY_SOLD) {
                    Err(attribute_unavailable(&message, cart.items()))
                } else {
                    Err(CheckoutError::Api(e))
                }
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;
    use crate::api::GraphQLError;
    use crate::cart::tests::sample_pet;
    use pethaven_core::{OrderId, PageInfo, PetConnection, StoreId};

    /// Canned purchase outcomes plus call accounting.
    struct FakeStorefront {
        outcome: RefCell<Option<Result<Order, ApiError>>>,
        purchase_calls: Cell<usize>,
        submitted_ids: RefCell<Vec<PetId>>,
        fetch_calls: Cell<usize>,
    }

    impl FakeStorefront {
        fn new(outcome: Result<Order, ApiError>) -> Self {
            Self {
                outcome: RefCell::new(Some(outcome)),
                purchase_calls: Cell::new(0),
                submitted_ids: RefCell::new(Vec::new()),
                fetch_calls: Cell::new(0),
            }
        }

        fn idle() -> Self {
            Self {
                outcome: RefCell::new(None),
                purchase_calls: Cell::new(0),
                submitted_ids: RefCell::new(Vec::new()),
                fetch_calls: Cell::new(0),
            }
        }
    }

    impl PurchaseApi for FakeStorefront {
        async fn purchase_pet(&self, pet_id: PetId) -> Result<Order, ApiError> {
            self.purchase_calls.set(self.purchase_calls.get() + 1);
            self.submitted_ids.borrow_mut().push(pet_id);
            self.outcome.borrow_mut().take().unwrap()
        }

        async fn purchase_pets(&self, pet_ids: &[PetId]) -> Result<Order, ApiError> {
            self.purchase_calls.set(self.purchase_calls.get() + 1);
            self.submitted_ids.borrow_mut().extend_from_slice(pet_ids);
            self.outcome.borrow_mut().take().unwrap()
        }
    }

    impl FetchPets for FakeStorefront {
        async fn available_pets(
            &self,
            _store_id: StoreId,
            _first: i64,
            _after: Option<String>,
        ) -> Result<PetConnection, ApiError> {
            self.fetch_calls.set(self.fetch_calls.get() + 1);
            Ok(PetConnection {
                edges: vec![],
                page_info: PageInfo::default(),
                total_count: 0,
            })
        }
    }

    fn store_id() -> StoreId {
        "67e55044-10b1-426f-9247-bb680e5fe0c8".parse().unwrap()
    }

    fn order_for(pets: Vec<Pet>) -> Order {
        let total = u32::try_from(pets.len()).unwrap();
        Order {
            id: OrderId::new(uuid::Uuid::new_v4()),
            customer_id: "alice".to_string(),
            pets,
            total_pets: total,
            created_at: chrono::Utc::now(),
        }
    }

    fn sold_error(message: &str) -> ApiError {
        ApiError::GraphQL(vec![GraphQLError {
            message: message.to_string(),
            locations: vec![],
            path: vec![],
        }])
    }

    #[tokio::test]
    async fn test_empty_cart_makes_no_remote_call() {
        let api = FakeStorefront::idle();
        let mut checkout = Checkout::new();
        let mut cart = Cart::new();
        let mut listing = Listing::new(store_id(), 12);

        let outcome = checkout
            .purchase_cart(&api, &mut cart, &mut listing)
            .await
            .unwrap();

        assert!(outcome.is_none());
        assert_eq!(api.purchase_calls.get(), 0);
        assert_eq!(api.fetch_calls.get(), 0);
        assert!(cart.is_empty());
    }

    #[tokio::test]
    async fn test_sold_failure_names_matched_items_and_keeps_cart() {
        let api = FakeStorefront::new(Err(sold_error("pet Rex has already been sold")));
        let mut checkout = Checkout::new();
        let mut cart = Cart::new();
        let rex = sample_pet("Rex");
        let whiskers = sample_pet("Whiskers");
        cart.add(rex.clone());
        cart.add(whiskers.clone());
        let mut listing = Listing::new(store_id(), 12);

        let err = checkout
            .purchase_cart(&api, &mut cart, &mut listing)
            .await
            .unwrap_err();

        match err {
            CheckoutError::ItemsUnavailable { ref names } => {
                assert_eq!(names, &vec!["Rex".to_string()]);
            }
            other => panic!("expected ItemsUnavailable, got {other:?}"),
        }
        assert_eq!(
            err.to_string(),
            "The following pets are no longer available: Rex. Please remove them from your cart."
        );

        // Failure must not clear the cart.
        assert_eq!(cart.len(), 2);
        assert!(cart.contains(&rex.id));
        assert!(cart.contains(&whiskers.id));
        // And no refetch happened.
        assert_eq!(api.fetch_calls.get(), 0);
    }

    #[tokio::test]
    async fn test_sold_failure_with_no_matching_names_is_generic() {
        let api = FakeStorefront::new(Err(sold_error(
            "one or more pets have already been sold",
        )));
        let mut checkout = Checkout::new();
        let mut cart = Cart::new();
        cart.add(sample_pet("Rex"));
        let mut listing = Listing::new(store_id(), 12);

        let err = checkout
            .purchase_cart(&api, &mut cart, &mut listing)
            .await
            .unwrap_err();

        assert!(matches!(err, CheckoutError::SomeUnavailable));
        assert_eq!(
            err.to_string(),
            "Some pets in your cart are no longer available."
        );
        assert_eq!(cart.len(), 1);
    }

    #[tokio::test]
    async fn test_sold_failure_lists_names_in_cart_order() {
        let api = FakeStorefront::new(Err(sold_error(
            "pets Whiskers and Rex have already been sold",
        )));
        let mut checkout = Checkout::new();
        let mut cart = Cart::new();
        cart.add(sample_pet("Rex"));
        cart.add(sample_pet("Whiskers"));
        let mut listing = Listing::new(store_id(), 12);

        let err = checkout
            .purchase_cart(&api, &mut cart, &mut listing)
            .await
            .unwrap_err();

        match err {
            CheckoutError::ItemsUnavailable { names } => {
                assert_eq!(names, vec!["Rex".to_string(), "Whiskers".to_string()]);
            }
            other => panic!("expected ItemsUnavailable, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_successful_cart_purchase_clears_cart_and_refetches() {
        let milo = sample_pet("Milo");
        let api = FakeStorefront::new(Ok(order_for(vec![milo.clone()])));
        let mut checkout = Checkout::new();
        let mut cart = Cart::new();
        cart.add(milo.clone());
        let mut listing = Listing::new(store_id(), 12);

        let order = checkout
            .purchase_cart(&api, &mut cart, &mut listing)
            .await
            .unwrap()
            .unwrap();

        assert!(cart.is_empty());
        assert_eq!(order.total_pets, 1);
        assert_eq!(api.submitted_ids.borrow().as_slice(), &[milo.id]);
        assert_eq!(api.fetch_calls.get(), 1);
        assert_eq!(checkout.state(), CheckoutState::Idle);
    }

    #[tokio::test]
    async fn test_other_failures_surface_raw_message() {
        let api = FakeStorefront::new(Err(sold_error("internal server error")));
        let mut checkout = Checkout::new();
        let mut cart = Cart::new();
        cart.add(sample_pet("Rex"));
        let mut listing = Listing::new(store_id(), 12);

        let err = checkout
            .purchase_cart(&api, &mut cart, &mut listing)
            .await
            .unwrap_err();

        assert!(matches!(err, CheckoutError::Api(_)));
        assert!(err.to_string().contains("internal server error"));
        assert_eq!(cart.len(), 1);
    }

    #[tokio::test]
    async fn test_single_purchase_sold_maps_to_no_longer_available() {
        let api = FakeStorefront::new(Err(sold_error(
            "sorry, the pet 'Rex' has already been sold",
        )));
        let mut checkout = Checkout::new();
        let rex = sample_pet("Rex");
        let mut listing = Listing::new(store_id(), 12);

        let err = checkout
            .purchase_one(&api, &rex, &mut listing)
            .await
            .unwrap_err();

        assert!(matches!(err, CheckoutError::NoLongerAvailable));
        assert_eq!(api.fetch_calls.get(), 0);
    }

    #[tokio::test]
    async fn test_single_purchase_success_refetches_listing() {
        let rex = sample_pet("Rex");
        let api = FakeStorefront::new(Ok(order_for(vec![rex.clone()])));
        let mut checkout = Checkout::new();
        let mut listing = Listing::new(store_id(), 12);

        let order = checkout
            .purchase_one(&api, &rex, &mut listing)
            .await
            .unwrap();

        assert_eq!(order.pets[0].name, "Rex");
        assert_eq!(api.submitted_ids.borrow().as_slice(), &[rex.id]);
        assert_eq!(api.fetch_calls.get(), 1);
    }
}

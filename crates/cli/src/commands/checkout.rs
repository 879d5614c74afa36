//! Purchase commands: buy one pet, or check out the whole cart.

use pethaven_storefront::checkout::Checkout;
use pethaven_storefront::error::Result;
use pethaven_storefront::listing::Listing;
use pethaven_storefront::state::AppState;

use super::{find_available_pet, parse_pet_id};

/// Buy a single pet immediately, bypassing the cart.
pub async fn buy(state: &AppState, raw_id: &str) -> Result<()> {
    let session = state.require_session()?;
    let pet_id = parse_pet_id(raw_id)?;
    let pet = find_available_pet(state, pet_id).await?;

    let mut checkout = Checkout::new();
    let mut listing = Listing::new(session.store_id, state.config().page_size);

    let order = checkout
        .purchase_one(state.api(), &pet, &mut listing)
        .await?;

    println!("Purchase successful! {} is yours.", pet.name);
    println!("Order {} for {}", order.id, session.customer_name);
    print_remaining(&listing);
    Ok(())
}

/// Purchase everything in the cart as one order.
///
/// The cart is only cleared (and re-persisted) when the purchase
/// succeeds; a failed attempt leaves it intact for editing.
pub async fn checkout_cart(state: &AppState) -> Result<()> {
    let session = state.require_session()?;
    let mut cart = state.storage().load_cart();

    let mut checkout = Checkout::new();
    let mut listing = Listing::new(session.store_id, state.config().page_size);

    let outcome = checkout
        .purchase_cart(state.api(), &mut cart, &mut listing)
        .await;

    match outcome {
        Ok(None) => {
            println!("Cart is empty; nothing to buy");
            Ok(())
        }
        Ok(Some(order)) => {
            state.storage().save_cart(&cart)?;
            println!(
                "Purchase successful! You bought {} pet(s):",
                order.total_pets
            );
            for pet in &order.pets {
                println!("  {}", pet.name);
            }
            println!("Order {} for {}", order.id, session.customer_name);
            print_remaining(&listing);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn print_remaining(listing: &Listing) {
    if let Some(connection) = listing.connection() {
        println!("{} pet(s) still available at your store", connection.total_count);
    }
}

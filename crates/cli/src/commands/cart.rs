//! Cart commands.
//!
//! Every mutation persists the full cart immediately, so the cart
//! survives across invocations the way it survives a browser refresh.

use pethaven_storefront::error::Result;
use pethaven_storefront::state::AppState;

use super::{find_available_pet, parse_pet_id, pet_line};

/// Add an available pet to the cart.
pub async fn add(state: &AppState, raw_id: &str) -> Result<()> {
    let pet_id = parse_pet_id(raw_id)?;
    let pet = find_available_pet(state, pet_id).await?;

    let mut cart = state.storage().load_cart();
    let name = pet.name.clone();
    if cart.add(pet) {
        state.storage().save_cart(&cart)?;
        println!("Added {name} to cart ({} item(s))", cart.len());
    } else {
        println!("{name} is already in the cart");
    }
    Ok(())
}

/// Remove a pet from the cart.
pub fn remove(state: &AppState, raw_id: &str) -> Result<()> {
    let pet_id = parse_pet_id(raw_id)?;

    let mut cart = state.storage().load_cart();
    if cart.remove(&pet_id) {
        state.storage().save_cart(&cart)?;
        println!("Removed from cart ({} item(s) left)", cart.len());
    } else {
        println!("That pet is not in the cart");
    }
    Ok(())
}

/// Print the cart contents.
pub fn show(state: &AppState) -> Result<()> {
    let cart = state.storage().load_cart();

    if cart.is_empty() {
        println!("Cart is empty");
        return Ok(());
    }

    for item in cart.items() {
        println!("{}", pet_line(&item.pet));
    }
    println!("\n{} item(s); run `pethaven checkout` to buy", cart.len());
    Ok(())
}

/// Empty the cart.
pub fn clear(state: &AppState) -> Result<()> {
    let mut cart = state.storage().load_cart();
    cart.clear();
    state.storage().save_cart(&cart)?;
    println!("Cart cleared");
    Ok(())
}

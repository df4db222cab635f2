use leptos::prelude::*;

use crate::components::icons::{BagIcon, CloseIcon, MinusIcon, PlusIcon, TrashIcon};
use crate::state::cart::Cart;
use crate::utils::currency::{inr, inr_exact};

/// The slide-in cart panel. Checkout hands control back to the page, which
/// closes the drawer and scrolls to the booking section.
#[component]
pub fn CartDrawer(
    cart: RwSignal<Cart>,
    show: RwSignal<bool>,
    on_checkout: impl Fn() + 'static + Copy + Send + Sync,
) -> impl IntoView {
    let close = move || show.set(false);

    view! {
        <div class=move || if show.get() { "cart-drawer-overlay show" } else { "cart-drawer-overlay" }>
            <div class="cart-drawer-backdrop" on:click=move |_| close()></div>

            <div class="cart-drawer">
                <div class="cart-drawer__header">
                    <div class="cart-drawer__title">
                        <BagIcon size=24/>
                        <h2>{move || format!("Shopping Cart ({})", cart.with(|c| c.total_items()))}</h2>
                    </div>
                    <button class="cart-drawer__close" on:click=move |_| close()>
                        <CloseIcon size=24/>
                    </button>
                </div>

                {move || {
                    if cart.with(|c| c.is_empty()) {
                        view! {
                            <div class="cart-drawer__empty">
                                <BagIcon size=64 class="cart-drawer__empty-icon"/>
                                <p>"Your cart is empty"</p>
                                <button class="cart-drawer__continue" on:click=move |_| close()>
                                    "Continue Shopping"
                                </button>
                            </div>
                        }
                        .into_any()
                    } else {
                        view! {
                            <div class="cart-drawer__items">
                                {cart
                                    .with(|c| c.items().to_vec())
                                    .into_iter()
                                    .map(|item| {
                                        let id = item.id.clone();
                                        let decrement_id = id.clone();
                                        let increment_id = id.clone();
                                        let remove_id = id.clone();
                                        let quantity = i64::from(item.quantity);

                                        view! {
                                            <div class="cart-item">
                                                {item.image.as_ref().map(|image| view! {
                                                    <img class="cart-item__image" src=image.clone() alt=item.name.clone()/>
                                                })}
                                                <div class="cart-item__details">
                                                    <h3>{item.name.clone()}</h3>
                                                    <p class="cart-item__price">{inr(item.price)}</p>
                                                </div>
                                                <div class="cart-item__quantity">
                                                    <button
                                                        class="cart-item__quantity-button"
                                                        on:click=move |_| {
                                                            cart.update(|c| c.update_quantity(&decrement_id, quantity - 1));
                                                        }
                                                    >
                                                        <MinusIcon size=16/>
                                                    </button>
                                                    <span>{item.quantity}</span>
                                                    <button
                                                        class="cart-item__quantity-button"
                                                        on:click=move |_| {
                                                            cart.update(|c| c.update_quantity(&increment_id, quantity + 1));
                                                        }
                                                    >
                                                        <PlusIcon size=16/>
                                                    </button>
                                                </div>
                                                <button
                                                    class="cart-item__remove"
                                                    on:click=move |_| {
                                                        cart.update(|c| c.remove_item(&remove_id));
                                                    }
                                                >
                                                    <TrashIcon/>
                                                </button>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>

                            <div class="cart-drawer__summary">
                                <div class="cart-drawer__row">
                                    <span>"Subtotal"</span>
                                    <span>{move || inr(cart.with(|c| c.subtotal()))}</span>
                                </div>
                                <div class="cart-drawer__row">
                                    <span>"Tax"</span>
                                    <span>{move || inr_exact(cart.with(|c| c.tax()))}</span>
                                </div>
                                <div class="cart-drawer__row cart-drawer__row--total">
                                    <span>"Total"</span>
                                    <span>{move || inr_exact(cart.with(|c| c.total()))}</span>
                                </div>
                                <button
                                    class="cart-drawer__checkout"
                                    on:click=move |_| {
                                        close();
                                        on_checkout();
                                    }
                                >
                                    "Proceed to Checkout"
                                </button>
                            </div>
                        }
                        .into_any()
                    }
                }}
            </div>
        </div>
    }
}

use leptos::prelude::*;

use crate::catalog::{member_benefits, membership_tiers};
use crate::components::icons::{ClockIcon, CrownIcon, GemIcon, GiftIcon, ShieldIcon, StarIcon};
use crate::state::cart::Cart;
use crate::utils::currency::inr;
use shared_types::CartItem;

fn tier_icon(name: &str) -> impl IntoView {
    match name {
        "Gold" => view! { <CrownIcon size=24/> }.into_any(),
        "Platinum" => view! { <GemIcon size=24/> }.into_any(),
        _ => view! { <StarIcon size=24/> }.into_any(),
    }
}

fn benefit_icon(index: usize) -> impl IntoView {
    match index {
        0 => view! { <GiftIcon size=32/> }.into_any(),
        1 => view! { <ShieldIcon size=32/> }.into_any(),
        _ => view! { <ClockIcon size=32/> }.into_any(),
    }
}

#[component]
pub fn MembershipSection(cart: RwSignal<Cart>) -> impl IntoView {
    view! {
        <section id="membership" class="membership-section">
            <div class="section-container">
                <div class="section-heading">
                    <h2>"Elite Membership Program"</h2>
                    <p>"Join our exclusive membership program and enjoy premium benefits"</p>
                </div>

                <div class="membership-benefits">
                    {member_benefits()
                        .into_iter()
                        .enumerate()
                        .map(|(index, benefit)| {
                            view! {
                                <div class="membership-benefit">
                                    <div class="membership-benefit__icon">{benefit_icon(index)}</div>
                                    <h3>{benefit.title.clone()}</h3>
                                    <p>{benefit.description.clone()}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <div class="membership-tiers">
                    {membership_tiers()
                        .into_iter()
                        .map(|tier| {
                            let name = tier.name.clone();
                            let cart_item = CartItem {
                                id: format!("membership-{}", tier.name.to_lowercase()),
                                name: format!("{} Membership", tier.name),
                                price: tier.price,
                                quantity: 1,
                                image: None,
                                category: Some("Membership".to_string()),
                            };

                            view! {
                                <div class="membership-tier" class=("membership-tier--popular", tier.popular)>
                                    <Show when=move || tier.popular>
                                        <span class="membership-tier__badge">"Popular"</span>
                                    </Show>
                                    <div class="membership-tier__icon">{tier_icon(&tier.name)}</div>
                                    <h3>{tier.name.clone()}</h3>
                                    <div class="membership-tier__price">
                                        <span class="membership-tier__amount">{inr(tier.price)}</span>
                                        <span class="membership-tier__duration">
                                            {format!("/{}", tier.duration)}
                                        </span>
                                    </div>
                                    <ul class="membership-tier__features">
                                        {tier
                                            .features
                                            .iter()
                                            .map(|feature| {
                                                view! {
                                                    <li>
                                                        <StarIcon size=14 class="membership-tier__star"/>
                                                        {feature.clone()}
                                                    </li>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                    <button
                                        class="membership-tier__choose"
                                        on:click=move |_| {
                                            cart.update(|c| c.add_item(cart_item.clone()));
                                        }
                                    >
                                        {format!("Choose {name}")}
                                    </button>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

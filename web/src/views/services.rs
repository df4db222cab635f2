use leptos::prelude::*;

use crate::catalog::service_menu;
use crate::components::icons::CloseIcon;
use crate::utils::currency::inr;
use shared_types::MenuItem;

#[component]
pub fn ServicesSection() -> impl IntoView {
    let selected_item = RwSignal::new(None::<MenuItem>);

    view! {
        <section id="services" class="services-section">
            <div class="section-container">
                <div class="section-heading">
                    <h2>"Hadaza Grooming Studio Services"</h2>
                </div>

                <div class="services-grid">
                    {service_menu()
                        .into_iter()
                        .map(|category| {
                            let accent = category.accent.clone();
                            view! {
                                <div class="service-category">
                                    <div class="service-category__header">
                                        <span
                                            class="service-category__dot"
                                            style=format!("background-color: {accent}")
                                        ></span>
                                        <h3 style=format!("color: {accent}")>{category.name.clone()}</h3>
                                    </div>

                                    {category
                                        .groups
                                        .into_iter()
                                        .map(|group| {
                                            let accent = accent.clone();
                                            view! {
                                                <div class="service-group">
                                                    <h4>{group.name.clone()}</h4>
                                                    {group
                                                        .items
                                                        .into_iter()
                                                        .map(|item| {
                                                            let accent = accent.clone();
                                                            let open_item = item.clone();
                                                            view! {
                                                                <div
                                                                    class="service-row"
                                                                    on:click=move |_| {
                                                                        selected_item.set(Some(open_item.clone()));
                                                                    }
                                                                >
                                                                    <span>{item.name.clone()}</span>
                                                                    <span
                                                                        class="service-row__price"
                                                                        style=format!("color: {accent}")
                                                                    >
                                                                        {inr(item.price)}
                                                                    </span>
                                                                </div>
                                                            }
                                                        })
                                                        .collect::<Vec<_>>()}
                                                </div>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <div class="services-footnote">
                    <p>"* All services include professional consultation"</p>
                    <p>"* Customization available upon request"</p>
                    <p>"* 18% GST applicable on all services"</p>
                </div>
            </div>

            <Show when=move || selected_item.get().is_some()>
                <div class="service-modal-overlay show" on:click=move |_| selected_item.set(None)>
                    {move || {
                        selected_item.get().map(|item| {
                            view! {
                                <div class="service-modal" on:click=move |ev| ev.stop_propagation()>
                                    <button
                                        class="service-modal__close"
                                        on:click=move |_| selected_item.set(None)
                                    >
                                        <CloseIcon size=24/>
                                    </button>
                                    <h2>{item.name.clone()}</h2>
                                    <div class="service-modal__details">
                                        <div>
                                            <p class="service-modal__price">
                                                {format!("Price: {}", inr(item.price))}
                                            </p>
                                            <p class="service-modal__duration">
                                                {format!("Duration: {}", item.duration)}
                                            </p>
                                        </div>
                                        <p class="service-modal__note">
                                            "* All prices are subject to 18% GST"
                                        </p>
                                    </div>
                                </div>
                            }
                        })
                    }}
                </div>
            </Show>
        </section>
    }
}

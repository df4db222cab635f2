use std::time::Duration;

use leptos::prelude::*;

use crate::catalog::hero_backgrounds;
use crate::components::icons::ChevronRightIcon;
use crate::utils::scroll::scroll_to_section;

const ROTATE_EVERY: Duration = Duration::from_secs(5);

#[component]
pub fn HeroSection() -> impl IntoView {
    let current_bg = RwSignal::new(0usize);
    let rotation = StoredValue::new(None::<IntervalHandle>);

    Effect::new(move |_| {
        let handle = set_interval_with_handle(
            move || {
                current_bg.update(|index| *index = (*index + 1) % hero_backgrounds().len());
            },
            ROTATE_EVERY,
        );
        if let Ok(handle) = handle {
            rotation.set_value(Some(handle));
        }
    });

    on_cleanup(move || {
        if let Some(handle) = rotation.get_value() {
            handle.clear();
        }
    });

    view! {
        <div id="home" class="hero">
            {hero_backgrounds()
                .iter()
                .enumerate()
                .map(|(index, url)| {
                    view! {
                        <div
                            class="hero__background"
                            class=("hero__background--visible", move || current_bg.get() == index)
                            style=format!("background-image: url({url})")
                        ></div>
                    }
                })
                .collect::<Vec<_>>()}
            <div class="hero__shade"></div>

            <div class="hero__content">
                <h1>"Unleash Your Inner Showstopper"</h1>
                <p>
                    "Premium grooming and beauty rituals, crafted for you by the Hadaza studio team."
                </p>
                <div class="hero__actions">
                    <button class="hero__cta" on:click=move |_| scroll_to_section("booking")>
                        "Book Appointment"
                        <ChevronRightIcon size=18/>
                    </button>
                    <button
                        class="hero__cta hero__cta--ghost"
                        on:click=move |_| scroll_to_section("services")
                    >
                        "Explore Services"
                    </button>
                </div>
            </div>
        </div>
    }
}

use leptos::prelude::*;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::window;

use crate::catalog::gallery_images;

const INITIAL_SHOTS: usize = 6;

#[component]
pub fn GallerySection() -> impl IntoView {
    let (screen_width, set_screen_width) = signal(1200u32);
    let visible_count = RwSignal::new(INITIAL_SHOTS);

    let images = gallery_images();
    let total = images.len();

    // Responsive column count, like the masonry grids elsewhere on the web.
    let column_count = Memo::new(move |_| {
        let width = screen_width.get();
        if width >= 1100 {
            3
        } else if width >= 700 {
            2
        } else {
            1
        }
    });

    Effect::new(move |_| {
        if let Some(win) = window() {
            let width = win
                .inner_width()
                .ok()
                .and_then(|w| w.as_f64())
                .unwrap_or(1200.0) as u32;
            set_screen_width.set(width);

            let resize_closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
                if let Some(win) = window() {
                    let width = win
                        .inner_width()
                        .ok()
                        .and_then(|w| w.as_f64())
                        .unwrap_or(1200.0) as u32;
                    set_screen_width.set(width);
                }
            }) as Box<dyn FnMut(_)>);

            win.add_event_listener_with_callback(
                "resize",
                resize_closure.as_ref().unchecked_ref(),
            )
            .ok();
            resize_closure.forget();
        }
    });

    view! {
        <section id="gallery" class="gallery-section">
            <div class="section-container">
                <div class="section-heading">
                    <h2>"Our Transformations"</h2>
                    <p>"Witness the magic of our expert stylists through these stunning transformations."</p>
                </div>

                <div
                    class="gallery-grid"
                    style:column-count=move || column_count.get().to_string()
                >
                    {move || {
                        images
                            .iter()
                            .take(visible_count.get())
                            .map(|image| {
                                let orientation_class = match image.orientation {
                                    shared_types::Orientation::Portrait => {
                                        "gallery-shot gallery-shot--portrait"
                                    }
                                    shared_types::Orientation::Landscape => {
                                        "gallery-shot gallery-shot--landscape"
                                    }
                                };
                                view! {
                                    <div class=orientation_class>
                                        <img src=image.url.clone() alt="Gallery Image"/>
                                        <div class="gallery-shot__caption">
                                            {image.client.clone().unwrap_or_else(|| "Untitled".to_string())}
                                        </div>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>

                <Show when=move || visible_count.get() < total>
                    <div class="gallery-load-more">
                        <button
                            class="gallery-load-more__button"
                            on:click=move |_| visible_count.update(|count| *count += INITIAL_SHOTS)
                        >
                            "Load More"
                        </button>
                    </div>
                </Show>
            </div>
        </section>
    }
}

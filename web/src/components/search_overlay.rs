use std::time::Duration;

use leptos::prelude::*;

use crate::catalog::search_index;
use crate::components::icons::{ArrowRightIcon, CloseIcon, SearchIcon};
use crate::state::search::{search, should_search};
use crate::utils::currency::inr;
use shared_types::SearchResult;

/// Full-screen search over the hard-coded index. The half-second delay
/// imitates a round trip; teardown cancels anything still pending.
#[component]
pub fn SearchOverlay(show: RwSignal<bool>) -> impl IntoView {
    let query = RwSignal::new(String::new());
    let results = RwSignal::new(Vec::<SearchResult>::new());
    let loading = RwSignal::new(false);

    let index = StoredValue::new(search_index());
    let pending = StoredValue::new(None::<TimeoutHandle>);

    let cancel_pending = move || {
        if let Some(handle) = pending.get_value() {
            handle.clear();
            pending.set_value(None);
        }
    };

    Effect::new(move |_| {
        let current = query.get();

        cancel_pending();
        if !should_search(&current) {
            results.set(Vec::new());
            loading.set(false);
            return;
        }

        loading.set(true);
        let handle = set_timeout_with_handle(
            move || {
                pending.set_value(None);
                let found = index.with_value(|index| {
                    search(index, &current).into_iter().cloned().collect::<Vec<_>>()
                });
                results.set(found);
                loading.set(false);
            },
            Duration::from_millis(500),
        );
        if let Ok(handle) = handle {
            pending.set_value(Some(handle));
        }
    });

    on_cleanup(cancel_pending);

    let close = move || {
        query.set(String::new());
        show.set(false);
    };

    view! {
        <div class=move || if show.get() { "search-overlay show" } else { "search-overlay" }>
            <div class="search-overlay__backdrop" on:click=move |_| close()></div>

            <div class="search-overlay__panel">
                <div class="search-overlay__input-row">
                    <SearchIcon size=24 class="search-overlay__input-icon"/>
                    <input
                        type="search"
                        class="search-overlay__input"
                        placeholder="Search services, products, or articles..."
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                    <button class="search-overlay__close" on:click=move |_| close()>
                        <CloseIcon size=24/>
                    </button>
                </div>

                <div class="search-overlay__results">
                    {move || {
                        if loading.get() {
                            view! {
                                <div class="search-overlay__loading">
                                    <div class="loading-spinner"></div>
                                </div>
                            }
                            .into_any()
                        } else if !results.get().is_empty() {
                            view! {
                                <div class="search-overlay__list">
                                    {results
                                        .get()
                                        .into_iter()
                                        .map(|result| {
                                            let kind_class = format!(
                                                "search-result__kind search-result__kind--{}",
                                                result.kind.label().to_lowercase()
                                            );
                                            view! {
                                                <div class="search-result" on:click=move |_| close()>
                                                    {result.image.as_ref().map(|image| view! {
                                                        <img class="search-result__image" src=image.clone() alt=result.title.clone()/>
                                                    })}
                                                    <div class="search-result__body">
                                                        <div class="search-result__meta">
                                                            <span class=kind_class>{result.kind.label()}</span>
                                                            {result.price.map(|price| view! {
                                                                <span class="search-result__price">{inr(price)}</span>
                                                            })}
                                                        </div>
                                                        <h3>{result.title.clone()}</h3>
                                                        <p>{result.description.clone()}</p>
                                                    </div>
                                                    <ArrowRightIcon class="search-result__arrow"/>
                                                </div>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                            .into_any()
                        } else if should_search(&query.get()) {
                            view! {
                                <div class="search-overlay__hint">
                                    {format!("No results found for \"{}\"", query.get())}
                                </div>
                            }
                            .into_any()
                        } else {
                            view! {
                                <div class="search-overlay__hint">"Start typing to search..."</div>
                            }
                            .into_any()
                        }
                    }}
                </div>
            </div>
        </div>
    }
}

use leptos::prelude::*;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::window;

use crate::catalog::menu_sections;
use crate::components::icons::{BagIcon, CloseIcon, LogOutIcon, MenuIcon, SearchIcon, UserIcon};
use crate::state::{auth::AuthSession, cart::Cart};
use crate::utils::scroll::scroll_to_section;

#[component]
pub fn Navbar(
    cart: RwSignal<Cart>,
    session: RwSignal<AuthSession>,
    show_cart: RwSignal<bool>,
    show_auth: RwSignal<bool>,
    show_search: RwSignal<bool>,
) -> impl IntoView {
    let scrolled = RwSignal::new(false);
    let active_section = RwSignal::new("home".to_string());
    let show_user_menu = RwSignal::new(false);
    let mobile_open = RwSignal::new(false);

    // Track scroll position to restyle the bar and highlight the section
    // currently in view. This observable never feeds business state.
    Effect::new(move |_| {
        if let Some(win) = window() {
            let on_scroll = Closure::wrap(Box::new(move |_: web_sys::Event| {
                let Some(win) = window() else {
                    return;
                };
                let y = win.scroll_y().unwrap_or(0.0);
                scrolled.set(y > 50.0);

                if let Some(document) = win.document() {
                    for (id, _) in menu_sections().iter().rev() {
                        if let Some(element) = document.get_element_by_id(id) {
                            if element.get_bounding_client_rect().top() <= 100.0 {
                                if active_section.get_untracked() != *id {
                                    active_section.set((*id).to_string());
                                }
                                break;
                            }
                        }
                    }
                }
            }) as Box<dyn FnMut(_)>);

            win.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
                .ok();
            // The navbar lives for the whole page; the listener can too.
            on_scroll.forget();
        }
    });

    let go_to = move |id: &'static str| {
        scroll_to_section(id);
        mobile_open.set(false);
    };

    let cart_count = move || cart.with(|c| c.total_items());

    let handle_user_click = move |_| {
        if session.with(|s| s.is_logged_in()) {
            show_user_menu.update(|open| *open = !*open);
        } else {
            show_auth.set(true);
        }
    };

    let log_out = move |_| {
        session.update(|s| s.log_out());
        show_user_menu.set(false);
    };

    view! {
        <nav class=move || if scrolled.get() { "navbar navbar--scrolled" } else { "navbar" }>
            <div class="navbar__container">
                <div class="navbar__brand" on:click=move |_| go_to("home")>
                    <h1 class="navbar__logo">"Hadaza"</h1>
                </div>

                <div class="navbar__links">
                    {menu_sections()
                        .iter()
                        .map(|(id, label)| {
                            let id = *id;
                            view! {
                                <a
                                    class="navbar__link"
                                    class=("navbar__link--active", move || active_section.get() == id)
                                    on:click=move |_| go_to(id)
                                >
                                    {*label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <div class="navbar__actions">
                    <button
                        class="navbar__icon-button"
                        on:click=move |_| show_search.update(|open| *open = !*open)
                    >
                        <SearchIcon/>
                    </button>

                    <div class="navbar__user">
                        <button class="navbar__icon-button" on:click=handle_user_click>
                            <UserIcon/>
                        </button>

                        <Show when=move || show_user_menu.get() && session.with(|s| s.is_logged_in())>
                            <div class="navbar__user-menu">
                                {move || {
                                    session.with(|s| {
                                        s.profile().map(|profile| {
                                            view! {
                                                <div class="navbar__user-info">
                                                    <p class="navbar__user-name">{profile.name.clone()}</p>
                                                    <p class="navbar__user-email">{profile.email.clone()}</p>
                                                </div>
                                            }
                                        })
                                    })
                                }}
                                <button class="navbar__sign-out" on:click=log_out>
                                    <LogOutIcon size=16/>
                                    "Sign out"
                                </button>
                            </div>
                        </Show>
                    </div>

                    <button class="navbar__icon-button navbar__cart-button" on:click=move |_| show_cart.set(true)>
                        <BagIcon/>
                        <Show when=move || cart_count() > 0>
                            <span class="navbar__cart-badge">{cart_count}</span>
                        </Show>
                    </button>

                    <button class="navbar__cta" on:click=move |_| go_to("booking")>
                        "Book Now"
                    </button>
                </div>

                <div class="navbar__mobile-toggle">
                    <button
                        class="navbar__icon-button"
                        on:click=move |_| mobile_open.update(|open| *open = !*open)
                    >
                        {move || {
                            if mobile_open.get() {
                                view! { <CloseIcon size=24/> }.into_any()
                            } else {
                                view! { <MenuIcon size=24/> }.into_any()
                            }
                        }}
                    </button>
                </div>
            </div>
        </nav>

        <Show when=move || mobile_open.get()>
            <div class="mobile-menu">
                <div class="mobile-menu__backdrop" on:click=move |_| mobile_open.set(false)></div>
                <div class="mobile-menu__panel">
                    <div class="mobile-menu__header">
                        <h2>"Menu"</h2>
                        <button class="navbar__icon-button" on:click=move |_| mobile_open.set(false)>
                            <CloseIcon/>
                        </button>
                    </div>

                    <div class="mobile-menu__links">
                        {menu_sections()
                            .iter()
                            .map(|(id, label)| {
                                let id = *id;
                                view! {
                                    <a
                                        class="mobile-menu__link"
                                        class=("mobile-menu__link--active", move || active_section.get() == id)
                                        on:click=move |_| go_to(id)
                                    >
                                        {*label}
                                    </a>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>

                    {move || {
                        if session.with(|s| s.is_logged_in()) {
                            let profile = session.with(|s| s.profile().cloned());
                            view! {
                                <div class="mobile-menu__account">
                                    {profile.map(|profile| view! {
                                        <div class="navbar__user-info">
                                            <p class="navbar__user-name">{profile.name}</p>
                                            <p class="navbar__user-email">{profile.email}</p>
                                        </div>
                                    })}
                                    <button class="mobile-menu__sign-out" on:click=log_out>
                                        <LogOutIcon size=16/>
                                        "Sign out"
                                    </button>
                                </div>
                            }
                            .into_any()
                        } else {
                            view! {
                                <button
                                    class="mobile-menu__sign-in"
                                    on:click=move |_| {
                                        mobile_open.set(false);
                                        show_auth.set(true);
                                    }
                                >
                                    <UserIcon size=16/>
                                    "Sign in"
                                </button>
                            }
                            .into_any()
                        }
                    }}

                    <button class="mobile-menu__cta" on:click=move |_| go_to("booking")>
                        "Book Now"
                    </button>
                </div>
            </div>
        </Show>
    }
}

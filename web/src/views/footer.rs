use leptos::prelude::*;

use crate::utils::scroll::scroll_to_section;

#[component]
pub fn SiteFooter() -> impl IntoView {
    let quick_links = [
        ("about", "About Us"),
        ("services", "Services"),
        ("gallery", "Gallery"),
        ("contact", "Contact"),
    ];

    let hours = [
        ("Monday - Friday", "9:00 AM - 8:00 PM"),
        ("Saturday", "9:00 AM - 8:00 PM"),
        ("Sunday", "Closed"),
    ];

    view! {
        <footer class="site-footer">
            <div class="section-container">
                <div class="site-footer__grid">
                    <div class="site-footer__about">
                        <h2 class="site-footer__logo">"Hadaza"</h2>
                        <p>
                            "Bringing out your inner showstopper with our premium grooming services. \
                             Experience luxury and transform your look with our expert stylists."
                        </p>
                    </div>

                    <div class="site-footer__column">
                        <h3>"Quick Links"</h3>
                        <ul>
                            {quick_links
                                .into_iter()
                                .map(|(id, label)| {
                                    view! {
                                        <li>
                                            <a on:click=move |_| scroll_to_section(id)>{label}</a>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    </div>

                    <div class="site-footer__column">
                        <h3>"Opening Hours"</h3>
                        <ul>
                            {hours
                                .into_iter()
                                .map(|(days, times)| {
                                    view! {
                                        <li class="site-footer__hours">
                                            <span>{days}</span>
                                            <span>{times}</span>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    </div>
                </div>

                <div class="site-footer__bottom">
                    <p>"\u{a9} 2024 Hadaza Grooming Studio. All rights reserved."</p>
                </div>
            </div>
        </footer>
    }
}

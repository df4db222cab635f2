use leptos::prelude::*;

use crate::catalog::seed_cart;
use crate::components::{AuthModal, CartDrawer, Navbar, SearchOverlay};
use crate::state::{auth::AuthSession, cart::Cart};
use crate::utils::scroll::scroll_to_section;
use crate::views::about::AboutSection;
use crate::views::blog::BlogSection;
use crate::views::booking::BookingSection;
use crate::views::contact::ContactSection;
use crate::views::footer::SiteFooter;
use crate::views::gallery::GallerySection;
use crate::views::hero::HeroSection;
use crate::views::membership::MembershipSection;
use crate::views::services::ServicesSection;

/// The single page. Owns the state shared across sections: the cart, the
/// mock session, and which overlay is open.
#[component]
pub fn HomePage() -> impl IntoView {
    let cart = RwSignal::new(Cart::new(seed_cart()));
    let session = RwSignal::new(AuthSession::default());
    let show_cart = RwSignal::new(false);
    let show_auth = RwSignal::new(false);
    let show_search = RwSignal::new(false);

    let checkout = move || scroll_to_section("booking");

    view! {
        <Navbar
            cart=cart
            session=session
            show_cart=show_cart
            show_auth=show_auth
            show_search=show_search
        />

        <HeroSection/>
        <AboutSection/>
        <ServicesSection/>
        <GallerySection/>
        <BookingSection cart=cart/>
        <MembershipSection cart=cart/>
        <BlogSection/>
        <ContactSection/>
        <SiteFooter/>

        <CartDrawer cart=cart show=show_cart on_checkout=checkout/>
        <AuthModal show=show_auth session=session/>
        <SearchOverlay show=show_search/>
    }
}

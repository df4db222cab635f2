use leptos::prelude::*;
use thaw::*;

use crate::catalog::contact_cards;
use crate::components::icons::{ClockIcon, MailIcon, MapPinIcon, PhoneIcon};

fn card_icon(title: &str) -> impl IntoView {
    match title {
        "Visit Us" => view! { <MapPinIcon size=24/> }.into_any(),
        "Call Us" => view! { <PhoneIcon size=24/> }.into_any(),
        "Email Us" => view! { <MailIcon size=24/> }.into_any(),
        _ => view! { <ClockIcon size=24/> }.into_any(),
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let sent = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        name.set(String::new());
        email.set(String::new());
        message.set(String::new());
        sent.set(true);
    };

    view! {
        <section id="contact" class="contact-section">
            <div class="section-container">
                <div class="section-heading">
                    <h2>"Get in Touch"</h2>
                    <p>"We'd love to hear from you. Book an appointment or simply drop by for a consultation."</p>
                </div>

                <div class="contact-grid">
                    <div class="contact-cards">
                        {contact_cards()
                            .iter()
                            .map(|(title, content)| {
                                view! {
                                    <div class="contact-card">
                                        <div class="contact-card__icon">{card_icon(title)}</div>
                                        <h3>{*title}</h3>
                                        <p>{*content}</p>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>

                    <div class="contact-form">
                        <form on:submit=submit>
                            <div class="contact-form__row">
                                <div class="contact-form__group">
                                    <label>"Name"</label>
                                    <Input placeholder="Your name" value=name/>
                                </div>
                                <div class="contact-form__group">
                                    <label>"Email"</label>
                                    <Input
                                        placeholder="your@email.com"
                                        input_type=InputType::Email
                                        value=email
                                    />
                                </div>
                            </div>
                            <div class="contact-form__group">
                                <label>"Message"</label>
                                <Textarea placeholder="How can we help?" value=message/>
                            </div>

                            <Show when=move || sent.get()>
                                <p class="contact-form__thanks">
                                    "Thanks for reaching out! We'll get back to you shortly."
                                </p>
                            </Show>

                            <Button
                                class="contact-form__submit"
                                button_type=ButtonType::Submit
                                appearance=ButtonAppearance::Primary
                            >
                                "Send Message"
                            </Button>
                        </form>
                    </div>
                </div>
            </div>
        </section>
    }
}

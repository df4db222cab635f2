use std::time::Duration;

use chrono::Datelike;
use leptos::prelude::*;
use thaw::*;

use crate::catalog::{booking_services, time_slots};
use crate::components::icons::{CalendarIcon, ClockIcon, SparklesIcon};
use crate::state::booking::{Booking, BookingPhase};
use crate::state::cart::Cart;
use crate::utils::currency::{inr, inr_exact};
use crate::utils::dates::{calendar_days, format_long, month_title, shift_month, today};

const CONFIRM_DELAY: Duration = Duration::from_secs(3);
const CELEBRATION_DURATION: Duration = Duration::from_secs(5);

#[component]
pub fn BookingSection(cart: RwSignal<Cart>) -> impl IntoView {
    let booking = RwSignal::new(Booking::new(today()));
    let month_offset = RwSignal::new(0i32);
    let show_celebration = RwSignal::new(false);

    // Pending mock-network and celebration timers; cleared on teardown so a
    // dismounted section never touches its signals again.
    let submit_handle = StoredValue::new(None::<TimeoutHandle>);
    let celebrate_handle = StoredValue::new(None::<TimeoutHandle>);

    on_cleanup(move || {
        if let Some(handle) = submit_handle.get_value() {
            handle.clear();
        }
        if let Some(handle) = celebrate_handle.get_value() {
            handle.clear();
        }
    });

    let services = booking_services();

    let request_confirmation = move |_| {
        if booking.with(|b| b.can_confirm()) {
            booking.update(|b| {
                b.open_confirmation().ok();
            });
        } else if let Some(window) = web_sys::window() {
            window
                .alert_with_message("Please select a service and time before proceeding!")
                .ok();
        }
    };

    let confirm_booking = move |_| {
        let started = booking.with_untracked(|b| b.phase() == BookingPhase::AwaitingConfirmation);
        if !started {
            return;
        }
        booking.update(|b| {
            b.begin_submit().ok();
        });

        let handle = set_timeout_with_handle(
            move || {
                submit_handle.set_value(None);
                booking.update(|b| b.complete_submit());
                show_celebration.set(true);

                let cleanup = set_timeout_with_handle(
                    move || {
                        celebrate_handle.set_value(None);
                        show_celebration.set(false);
                        booking.update(|b| b.acknowledge());
                    },
                    CELEBRATION_DURATION,
                );
                if let Ok(cleanup) = cleanup {
                    celebrate_handle.set_value(Some(cleanup));
                }
            },
            CONFIRM_DELAY,
        );
        if let Ok(handle) = handle {
            submit_handle.set_value(Some(handle));
        }
    };

    let selected_service_name = move || {
        booking.with(|b| {
            b.service_id()
                .and_then(|id| booking_services().into_iter().find(|s| s.id == id))
                .map(|s| s.name)
                .unwrap_or_else(|| "your service".to_string())
        })
    };

    let show_modal = move || {
        booking.with(|b| {
            matches!(
                b.phase(),
                BookingPhase::AwaitingConfirmation | BookingPhase::Submitting
            )
        })
    };

    view! {
        <section id="booking" class="booking-section">
            <Show when=move || show_celebration.get()>
                <div class="celebration-overlay">
                    <div class="celebration-overlay__burst"></div>
                    <div class="celebration-overlay__message">
                        <SparklesIcon size=32/>
                        <p>"Your appointment is booked!"</p>
                    </div>
                </div>
            </Show>

            <div class="section-container">
                <div class="section-heading">
                    <h2>"Book Your Appointment"</h2>
                    <p>
                        "Transform your look with our expert stylists. Choose your preferred service, date, and time."
                    </p>
                </div>

                <div class="booking-grid">
                    <div class="booking-card">
                        <h3 class="booking-card__title">
                            <SparklesIcon class="booking-card__title-icon"/>
                            "Select Service"
                        </h3>
                        <div class="booking-services">
                            {services
                                .into_iter()
                                .map(|service| {
                                    let id = service.id.clone();
                                    let select_id = service.id.clone();
                                    view! {
                                        <div
                                            class="booking-service"
                                            class=("booking-service--selected", move || {
                                                booking.with(|b| b.service_id() == Some(id.as_str()))
                                            })
                                            on:click=move |_| {
                                                booking.update(|b| b.select_service(select_id.clone()));
                                            }
                                        >
                                            <div>
                                                <h4>{service.name.clone()}</h4>
                                                <p class="booking-service__duration">
                                                    {format!("Duration: {}", service.duration)}
                                                </p>
                                            </div>
                                            <p class="booking-service__price">{inr(service.price)}</p>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>

                    <div class="booking-card">
                        <h3 class="booking-card__title">
                            <CalendarIcon class="booking-card__title-icon"/>
                            "Select Date & Time"
                        </h3>

                        <div class="booking-calendar">
                            <div class="booking-calendar__header">
                                <Button
                                    appearance=ButtonAppearance::Secondary
                                    size=ButtonSize::Small
                                    on_click=move |_| month_offset.update(|v| *v -= 1)
                                    disabled=Signal::derive(move || month_offset.get() <= 0)
                                >
                                    "\u{2190}"
                                </Button>

                                <div class="booking-calendar__month">
                                    {move || {
                                        let base = booking.with(|b| b.today());
                                        let (year, month) =
                                            shift_month(base.year(), base.month(), month_offset.get());
                                        month_title(year, month)
                                    }}
                                </div>

                                <Button
                                    appearance=ButtonAppearance::Secondary
                                    size=ButtonSize::Small
                                    on_click=move |_| month_offset.update(|v| *v += 1)
                                    disabled=Signal::derive(move || month_offset.get() >= 3)
                                >
                                    "\u{2192}"
                                </Button>
                            </div>

                            <div class="booking-calendar__weekdays">
                                {["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]
                                    .into_iter()
                                    .map(|day| view! { <div class="booking-calendar__weekday">{day}</div> })
                                    .collect::<Vec<_>>()}
                            </div>

                            <div class="booking-calendar__days">
                                {move || {
                                    let base = booking.with(|b| b.today());
                                    let (year, month) =
                                        shift_month(base.year(), base.month(), month_offset.get());
                                    let selected = booking.with(|b| b.date());

                                    calendar_days(year, month)
                                        .into_iter()
                                        .map(|cell| match cell {
                                            Some(date) => {
                                                let is_past = date < base;
                                                let is_selected = date == selected;
                                                view! {
                                                    <button
                                                        class="booking-calendar__day"
                                                        class=("booking-calendar__day--past", is_past)
                                                        class=("booking-calendar__day--selected", is_selected)
                                                        disabled=is_past
                                                        on:click=move |_| {
                                                            booking.update(|b| b.select_date(date));
                                                        }
                                                    >
                                                        {date.day()}
                                                    </button>
                                                }
                                                .into_any()
                                            }
                                            None => view! {
                                                <div class="booking-calendar__day booking-calendar__day--empty"></div>
                                            }
                                            .into_any(),
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </div>
                        </div>

                        <div class="booking-slots">
                            <h4 class="booking-slots__title">
                                <ClockIcon size=16 class="booking-slots__title-icon"/>
                                "Available Time Slots"
                            </h4>
                            <div class="booking-slots__grid">
                                {time_slots()
                                    .iter()
                                    .map(|slot| {
                                        let slot = *slot;
                                        view! {
                                            <button
                                                class="booking-slot"
                                                class=("booking-slot--selected", move || {
                                                    booking.with(|b| b.time_slot() == Some(slot))
                                                })
                                                on:click=move |_| {
                                                    booking.update(|b| b.select_time(slot));
                                                }
                                            >
                                                {slot}
                                            </button>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        </div>

                        <button
                            class="booking-confirm"
                            class=("booking-confirm--ready", move || booking.with(|b| b.can_confirm()))
                            on:click=request_confirmation
                        >
                            "Confirm Booking"
                        </button>
                    </div>
                </div>
            </div>

            <Show when=show_modal>
                <div class="booking-modal-overlay show">
                    <div class="booking-modal">
                        <h3>"Confirm Booking"</h3>
                        <p class="booking-modal__summary">
                            "You're booking a "
                            <strong>{selected_service_name}</strong>
                            " on "
                            <strong>{move || booking.with(|b| format_long(b.date()))}</strong>
                            " at "
                            <strong>
                                {move || booking.with(|b| b.time_slot().unwrap_or("").to_string())}
                            </strong>
                            "."
                        </p>
                        <Show when=move || cart.with(|c| !c.is_empty())>
                            <p class="booking-modal__cart-note">
                                {move || {
                                    cart.with(|c| {
                                        format!(
                                            "Your cart ({} items, {}) will be settled at the studio.",
                                            c.total_items(),
                                            inr_exact(c.total()),
                                        )
                                    })
                                }}
                            </p>
                        </Show>
                        <div class="booking-modal__actions">
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| booking.update(|b| b.close_confirmation())
                                disabled=Signal::derive(move || {
                                    booking.with(|b| b.phase() == BookingPhase::Submitting)
                                })
                            >
                                "Cancel"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Primary
                                loading=Signal::derive(move || {
                                    booking.with(|b| b.phase() == BookingPhase::Submitting)
                                })
                                on_click=confirm_booking
                            >
                                {move || {
                                    if booking.with(|b| b.phase() == BookingPhase::Submitting) {
                                        "Booking..."
                                    } else {
                                        "Confirm"
                                    }
                                }}
                            </Button>
                        </div>
                    </div>
                </div>
            </Show>
        </section>
    }
}

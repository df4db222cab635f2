use leptos::prelude::*;
use thaw::*;

use crate::components::icons::{CloseIcon, EyeIcon, EyeOffIcon, LockIcon, MailIcon, UserIcon};
use crate::state::auth::{profile_from_email, validate, AuthErrors, AuthFields, AuthMode, AuthSession};
use shared_types::UserProfile;

/// Sign-in / sign-up dialog. Validation is shape-only; a passing form
/// simply fabricates a profile for the session.
#[component]
pub fn AuthModal(show: RwSignal<bool>, session: RwSignal<AuthSession>) -> impl IntoView {
    let mode = RwSignal::new(AuthMode::Login);
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let password_visible = RwSignal::new(false);
    let errors = RwSignal::new(AuthErrors::default());

    let reset_form = move || {
        name.set(String::new());
        email.set(String::new());
        password.set(String::new());
        password_visible.set(false);
        errors.set(AuthErrors::default());
    };

    let close_modal = move || {
        reset_form();
        mode.set(AuthMode::Login);
        show.set(false);
    };

    let submit = move || {
        let fields = AuthFields {
            name: name.get(),
            email: email.get(),
            password: password.get(),
        };

        let current_mode = mode.get();
        let validation = validate(current_mode, &fields);
        if !validation.is_empty() {
            errors.set(validation);
            return;
        }

        let profile = match current_mode {
            AuthMode::Login => profile_from_email(&fields.email),
            AuthMode::Register => UserProfile {
                name: fields.name,
                email: fields.email,
            },
        };
        session.update(|s| s.log_in(profile));
        close_modal();
    };

    let toggle_mode = move |_| {
        mode.update(|m| {
            *m = match m {
                AuthMode::Login => AuthMode::Register,
                AuthMode::Register => AuthMode::Login,
            }
        });
        errors.set(AuthErrors::default());
    };

    view! {
        <div class=move || if show.get() { "auth-modal-overlay show" } else { "auth-modal-overlay" }>
            <div class="auth-modal">
                <button class="auth-modal__close" on:click=move |_| close_modal()>
                    <CloseIcon size=24/>
                </button>

                <div class="auth-modal__body">
                    <h2 class="auth-modal__title">
                        {move || match mode.get() {
                            AuthMode::Login => "Welcome Back",
                            AuthMode::Register => "Create Account",
                        }}
                    </h2>

                    <form on:submit=move |ev| {
                        ev.prevent_default();
                        submit();
                    }>
                        <Show when=move || mode.get() == AuthMode::Register>
                            <div class="auth-form-group">
                                <label>"Name"</label>
                                <div class="auth-input-wrapper">
                                    <span class="auth-input-icon">
                                        <UserIcon/>
                                    </span>
                                    <Input
                                        class="auth-input"
                                        placeholder="Enter your name"
                                        value=name
                                    />
                                </div>
                                {move || errors.get().name.map(|msg| view! {
                                    <p class="auth-field-error">{msg}</p>
                                })}
                            </div>
                        </Show>

                        <div class="auth-form-group">
                            <label>"Email"</label>
                            <div class="auth-input-wrapper">
                                <span class="auth-input-icon">
                                    <MailIcon/>
                                </span>
                                <Input
                                    class="auth-input"
                                    placeholder="Enter your email"
                                    input_type=InputType::Email
                                    value=email
                                />
                            </div>
                            {move || errors.get().email.map(|msg| view! {
                                <p class="auth-field-error">{msg}</p>
                            })}
                        </div>

                        <div class="auth-form-group">
                            <label>"Password"</label>
                            <div class="auth-input-wrapper">
                                <span class="auth-input-icon">
                                    <LockIcon/>
                                </span>
                                <Input
                                    class="auth-input"
                                    placeholder="Enter your password"
                                    input_type=Signal::derive(move || {
                                        if password_visible.get() { InputType::Text } else { InputType::Password }
                                    })
                                    value=password
                                />
                                <button
                                    type="button"
                                    class="auth-password-toggle"
                                    on:click=move |_| password_visible.set(!password_visible.get())
                                >
                                    {move || if password_visible.get() {
                                        view! { <EyeOffIcon/> }.into_any()
                                    } else {
                                        view! { <EyeIcon/> }.into_any()
                                    }}
                                </button>
                            </div>
                            {move || errors.get().password.map(|msg| view! {
                                <p class="auth-field-error">{msg}</p>
                            })}
                        </div>

                        <Show when=move || mode.get() == AuthMode::Login>
                            <div class="auth-modal__forgot">
                                <button type="button" class="auth-modal__forgot-link">
                                    "Forgot password?"
                                </button>
                            </div>
                        </Show>

                        <Button
                            class="auth-submit-btn"
                            button_type=ButtonType::Submit
                            appearance=ButtonAppearance::Primary
                        >
                            {move || match mode.get() {
                                AuthMode::Login => "Sign In",
                                AuthMode::Register => "Create Account",
                            }}
                        </Button>
                    </form>

                    <div class="auth-modal__footer">
                        <p>
                            {move || match mode.get() {
                                AuthMode::Login => "Don't have an account?",
                                AuthMode::Register => "Already have an account?",
                            }}
                            <button class="auth-modal__switch" on:click=toggle_mode>
                                {move || match mode.get() {
                                    AuthMode::Login => "Sign Up",
                                    AuthMode::Register => "Sign In",
                                }}
                            </button>
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}

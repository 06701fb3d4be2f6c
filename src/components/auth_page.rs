//! Auth Page Component
//!
//! Mode machine for the unauthenticated view: login, register and
//! forgot-password share the card; switching is only ever triggered by
//! the navigation links at the bottom.

use leptos::prelude::*;

use crate::components::{ForgotForm, LoginForm, RegisterForm};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
    Forgot,
}

impl AuthMode {
    fn title(self) -> &'static str {
        match self {
            AuthMode::Login => "Sign in",
            AuthMode::Register => "Create account",
            AuthMode::Forgot => "Reset password",
        }
    }
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let (mode, set_mode) = signal(AuthMode::Login);
    let (notice, set_notice) = signal(String::new());

    // Mode switches clear any lingering confirmation
    let go = move |next: AuthMode| {
        set_notice.set(String::new());
        set_mode.set(next);
    };

    let on_registered = Callback::new(move |_| {
        set_notice.set("Account created. You can now sign in.".to_string());
        set_mode.set(AuthMode::Login);
    });

    let on_reset_requested = Callback::new(move |_| {
        set_notice.set("If that address exists, a reset link is on its way.".to_string());
        set_mode.set(AuthMode::Login);
    });

    view! {
        <div class="auth-card">
            <h2>{move || mode.get().title()}</h2>

            <Show when=move || !notice.get().is_empty()>
                <div class="auth-notice">{move || notice.get()}</div>
            </Show>

            {move || match mode.get() {
                AuthMode::Login => view! { <LoginForm/> }.into_any(),
                AuthMode::Register => {
                    view! { <RegisterForm on_registered=on_registered/> }.into_any()
                }
                AuthMode::Forgot => {
                    view! { <ForgotForm on_requested=on_reset_requested/> }.into_any()
                }
            }}

            {move || match mode.get() {
                AuthMode::Login => view! {
                    <div class="auth-links">
                        <a href="#" on:click=move |ev| {
                            ev.prevent_default();
                            go(AuthMode::Register);
                        }>"Create account"</a>
                        <a href="#" on:click=move |ev| {
                            ev.prevent_default();
                            go(AuthMode::Forgot);
                        }>"Forgot password?"</a>
                    </div>
                }
                .into_any(),
                _ => view! {
                    <div class="auth-links">
                        <a href="#" on:click=move |ev| {
                            ev.prevent_default();
                            go(AuthMode::Login);
                        }>"Back to sign in"</a>
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}

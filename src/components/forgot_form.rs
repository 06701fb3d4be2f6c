//! Forgot Password Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::validation::validate_forgot;

/// Password-reset request form.
///
/// # Arguments
/// * `on_requested` - Raised after the backend accepted the request.
#[component]
pub fn ForgotForm(#[prop(into)] on_requested: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let (email, set_email) = signal(String::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get() {
            return;
        }
        let address = email.get();
        if let Err(msg) = validate_forgot(&address) {
            set_error.set(msg);
            return;
        }
        set_loading.set(true);
        set_error.set(String::new());

        let ctx = ctx.clone();
        spawn_local(async move {
            let api = ctx.api.get_untracked();
            match api.request_password_reset(address.trim()).await {
                // Switches back to login mode, unmounting this form
                Ok(()) => on_requested.run(()),
                Err(err) => {
                    set_error.set(err.user_message());
                    set_loading.set(false);
                }
            }
        });
    };

    view! {
        <form class="auth-form" on:submit=submit>
            <Show when=move || !error.get().is_empty()>
                <div class="auth-error">{move || error.get()}</div>
            </Show>
            <input
                type="email"
                placeholder="Email address"
                prop:value=move || email.get()
                on:input=move |ev| set_email.set(event_target_value(&ev))
            />
            <button type="submit" disabled=move || loading.get()>
                {move || if loading.get() { "Sending..." } else { "Send reset link" }}
            </button>
        </form>
    }
}

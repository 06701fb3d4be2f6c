//! Login Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::validation::validate_login;

/// Username/password form. Validation runs before the network call; a
/// successful login stores the token and flips the session gate.
#[component]
pub fn LoginForm() -> impl IntoView {
    let ctx = use_app_context();
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get() {
            return;
        }
        let user = username.get();
        let pass = password.get();
        if let Err(msg) = validate_login(&user, &pass) {
            set_error.set(msg);
            return;
        }
        set_loading.set(true);
        set_error.set(String::new());

        let ctx = ctx.clone();
        spawn_local(async move {
            let api = ctx.api.get_untracked();
            match api.login(user.trim(), &pass).await {
                // The gate unmounts this form; don't touch signals after
                Ok(token) => ctx.login_succeeded(token),
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
                type="text"
                placeholder="Username"
                prop:value=move || username.get()
                on:input=move |ev| set_username.set(event_target_value(&ev))
            />
            <input
                type="password"
                placeholder="Password"
                prop:value=move || password.get()
                on:input=move |ev| set_password.set(event_target_value(&ev))
            />
            <button type="submit" disabled=move || loading.get()>
                {move || if loading.get() { "Signing in..." } else { "Sign in" }}
            </button>
        </form>
    }
}

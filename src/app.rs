//! Todo Frontend App
//!
//! Top-level component: the session gate. Token presence at startup
//! picks the initial view; `AppContext::login_succeeded` and `logout`
//! are the only transitions.

use leptos::prelude::*;

use crate::api::DEFAULT_API_BASE;
use crate::components::{AuthPage, TodoPage};
use crate::context::AppContext;
use crate::session::Session;
use crate::theme::Theme;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(Session::browser(), DEFAULT_API_BASE);
    let theme = RwSignal::new(Theme::load(&ctx.session));
    let authenticated = ctx.authenticated();

    // Provide context to all children
    provide_context(ctx);
    provide_context(theme);

    view! {
        <div class=move || format!("app-root {}", theme.get().class())>
            <Show when=move || authenticated.get() fallback=|| view! { <AuthPage/> }>
                <TodoPage/>
            </Show>
        </div>
    }
}

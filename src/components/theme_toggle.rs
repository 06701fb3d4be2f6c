//! Theme Toggle Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::theme::Theme;

/// Flips light/dark and persists the choice.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_app_context();
    let theme = expect_context::<RwSignal<Theme>>();

    let on_click = move |_| {
        let next = theme.get().toggled();
        theme.set(next);
        next.store(&ctx.session);
    };

    view! {
        <button class="theme-toggle" title="Toggle theme" on:click=on_click>
            {move || if theme.get() == Theme::Dark { "☀" } else { "☾" }}
        </button>
    }
}

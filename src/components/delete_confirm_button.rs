//! Delete Confirm Button Component
//!
//! Inline two-step delete: the × button swaps to a confirm/cancel pair
//! instead of opening a dialog.

use leptos::prelude::*;

/// # Arguments
/// * `button_class` - CSS class for the initial delete button
/// * `on_confirm` - Callback to execute when the user confirms
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);

    view! {
        {move || {
            if !confirming.get() {
                let class = button_class.clone();
                view! {
                    <button
                        class=class
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_confirming.set(true);
                        }
                    >
                        "×"
                    </button>
                }
                .into_any()
            } else {
                view! {
                    <span class="delete-confirm">
                        <span class="delete-confirm-text">"Delete?"</span>
                        <button
                            class="confirm-btn"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                set_confirming.set(false);
                                on_confirm.run(());
                            }
                        >
                            "✓"
                        </button>
                        <button
                            class="cancel-btn"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                set_confirming.set(false);
                            }
                        >
                            "✗"
                        </button>
                    </span>
                }
                .into_any()
            }
        }}
    }
}

//! Todo Page Component
//!
//! Authenticated view: loads the list once on mount, then keeps it in a
//! local signal that the optimistic mutations operate on.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{NewTodoForm, ThemeToggle, TodoItem};
use crate::context::use_app_context;
use crate::models::Todo;

#[component]
pub fn TodoPage() -> impl IntoView {
    let ctx = use_app_context();
    let todos = RwSignal::new(Vec::<Todo>::new());

    // Initial load: one full fetch, wholesale replace. A failure only
    // logs; the list stays empty.
    {
        let ctx = ctx.clone();
        Effect::new(move |_| {
            let api = ctx.api.get_untracked();
            spawn_local(async move {
                match api.list_todos().await {
                    Ok(list) => todos.set(list),
                    Err(err) => {
                        web_sys::console::error_1(&format!("failed to load todos: {err}").into())
                    }
                }
            });
        });
    }

    let on_logout = {
        let ctx = ctx.clone();
        move |_| ctx.logout()
    };

    view! {
        <div class="todo-page">
            <header class="todo-header">
                <h2>"My Todos"</h2>
                <div class="header-actions">
                    <ThemeToggle/>
                    <button class="logout-btn" on:click=on_logout>"Log out"</button>
                </div>
            </header>

            <NewTodoForm todos=todos/>

            <ul class="todo-list">
                {move || {
                    todos
                        .get()
                        .into_iter()
                        .map(|todo| view! { <TodoItem todo=todo todos=todos/> })
                        .collect_view()
                }}
            </ul>

            <Show when=move || todos.get().is_empty()>
                <p class="empty-hint">"Nothing to do yet."</p>
            </Show>
        </div>
    }
}

//! Todo Item Component
//!
//! One list row. Toggle and delete both mutate the shared list signal
//! optimistically; a failed call rolls back and logs.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::models::Todo;
use crate::optimistic::{delete_with, toggle_with};

#[component]
pub fn TodoItem(todo: Todo, todos: RwSignal<Vec<Todo>>) -> impl IntoView {
    let ctx = use_app_context();
    let id = todo.id;

    let on_toggle = {
        let ctx = ctx.clone();
        move |_| {
            let api = ctx.api.get_untracked();
            spawn_local(async move {
                let result = toggle_with(&todos, id, move |next| async move {
                    api.set_completed(id, next).await
                })
                .await;
                if let Err(err) = result {
                    web_sys::console::warn_1(&format!("toggle rolled back: {err}").into());
                }
            });
        }
    };

    let on_delete = Callback::new({
        let ctx = ctx.clone();
        move |_| {
            let api = ctx.api.get_untracked();
            spawn_local(async move {
                let result =
                    delete_with(&todos, id, async move { api.delete_todo(id).await }).await;
                if let Err(err) = result {
                    web_sys::console::warn_1(&format!("delete rolled back: {err}").into());
                }
            });
        }
    });

    let due = todo.due_date.format("%Y-%m-%d").to_string();

    view! {
        <li class=if todo.completed { "todo-item completed" } else { "todo-item" }>
            <input type="checkbox" prop:checked=todo.completed on:change=on_toggle/>
            <div class="todo-body">
                <strong class="todo-title">{todo.title.clone()}</strong>
                {todo
                    .description
                    .clone()
                    .map(|d| view! { <span class="todo-description">{d}</span> })}
                <span class="todo-due">{due}</span>
                {todo
                    .category
                    .clone()
                    .map(|c| view! { <span class="todo-category">{c}</span> })}
            </div>
            <DeleteConfirmButton button_class="delete-btn" on_confirm=on_delete/>
        </li>
    }
}

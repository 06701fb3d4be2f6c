//! New Todo Form Component
//!
//! Creation is optimistic: the provisional entry appears and the form
//! clears before the backend answers; a rejected create removes the
//! entry again.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::models::{provisional_id, NewTodo, Todo};
use crate::optimistic::create_with;
use crate::validation::validate_new_todo;

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[component]
pub fn NewTodoForm(todos: RwSignal<Vec<Todo>>) -> impl IntoView {
    let ctx = use_app_context();
    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (due_date, set_due_date) = signal(String::new());
    let (category, set_category) = signal(String::new());
    let (error, set_error) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let due = match validate_new_todo(&title.get(), &due_date.get()) {
            Ok(date) => date,
            Err(msg) => {
                set_error.set(msg);
                return;
            }
        };
        set_error.set(String::new());

        let draft = NewTodo {
            title: title.get().trim().to_string(),
            description: non_empty(description.get()),
            due_date: due,
            completed: false,
            category: non_empty(category.get()),
        };
        let provisional = Todo::provisional(provisional_id(), &draft);

        set_title.set(String::new());
        set_description.set(String::new());
        set_due_date.set(String::new());
        set_category.set(String::new());

        let api = ctx.api.get_untracked();
        spawn_local(async move {
            let result =
                create_with(&todos, provisional, async move { api.create_todo(&draft).await })
                    .await;
            if let Err(err) = result {
                web_sys::console::warn_1(&format!("create rolled back: {err}").into());
            }
        });
    };

    view! {
        <form class="new-todo-form" on:submit=submit>
            <Show when=move || !error.get().is_empty()>
                <div class="form-error">{move || error.get()}</div>
            </Show>
            <div class="new-todo-row">
                <input
                    type="text"
                    placeholder="Title"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Description (optional)"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                />
                <input
                    type="date"
                    prop:value=move || due_date.get()
                    on:input=move |ev| set_due_date.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Category (optional)"
                    prop:value=move || category.get()
                    on:input=move |ev| set_category.set(event_target_value(&ev))
                />
                <button type="submit">"Add"</button>
            </div>
        </form>
    }
}

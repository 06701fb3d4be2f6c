//! Optimistic Mutations
//!
//! Every to-do mutation follows the same shape: apply the change to the
//! local list immediately, issue the backend call, then either reconcile
//! with the server's canonical data or roll the local change back.
//! `mutate` is that shape once, parameterized by the forward/inverse
//! pair; `create_with` / `toggle_with` / `delete_with` wire it up per
//! operation.

use std::future::Future;

use leptos::prelude::{GetUntracked, RwSignal, Update};

use crate::api::ApiError;
use crate::models::Todo;

/// Mutable cell holding the local list. The UI backs this with a Leptos
/// signal; tests back it with a plain `Rc<RefCell<_>>`.
pub trait ListCell: Clone {
    fn with(&self, f: impl FnOnce(&mut Vec<Todo>));
    fn read(&self) -> Vec<Todo>;
}

impl ListCell for RwSignal<Vec<Todo>> {
    fn with(&self, f: impl FnOnce(&mut Vec<Todo>)) {
        self.update(f);
    }

    fn read(&self) -> Vec<Todo> {
        self.get_untracked()
    }
}

// ========================
// List Transforms
// ========================

/// Swap the item with `id` for `replacement` in place, keeping position.
pub fn replace_by_id(list: &mut Vec<Todo>, id: u64, replacement: Todo) {
    if let Some(slot) = list.iter_mut().find(|t| t.id == id) {
        *slot = replacement;
    }
}

pub fn remove_by_id(list: &mut Vec<Todo>, id: u64) {
    list.retain(|t| t.id != id);
}

pub fn set_completed(list: &mut [Todo], id: u64, completed: bool) {
    if let Some(todo) = list.iter_mut().find(|t| t.id == id) {
        todo.completed = completed;
    }
}

// ========================
// Optimistic Driver
// ========================

/// Apply `forward` immediately, await `remote`, then apply `reconcile`
/// with the response on success or `inverse` on failure. The error is
/// returned so callers can log it; the rollback itself is the only
/// user-visible effect of a failure.
pub async fn mutate<C, T, Fut>(
    list: &C,
    forward: impl FnOnce(&mut Vec<Todo>),
    remote: Fut,
    reconcile: impl FnOnce(&mut Vec<Todo>, T),
    inverse: impl FnOnce(&mut Vec<Todo>),
) -> Result<(), ApiError>
where
    C: ListCell,
    Fut: Future<Output = Result<T, ApiError>>,
{
    list.with(forward);
    match remote.await {
        Ok(value) => {
            list.with(|l| reconcile(l, value));
            Ok(())
        }
        Err(err) => {
            list.with(inverse);
            Err(err)
        }
    }
}

/// Append `provisional` immediately; on success replace it with the
/// canonical item the backend returns, on failure remove it entirely.
pub async fn create_with<C, Fut>(list: &C, provisional: Todo, remote: Fut) -> Result<(), ApiError>
where
    C: ListCell,
    Fut: Future<Output = Result<Todo, ApiError>>,
{
    let provisional_id = provisional.id;
    mutate(
        list,
        move |l| l.push(provisional),
        remote,
        move |l, canonical| replace_by_id(l, provisional_id, canonical),
        move |l| remove_by_id(l, provisional_id),
    )
    .await
}

/// Flip `completed` immediately; `remote` receives the new value. On
/// failure only the flag reverts. Unknown ids are a no-op.
pub async fn toggle_with<C, Fut>(
    list: &C,
    id: u64,
    remote: impl FnOnce(bool) -> Fut,
) -> Result<(), ApiError>
where
    C: ListCell,
    Fut: Future<Output = Result<(), ApiError>>,
{
    let Some(prev) = list.read().iter().find(|t| t.id == id).map(|t| t.completed) else {
        return Ok(());
    };
    let next = !prev;
    mutate(
        list,
        move |l| set_completed(l, id, next),
        remote(next),
        |_, _| {},
        move |l| set_completed(l, id, prev),
    )
    .await
}

/// Remove the item immediately; on failure restore the full prior list.
/// Coarser than the toggle rollback on purpose: a deleted item's state
/// cannot be recovered from a partial patch.
pub async fn delete_with<C, Fut>(list: &C, id: u64, remote: Fut) -> Result<(), ApiError>
where
    C: ListCell,
    Fut: Future<Output = Result<(), ApiError>>,
{
    let snapshot = list.read();
    mutate(
        list,
        move |l| remove_by_id(l, id),
        remote,
        |_, _| {},
        move |l| *l = snapshot,
    )
    .await
}

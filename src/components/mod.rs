//! UI Components
//!
//! Reusable Leptos components.

mod auth_page;
mod delete_confirm_button;
mod forgot_form;
mod login_form;
mod new_todo_form;
mod register_form;
mod theme_toggle;
mod todo_item;
mod todo_page;

pub use auth_page::AuthPage;
pub use delete_confirm_button::DeleteConfirmButton;
pub use forgot_form::ForgotForm;
pub use login_form::LoginForm;
pub use new_todo_form::NewTodoForm;
pub use register_form::RegisterForm;
pub use theme_toggle::ThemeToggle;
pub use todo_item::TodoItem;
pub use todo_page::TodoPage;

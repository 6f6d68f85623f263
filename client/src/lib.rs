//! Client state layer for the todo service: session and todo list kept in memory
//! and synchronized with the API one request at a time.

pub mod api;
pub mod error;
pub mod forms;
pub mod models;
pub mod session;
pub mod storage;
pub mod todo_store;

#[cfg(test)]
mod testing;

pub use api::{ApiClient, TodoApi};
pub use error::ClientError;
pub use session::{AuthState, SessionContext};
pub use storage::{PersistedSession, SessionStorage};
pub use todo_store::TodoStore;

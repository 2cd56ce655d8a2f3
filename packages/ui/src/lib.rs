mod auth;
mod client;
mod components;
mod document_list;
mod navbar;

pub use auth::{use_auth, AuthProvider, AuthState, LogoutButton};
pub use client::use_portal_client;
pub use components::{ErrorBanner, FieldInput};
pub use document_list::{DocumentList, DocumentRow};
pub use navbar::Navbar;

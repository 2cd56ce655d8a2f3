use dioxus::prelude::*;

use store::AdminAllowList;
use ui::{use_auth, LogoutButton, Navbar};

use crate::Route;

mod admin;
mod dashboard;
mod login;
mod not_found;
mod password_reset;
mod profile;
mod register;
mod settings;
mod syllabi;
mod theses;
mod upload_syllabus;
mod upload_thesis;

pub use admin::Admin;
pub use dashboard::Dashboard;
pub use login::Login;
pub use not_found::NotFound;
pub use password_reset::PasswordReset;
pub use profile::Profile;
pub use register::Register;
pub use settings::Settings;
pub use syllabi::Syllabi;
pub use theses::Theses;
pub use upload_syllabus::UploadSyllabus;
pub use upload_thesis::UploadThesis;

/// Top bar shown on every signed-in view.
#[component]
pub fn PortalNav() -> Element {
    let auth = use_auth();
    let admins = use_context::<AdminAllowList>();
    let is_admin = auth()
        .user
        .map(|u| admins.contains(&u.email))
        .unwrap_or(false);

    rsx! {
        Navbar {
            Link { class: "nav-brand", to: Route::Dashboard {}, "Document Portal" }
            div {
                class: "nav-links",
                Link { to: Route::Theses {}, "Theses" }
                Link { to: Route::Syllabi {}, "Syllabi" }
                if is_admin {
                    Link { to: Route::Admin {}, "Admin" }
                }
                Link { to: Route::Profile {}, "Profile" }
                Link { to: Route::Settings {}, "Settings" }
            }
            div {
                class: "nav-session",
                if let Some(user) = auth().user {
                    span { class: "nav-email", "{user.email}" }
                }
                LogoutButton { class: "nav-logout" }
            }
        }
    }
}

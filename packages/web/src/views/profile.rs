//! Profile view showing the signed-in account.

use dioxus::prelude::*;

use store::AdminAllowList;
use ui::use_auth;

use crate::views::PortalNav;

#[component]
pub fn Profile() -> Element {
    let auth = use_auth();
    let admins = use_context::<AdminAllowList>();

    rsx! {
        PortalNav {}

        div {
            class: "page",

            h1 { "Profile" }

            if let Some(user) = auth().user {
                div {
                    class: "profile-card",
                    div {
                        class: "profile-row",
                        span { class: "profile-label", "Email" }
                        span { "{user.email}" }
                    }
                    div {
                        class: "profile-row",
                        span { class: "profile-label", "Account ID" }
                        span { class: "profile-mono", "{user.id}" }
                    }
                    div {
                        class: "profile-row",
                        span { class: "profile-label", "Role" }
                        span {
                            if admins.contains(&user.email) { "Administrator" } else { "Member" }
                        }
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;

use api::PortalClient;
use store::{AdminAllowList, GateDecision, PortalConfig, RouteMeta, SessionGate};
use ui::AuthProvider;
use views::{
    Admin, Dashboard, Login, NotFound, PasswordReset, Profile, Register, Settings, Syllabi,
    Theses, UploadSyllabus, UploadThesis,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SessionGateLayout)]
    #[route("/")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/password-reset")]
    PasswordReset {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/admin")]
    Admin {},
    #[route("/theses")]
    Theses {},
    #[route("/theses/upload")]
    UploadThesis {},
    #[route("/syllabi")]
    Syllabi {},
    #[route("/upload-syllabus")]
    UploadSyllabus {},
    #[route("/profile")]
    Profile {},
    #[route("/settings")]
    Settings {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Access requirements consumed by the session gate.
    fn meta(&self) -> RouteMeta {
        match self {
            Route::Login {} | Route::Register {} | Route::PasswordReset {} => RouteMeta::GUEST,
            Route::Admin {} => RouteMeta::ADMIN,
            _ => RouteMeta::AUTH,
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

/// Configuration embedded at build time; a missing or malformed file falls
/// back to defaults (no endpoint, empty allow-list).
fn portal_config() -> PortalConfig {
    PortalConfig::from_toml(include_str!("../../../portal.toml")).unwrap_or_default()
}

#[component]
fn App() -> Element {
    let config = portal_config();
    let client = PortalClient::new(&config).expect("invalid service configuration");
    let admins = config.admin_allow_list();

    // Composition root: the client and the allow-list are owned here and
    // injected into everything below, never reached as globals.
    use_context_provider(move || client);
    use_context_provider(move || admins);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}

/// Navigation guard wrapped around every route.
///
/// Each navigation queries the identity service afresh through
/// [`SessionGate`]; the matched view renders only on
/// [`GateDecision::Proceed`], otherwise the navigation is replaced.
#[component]
fn SessionGateLayout() -> Element {
    let route = use_route::<Route>();
    let nav = use_navigator();
    let client = ui::use_portal_client();
    let admins = use_context::<AdminAllowList>();

    let decision = use_resource(use_reactive!(|route| {
        let gate = SessionGate::new(client.clone(), admins.clone());
        async move { gate.check(route.meta()).await }
    }));

    let decision = *decision.read();
    match decision {
        None => rsx! {
            div { class: "gate-loading" }
        },
        Some(GateDecision::Proceed) => rsx! {
            Outlet::<Route> {}
        },
        Some(GateDecision::ToLogin) => {
            nav.replace(Route::Login {});
            rsx! {}
        }
        Some(GateDecision::ToDashboard) | Some(GateDecision::ToFallback) => {
            nav.replace(Route::Dashboard {});
            rsx! {}
        }
    }
}

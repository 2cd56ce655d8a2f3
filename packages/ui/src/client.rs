//! Access to the shared service client.

use api::PortalClient;
use dioxus::prelude::*;

/// Get the portal service client provided by the composition root.
/// The client is cheap to clone; clones share the cached access token.
pub fn use_portal_client() -> PortalClient {
    use_context::<PortalClient>()
}

pub mod backend;
pub mod config;
pub mod gate;
pub mod models;
pub mod resource;

mod allowlist;
pub use allowlist::AdminAllowList;

mod memory;
pub use memory::MemoryBackend;

pub use backend::{BackendError, DataBackend, IdentityBackend};
pub use config::PortalConfig;
pub use gate::{GateDecision, RouteMeta, SessionGate};
pub use models::{NewSyllabus, NewThesis, Resource, Syllabus, Thesis, UserInfo};
pub use resource::{ResourceStore, StoreError, SyllabiStore, ThesesStore};

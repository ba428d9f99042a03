//! Local state owned by the mounted views.
//!
//! Each type here is created fresh when its view mounts and dropped when the
//! view goes away. None of it is shared between views or persisted.
pub mod chat;
pub mod dashboard;
pub mod settings;
pub mod workspaces;

pub use chat::{ChatSession, PendingReply};
pub use settings::{SettingsPanel, SettingsTab, ToggleKey};
pub use workspaces::WorkspaceBoard;

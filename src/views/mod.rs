pub mod chat;
pub mod dashboard;
pub mod settings;
pub mod shared;
pub mod workspaces;

pub use chat::ChatView;
pub use dashboard::DashboardView;
pub use settings::SettingsView;
pub use workspaces::WorkspacesView;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use time::OffsetDateTime;

/// Top-level screens reachable from the sidebar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Dashboard,
    Chat,
    Settings,
    Workspaces,
}

impl View {
    /// Sidebar order.
    pub const ALL: [View; 4] = [View::Dashboard, View::Chat, View::Workspaces, View::Settings];

    pub fn name(self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::Chat => "chat",
            View::Settings => "settings",
            View::Workspaces => "workspaces",
        }
    }

    pub fn menu_title(self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Chat => "AI Chat",
            View::Settings => "Settings",
            View::Workspaces => "Workspaces",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown view '{0}', expected one of: dashboard, chat, settings, workspaces")]
pub struct UnknownView(pub String);

impl FromStr for View {
    type Err = UnknownView;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "dashboard" => Ok(View::Dashboard),
            "chat" => Ok(View::Chat),
            "settings" => Ok(View::Settings),
            "workspaces" => Ok(View::Workspaces),
            _ => Err(UnknownView(raw.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MessageId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WorkspaceId(pub u64);

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "msg-{}", self.0)
    }
}

impl fmt::Display for WorkspaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ws-{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: MessageId,
    pub role: Role,
    pub content: String,
    pub created_at: OffsetDateTime,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    pub id: WorkspaceId,
    pub name: String,
    pub description: String,
    pub document_count: u32,
    /// Display label such as "2 hours ago"; not a real timestamp.
    pub last_modified: String,
    pub is_private: bool,
}

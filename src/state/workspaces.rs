use crate::types::{Workspace, WorkspaceId};

pub const NEW_WORKSPACE_LABEL: &str = "Just now";

const SEED_WORKSPACES: &[(&str, &str, u32, &str)] = &[
    (
        "Legal Documents",
        "Contract analysis and legal document review",
        24,
        "2 hours ago",
    ),
    (
        "Financial Reports",
        "Quarterly reports and financial analysis",
        18,
        "1 day ago",
    ),
    (
        "Market Research",
        "Industry insights and market data",
        31,
        "3 days ago",
    ),
];

/// Workspace list plus the "create workspace" dialog form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkspaceBoard {
    workspaces: Vec<Workspace>,
    draft_name: String,
    draft_description: String,
    dialog_open: bool,
    next_id: u64,
}

impl WorkspaceBoard {
    pub fn new() -> Self {
        let workspaces: Vec<Workspace> = SEED_WORKSPACES
            .iter()
            .zip(1u64..)
            .map(|(&(name, description, documents, modified), id)| Workspace {
                id: WorkspaceId(id),
                name: name.to_string(),
                description: description.to_string(),
                document_count: documents,
                last_modified: modified.to_string(),
                is_private: true,
            })
            .collect();
        let next_id = workspaces.len() as u64 + 1;
        Self {
            workspaces,
            draft_name: String::new(),
            draft_description: String::new(),
            dialog_open: false,
            next_id,
        }
    }

    pub fn workspaces(&self) -> &[Workspace] {
        &self.workspaces
    }

    pub fn draft_name(&self) -> &str {
        &self.draft_name
    }

    pub fn draft_description(&self) -> &str {
        &self.draft_description
    }

    pub fn set_draft_name(&mut self, name: impl Into<String>) {
        self.draft_name = name.into();
    }

    pub fn set_draft_description(&mut self, description: impl Into<String>) {
        self.draft_description = description.into();
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog_open
    }

    pub fn open_dialog(&mut self) {
        self.dialog_open = true;
    }

    /// Cancel keeps whatever was typed so far.
    pub fn close_dialog(&mut self) {
        self.dialog_open = false;
    }

    /// Create a workspace from the dialog's draft fields.
    pub fn submit_draft(&mut self) -> Option<WorkspaceId> {
        let name = std::mem::take(&mut self.draft_name);
        let description = std::mem::take(&mut self.draft_description);
        let created = self.create_workspace(&name, &description);
        if created.is_none() {
            self.draft_name = name;
            self.draft_description = description;
        }
        created
    }

    /// Prepend a new, empty workspace. A blank `name` is ignored.
    pub fn create_workspace(&mut self, name: &str, description: &str) -> Option<WorkspaceId> {
        if name.trim().is_empty() {
            return None;
        }
        let id = WorkspaceId(self.next_id);
        self.next_id += 1;
        self.workspaces.insert(
            0,
            Workspace {
                id,
                name: name.to_string(),
                description: description.to_string(),
                document_count: 0,
                last_modified: NEW_WORKSPACE_LABEL.to_string(),
                is_private: true,
            },
        );
        self.draft_name.clear();
        self.draft_description.clear();
        self.dialog_open = false;
        tracing::info!(workspace = %id, name, "workspace created");
        Some(id)
    }
}

impl Default for WorkspaceBoard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_workspaces() {
        let board = WorkspaceBoard::new();
        let names: Vec<_> = board.workspaces().iter().map(|w| w.name.as_str()).collect();
        assert_eq!(names, ["Legal Documents", "Financial Reports", "Market Research"]);
        assert!(board.workspaces().iter().all(|w| w.is_private));
        assert_eq!(board.workspaces()[2].document_count, 31);
        assert!(!board.is_dialog_open());
    }

    #[test]
    fn test_blank_name_is_ignored() {
        let mut board = WorkspaceBoard::new();
        let before = board.workspaces().to_vec();
        assert!(board.create_workspace("", "described").is_none());
        assert!(board.create_workspace("  ", "").is_none());
        assert_eq!(board.workspaces(), before.as_slice());
    }

    #[test]
    fn test_new_workspace_is_prepended() {
        let mut board = WorkspaceBoard::new();
        let id = board.create_workspace("Tax Docs", "").unwrap();

        let first = &board.workspaces()[0];
        assert_eq!(first.id, id);
        assert_eq!(first.name, "Tax Docs");
        assert_eq!(first.description, "");
        assert_eq!(first.document_count, 0);
        assert_eq!(first.last_modified, "Just now");
        assert!(first.is_private);
        assert_eq!(board.workspaces().len(), 4);
    }

    #[test]
    fn test_ids_do_not_collide_with_seeds() {
        let mut board = WorkspaceBoard::new();
        let a = board.create_workspace("A", "").unwrap();
        let b = board.create_workspace("B", "").unwrap();
        let mut ids: Vec<_> = board.workspaces().iter().map(|w| w.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5);
        assert_ne!(a, b);
        assert_eq!(board.workspaces()[0].name, "B");
    }

    #[test]
    fn test_submit_draft_clears_form_and_closes_dialog() {
        let mut board = WorkspaceBoard::new();
        board.open_dialog();
        board.set_draft_name("Board Minutes");
        board.set_draft_description("Monthly notes");

        assert!(board.submit_draft().is_some());
        assert!(!board.is_dialog_open());
        assert!(board.draft_name().is_empty());
        assert!(board.draft_description().is_empty());
        assert_eq!(board.workspaces()[0].description, "Monthly notes");
    }

    #[test]
    fn test_blank_draft_keeps_dialog_and_description() {
        let mut board = WorkspaceBoard::new();
        board.open_dialog();
        board.set_draft_description("orphan description");

        assert!(board.submit_draft().is_none());
        assert!(board.is_dialog_open());
        assert_eq!(board.draft_description(), "orphan description");
        assert_eq!(board.workspaces().len(), 3);
    }

    #[test]
    fn test_cancel_keeps_draft() {
        let mut board = WorkspaceBoard::new();
        board.open_dialog();
        board.set_draft_name("Half typed");
        board.close_dialog();
        assert!(!board.is_dialog_open());
        assert_eq!(board.draft_name(), "Half typed");
    }
}

use crate::state::WorkspaceBoard;
use crate::types::{View, Workspace};
use crate::views::shared::{CHAT, DOCUMENT, FOLDER, PageHeader, PrivacyIndicator, SHIELD};
use dioxus::prelude::*;

#[component]
pub fn WorkspacesView(on_navigate: EventHandler<View>) -> Element {
    let mut board = use_signal(WorkspaceBoard::new);
    let snapshot = board();

    rsx! {
        div { class: "page",
            PageHeader {
                title: "Workspaces",
                subtitle: "Organize your documents and AI conversations by project",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| board.with_mut(|b| b.open_dialog()),
                    "+ New Workspace"
                }
            }

            if snapshot.is_dialog_open() {
                CreateWorkspaceDialog { board }
            }

            div { class: "page-body",
                div { class: "workspace-grid",
                    for workspace in snapshot.workspaces().iter() {
                        WorkspaceCard {
                            key: "{workspace.id}",
                            workspace: workspace.clone(),
                            on_navigate,
                        }
                    }

                    div { class: "card card-dashed create-card",
                        div { class: "create-icon", "+" }
                        h3 { "Create Workspace" }
                        p { class: "text-muted small",
                            "Start a new secure workspace for your documents and AI conversations"
                        }
                        button {
                            class: "btn btn-outline",
                            r#type: "button",
                            onclick: move |_| board.with_mut(|b| b.open_dialog()),
                            "Get Started"
                        }
                    }
                }

                div { class: "card card-success notice",
                    span { class: "icon", "{SHIELD}" }
                    div {
                        h3 { "Privacy & Security" }
                        p { class: "small",
                            "All workspaces are private by default. Your documents and conversations are processed locally and never shared with external services. Full GDPR compliance is maintained across all workspaces."
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn WorkspaceCard(workspace: Workspace, on_navigate: EventHandler<View>) -> Element {
    rsx! {
        div { class: "card workspace-card",
            div { class: "card-header workspace-header",
                div { class: "hstack",
                    div { class: "workspace-icon", "{FOLDER}" }
                    div {
                        h3 { class: "card-title", "{workspace.name}" }
                        if workspace.is_private {
                            PrivacyIndicator { label: "Private" }
                        }
                    }
                }
                button { class: "btn btn-ghost menu-btn", r#type: "button", "\u{22EE}" }
            }
            div { class: "card-content",
                p { class: "text-muted", "{workspace.description}" }
                div { class: "workspace-meta text-muted small",
                    span { span { class: "icon", "{DOCUMENT}" } "{workspace.document_count} documents" }
                    span { "Modified {workspace.last_modified}" }
                }
                div { class: "hstack",
                    button {
                        class: "btn btn-outline grow",
                        r#type: "button",
                        onclick: move |_| on_navigate.call(View::Chat),
                        span { class: "icon", "{CHAT}" }
                        "Chat"
                    }
                    button { class: "btn btn-outline grow", r#type: "button", "\u{2191} Upload" }
                }
            }
        }
    }
}

#[component]
fn CreateWorkspaceDialog(board: Signal<WorkspaceBoard>) -> Element {
    let mut board = board;
    let snapshot = board();

    rsx! {
        div { class: "dialog-overlay",
            div { class: "dialog",
                div { class: "dialog-header",
                    h2 { "Create New Workspace" }
                    p { class: "text-muted",
                        "Create a secure workspace for your documents and AI conversations"
                    }
                }
                div { class: "field",
                    label { for: "workspace-name", "Workspace Name" }
                    input {
                        id: "workspace-name",
                        r#type: "text",
                        placeholder: "e.g., Legal Documents",
                        value: "{snapshot.draft_name()}",
                        oninput: move |ev| board.with_mut(|b| b.set_draft_name(ev.value())),
                        autofocus: true,
                    }
                }
                div { class: "field",
                    label { for: "workspace-description", "Description (Optional)" }
                    input {
                        id: "workspace-description",
                        r#type: "text",
                        placeholder: "Brief description of this workspace",
                        value: "{snapshot.draft_description()}",
                        oninput: move |ev| board.with_mut(|b| b.set_draft_description(ev.value())),
                    }
                }
                div { class: "dialog-actions",
                    button {
                        class: "btn btn-outline",
                        r#type: "button",
                        onclick: move |_| board.with_mut(|b| b.close_dialog()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| {
                            board.with_mut(|b| b.submit_draft());
                        },
                        "Create Workspace"
                    }
                }
            }
        }
    }
}

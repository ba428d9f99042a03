use crate::state::dashboard::{PRIVACY_STATUS, RECENT_DOCUMENTS, STATS, Stat, StatIcon};
use crate::types::View;
use crate::views::shared::{CHAT, CLOCK, DOCUMENT, GdprBadge, PageHeader, SHIELD, StatusLine};
use dioxus::prelude::*;

fn stat_icon(icon: StatIcon) -> &'static str {
    match icon {
        StatIcon::Documents => DOCUMENT,
        StatIcon::Conversations => CHAT,
        StatIcon::Users => "\u{1F465}",
        StatIcon::Privacy => SHIELD,
    }
}

#[component]
pub fn DashboardView(on_navigate: EventHandler<View>) -> Element {
    rsx! {
        div { class: "page",
            PageHeader {
                title: "Dashboard",
                subtitle: "Welcome back to your private AI workspace",
                GdprBadge { label: "GDPR Compliant" }
            }

            div { class: "page-body",
                div { class: "stats-grid",
                    for stat in STATS.iter() {
                        StatCard { key: "{stat.title}", stat: *stat }
                    }
                }

                div { class: "card",
                    div { class: "card-header",
                        h3 { class: "card-title", "Quick Actions" }
                        p { class: "text-muted", "Start a new conversation or upload documents for analysis" }
                    }
                    div { class: "card-content hstack",
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            onclick: move |_| on_navigate.call(View::Chat),
                            span { class: "icon", "{CHAT}" }
                            "Start AI Chat"
                        }
                        button {
                            class: "btn btn-outline",
                            r#type: "button",
                            onclick: move |_| on_navigate.call(View::Workspaces),
                            span { class: "icon", "{DOCUMENT}" }
                            "Upload Documents"
                        }
                    }
                }

                div { class: "card",
                    div { class: "card-header",
                        h3 { class: "card-title", "Recent Documents" }
                        p { class: "text-muted", "Documents you've recently analyzed with privately.max" }
                    }
                    div { class: "card-content doc-list",
                        for doc in RECENT_DOCUMENTS.iter() {
                            div { key: "{doc.name}", class: "doc-row",
                                div { class: "hstack",
                                    span { class: "icon", "{DOCUMENT}" }
                                    div {
                                        p { class: "doc-name", "{doc.name}" }
                                        p { class: "text-muted small", "{doc.size}" }
                                    }
                                }
                                div { class: "hstack text-muted small",
                                    span { class: "icon", "{CLOCK}" }
                                    "{doc.last_accessed}"
                                }
                            }
                        }
                    }
                }

                div { class: "card card-success",
                    div { class: "card-header",
                        h3 { class: "card-title", span { class: "icon", "{SHIELD}" } "Privacy & Security Status" }
                    }
                    div { class: "card-content",
                        for line in PRIVACY_STATUS {
                            StatusLine { key: "{line}", text: line }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StatCard(stat: Stat) -> Element {
    let icon = stat_icon(stat.icon);
    rsx! {
        div { class: "card stat-card",
            div { class: "stat-header",
                span { class: "stat-title", "{stat.title}" }
                span { class: "icon", "{icon}" }
            }
            div { class: "stat-value", "{stat.value}" }
            div { class: "text-muted small", "\u{2197} {stat.change} from last month" }
        }
    }
}

use crate::config;
use crate::navigation::Navigator;
use crate::types::View;
use crate::views::shared::{CHAT, FOLDER, LOCK, PrivacyIndicator, SHIELD, StatusLine};
use crate::views::{ChatView, DashboardView, SettingsView, WorkspacesView};
use dioxus::prelude::*;

const APP_CSS: Asset = asset!("/assets/privately.css");

fn menu_icon(view: View) -> &'static str {
    match view {
        View::Dashboard => "\u{2302}",
        View::Chat => CHAT,
        View::Workspaces => FOLDER,
        View::Settings => "\u{2699}",
    }
}

fn navigate(mut navigator: Signal<Navigator>, view: View) {
    navigator.with_mut(|nav| nav.navigate(view));
}

#[component]
pub fn App() -> Element {
    let navigator = use_signal(|| Navigator::new(config::current().start_view));

    rsx! {
        document::Link { rel: "stylesheet", href: APP_CSS }
        div { class: "app-shell",
            Sidebar { navigator }
            main { class: "app-main",
                ViewOutlet { navigator }
            }
        }
    }
}

#[component]
fn Sidebar(navigator: Signal<Navigator>) -> Element {
    let nav = navigator();
    rsx! {
        aside { class: "sidebar",
            div { class: "sidebar-header",
                div { class: "brand-mark", "{SHIELD}" }
                div {
                    h1 { class: "brand-name", "privately.max" }
                    PrivacyIndicator { label: "GDPR Compliant", icon: LOCK }
                }
            }
            nav { class: "sidebar-menu",
                for view in View::ALL {
                    MenuButton { key: "{view}", navigator, view, active: nav.is_active(view) }
                }
            }
            div { class: "sidebar-footer",
                StatusLine { text: "Local Processing Active" }
                p { "All data stays on your premises" }
            }
        }
    }
}

#[component]
fn MenuButton(navigator: Signal<Navigator>, view: View, active: bool) -> Element {
    let class = if active { "menu-item active" } else { "menu-item" };
    rsx! {
        button {
            class: class,
            r#type: "button",
            onclick: move |_| navigate(navigator, view),
            span { class: "icon", "{menu_icon(view)}" }
            "{view.menu_title()}"
        }
    }
}

/// Mounts the active view.
///
/// The single child is keyed on the navigator's mount generation, so every
/// navigation drops the previous view (and its pending tasks) and mounts the
/// destination with default state.
#[component]
fn ViewOutlet(navigator: Signal<Navigator>) -> Element {
    let nav = navigator();
    rsx! {
        for mount in [nav.mount_key()] {
            ViewSlot { key: "{mount}", navigator, view: nav.current() }
        }
    }
}

#[component]
fn ViewSlot(navigator: Signal<Navigator>, view: View) -> Element {
    match view {
        View::Dashboard => rsx! {
            DashboardView { on_navigate: move |target| navigate(navigator, target) }
        },
        View::Chat => rsx! { ChatView {} },
        View::Settings => rsx! { SettingsView {} },
        View::Workspaces => rsx! {
            WorkspacesView { on_navigate: move |target| navigate(navigator, target) }
        },
    }
}

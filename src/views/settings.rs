use crate::state::settings::{
    AccountField, DATA_RIGHTS_ACTIONS, STORAGE_LOCATION, SYSTEM_INFO, Toggle, ToggleGroup,
};
use crate::state::{SettingsPanel, SettingsTab};
use crate::views::shared::{GdprBadge, PageHeader};
use dioxus::prelude::*;

fn tab_class(active: bool) -> &'static str {
    if active { "tab active" } else { "tab" }
}

fn action_class(destructive: bool) -> &'static str {
    if destructive {
        "btn btn-outline destructive"
    } else {
        "btn btn-outline"
    }
}

#[component]
pub fn SettingsView() -> Element {
    let mut panel = use_signal(SettingsPanel::new);
    let active_tab = panel().tab();

    rsx! {
        div { class: "page",
            PageHeader {
                title: "Settings",
                subtitle: "Manage your privacy, security, and application preferences",
                GdprBadge { label: "GDPR Controls" }
            }

            div { class: "page-body narrow",
                div { class: "tabs",
                    for tab in SettingsTab::ALL {
                        button {
                            key: "{tab.label()}",
                            class: tab_class(tab == active_tab),
                            r#type: "button",
                            onclick: move |_| panel.with_mut(|p| p.select_tab(tab)),
                            "{tab.label()}"
                        }
                    }
                }

                {match active_tab {
                    SettingsTab::Privacy => rsx! {
                        ToggleCard {
                            panel,
                            group: ToggleGroup::GdprCompliance,
                            title: "GDPR Compliance",
                            description: "Control how your data is processed and ensure full GDPR compliance",
                        }
                        ToggleCard { panel, group: ToggleGroup::AccessControl, title: "Access Control" }
                    },
                    SettingsTab::Data => rsx! { DataTab { panel } },
                    SettingsTab::Notifications => rsx! {
                        ToggleCard {
                            panel,
                            group: ToggleGroup::NotificationPreferences,
                            title: "Notification Preferences",
                            description: "Choose what notifications you want to receive",
                        }
                    },
                    SettingsTab::Account => rsx! { AccountTab { panel } },
                }}
            }
        }
    }
}

#[component]
fn ToggleCard(
    panel: Signal<SettingsPanel>,
    group: ToggleGroup,
    title: &'static str,
    description: Option<&'static str>,
) -> Element {
    let toggles: Vec<Toggle> = panel.with(|p| p.toggles_in(group).cloned().collect());
    rsx! {
        div { class: "card",
            div { class: "card-header",
                h3 { class: "card-title", "{title}" }
                if let Some(description) = description {
                    p { class: "text-muted", "{description}" }
                }
            }
            div { class: "card-content settings-list",
                for toggle in toggles {
                    ToggleRow { key: "{toggle.label}", panel, toggle: toggle.clone() }
                }
            }
        }
    }
}

#[component]
fn ToggleRow(panel: Signal<SettingsPanel>, toggle: Toggle) -> Element {
    let mut panel = panel;
    let key = toggle.key;
    rsx! {
        div { class: "setting-row",
            div {
                label { class: "setting-label", "{toggle.label}" }
                p { class: "text-muted small", "{toggle.description}" }
            }
            input {
                class: "switch",
                r#type: "checkbox",
                checked: toggle.enabled,
                disabled: toggle.locked,
                onchange: move |_| {
                    panel.with_mut(|p| p.toggle(key));
                },
            }
        }
    }
}

#[component]
fn DataTab(panel: Signal<SettingsPanel>) -> Element {
    let mut panel = panel;
    let retention = panel.with(|p| p.retention_period().to_string());
    rsx! {
        div { class: "card",
            div { class: "card-header",
                h3 { class: "card-title", "Data Storage" }
                p { class: "text-muted", "Manage your data storage and retention policies" }
            }
            div { class: "card-content",
                div { class: "form-grid",
                    div { class: "field",
                        label { for: "storage-location", "Storage Location" }
                        input {
                            id: "storage-location",
                            r#type: "text",
                            value: STORAGE_LOCATION,
                            disabled: true,
                        }
                    }
                    div { class: "field",
                        label { for: "retention-period", "Data Retention Period" }
                        input {
                            id: "retention-period",
                            r#type: "text",
                            value: "{retention}",
                            oninput: move |ev| panel.with_mut(|p| p.set_retention_period(ev.value())),
                        }
                    }
                }
            }
        }
        ToggleCard { panel, group: ToggleGroup::DataStorage, title: "Automatic Backup" }
        div { class: "card",
            div { class: "card-header",
                h3 { class: "card-title", "Data Rights (GDPR)" }
                p { class: "text-muted", "Exercise your data protection rights under GDPR" }
            }
            div { class: "card-content form-grid",
                for (index, action) in DATA_RIGHTS_ACTIONS.into_iter().enumerate() {
                    button {
                        key: "{action}",
                        class: action_class(index == DATA_RIGHTS_ACTIONS.len() - 1),
                        r#type: "button",
                        "{action}"
                    }
                }
            }
        }
    }
}

#[component]
fn AccountTab(panel: Signal<SettingsPanel>) -> Element {
    let mut panel = panel;
    let values: Vec<(AccountField, String)> = panel.with(|p| {
        AccountField::ALL
            .iter()
            .map(|field| (*field, p.account_field(*field).to_string()))
            .collect()
    });
    rsx! {
        div { class: "card",
            div { class: "card-header",
                h3 { class: "card-title", "Account Information" }
                p { class: "text-muted", "Manage your account details and preferences" }
            }
            div { class: "card-content",
                div { class: "form-grid",
                    for (field, value) in values {
                        div { key: "{field.label()}", class: "field",
                            label { "{field.label()}" }
                            input {
                                r#type: field.input_type(),
                                placeholder: field.placeholder(),
                                value: "{value}",
                                oninput: move |ev| panel.with_mut(|p| p.set_account_field(field, ev.value())),
                            }
                        }
                    }
                }
                div { class: "form-actions",
                    button { class: "btn btn-primary", r#type: "button", "Save Changes" }
                }
            }
        }
        div { class: "card",
            div { class: "card-header",
                h3 { class: "card-title", "System Information" }
            }
            div { class: "card-content system-info",
                for (label, value) in SYSTEM_INFO {
                    div { key: "{label}", class: "info-row",
                        span { class: "text-muted", "{label}" }
                        span { "{value}" }
                    }
                }
            }
        }
    }
}

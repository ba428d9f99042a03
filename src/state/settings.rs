//! The settings screen's local state.
//!
//! Nothing here is read back by the rest of the app or persisted; switching
//! away from the view throws every change away.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SettingsTab {
    #[default]
    Privacy,
    Data,
    Notifications,
    Account,
}

impl SettingsTab {
    pub const ALL: [SettingsTab; 4] = [
        SettingsTab::Privacy,
        SettingsTab::Data,
        SettingsTab::Notifications,
        SettingsTab::Account,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SettingsTab::Privacy => "Privacy & Security",
            SettingsTab::Data => "Data Management",
            SettingsTab::Notifications => "Notifications",
            SettingsTab::Account => "Account",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ToggleKey {
    LocalProcessing,
    DataEncryption,
    AuditLogging,
    TwoFactorAuth,
    SessionTimeout,
    AutomaticBackup,
    ProcessingComplete,
    SecurityAlerts,
    SystemUpdates,
}

/// Which card on which tab a toggle is drawn in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleGroup {
    GdprCompliance,
    AccessControl,
    DataStorage,
    NotificationPreferences,
}

impl ToggleGroup {
    pub fn tab(self) -> SettingsTab {
        match self {
            ToggleGroup::GdprCompliance | ToggleGroup::AccessControl => SettingsTab::Privacy,
            ToggleGroup::DataStorage => SettingsTab::Data,
            ToggleGroup::NotificationPreferences => SettingsTab::Notifications,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toggle {
    pub key: ToggleKey,
    pub group: ToggleGroup,
    pub label: &'static str,
    pub description: &'static str,
    pub enabled: bool,
    /// Rendered disabled; the value cannot be changed.
    pub locked: bool,
}

const DEFAULT_TOGGLES: &[(ToggleKey, ToggleGroup, &str, &str, bool, bool)] = &[
    (
        ToggleKey::LocalProcessing,
        ToggleGroup::GdprCompliance,
        "Local Processing Only",
        "All AI processing happens on your local infrastructure",
        true,
        true,
    ),
    (
        ToggleKey::DataEncryption,
        ToggleGroup::GdprCompliance,
        "Data Encryption",
        "End-to-end encryption for all data and communications",
        true,
        true,
    ),
    (
        ToggleKey::AuditLogging,
        ToggleGroup::GdprCompliance,
        "Audit Logging",
        "Track all data access and processing activities",
        true,
        false,
    ),
    (
        ToggleKey::TwoFactorAuth,
        ToggleGroup::AccessControl,
        "Two-Factor Authentication",
        "Add an extra layer of security to your account",
        false,
        false,
    ),
    (
        ToggleKey::SessionTimeout,
        ToggleGroup::AccessControl,
        "Session Timeout",
        "Automatically log out after period of inactivity",
        true,
        false,
    ),
    (
        ToggleKey::AutomaticBackup,
        ToggleGroup::DataStorage,
        "Automatic Backup",
        "Regular backups of your data and configurations",
        true,
        false,
    ),
    (
        ToggleKey::ProcessingComplete,
        ToggleGroup::NotificationPreferences,
        "Document Processing Complete",
        "Notify when document analysis is finished",
        true,
        false,
    ),
    (
        ToggleKey::SecurityAlerts,
        ToggleGroup::NotificationPreferences,
        "Security Alerts",
        "Important security and privacy notifications",
        true,
        false,
    ),
    (
        ToggleKey::SystemUpdates,
        ToggleGroup::NotificationPreferences,
        "System Updates",
        "Updates about new features and improvements",
        false,
        false,
    ),
];

pub const STORAGE_LOCATION: &str = "Local Server (Norway)";
pub const DEFAULT_RETENTION_PERIOD: &str = "2 years";

pub const DATA_RIGHTS_ACTIONS: [&str; 4] = [
    "Export My Data",
    "View Data Report",
    "Data Processing Log",
    "Delete All Data",
];

pub const SYSTEM_INFO: [(&str, &str); 4] = [
    ("Version:", "privately.max v2.1.0"),
    ("Deployment:", "On-Premise (Norway)"),
    ("GDPR Status:", "Compliant"),
    ("Last Updated:", "2024-01-15"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccountField {
    FullName,
    Email,
    Organization,
    Role,
}

impl AccountField {
    pub const ALL: [AccountField; 4] = [
        AccountField::FullName,
        AccountField::Email,
        AccountField::Organization,
        AccountField::Role,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AccountField::FullName => "Full Name",
            AccountField::Email => "Email Address",
            AccountField::Organization => "Organization",
            AccountField::Role => "Role",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            AccountField::FullName => "Your full name",
            AccountField::Email => "your@email.com",
            AccountField::Organization => "Your company name",
            AccountField::Role => "Your job title",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            AccountField::Email => "email",
            _ => "text",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettingsPanel {
    tab: SettingsTab,
    toggles: Vec<Toggle>,
    retention_period: String,
    account: [String; 4],
}

impl SettingsPanel {
    pub fn new() -> Self {
        let toggles = DEFAULT_TOGGLES
            .iter()
            .map(
                |&(key, group, label, description, enabled, locked)| Toggle {
                    key,
                    group,
                    label,
                    description,
                    enabled,
                    locked,
                },
            )
            .collect();
        Self {
            tab: SettingsTab::default(),
            toggles,
            retention_period: DEFAULT_RETENTION_PERIOD.to_string(),
            account: Default::default(),
        }
    }

    pub fn tab(&self) -> SettingsTab {
        self.tab
    }

    pub fn select_tab(&mut self, tab: SettingsTab) {
        self.tab = tab;
    }

    pub fn toggles_in(&self, group: ToggleGroup) -> impl Iterator<Item = &Toggle> + '_ {
        self.toggles.iter().filter(move |t| t.group == group)
    }

    pub fn is_enabled(&self, key: ToggleKey) -> bool {
        self.toggles.iter().any(|t| t.key == key && t.enabled)
    }

    /// Flip an unlocked toggle. Locked toggles keep their value and `false`
    /// is returned.
    pub fn toggle(&mut self, key: ToggleKey) -> bool {
        match self.toggles.iter_mut().find(|t| t.key == key) {
            Some(toggle) if !toggle.locked => {
                toggle.enabled = !toggle.enabled;
                tracing::debug!(?key, enabled = toggle.enabled, "setting toggled");
                true
            }
            _ => false,
        }
    }

    pub fn retention_period(&self) -> &str {
        &self.retention_period
    }

    pub fn set_retention_period(&mut self, value: impl Into<String>) {
        self.retention_period = value.into();
    }

    pub fn account_field(&self, field: AccountField) -> &str {
        &self.account[field.index()]
    }

    pub fn set_account_field(&mut self, field: AccountField, value: impl Into<String>) {
        self.account[field.index()] = value.into();
    }
}

impl Default for SettingsPanel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let panel = SettingsPanel::new();
        assert_eq!(panel.tab(), SettingsTab::Privacy);
        assert!(panel.is_enabled(ToggleKey::LocalProcessing));
        assert!(panel.is_enabled(ToggleKey::AuditLogging));
        assert!(!panel.is_enabled(ToggleKey::TwoFactorAuth));
        assert!(!panel.is_enabled(ToggleKey::SystemUpdates));
        assert_eq!(panel.retention_period(), "2 years");
        assert!(AccountField::ALL.iter().all(|f| panel.account_field(*f).is_empty()));
    }

    #[test]
    fn test_locked_toggles_do_not_change() {
        let mut panel = SettingsPanel::new();
        assert!(!panel.toggle(ToggleKey::LocalProcessing));
        assert!(!panel.toggle(ToggleKey::DataEncryption));
        assert!(panel.is_enabled(ToggleKey::LocalProcessing));
        assert!(panel.is_enabled(ToggleKey::DataEncryption));
    }

    #[test]
    fn test_unlocked_toggle_flips() {
        let mut panel = SettingsPanel::new();
        assert!(panel.toggle(ToggleKey::TwoFactorAuth));
        assert!(panel.is_enabled(ToggleKey::TwoFactorAuth));
        assert!(panel.toggle(ToggleKey::TwoFactorAuth));
        assert!(!panel.is_enabled(ToggleKey::TwoFactorAuth));
    }

    #[test]
    fn test_groups_cover_their_tabs() {
        let panel = SettingsPanel::new();
        assert_eq!(panel.toggles_in(ToggleGroup::GdprCompliance).count(), 3);
        assert_eq!(panel.toggles_in(ToggleGroup::AccessControl).count(), 2);
        assert_eq!(panel.toggles_in(ToggleGroup::DataStorage).count(), 1);
        assert_eq!(panel.toggles_in(ToggleGroup::NotificationPreferences).count(), 3);
        assert_eq!(ToggleGroup::AccessControl.tab(), SettingsTab::Privacy);
    }

    #[test]
    fn test_account_fields_are_independent() {
        let mut panel = SettingsPanel::new();
        panel.set_account_field(AccountField::Email, "ola@example.no");
        assert_eq!(panel.account_field(AccountField::Email), "ola@example.no");
        assert!(panel.account_field(AccountField::FullName).is_empty());
    }

    #[test]
    fn test_fresh_panel_forgets_changes() {
        let mut panel = SettingsPanel::new();
        panel.select_tab(SettingsTab::Account);
        panel.toggle(ToggleKey::SessionTimeout);
        panel.set_retention_period("5 years");
        assert_ne!(panel, SettingsPanel::new());
        assert_eq!(SettingsPanel::default(), SettingsPanel::new());
    }
}

//! Fixed figures shown on the dashboard.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatIcon {
    Documents,
    Conversations,
    Users,
    Privacy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub icon: StatIcon,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecentDocument {
    pub name: &'static str,
    pub size: &'static str,
    pub last_accessed: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat {
        title: "Documents Processed",
        value: "247",
        change: "+12%",
        icon: StatIcon::Documents,
    },
    Stat {
        title: "AI Conversations",
        value: "89",
        change: "+8%",
        icon: StatIcon::Conversations,
    },
    Stat {
        title: "Active Users",
        value: "23",
        change: "+15%",
        icon: StatIcon::Users,
    },
    Stat {
        title: "Privacy Score",
        value: "100%",
        change: "0%",
        icon: StatIcon::Privacy,
    },
];

pub const RECENT_DOCUMENTS: [RecentDocument; 4] = [
    RecentDocument {
        name: "Quarterly Report Q4 2024.pdf",
        size: "2.4 MB",
        last_accessed: "2 hours ago",
    },
    RecentDocument {
        name: "Legal Contract Analysis.docx",
        size: "1.8 MB",
        last_accessed: "1 day ago",
    },
    RecentDocument {
        name: "Market Research Data.xlsx",
        size: "5.2 MB",
        last_accessed: "3 days ago",
    },
    RecentDocument {
        name: "Privacy Policy Review.pdf",
        size: "890 KB",
        last_accessed: "1 week ago",
    },
];

pub const PRIVACY_STATUS: [&str; 4] = [
    "All processing happens locally on your infrastructure",
    "No data is shared with third parties",
    "Full GDPR compliance maintained",
    "End-to-end encryption active",
];

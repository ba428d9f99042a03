use dioxus::prelude::*;
use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};

const MESSAGE_TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour repr:12 padding:zero]:[minute padding:zero] [period case:upper]");

pub const SHIELD: &str = "\u{1F6E1}";
pub const LOCK: &str = "\u{1F512}";
pub const DOCUMENT: &str = "\u{1F4C4}";
pub const FOLDER: &str = "\u{1F4C2}";
pub const CHAT: &str = "\u{1F4AC}";
pub const CLOCK: &str = "\u{1F552}";

/// "09:41 AM" in the local offset when it can be determined, UTC otherwise.
pub fn format_message_timestamp(timestamp: OffsetDateTime) -> Option<String> {
    let mut datetime = timestamp;
    if let Ok(offset) = UtcOffset::current_local_offset() {
        datetime = datetime.to_offset(offset);
    }
    datetime.format(MESSAGE_TIME_FORMAT).ok()
}

#[component]
pub fn PageHeader(title: &'static str, subtitle: &'static str, children: Element) -> Element {
    rsx! {
        div { class: "page-header",
            div {
                h1 { class: "page-title", "{title}" }
                p { class: "text-muted", "{subtitle}" }
            }
            div { class: "page-header-actions", {children} }
        }
    }
}

#[component]
pub fn GdprBadge(label: &'static str) -> Element {
    rsx! {
        div { class: "gdpr-badge",
            span { class: "icon", "{SHIELD}" }
            span { "{label}" }
        }
    }
}

#[component]
pub fn PrivacyIndicator(label: &'static str, icon: Option<&'static str>) -> Element {
    let icon = icon.unwrap_or(SHIELD);
    rsx! {
        div { class: "privacy-indicator",
            span { class: "icon", "{icon}" }
            span { "{label}" }
        }
    }
}

#[component]
pub fn StatusLine(text: &'static str) -> Element {
    rsx! {
        div { class: "status-line",
            span { class: "status-dot" }
            span { "{text}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_timestamp_has_clock_shape() {
        let label = format_message_timestamp(datetime!(2024-01-15 13:05 UTC)).unwrap();
        let (clock, period) = label.split_once(' ').unwrap();
        assert!(period == "AM" || period == "PM");
        let (hour, minute) = clock.split_once(':').unwrap();
        assert_eq!(hour.len(), 2);
        assert_eq!(minute.len(), 2);
        assert!(clock.chars().filter(|c| *c != ':').all(|c| c.is_ascii_digit()));
    }
}

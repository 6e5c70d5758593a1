// Components module - reusable UI building blocks
//
// Shell components are rendered on every frame:
// - Title bar: app name, data source, fetch spinner
// - Status bar: fetch phase, cluster count, key hints
// - Logs panel: most recent log lines
//
// Content components render inside the main layout:
// - Cluster list: selectable clusters (left column)
// - Detail panel: synchronized copy of the last fetched alerts
// - Overview panel / alerts panel: the active detail tab
// - Error banner: dismissible fetch failure above the alerts table

pub mod alerts_table;
pub mod cluster_list;
pub mod detail_panel;
pub mod error_banner;
pub mod logs_panel;
pub mod overview_panel;
pub mod status_bar;
pub mod title_bar;
pub mod toast;

pub use toast::Toast;

/// Truncate `text` to at most `max` display columns, adding an ellipsis
pub fn truncate_to_width(text: &str, max: usize) -> String {
    use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

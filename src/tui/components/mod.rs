//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as struct fields:
//! - `TitleBar`: breadcrumb of the navigation state plus status text
//! - `SearchBox`: the free-text query
//! - `FacetBar`: one chip per facet dimension with option counts
//!
//! ### Stateful Components (Transient Wrappers)
//!
//! Created each frame around `&mut ListState` owned by `TuiState`:
//! - `LandingPage`: module menu shown at `Home`
//! - `RecordList`: filtered rows, or the "no matches" state
//!
//! ### Props-Based Data Flow
//!
//! Components never reach into `App`. Everything they draw comes from the
//! `ScreenSnapshot` the core produced for this frame.
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! FacetBar::new(&snapshot.facet_counts, &values, focus, true).render(frame, area);
//!
//! // Bad: Hidden dependency on global state
//! FacetBar::render(frame, area); // reads from global App
//! ```

mod facet_bar;
mod landing;
mod record_list;
mod search_box;
mod title_bar;

pub use facet_bar::FacetBar;
pub use landing::LandingPage;
pub use record_list::RecordList;
pub use search_box::SearchBox;
pub use title_bar::TitleBar;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate a string to fit within `max_width` columns, adding "..." if needed.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width - 3 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str("...");
    out
}

/// `"pending"` → `"Pending"`.
pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Label of the `all` option for a facet dimension ("All Countries").
pub(crate) fn all_label(dimension: &str) -> String {
    let plural = match dimension {
        "country" => "Countries".to_string(),
        "category" => "Categories".to_string(),
        "status" => "Statuses".to_string(),
        "kind" => "Types".to_string(),
        other => format!("{}s", capitalize(other)),
    };
    format!("All {plural}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("Kenya", 10), "Kenya");
        assert_eq!(truncate_str("Water Harvesting Systems", 10), "Water H...");
        assert_eq!(truncate_str("Water", 2), "..");
    }

    #[test]
    fn test_truncate_str_counts_columns_not_bytes() {
        // "é" is two bytes but one column
        assert_eq!(truncate_str("Café Noir", 9), "Café Noir");
        assert_eq!(truncate_str("Café Noir!", 7), "Café...");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("review"), "Review");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_all_label() {
        assert_eq!(all_label("country"), "All Countries");
        assert_eq!(all_label("category"), "All Categories");
        assert_eq!(all_label("region"), "All Regions");
    }
}

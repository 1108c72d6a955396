//! # Navigation
//!
//! Which screen is active, and within drill-down screens, which entry is open.
//!
//! ```text
//!            navigate_to(s)              drill_into(id)
//!   Home ───────────────────► Screen(s) ───────────────► Detail(s, id)
//!    ▲                          │   ▲                        │
//!    └──────── back() ──────────┘   └──────── back() ────────┘
//! ```
//!
//! The stack is at most two levels deep. Detail states only exist for screens
//! with a [`DrillScreen`] counterpart, so an invalid detail cannot be built.

use clap::ValueEnum;
use log::debug;
use serde::{Deserialize, Serialize};

/// Destinations reachable from the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    Upload,
    Verification,
    Thematic,
    Framework,
    Access,
}

impl Screen {
    /// Landing page order.
    pub const ALL: [Screen; 5] = [
        Screen::Upload,
        Screen::Verification,
        Screen::Thematic,
        Screen::Framework,
        Screen::Access,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Screen::Upload => "upload",
            Screen::Verification => "verification",
            Screen::Thematic => "thematic",
            Screen::Framework => "framework",
            Screen::Access => "access",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|screen| screen.id() == id)
    }

    pub fn title(self) -> &'static str {
        match self {
            Screen::Upload => "Upload",
            Screen::Verification => "Verification",
            Screen::Thematic => "Thematic Organisation",
            Screen::Framework => "Framework & Policy",
            Screen::Access => "Access & Solutions",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Screen::Upload => "Share stories, oral histories, research papers, and videos",
            Screen::Verification => "Community and expert review for authenticity",
            Screen::Thematic => {
                "Stories organised by Health, Architecture, Ecology, Nutrition, Culture"
            }
            Screen::Framework => "Transform datasets into actionable frameworks and policy briefs",
            Screen::Access => "Curated data for innovators, architects, and policymakers",
        }
    }

    pub fn drill(self) -> Option<DrillScreen> {
        match self {
            Screen::Thematic => Some(DrillScreen::Thematic),
            Screen::Framework => Some(DrillScreen::Framework),
            _ => None,
        }
    }

    pub fn supports_drill_down(self) -> bool {
        self.drill().is_some()
    }

    /// Facet dimensions the user can constrain directly on this screen.
    /// The drill-down facet is driven by navigation and is not listed.
    pub fn facet_dimensions(self) -> &'static [&'static str] {
        match self {
            Screen::Upload => &["kind", "status"],
            Screen::Verification => &["status"],
            Screen::Thematic => &[],
            Screen::Framework => &["category"],
            Screen::Access => &["country", "category"],
        }
    }
}

/// Screens that support a second navigation level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DrillScreen {
    /// theme overview → datasets within one theme
    Thematic,
    /// document kinds → documents of one kind
    Framework,
}

impl DrillScreen {
    pub fn screen(self) -> Screen {
        match self {
            DrillScreen::Thematic => Screen::Thematic,
            DrillScreen::Framework => Screen::Framework,
        }
    }

    /// Facet constrained by the sub-selection while drilled in.
    pub fn facet(self) -> &'static str {
        match self {
            DrillScreen::Thematic => "id",
            DrillScreen::Framework => "kind",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "level", rename_all = "snake_case")]
pub enum NavigationState {
    #[default]
    Home,
    Screen {
        screen: Screen,
    },
    Detail {
        screen: DrillScreen,
        sub: String,
    },
}

impl NavigationState {
    pub fn depth(&self) -> usize {
        match self {
            NavigationState::Home => 0,
            NavigationState::Screen { .. } => 1,
            NavigationState::Detail { .. } => 2,
        }
    }

    pub fn screen(&self) -> Option<Screen> {
        match self {
            NavigationState::Home => None,
            NavigationState::Screen { screen } => Some(*screen),
            NavigationState::Detail { screen, .. } => Some(screen.screen()),
        }
    }

    pub fn sub_selection(&self) -> Option<&str> {
        match self {
            NavigationState::Detail { sub, .. } => Some(sub),
            _ => None,
        }
    }

    pub fn is_home(&self) -> bool {
        matches!(self, NavigationState::Home)
    }
}

/// Owns the navigation stack. Every transition is synchronous.
#[derive(Debug, Default)]
pub struct NavigationController {
    state: NavigationState,
}

impl NavigationController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Replaces the whole stack with `screen` at depth 1.
    pub fn navigate_to(&mut self, screen: Screen) {
        debug!("navigate_to {}", screen.id());
        self.state = NavigationState::Screen { screen };
    }

    /// Opens `sub` on the current screen. Ignored unless at depth 1 on a
    /// drill-down screen.
    pub fn drill_into(&mut self, sub: impl Into<String>) {
        let NavigationState::Screen { screen } = self.state else {
            debug!("drill_into ignored at depth {}", self.state.depth());
            return;
        };
        let Some(drill) = screen.drill() else {
            debug!("drill_into ignored: {} has no drill-down", screen.id());
            return;
        };
        let sub = sub.into();
        debug!("drill_into {}/{}", screen.id(), sub);
        self.state = NavigationState::Detail { screen: drill, sub };
    }

    /// Pops one level. From depth 1 (or Home) this lands on Home.
    pub fn back(&mut self) {
        self.state = match &self.state {
            NavigationState::Detail { screen, .. } => NavigationState::Screen {
                screen: screen.screen(),
            },
            NavigationState::Screen { .. } | NavigationState::Home => NavigationState::Home,
        };
        debug!("back -> depth {}", self.state.depth());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_home() {
        let nav = NavigationController::new();
        assert!(nav.state().is_home());
        assert_eq!(nav.state().depth(), 0);
    }

    #[test]
    fn test_navigate_then_back_returns_home() {
        let mut nav = NavigationController::new();
        nav.navigate_to(Screen::Access);
        assert_eq!(nav.state().screen(), Some(Screen::Access));
        nav.back();
        assert_eq!(*nav.state(), NavigationState::Home);
    }

    #[test]
    fn test_back_from_detail_stays_on_screen() {
        let mut nav = NavigationController::new();
        nav.navigate_to(Screen::Thematic);
        nav.drill_into("health");
        assert_eq!(nav.state().depth(), 2);
        assert_eq!(nav.state().sub_selection(), Some("health"));

        nav.back();
        assert_eq!(
            *nav.state(),
            NavigationState::Screen {
                screen: Screen::Thematic
            }
        );
        assert_eq!(nav.state().sub_selection(), None);
    }

    #[test]
    fn test_drill_into_non_drillable_screen_is_ignored() {
        let mut nav = NavigationController::new();
        nav.navigate_to(Screen::Access);
        nav.drill_into("anything");
        assert_eq!(
            *nav.state(),
            NavigationState::Screen {
                screen: Screen::Access
            }
        );
    }

    #[test]
    fn test_drill_into_at_depth_two_is_ignored() {
        let mut nav = NavigationController::new();
        nav.navigate_to(Screen::Framework);
        nav.drill_into("policy");
        nav.drill_into("briefs");
        assert_eq!(nav.state().sub_selection(), Some("policy"));
    }

    #[test]
    fn test_drill_into_from_home_is_ignored() {
        let mut nav = NavigationController::new();
        nav.drill_into("health");
        assert!(nav.state().is_home());
    }

    #[test]
    fn test_navigate_replaces_detail_stack() {
        let mut nav = NavigationController::new();
        nav.navigate_to(Screen::Thematic);
        nav.drill_into("ecology");
        nav.navigate_to(Screen::Verification);
        assert_eq!(nav.state().depth(), 1);
        assert_eq!(nav.state().screen(), Some(Screen::Verification));
    }

    #[test]
    fn test_back_at_home_stays_home() {
        let mut nav = NavigationController::new();
        nav.back();
        assert!(nav.state().is_home());
    }

    #[test]
    fn test_screen_ids_round_trip() {
        for screen in Screen::ALL {
            assert_eq!(Screen::from_id(screen.id()), Some(screen));
        }
        assert_eq!(Screen::from_id("home"), None);
    }

    #[test]
    fn test_only_thematic_and_framework_drill() {
        let drillable: Vec<_> = Screen::ALL
            .into_iter()
            .filter(|s| s.supports_drill_down())
            .collect();
        assert_eq!(drillable, vec![Screen::Thematic, Screen::Framework]);
    }
}

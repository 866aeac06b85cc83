//! Information panels for the console dashboard.
//!
//! Static reference material shown alongside assessments, plus the
//! selection state for it. At most one panel is visible at a time;
//! `PanelSelection` holds the single active panel, so the mutual
//! exclusion holds structurally instead of being maintained across a set
//! of independent flags.

use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Panels
// ---------------------------------------------------------------------------

/// One of the dashboard's reference panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoPanel {
    LocustFacts,
    LifeStages,
    RecentEvents,
    Organizations,
}

impl InfoPanel {
    pub const ALL: [InfoPanel; 4] = [
        InfoPanel::LocustFacts,
        InfoPanel::LifeStages,
        InfoPanel::RecentEvents,
        InfoPanel::Organizations,
    ];

    /// Stable key used on the command line.
    pub fn key(self) -> &'static str {
        match self {
            InfoPanel::LocustFacts => "locusts",
            InfoPanel::LifeStages => "stages",
            InfoPanel::RecentEvents => "events",
            InfoPanel::Organizations => "organizations",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            InfoPanel::LocustFacts => "About Desert Locusts",
            InfoPanel::LifeStages => "Locust Life Stages",
            InfoPanel::RecentEvents => "Recent Activity",
            InfoPanel::Organizations => "Monitoring Organizations",
        }
    }

    /// Reference text for the panel.
    pub fn body(self) -> &'static str {
        match self {
            InfoPanel::LocustFacts => {
                "The desert locust (Schistocerca gregaria) lives 45-65 days through \
                 egg, hopper, and adult phases. Solitary locusts are harmless and \
                 avoid each other; under crowding they shift to the gregarious phase, \
                 change color, and form swarms of up to 80 million insects per square \
                 kilometre. A swarm can travel 130 km in a day, and each locust eats \
                 its own body weight daily: a one square kilometre swarm consumes as \
                 much food as 35,000 people."
            }
            InfoPanel::LifeStages => {
                "Egg stage (2-4 weeks): eggs are laid in moist soil, 5-10 cm deep. \
                 Hopper stage (5-6 weeks): wingless juveniles molt five times and \
                 march together in bands. \
                 Adult stage (3-5 months): fully winged, capable of long-distance \
                 flight. \
                 Swarm stage: massive gregarious formations, the most destructive \
                 phase of the cycle."
            }
            InfoPanel::RecentEvents => {
                "Regional bulletins are issued by FAO Locust Watch. Recent seasons \
                 have seen activity along the India-Pakistan border in the Thar \
                 Desert, with breeding conditions tracked across Rajasthan districts. \
                 Consult the latest bulletin before acting on a single assessment."
            }
            InfoPanel::Organizations => {
                "FAO Locust Watch runs global monitoring and early warning \
                 (fao.org/ag/locusts). The Locust Warning Organization under the \
                 Ministry of Agriculture, Government of India, coordinates regional \
                 monitoring stations and field operations from Jodhpur, Rajasthan. \
                 Control work combines ground survey teams with aerial spraying \
                 programs."
            }
        }
    }
}

impl fmt::Display for InfoPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

impl FromStr for InfoPanel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "locusts" | "locust" | "about" => Ok(InfoPanel::LocustFacts),
            "stages" | "stage" => Ok(InfoPanel::LifeStages),
            "events" | "activity" => Ok(InfoPanel::RecentEvents),
            "organizations" | "orgs" => Ok(InfoPanel::Organizations),
            _ => Err(format!(
                "unknown panel '{}' (expected locusts, stages, events, or organizations)",
                s
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// Selection state
// ---------------------------------------------------------------------------

/// Which panel, if any, is currently shown.
///
/// A single value rather than one flag per panel: opening a panel
/// implicitly closes the previous one, and no combination of calls can
/// make two panels visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelSelection {
    active: Option<InfoPanel>,
}

impl PanelSelection {
    /// Starts with no panel shown.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<InfoPanel> {
        self.active
    }

    pub fn is_open(&self, panel: InfoPanel) -> bool {
        self.active == Some(panel)
    }

    pub fn open(&mut self, panel: InfoPanel) {
        self.active = Some(panel);
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    /// Opens the panel, or closes it if it is already the active one.
    pub fn toggle(&mut self, panel: InfoPanel) {
        self.active = if self.active == Some(panel) { None } else { Some(panel) };
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Informational overlays and the long-form article.
//!
//! Pure presentation data with open/close toggle state. At most one overlay
//! section is open at a time; the article carries a single disclosure flag.

/// Named informational sections reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlaySection {
    /// What the dashboard is and how it keeps time.
    About,
    /// Contact and support channels.
    Contact,
    /// How to read the cards and the configuration field.
    Guide,
    /// Privacy policy.
    Privacy,
    /// Terms of service.
    Terms,
    /// DMCA compliance notice.
    Dmca,
}

impl OverlaySection {
    /// All sections in navigation order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::About,
            Self::Contact,
            Self::Guide,
            Self::Privacy,
            Self::Terms,
            Self::Dmca,
        ]
    }

    /// Overlay title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::About => "About World Clock Dashboard",
            Self::Contact => "Contact & Support",
            Self::Guide => "User Guide & Documentation",
            Self::Privacy => "Privacy Policy",
            Self::Terms => "Terms of Service",
            Self::Dmca => "DMCA Compliance",
        }
    }

    /// Overlay body text.
    #[must_use]
    pub const fn body(self) -> &'static str {
        match self {
            Self::About => {
                "The World Clock Dashboard shows live local time for a curated set of \
                 the world's financial and cultural capitals. Each card is synchronized \
                 once against a public time service when the dashboard loads and then \
                 ticks forward locally, one second at a time."
            }
            Self::Contact => {
                "Questions, corrections and feature requests are welcome. Reach the \
                 maintainers through the project repository's issue tracker; support \
                 requests are usually answered within a few days."
            }
            Self::Guide => {
                "Every card shows a city label, the zone abbreviation, the current \
                 time in 24-hour format and the local calendar date. A card marked \
                 N/A could not reach the time service and is ticking from your \
                 machine's own clock instead. The endpoint field in the configuration \
                 card takes effect the next time the dashboard loads."
            }
            Self::Privacy => {
                "The dashboard stores nothing. Time zone requests are sent to the \
                 configured public time service and the responses are kept in memory \
                 only for the lifetime of the page. No cookies, no analytics, no \
                 tracking of any kind."
            }
            Self::Terms => {
                "The dashboard is provided as-is, without warranty of any kind. \
                 Displayed times are approximations seeded from a single fetch and \
                 must not be relied upon where precise time matters."
            }
            Self::Dmca => {
                "All content is original or used with permission. If you believe \
                 material shown here infringes your copyright, send a takedown notice \
                 naming the material and we will respond promptly."
            }
        }
    }
}

/// Which overlay, if any, is currently open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverlayState {
    active: Option<OverlaySection>,
}

impl OverlayState {
    /// Creates the closed state.
    #[must_use]
    pub const fn new() -> Self {
        Self { active: None }
    }

    /// Opens a section, replacing any other open section.
    pub fn open(&mut self, section: OverlaySection) {
        self.active = Some(section);
    }

    /// Closes whatever is open. A no-op when nothing is.
    pub fn close(&mut self) {
        self.active = None;
    }

    /// The currently open section, if any.
    #[must_use]
    pub const fn active(&self) -> Option<OverlaySection> {
        self.active
    }
}

/// The long-form article shown below the dashboard, collapsed by default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    expanded: bool,
}

impl Article {
    /// Article headline.
    pub const HEADLINE: &str = "The Silent Engine of the Digital World: \
        A Comprehensive Guide to Global Time Synchronization";

    /// Opening paragraph, always visible.
    pub const LEAD: &str =
        "Coordinated Universal Time is the primary standard by which the world \
         regulates clocks. Every zone on this dashboard is expressed as an \
         offset from it, and every timestamp your applications log, sign or \
         order ultimately traces back to it.";

    /// Remaining body, visible only when expanded.
    pub const BODY: &str =
        "Client-side time is taken from the visitor's device and can be wrong; \
         server-side time is the source of truth for transactions and logs, \
         usually disciplined over NTP. A dashboard like this one sits between \
         the two: it takes one authoritative reading per zone and then \
         advances it locally, trading precision for a convincing live-clock \
         feel without hammering the service. Long-lived sessions will drift, \
         which is exactly why systems that care about ordering, auditing or \
         one-time passwords re-synchronize on a schedule instead.";

    /// Creates the article in its collapsed state.
    #[must_use]
    pub const fn new() -> Self {
        Self { expanded: false }
    }

    /// Whether the full body is disclosed.
    #[must_use]
    pub const fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Flips the disclosure state.
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Renders the visible portion of the article.
    #[must_use]
    pub fn render(&self) -> String {
        if self.expanded {
            format!("{}\n\n{}\n\n{}", Self::HEADLINE, Self::LEAD, Self::BODY)
        } else {
            format!("{}\n\n{}", Self::HEADLINE, Self::LEAD)
        }
    }
}

impl Default for Article {
    fn default() -> Self {
        Self::new()
    }
}

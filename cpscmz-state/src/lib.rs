pub mod content;
pub mod nav;
pub mod reveal;
pub mod section;

pub mod prelude {
    pub use super::content::{
        Accent, Feature, Icon, Rule, ServerIdentity, Stat, Step, ABOUT_HIGHLIGHTS, ABOUT_STAT,
        FEATURES, RULES, SERVER, STEPS,
    };
    pub use super::nav::{is_scrolled, NAV_SCROLL_THRESHOLD};
    pub use super::reveal::RevealState;
    pub use super::section::Section;
}

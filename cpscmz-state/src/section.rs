use strum::{EnumIter, EnumString, IntoStaticStr};

/// Page sections, addressed by their anchor id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Section {
    Home,
    About,
    Guide,
    Features,
    Rules,
}

impl Section {
    /// Sections linked from the navbar, in display order.
    pub const NAV: [Section; 3] = [Section::About, Section::Guide, Section::Features];

    pub fn id(self) -> &'static str {
        self.into()
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Guide => "Join Guide",
            Section::Features => "Features",
            Section::Rules => "Rules",
        }
    }

    pub fn from_href(href: &str) -> Option<Section> {
        href.strip_prefix('#')?.parse().ok()
    }
}

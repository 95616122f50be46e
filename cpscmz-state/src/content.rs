use strum::{EnumIter, IntoStaticStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerIdentity {
    pub name: &'static str,
    pub short_name: &'static str,
    /// Plain letter shown in place of the logo when the image can't be loaded.
    pub monogram: &'static str,
    pub tagline: &'static str,
    pub invite_url: &'static str,
    pub logo_url: &'static str,
}

pub const SERVER: ServerIdentity = ServerIdentity {
    name: "~# .:: 𝙲𝙿𝚂𝙲𝙼𝚣 ::. #~",
    short_name: "𝙲𝙿𝚂𝙲𝙼𝚣",
    monogram: "C",
    tagline: "The ultimate school community hub for student collaboration, academic support, and social events. Your journey to academic excellence starts here.",
    invite_url: "https://discord.gg/Xb2B56vpWj",
    logo_url: "https://image.s4daf.qzz.io/Qin%20Shi%20Huang%20_%20anime%20_%20icon.jpg",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Icon {
    ExternalLink,
    Users,
    ShieldCheck,
    MessageSquare,
    BookOpen,
    Bell,
    Gamepad,
    Info,
    CheckCircle,
    ShieldAlert,
    ArrowUpRight,
    ChevronDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Accent {
    Blue,
    Indigo,
    Purple,
    Pink,
    Amber,
    Green,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub color: Accent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub color: Accent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STEPS: [Step; 4] = [
    Step {
        title: "Click Join Button",
        description: "Tap the main join button anywhere on this page to trigger the invitation.",
        icon: Icon::ExternalLink,
        color: Accent::Blue,
    },
    Step {
        title: "Accept Invitation",
        description: "Once Discord opens, click 'Accept Invite' to enter our server gates.",
        icon: Icon::Users,
        color: Accent::Indigo,
    },
    Step {
        title: "Read Rules & Verify",
        description: "Visit the rules channel and complete any verification needed for full access.",
        icon: Icon::ShieldCheck,
        color: Accent::Purple,
    },
    Step {
        title: "Introduce Yourself",
        description: "Pick your roles and say hi in the general chat! We're excited to meet you.",
        icon: Icon::MessageSquare,
        color: Accent::Pink,
    },
];

pub const FEATURES: [Feature; 6] = [
    Feature {
        icon: Icon::BookOpen,
        title: "Study Help",
        description: "Peer-to-peer tutoring and subject-specific channels for homework help.",
        color: Accent::Blue,
    },
    Feature {
        icon: Icon::Bell,
        title: "Announcements",
        description: "Stay updated with real-time school news, exam schedules, and holiday alerts.",
        color: Accent::Amber,
    },
    Feature {
        icon: Icon::Gamepad,
        title: "Fun & Social",
        description: "Dedicated channels for gaming, music, art, and non-academic hobbies.",
        color: Accent::Green,
    },
    Feature {
        icon: Icon::Users,
        title: "Events",
        description: "Regular community game nights, movie screenings, and student meetups.",
        color: Accent::Purple,
    },
    Feature {
        icon: Icon::ShieldCheck,
        title: "Safe Environment",
        description: "Active moderation ensuring a toxic-free and student-friendly experience.",
        color: Accent::Indigo,
    },
    Feature {
        icon: Icon::MessageSquare,
        title: "Active Chat",
        description: "There is always someone online to chat with, whatever the time.",
        color: Accent::Pink,
    },
];

pub const RULES: [Rule; 4] = [
    Rule {
        title: "Respect Everyone",
        description: "No harassment, hate speech, or bullying of any kind.",
    },
    Rule {
        title: "No Spamming",
        description: "Keep channels clean and avoid excessive messages or bots.",
    },
    Rule {
        title: "TOS Compliant",
        description: "Always follow Discord's Terms of Service and Guidelines.",
    },
    Rule {
        title: "Moderator Authority",
        description: "Listen to and respect decisions made by the server staff.",
    },
];

pub const ABOUT_HIGHLIGHTS: [&str; 4] = [
    "Unified student announcements and news",
    "Subject-specific study groups and help",
    "A vibrant community of helpful peers",
    "Safe, moderated environment for everyone",
];

pub const ABOUT_STAT: Stat = Stat {
    value: "24/7",
    label: "Study Help & Resources",
};

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn content_sizes() {
        assert_eq!(STEPS.len(), 4);
        assert_eq!(FEATURES.len(), 6);
        assert_eq!(RULES.len(), 4);
        assert_eq!(ABOUT_HIGHLIGHTS.len(), 4);
    }

    #[test]
    fn server_links_are_the_published_ones() {
        assert_eq!(SERVER.invite_url, "https://discord.gg/Xb2B56vpWj");
        assert_eq!(
            SERVER.logo_url,
            "https://image.s4daf.qzz.io/Qin%20Shi%20Huang%20_%20anime%20_%20icon.jpg"
        );
        assert!(SERVER.name.contains(SERVER.short_name));
        assert_eq!(SERVER.monogram.chars().count(), 1);
    }

    #[test]
    fn titles_are_unique() {
        let steps: HashSet<&str> = STEPS.iter().map(|s| s.title).collect();
        let features: HashSet<&str> = FEATURES.iter().map(|f| f.title).collect();
        let rules: HashSet<&str> = RULES.iter().map(|r| r.title).collect();
        assert_eq!(steps.len(), STEPS.len());
        assert_eq!(features.len(), FEATURES.len());
        assert_eq!(rules.len(), RULES.len());
    }

    #[test]
    fn step_order() {
        let titles: Vec<&str> = STEPS.iter().map(|s| s.title).collect();
        assert_eq!(
            titles,
            [
                "Click Join Button",
                "Accept Invitation",
                "Read Rules & Verify",
                "Introduce Yourself"
            ]
        );
    }

    #[test]
    fn icon_names() {
        let name: &'static str = Icon::CheckCircle.into();
        assert_eq!(name, "check-circle");
        let name: &'static str = Accent::Amber.into();
        assert_eq!(name, "amber");
    }
}

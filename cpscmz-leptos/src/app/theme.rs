use cpscmz_state::content::Accent;

/// Tailwind classes per accent. Spelled out in full so the class scanner
/// picks them up.
pub trait AccentClass {
    fn bg_class(&self) -> &'static str;
    fn soft_bg_class(&self) -> &'static str;
    fn text_class(&self) -> &'static str;
}

impl AccentClass for Accent {
    fn bg_class(&self) -> &'static str {
        match self {
            Accent::Blue => "bg-blue-500",
            Accent::Indigo => "bg-indigo-500",
            Accent::Purple => "bg-purple-500",
            Accent::Pink => "bg-pink-500",
            Accent::Amber => "bg-amber-500",
            Accent::Green => "bg-green-500",
        }
    }

    fn soft_bg_class(&self) -> &'static str {
        match self {
            Accent::Blue => "bg-blue-500/20",
            Accent::Indigo => "bg-indigo-500/20",
            Accent::Purple => "bg-purple-500/20",
            Accent::Pink => "bg-pink-500/20",
            Accent::Amber => "bg-amber-500/20",
            Accent::Green => "bg-green-500/20",
        }
    }

    fn text_class(&self) -> &'static str {
        match self {
            Accent::Blue => "text-blue-400",
            Accent::Indigo => "text-indigo-400",
            Accent::Purple => "text-purple-400",
            Accent::Pink => "text-pink-400",
            Accent::Amber => "text-amber-400",
            Accent::Green => "text-green-400",
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn classes_follow_accent_name() {
        for accent in Accent::iter() {
            let name: &'static str = accent.into();
            assert_eq!(accent.bg_class(), format!("bg-{}-500", name));
            assert_eq!(accent.soft_bg_class(), format!("bg-{}-500/20", name));
            assert_eq!(accent.text_class(), format!("text-{}-400", name));
        }
    }
}

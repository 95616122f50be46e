//! Inline stroke icons (lucide glyphs, 24x24 grid).

use cpscmz_state::content::Icon;
use leptos::prelude::*;

pub fn icon_paths(icon: Icon) -> &'static [&'static str] {
    match icon {
        Icon::ExternalLink => &[
            "M15 3h6v6",
            "M10 14 21 3",
            "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6",
        ],
        Icon::Users => &[
            "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
            "M9 3a4 4 0 1 0 0 8a4 4 0 1 0 0-8",
            "M22 21v-2a4 4 0 0 0-3-3.87",
            "M16 3.13a4 4 0 0 1 0 7.75",
        ],
        Icon::ShieldCheck => &[
            "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z",
            "m9 12 2 2 4-4",
        ],
        Icon::MessageSquare => &["M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"],
        Icon::BookOpen => &[
            "M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z",
            "M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z",
        ],
        Icon::Bell => &[
            "M6 8a6 6 0 0 1 12 0c0 7 3 9 3 9H3s3-2 3-9",
            "M10.3 21a1.94 1.94 0 0 0 3.4 0",
        ],
        Icon::Gamepad => &[
            "M6 11h4",
            "M8 9v4",
            "M15 12h.01",
            "M18 10h.01",
            "M17.32 5H6.68a4 4 0 0 0-3.978 3.59c-.006.052-.01.101-.017.152C2.604 9.416 2 14.456 2 16a3 3 0 0 0 3 3c1 0 1.5-.5 2-1l1.414-1.414A2 2 0 0 1 9.828 16h4.344a2 2 0 0 1 1.414.586L17 18c.5.5 1 1 2 1a3 3 0 0 0 3-3c0-1.545-.604-6.584-.685-7.258-.007-.05-.011-.1-.017-.151A4 4 0 0 0 17.32 5z",
        ],
        Icon::Info => &[
            "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20",
            "M12 16v-4",
            "M12 8h.01",
        ],
        Icon::CheckCircle => &["M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20", "m9 12 2 2 4-4"],
        Icon::ShieldAlert => &[
            "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z",
            "M12 8v4",
            "M12 16h.01",
        ],
        Icon::ArrowUpRight => &["M7 7h10v10", "M7 17 17 7"],
        Icon::ChevronDown => &["m6 9 6 6 6-6"],
    }
}

#[component]
pub fn Glyph(icon: Icon, #[prop(default = "w-6 h-6")] class: &'static str) -> impl IntoView {
    let name: &'static str = icon.into();
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            data-icon=name
            class=class
        >
            {icon_paths(icon).iter().copied().map(|d| view! { <path d=d></path> }).collect_view()}
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn every_icon_has_a_shape() {
        for icon in Icon::iter() {
            let paths = icon_paths(icon);
            assert!(!paths.is_empty(), "{:?}", icon);
            assert!(paths.iter().all(|d| d.starts_with(['M', 'm'])), "{:?}", icon);
        }
    }
}

use cpscmz_state::{content::SERVER, nav::is_scrolled, section::Section};
use leptos::{ev, prelude::*};
use tracing::{trace, warn};

use super::logo::Logo;
use crate::toolbox::prelude::*;

/// Flips `scrolled` when `y` crosses the threshold; writes only on change.
pub fn shrink_nav(scrolled: RwSignal<bool>, y: f64) {
    let next = is_scrolled(y);
    if scrolled.get_untracked() != next {
        trace!("nav scrolled: {} at {}", next, y);
        scrolled.set(next);
    }
}

pub fn nav_class(scrolled: bool) -> &'static str {
    if scrolled {
        "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-[#0f111a]/80 backdrop-blur-md border-b border-white/10 py-3"
    } else {
        "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-transparent py-6"
    }
}

fn scroll_y() -> f64 {
    match window().scroll_y() {
        Ok(y) => y,
        Err(err) => {
            warn!("failed to read scroll offset: {:?}", err);
            0.0
        }
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let scrolled = RwSignal::new(false);

    Effect::new(move || {
        shrink_nav(scrolled, scroll_y());
    });

    event_listener::new_window(ev::scroll, move |_| {
        shrink_nav(scrolled, scroll_y());
    });

    view! {
        <nav
            id="thenav"
            data-scrolled=move || scrolled.get().to_string()
            class=move || nav_class(scrolled.get())
        >
            <div class="container mx-auto px-6 flex justify-between items-center">
                <a
                    href=Section::Home.href()
                    aria-label=Section::Home.label()
                    class="flex items-center gap-3"
                >
                    <Logo class="w-10 h-10 rounded-xl shadow-lg shadow-indigo-500/20" />
                    <span class="font-jakarta font-bold text-lg hidden sm:block">
                        {SERVER.short_name}
                    </span>
                </a>
                <div class="flex items-center gap-6 text-sm font-medium">
                    {Section::NAV
                        .into_iter()
                        .map(|section| {
                            view! {
                                <a
                                    href=section.href()
                                    class="hidden md:inline hover:text-indigo-400 transition-colors"
                                >
                                    {section.label()}
                                </a>
                            }
                        })
                        .collect_view()}
                    <a
                        href=SERVER.invite_url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="px-5 py-2 rounded-full discord-gradient text-white shadow-lg shadow-indigo-500/25 hover:scale-105 transition-transform active:scale-95"
                    >
                        "Join Now"
                    </a>
                </div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_only_past_threshold() {
        let scrolled = RwSignal::new(false);
        for (y, expected) in [(0.0, false), (49.0, false), (50.0, false), (51.0, true), (1000.0, true)] {
            shrink_nav(scrolled, y);
            assert_eq!(scrolled.get_untracked(), expected, "offset {}", y);
        }
    }

    #[test]
    fn scrolling_back_up_restores_transparency() {
        let scrolled = RwSignal::new(false);
        shrink_nav(scrolled, 0.0);
        assert!(!scrolled.get_untracked());
        assert!(nav_class(scrolled.get_untracked()).contains("bg-transparent"));

        shrink_nav(scrolled, 200.0);
        assert!(scrolled.get_untracked());
        assert!(nav_class(scrolled.get_untracked()).contains("backdrop-blur-md"));

        shrink_nav(scrolled, 0.0);
        assert!(!scrolled.get_untracked());
        assert!(nav_class(scrolled.get_untracked()).contains("bg-transparent"));
    }
}

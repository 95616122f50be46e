use leptos::prelude::*;

use super::reveal::{Motion, Reveal};

#[component]
pub fn SectionHeading(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="text-center mb-16">
            <Reveal
                motion=Motion::RiseShort
                class="inline-block px-4 py-1.5 rounded-full bg-indigo-500/10 border border-indigo-500/20 text-indigo-400 text-xs font-bold uppercase tracking-wider mb-4"
            >
                {subtitle}
            </Reveal>
            <Reveal motion=Motion::Rise delay_ms=100>
                <h2 class="text-3xl md:text-5xl font-jakarta font-bold">{title}</h2>
            </Reveal>
        </div>
    }
}

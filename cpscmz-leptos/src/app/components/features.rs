use cpscmz_state::{content::FEATURES, section::Section};
use leptos::prelude::*;

use super::icon::Glyph;
use super::reveal::{Motion, Reveal};
use super::section_heading::SectionHeading;
use crate::app::theme::AccentClass;

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id=Section::Features.id() class="py-24 bg-[#0a0c14]">
            <div class="container mx-auto px-6">
                <SectionHeading title="Benefits of Joining" subtitle="Server Features" />
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {FEATURES
                        .into_iter()
                        .enumerate()
                        .map(|(i, feature)| {
                            view! {
                                <Reveal
                                    card="feature"
                                    motion=Motion::Grow
                                    delay_ms={i as u32 * 50}
                                    class="p-8 rounded-3xl bg-white/[0.03] border border-white/5 hover:border-white/20 flex gap-6 group"
                                >
                                    <div class=format!(
                                        "{} bg-white/5 w-14 h-14 rounded-2xl flex-shrink-0 flex items-center justify-center group-hover:bg-white/10 transition-colors",
                                        feature.color.text_class(),
                                    )>
                                        <Glyph icon=feature.icon />
                                    </div>
                                    <div>
                                        <h5 class="text-xl font-bold mb-2">{feature.title}</h5>
                                        <p class="text-gray-500 text-sm leading-relaxed">{feature.description}</p>
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

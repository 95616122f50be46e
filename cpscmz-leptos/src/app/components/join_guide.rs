use cpscmz_state::{content::STEPS, section::Section};
use leptos::prelude::*;

use super::icon::Glyph;
use super::reveal::{Motion, Reveal};
use super::section_heading::SectionHeading;
use crate::app::theme::AccentClass;

#[component]
pub fn JoinGuide() -> impl IntoView {
    view! {
        <section id=Section::Guide.id() class="py-24 bg-[#0f111a]">
            <div class="container mx-auto px-6">
                <SectionHeading title="How to Get Started" subtitle="Join Guide" />
                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">
                    {STEPS
                        .into_iter()
                        .enumerate()
                        .map(|(i, step)| {
                            view! {
                                <Reveal
                                    card="step"
                                    motion=Motion::Rise
                                    delay_ms={i as u32 * 100}
                                    class="relative group p-8 rounded-3xl bg-white/5 border border-white/10 hover:bg-white/10"
                                >
                                    <div class="absolute -top-4 -left-4 w-10 h-10 rounded-full bg-[#0f111a] border border-white/10 flex items-center justify-center font-bold text-indigo-400 z-10">
                                        {i + 1}
                                    </div>
                                    <div class=format!(
                                        "w-14 h-14 rounded-2xl {} flex items-center justify-center text-white mb-6 group-hover:scale-110 transition-transform",
                                        step.color.soft_bg_class(),
                                    )>
                                        <div class=format!(
                                            "{} w-10 h-10 rounded-xl flex items-center justify-center shadow-lg shadow-black/20",
                                            step.color.bg_class(),
                                        )>
                                            <Glyph icon=step.icon />
                                        </div>
                                    </div>
                                    <h4 class="text-xl font-bold mb-3">{step.title}</h4>
                                    <p class="text-gray-400 text-sm leading-relaxed">{step.description}</p>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

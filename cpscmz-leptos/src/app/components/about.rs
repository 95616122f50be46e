use cpscmz_state::{
    content::{Icon, ABOUT_HIGHLIGHTS, ABOUT_STAT},
    section::Section,
};
use leptos::prelude::*;

use super::icon::Glyph;
use super::reveal::{Motion, Reveal};
use super::section_heading::SectionHeading;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=Section::About.id() class="py-24 bg-[#0a0c14]">
            <div class="container mx-auto px-6">
                <div class="grid lg:grid-cols-2 gap-16 items-center">
                    <Reveal motion=Motion::FromLeft class="order-2 lg:order-1">
                        <div class="relative group">
                            <div class="absolute -inset-1 bg-gradient-to-r from-indigo-500 to-purple-500 rounded-3xl blur opacity-25 group-hover:opacity-40 transition duration-1000 group-hover:duration-200"></div>
                            <div class="relative bg-[#151824] rounded-3xl p-8 border border-white/10">
                                <h3 class="text-2xl font-bold mb-6 flex items-center gap-3">
                                    <Glyph icon=Icon::Info class="w-6 h-6 text-indigo-400" />
                                    "What is CPSCMz?"
                                </h3>
                                <p class="text-gray-400 leading-relaxed mb-6">
                                    "CPSCMz is more than just a Discord server; it's a digital campus designed for modern students. We believe that learning is better together, which is why we've built a space where collaboration, academic support, and friendship thrive."
                                </p>
                                <div class="space-y-4">
                                    {ABOUT_HIGHLIGHTS
                                        .into_iter()
                                        .enumerate()
                                        .map(|(i, item)| {
                                            view! {
                                                <Reveal
                                                    card="highlight"
                                                    motion=Motion::RiseShort
                                                    delay_ms={i as u32 * 75}
                                                    class="flex items-start gap-3"
                                                >
                                                    <div class="mt-1 flex-shrink-0 w-5 h-5 rounded-full bg-indigo-500/20 flex items-center justify-center">
                                                        <Glyph icon=Icon::CheckCircle class="w-3 h-3 text-indigo-400" />
                                                    </div>
                                                    <span class="text-gray-300">{item}</span>
                                                </Reveal>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        </div>
                    </Reveal>

                    <Reveal motion=Motion::FromRight class="order-1 lg:order-2">
                        <SectionHeading title="A Home for Every Student" subtitle="The Community" />
                        <p class="text-gray-400 text-lg leading-relaxed mb-8">
                            "Whether you're looking for last-minute exam prep, interested in participating in fun school events, or just want a place to chill between classes, CPSCMz has a place for you."
                        </p>
                        <div class="grid grid-cols-1 gap-6">
                            <div class="p-6 rounded-2xl bg-white/5 border border-white/10 hover:border-indigo-500/30 transition-colors flex items-center gap-6">
                                <div class="w-12 h-12 rounded-xl bg-indigo-500/10 flex items-center justify-center">
                                    <Glyph icon=Icon::BookOpen class="text-indigo-400 w-6 h-6" />
                                </div>
                                <div>
                                    <div class="text-3xl font-bold text-white mb-1">{ABOUT_STAT.value}</div>
                                    <div class="text-gray-500 text-sm">{ABOUT_STAT.label}</div>
                                </div>
                            </div>
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

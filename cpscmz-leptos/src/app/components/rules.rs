use cpscmz_state::{
    content::{Icon, RULES, SERVER},
    section::Section,
};
use leptos::prelude::*;

use super::icon::Glyph;
use super::reveal::{Motion, Reveal};

#[component]
pub fn Rules() -> impl IntoView {
    view! {
        <section id=Section::Rules.id() class="py-24 bg-[#0f111a]">
            <div class="container mx-auto px-6">
                <div class="max-w-4xl mx-auto glass rounded-3xl p-8 md:p-12 relative overflow-hidden">
                    <div class="absolute top-0 right-0 w-32 h-32 bg-indigo-500/10 rounded-full blur-3xl -mr-16 -mt-16"></div>

                    <div class="flex flex-col md:flex-row gap-12 items-center">
                        <div class="flex-1">
                            <h3 class="text-3xl font-jakarta font-bold mb-6 flex items-center gap-3">
                                <Glyph icon=Icon::ShieldAlert class="w-7 h-7 text-red-400" />
                                "Server Rules"
                            </h3>
                            <p class="text-gray-400 mb-8">
                                "To keep our community safe and enjoyable for everyone, we ask all members to adhere to our core rules. Full rules are available in the "
                                <span class="text-indigo-400">"#rules"</span>
                                " channel."
                            </p>
                            <div class="space-y-6">
                                {RULES
                                    .into_iter()
                                    .enumerate()
                                    .map(|(i, rule)| {
                                        view! {
                                            <Reveal
                                                card="rule"
                                                motion=Motion::FromLeft
                                                delay_ms={i as u32 * 100}
                                                class="flex gap-4"
                                            >
                                                <div class="flex-shrink-0 w-8 h-8 rounded-lg bg-white/5 flex items-center justify-center text-xs font-bold text-gray-400 border border-white/10">
                                                    {format!("{:02}", i + 1)}
                                                </div>
                                                <div>
                                                    <h4 class="font-bold text-white mb-1">{rule.title}</h4>
                                                    <p class="text-gray-500 text-sm">{rule.description}</p>
                                                </div>
                                            </Reveal>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                        <Reveal motion=Motion::Grow class="flex-shrink-0 w-full md:w-64 text-center">
                            <div class="p-8 rounded-3xl bg-white/5 border border-white/10">
                                <div class="w-16 h-16 mx-auto mb-6 rounded-2xl discord-gradient flex items-center justify-center text-white">
                                    <Glyph icon=Icon::ShieldCheck class="w-8 h-8" />
                                </div>
                                <p class="text-gray-400 text-sm mb-6">"Ready to be part of the community?"</p>
                                <a
                                    href=SERVER.invite_url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="inline-flex items-center gap-2 px-6 py-3 rounded-xl discord-gradient text-white font-bold hover:scale-105 transition-transform active:scale-95"
                                >
                                    "Join Server"
                                    <Glyph icon=Icon::ArrowUpRight class="w-4 h-4" />
                                </a>
                            </div>
                        </Reveal>
                    </div>
                </div>
            </div>
        </section>
    }
}

use cpscmz_state::{content::SERVER, section::Section};
use leptos::prelude::*;

use super::logo::Logo;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-12 border-t border-white/5 bg-[#0a0c14]">
            <div class="container mx-auto px-6 flex flex-col md:flex-row items-center justify-between gap-6 text-sm text-gray-500">
                <div class="flex items-center gap-3">
                    <Logo class="w-8 h-8 rounded-lg" />
                    <span class="font-jakarta font-bold text-gray-300">{SERVER.short_name}</span>
                </div>
                <div class="flex items-center gap-6">
                    {Section::NAV
                        .into_iter()
                        .chain([Section::Rules])
                        .map(|section| {
                            view! {
                                <a href=section.href() class="hover:text-indigo-400 transition-colors">
                                    {section.label()}
                                </a>
                            }
                        })
                        .collect_view()}
                    <a
                        href=SERVER.invite_url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="hover:text-indigo-400 transition-colors"
                    >
                        "Discord"
                    </a>
                </div>
                <p>"Not affiliated with Discord Inc."</p>
            </div>
        </footer>
    }
}

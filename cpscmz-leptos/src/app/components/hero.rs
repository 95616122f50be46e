use cpscmz_state::{
    content::{Icon, SERVER},
    section::Section,
};
use leptos::prelude::*;

use super::icon::Glyph;
use super::logo::Logo;
use super::reveal::{reveal_class, Motion};
use crate::app::hooks::use_reveal::use_mount_reveal;

#[component]
pub fn Hero() -> impl IntoView {
    let entered = use_mount_reveal();
    let entrance = move |base: &'static str, motion: Motion| {
        move || reveal_class(base, motion, entered.get())
    };

    view! {
        <section
            id=Section::Home.id()
            class="relative min-h-screen flex items-center justify-center overflow-hidden pt-20"
        >
            <div class="absolute top-1/4 -left-20 w-96 h-96 bg-indigo-600/20 blur-[120px] rounded-full"></div>
            <div class="absolute bottom-1/4 -right-20 w-96 h-96 bg-purple-600/20 blur-[120px] rounded-full"></div>

            <div class="container mx-auto px-6 relative z-10 text-center">
                <div
                    data-reveal=move || entered.get().as_str()
                    class=entrance("mb-8 flex justify-center", Motion::Grow)
                >
                    <div class="relative">
                        <div class="absolute inset-0 bg-indigo-500 blur-2xl opacity-20 animate-pulse"></div>
                        <Logo
                            alt="Server Logo"
                            class="w-32 h-32 md:w-40 md:h-40 rounded-3xl border-4 border-white/10 shadow-2xl relative z-10 animate-float"
                        />
                    </div>
                </div>

                <h1
                    class=entrance("font-jakarta font-extrabold text-4xl md:text-6xl lg:text-7xl mb-6 leading-tight tracking-tight", Motion::RiseShort)
                    style="transition-delay: 200ms"
                >
                    "Welcome to "
                    <br />
                    <span class="text-gradient drop-shadow-sm">{SERVER.name}</span>
                </h1>

                <p
                    class=entrance("text-gray-400 text-lg md:text-xl max-w-2xl mx-auto mb-10 leading-relaxed", Motion::RiseShort)
                    style="transition-delay: 300ms"
                >
                    {SERVER.tagline}
                </p>

                <div
                    class=entrance("flex flex-col sm:flex-row items-center justify-center gap-4", Motion::RiseShort)
                    style="transition-delay: 400ms"
                >
                    <a
                        href=SERVER.invite_url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="group relative flex items-center gap-3 px-8 py-4 rounded-2xl discord-gradient text-white text-lg font-bold shadow-2xl shadow-indigo-600/30 hover:scale-105 transition-all active:scale-95 w-full sm:w-auto justify-center"
                    >
                        "Join the Community"
                        <Glyph
                            icon=Icon::ArrowUpRight
                            class="w-5 h-5 group-hover:translate-x-1 group-hover:-translate-y-1 transition-transform"
                        />
                    </a>
                    <a
                        href=Section::About.href()
                        class="flex items-center gap-2 px-8 py-4 rounded-2xl bg-white/5 border border-white/10 hover:bg-white/10 transition-all w-full sm:w-auto text-lg font-medium justify-center"
                    >
                        "Learn More"
                        <Glyph icon=Icon::ChevronDown class="w-5 h-5 animate-bounce" />
                    </a>
                </div>
            </div>
        </section>
    }
}

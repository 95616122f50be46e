pub mod home {
    use leptos::prelude::*;

    use crate::app::components::{
        about::About, features::Features, footer::Footer, hero::Hero, join_guide::JoinGuide,
        navbar::Navbar, rules::Rules,
    };

    #[component]
    pub fn Page() -> impl IntoView {
        view! {
            <main class="min-h-screen bg-[#0f111a] text-white selection:bg-indigo-500/30">
                <Navbar />
                <Hero />
                <About />
                <JoinGuide />
                <Features />
                <Rules />
                <Footer />
            </main>
        }
    }
}

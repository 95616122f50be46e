use cpscmz_state::reveal::RevealState;
use leptos::{html, prelude::*};

use crate::app::hooks::use_reveal::use_reveal;

/// Entrance transition applied when an element is revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Motion {
    #[default]
    Rise,
    RiseShort,
    Grow,
    FromLeft,
    FromRight,
}

impl Motion {
    pub fn class(self, state: RevealState) -> &'static str {
        match (self, state) {
            (_, RevealState::Revealed) => "opacity-100 translate-x-0 translate-y-0 scale-100",
            (Motion::Rise, RevealState::Pending) => "opacity-0 translate-y-8",
            (Motion::RiseShort, RevealState::Pending) => "opacity-0 translate-y-3",
            (Motion::Grow, RevealState::Pending) => "opacity-0 scale-95",
            (Motion::FromLeft, RevealState::Pending) => "opacity-0 -translate-x-8",
            (Motion::FromRight, RevealState::Pending) => "opacity-0 translate-x-8",
        }
    }
}

pub fn reveal_class(base: &str, motion: Motion, state: RevealState) -> String {
    format!(
        "{} transition-all duration-700 ease-out {}",
        base,
        motion.class(state)
    )
}

/// Wraps its children in a block that animates in the first time it is
/// scrolled into view and stays visible afterwards.
#[component]
pub fn Reveal(
    #[prop(into, optional)] class: String,
    #[prop(optional)] motion: Motion,
    #[prop(optional)] delay_ms: u32,
    /// Marks the block as a content card of the given kind.
    #[prop(optional)]
    card: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let state = use_reveal(node_ref);
    let look = Look {
        class,
        motion,
        delay_ms,
        card,
    };

    reveal_frame(node_ref, state, look, children)
}

/// Presentation half of [`Reveal`]: everything except the observer.
pub struct Look {
    pub class: String,
    pub motion: Motion,
    pub delay_ms: u32,
    pub card: Option<&'static str>,
}

pub fn reveal_frame(
    node_ref: NodeRef<html::Div>,
    state: ReadSignal<RevealState>,
    look: Look,
    children: Children,
) -> impl IntoView {
    let Look {
        class,
        motion,
        delay_ms,
        card,
    } = look;

    view! {
        <div
            node_ref=node_ref
            data-card=card
            data-reveal=move || state.get().as_str()
            class=move || reveal_class(&class, motion, state.get())
            style=format!("transition-delay: {}ms", delay_ms)
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use leptos::reactive::owner::Owner;
    use leptos::tachys::view::RenderHtml;

    use super::*;
    use crate::app::hooks::use_reveal::latch_reveal;

    fn render_card(latch: &[bool]) -> String {
        let owner = Owner::new();
        owner.with(|| {
            let state = RwSignal::new(RevealState::Pending);
            for intersecting in latch {
                latch_reveal(state, *intersecting);
            }
            let look = Look {
                class: "p-8".to_string(),
                motion: Motion::Grow,
                delay_ms: 50,
                card: Some("feature"),
            };
            let children: Children = Box::new(|| view! { <p>"card"</p> }.into_any());
            reveal_frame(NodeRef::new(), state.read_only(), look, children).to_html()
        })
    }

    #[test]
    fn latched_card_renders_revealed() {
        let html = render_card(&[true, false]);
        assert!(html.contains(r#"data-card="feature""#));
        assert!(html.contains(r#"data-reveal="revealed""#));
        assert!(html.contains("opacity-100"));
        assert!(html.contains("transition-delay: 50ms"));
    }

    #[test]
    fn unseen_card_renders_pending() {
        let html = render_card(&[false]);
        assert!(html.contains(r#"data-reveal="pending""#));
        assert!(html.contains("opacity-0 scale-95"));
    }

    #[test]
    fn pending_is_hidden() {
        for motion in [
            Motion::Rise,
            Motion::RiseShort,
            Motion::Grow,
            Motion::FromLeft,
            Motion::FromRight,
        ] {
            assert!(motion.class(RevealState::Pending).contains("opacity-0"));
            assert!(motion.class(RevealState::Revealed).contains("opacity-100"));
        }
    }

    #[test]
    fn keeps_base_class() {
        let class = reveal_class("p-8 rounded-3xl", Motion::Grow, RevealState::Pending);
        assert!(class.starts_with("p-8 rounded-3xl "));
        assert!(class.ends_with("opacity-0 scale-95"));
    }
}

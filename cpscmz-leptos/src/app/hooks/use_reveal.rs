use cpscmz_state::reveal::RevealState;
use leptos::{html::ElementType, prelude::*};
use tracing::trace;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::toolbox::prelude::*;

/// Fraction of the element that must be visible before it counts as seen.
pub const REVEAL_THRESHOLD: f64 = 0.15;

/// Feeds one intersection report into `state`. Returns `true` only on the
/// report that latched it, which is the one time the signal is written.
pub fn latch_reveal(state: RwSignal<RevealState>, intersecting: bool) -> bool {
    let current = state.get_untracked();
    let next = current.observe(intersecting);
    if next == current {
        return false;
    }
    trace!("{} -> {}", current.as_str(), next.as_str());
    state.set(next);
    true
}

/// Latches to [`RevealState::Revealed`] the first time `target` enters the
/// viewport, then stops observing it.
pub fn use_reveal<E>(target: NodeRef<E>) -> ReadSignal<RevealState>
where
    E: ElementType,
    E::Output: JsCast + Clone + 'static + Into<HtmlElement>,
{
    let state = RwSignal::new(RevealState::Pending);

    target.observe_intersection_with_options(
        move |entry, observer| {
            if latch_reveal(state, entry.is_intersecting()) {
                observer.unobserve(&entry.target());
            }
        },
        intersection_observer::Options::default().set_threshold(REVEAL_THRESHOLD),
    );

    state.read_only()
}

/// Latches once the owning component has mounted in the browser.
pub fn use_mount_reveal() -> ReadSignal<RevealState> {
    let state = RwSignal::new(RevealState::Pending);

    Effect::new(move || {
        latch_reveal(state, true);
    });

    state.read_only()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolling_out_keeps_it_revealed() {
        let state = RwSignal::new(RevealState::Pending);

        let latched: Vec<bool> = [false, true, false, true, false]
            .into_iter()
            .map(|intersecting| {
                let latched = latch_reveal(state, intersecting);
                if intersecting {
                    assert_eq!(state.get_untracked(), RevealState::Revealed);
                }
                latched
            })
            .collect();

        assert_eq!(latched, [false, true, false, false, false]);
        assert_eq!(state.get_untracked(), RevealState::Revealed);
    }

    #[test]
    fn out_of_view_stays_pending() {
        let state = RwSignal::new(RevealState::Pending);
        assert!(!latch_reveal(state, false));
        assert!(!latch_reveal(state, false));
        assert_eq!(state.get_untracked(), RevealState::Pending);
    }
}

use strum::{AsRefStr, IntoStaticStr};

/// One-way visibility latch for an animated element.
///
/// An element starts `Pending` and becomes `Revealed` the first time it is
/// reported as intersecting the viewport. `Revealed` is terminal: leaving the
/// viewport again, or any later report, keeps it revealed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum RevealState {
    #[default]
    Pending,
    Revealed,
}

impl RevealState {
    pub fn observe(self, intersecting: bool) -> Self {
        match (self, intersecting) {
            (RevealState::Pending, true) => RevealState::Revealed,
            (state, _) => state,
        }
    }

    pub fn is_revealed(self) -> bool {
        self == RevealState::Revealed
    }

    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_pending() {
        assert_eq!(RevealState::default(), RevealState::Pending);
        assert!(!RevealState::default().is_revealed());
    }

    #[test]
    fn stays_pending_until_intersecting() {
        let state = RevealState::Pending.observe(false).observe(false);
        assert_eq!(state, RevealState::Pending);
    }

    #[test]
    fn latches() {
        let mut state = RevealState::Pending;
        let mut transitions = 0;
        for intersecting in [false, true, false, true, true, false, false] {
            let next = state.observe(intersecting);
            if next != state {
                transitions += 1;
            }
            state = next;
        }
        assert_eq!(transitions, 1);
        assert!(state.is_revealed());
    }

    #[test]
    fn names() {
        assert_eq!(RevealState::Pending.as_str(), "pending");
        assert_eq!(RevealState::Revealed.as_ref(), "revealed");
    }
}

/// Where the presentation currently is. The only mutable state of the app.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum PresentationState {
    #[default]
    Closed,              // Wrapped present is showing
    ViewingPhoto(usize), // Photo at this catalog index is showing
}

impl PresentationState {
    pub fn opened(&self) -> bool {
        matches!(self, PresentationState::ViewingPhoto(_))
    }

    pub fn photo_index(&self) -> Option<usize> {
        match self {
            PresentationState::Closed => None,
            PresentationState::ViewingPhoto(i) => Some(*i),
        }
    }

    /// Next state after a click, for a catalog of `photo_count` photos.
    ///
    /// With an empty catalog the present never opens. An index past the end
    /// of the catalog falls back to `Closed`.
    pub fn advance(self, photo_count: usize) -> Self {
        match self {
            PresentationState::Closed if photo_count == 0 => PresentationState::Closed,
            PresentationState::Closed => PresentationState::ViewingPhoto(0),
            PresentationState::ViewingPhoto(i) if i + 1 < photo_count => {
                PresentationState::ViewingPhoto(i + 1)
            }
            PresentationState::ViewingPhoto(_) => PresentationState::Closed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let state = PresentationState::default();
        assert_eq!(state, PresentationState::Closed);
        assert!(!state.opened());
        assert_eq!(state.photo_index(), None);
    }

    #[test]
    fn opening_shows_first_photo() {
        for n in 1..6 {
            assert_eq!(PresentationState::Closed.advance(n), PresentationState::ViewingPhoto(0));
        }
    }

    #[test]
    fn photos_advance_one_at_a_time() {
        let n = 5;
        for i in 0..n - 1 {
            assert_eq!(
                PresentationState::ViewingPhoto(i).advance(n),
                PresentationState::ViewingPhoto(i + 1)
            );
        }
    }

    #[test]
    fn last_photo_wraps_to_closed() {
        assert_eq!(PresentationState::ViewingPhoto(2).advance(3), PresentationState::Closed);
        assert_eq!(PresentationState::ViewingPhoto(0).advance(1), PresentationState::Closed);
    }

    #[test]
    fn cycle_has_period_n_plus_one() {
        for n in 0..8 {
            let mut state = PresentationState::Closed;
            for _ in 0..n + 1 {
                state = state.advance(n);
            }
            assert_eq!(state, PresentationState::Closed, "n = {}", n);
        }
    }

    #[test]
    fn opened_state_tracks_index() {
        let state = PresentationState::Closed.advance(2).advance(2);
        assert!(state.opened());
        assert_eq!(state.photo_index(), Some(1));
    }

    #[test]
    fn empty_catalog_never_opens() {
        assert_eq!(PresentationState::Closed.advance(0), PresentationState::Closed);
    }

    #[test]
    fn out_of_range_index_closes() {
        assert_eq!(PresentationState::ViewingPhoto(7).advance(3), PresentationState::Closed);
    }
}

/// Lightbox overlay state machine: `Closed` or `Open` around one displayed
/// image reference. Kept free of DOM types so transitions can be tested in
/// isolation from the components that render them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Closed,
    Open,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Lightbox {
    phase: Phase,
    image: Option<String>,
}

impl Lightbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `image`. Valid from either phase; re-opening while open swaps
    /// the displayed reference without passing through `Closed`.
    pub fn open(&mut self, image: impl Into<String>) {
        self.image = Some(image.into());
        self.phase = Phase::Open;
    }

    /// Hide the overlay. No-op when already closed. The last reference is
    /// retained, not cleared.
    pub fn close(&mut self) {
        self.phase = Phase::Closed;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase == Phase::Open
    }

    /// The reference currently on screen: `Some` only while open.
    pub fn displayed(&self) -> Option<&str> {
        match self.phase {
            Phase::Open => self.image.as_deref(),
            Phase::Closed => None,
        }
    }

    /// The most recently displayed reference, surviving `close()`.
    pub fn last_image(&self) -> Option<&str> {
        self.image.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed_with_no_image() {
        let lightbox = Lightbox::new();
        assert_eq!(lightbox.phase(), Phase::Closed);
        assert!(!lightbox.is_open());
        assert_eq!(lightbox.displayed(), None);
        assert_eq!(lightbox.last_image(), None);
    }

    #[test]
    fn open_from_closed_shows_image() {
        let mut lightbox = Lightbox::new();
        lightbox.open("images/cat3.jpg");
        assert_eq!(lightbox.phase(), Phase::Open);
        assert_eq!(lightbox.displayed(), Some("images/cat3.jpg"));
    }

    #[test]
    fn reopen_while_open_swaps_reference() {
        let mut lightbox = Lightbox::new();
        lightbox.open("images/cat1.jpg");
        lightbox.open("images/cat2.jpg");

        // Still open, new reference, no intermediate close
        assert_eq!(lightbox.phase(), Phase::Open);
        assert_eq!(lightbox.displayed(), Some("images/cat2.jpg"));
    }

    #[test]
    fn close_hides_overlay() {
        let mut lightbox = Lightbox::new();
        lightbox.open("images/cat5.jpg");
        lightbox.close();
        assert_eq!(lightbox.phase(), Phase::Closed);
        assert_eq!(lightbox.displayed(), None);
    }

    #[test]
    fn close_retains_last_reference() {
        let mut lightbox = Lightbox::new();
        lightbox.open("images/cat7.jpg");
        lightbox.close();
        assert_eq!(lightbox.last_image(), Some("images/cat7.jpg"));
    }

    #[test]
    fn close_while_closed_is_a_no_op() {
        let mut lightbox = Lightbox::new();
        lightbox.close();
        assert_eq!(lightbox, Lightbox::new());

        lightbox.open("images/cat1.jpg");
        lightbox.close();
        let settled = lightbox.clone();
        lightbox.close();
        assert_eq!(lightbox, settled);
    }

    #[test]
    fn reopen_after_close_displays_again() {
        let mut lightbox = Lightbox::new();
        lightbox.open("images/cat1.jpg");
        lightbox.close();
        lightbox.open("images/cat9.jpg");
        assert!(lightbox.is_open());
        assert_eq!(lightbox.displayed(), Some("images/cat9.jpg"));
    }

    #[test]
    fn displayed_is_none_only_because_of_phase() {
        let mut lightbox = Lightbox::new();
        lightbox.open("images/cat4.jpg");
        lightbox.close();

        // Reference still held, just not displayed
        assert_eq!(lightbox.displayed(), None);
        assert_eq!(lightbox.last_image(), Some("images/cat4.jpg"));
    }
}

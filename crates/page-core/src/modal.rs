//! Overlay that shows an enlarged copy of a clicked figure.

use crate::constants::RESPONSIVE_CLASSES;
use crate::host::{PageElement, Viewport};
use crate::layout::px;

/// `Open` owns the clone currently attached to the overlay.
#[derive(Clone, Debug)]
pub enum ModalState<E> {
    Closed,
    Open(E),
}

pub struct ModalController<E> {
    overlay: E,
    close_control: E,
    body: E,
    state: ModalState<E>,
    // Inline body overflow from before the modal took over scrolling.
    saved_overflow: Option<String>,
}

impl<E: PageElement> ModalController<E> {
    pub fn new(overlay: E, close_control: E, body: E) -> Self {
        Self {
            overlay,
            close_control,
            body,
            state: ModalState::Closed,
            saved_overflow: None,
        }
    }

    pub fn state(&self) -> &ModalState<E> {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open(_))
    }

    pub fn displayed(&self) -> Option<&E> {
        match &self.state {
            ModalState::Open(clone) => Some(clone),
            ModalState::Closed => None,
        }
    }

    fn take_clone(&mut self) -> Option<E> {
        match std::mem::replace(&mut self.state, ModalState::Closed) {
            ModalState::Open(clone) => Some(clone),
            ModalState::Closed => None,
        }
    }

    /// Show a copy of `source`. The page figure itself is never touched.
    pub fn open_figure(&mut self, source: &E, viewport: &impl Viewport) {
        let Some(clone) = source.deep_clone() else {
            log::warn!("[modal] figure could not be cloned");
            return;
        };
        if let Some(previous) = self.take_clone() {
            previous.detach();
        }

        clone.remove_attribute("id");
        // A media-query class could hide the clone if the window is resized
        // while the modal is open.
        for class in RESPONSIVE_CLASSES {
            clone.remove_class(class);
        }
        clone.set_style("cursor", "default");
        clone.set_style("position", "static");

        self.overlay.append_child(&clone);
        self.overlay.set_style("display", "block");
        if self.saved_overflow.is_none() {
            self.saved_overflow = Some(self.body.style("overflow"));
        }
        self.body.set_style("overflow", "hidden");
        self.state = ModalState::Open(clone);
        log::debug!("[modal] opened");

        self.reposition(viewport);
    }

    pub fn close_figure(&mut self) {
        self.overlay.set_style("display", "none");
        if let Some(clone) = self.take_clone() {
            let overflow = self.saved_overflow.take().unwrap_or_default();
            self.body.set_style("overflow", &overflow);
            clone.detach();
            log::debug!("[modal] closed");
        }
    }

    /// Keep the overlay over the viewport and the close control on the
    /// clone's right edge.
    pub fn reposition(&self, viewport: &impl Viewport) {
        let Some(clone) = self.displayed() else {
            return;
        };
        self.overlay.set_style("top", &px(viewport.scroll_y()));
        let margin = viewport.inner_width() - clone.client_right();
        self.close_control.set_style("margin-right", &px(margin));
    }
}

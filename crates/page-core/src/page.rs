use crate::host::{PageElement, Viewport};
use crate::layout::LayoutSync;
use crate::modal::ModalController;

/// Signals delivered by the host's event loop.
#[derive(Clone, Debug)]
pub enum PageEvent<E> {
    Scroll,
    Resize,
    /// A page figure was clicked; carries that figure.
    FigureClick(E),
    OverlayClick,
    CloseClick,
}

/// Both page effects, driven by one event stream.
pub struct PageEffects<E> {
    pub layout: LayoutSync<E>,
    pub modal: ModalController<E>,
}

impl<E: PageElement> PageEffects<E> {
    pub fn new(layout: LayoutSync<E>, modal: ModalController<E>) -> Self {
        Self { layout, modal }
    }

    /// Safe to call any number of times; a fixed DOM and scroll state always
    /// produce the same styles.
    pub fn update_layout(&mut self, viewport: &impl Viewport) {
        self.layout.update(viewport);
        self.modal.reposition(viewport);
    }

    pub fn handle(&mut self, event: PageEvent<E>, viewport: &impl Viewport) {
        match event {
            PageEvent::Scroll => {
                log::trace!("[page] scroll, y={}", viewport.scroll_y());
                self.update_layout(viewport);
            }
            PageEvent::Resize => {
                log::trace!("[page] resize, width={}", viewport.inner_width());
                self.update_layout(viewport);
            }
            PageEvent::FigureClick(figure) => {
                log::trace!("[page] figure click");
                self.modal.open_figure(&figure, viewport);
            }
            PageEvent::OverlayClick => {
                log::trace!("[page] overlay click");
                self.modal.close_figure();
            }
            PageEvent::CloseClick => {
                log::trace!("[page] close click");
                self.modal.close_figure();
            }
        }
    }
}

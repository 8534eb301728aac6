use super::{dispatch, SharedPage};
use crate::dom::{self, DomElement, WindowViewport};
use page_core::PageEvent;

/// One listener per page figure, each carrying its own element. Clones shown
/// in the modal are created later and never get a listener.
pub fn wire_figure_clicks(figures: &[DomElement], page: &SharedPage, viewport: &WindowViewport) {
    for figure in figures {
        let (page, viewport) = (page.clone(), viewport.clone());
        let source = figure.clone();
        dom::listen(&figure.0, "click", move || {
            dispatch(&page, &viewport, PageEvent::FigureClick(source.clone()));
        });
    }
}

/// The close control and the overlay background both close the modal.
pub fn wire_modal_close(
    overlay: &DomElement,
    close_control: &DomElement,
    page: &SharedPage,
    viewport: &WindowViewport,
) {
    let (page_overlay, viewport_overlay) = (page.clone(), viewport.clone());
    dom::listen(&overlay.0, "click", move || {
        dispatch(&page_overlay, &viewport_overlay, PageEvent::OverlayClick);
    });

    let (page_close, viewport_close) = (page.clone(), viewport.clone());
    dom::listen(&close_control.0, "click", move || {
        dispatch(&page_close, &viewport_close, PageEvent::CloseClick);
    });
}

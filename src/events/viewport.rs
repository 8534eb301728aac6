use super::{dispatch, SharedPage};
use crate::dom::{self, WindowViewport};
use page_core::PageEvent;
use web_sys as web;

/// Scroll is observed on the document, resize on the window. Every event
/// runs a full recompute; nothing is throttled.
pub fn wire_viewport_events(
    window: &web::Window,
    document: &web::Document,
    page: &SharedPage,
    viewport: &WindowViewport,
) {
    let (page_scroll, viewport_scroll) = (page.clone(), viewport.clone());
    dom::listen(document, "scroll", move || {
        dispatch(&page_scroll, &viewport_scroll, PageEvent::Scroll);
    });

    let (page_resize, viewport_resize) = (page.clone(), viewport.clone());
    dom::listen(window, "resize", move || {
        dispatch(&page_resize, &viewport_resize, PageEvent::Resize);
    });
}

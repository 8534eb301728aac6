pub mod click;
pub mod viewport;

pub use click::{wire_figure_clicks, wire_modal_close};
pub use viewport::wire_viewport_events;

use crate::dom::{DomElement, WindowViewport};
use page_core::{PageEffects, PageEvent};
use std::cell::RefCell;
use std::rc::Rc;

pub type SharedPage = Rc<RefCell<PageEffects<DomElement>>>;

#[inline]
fn dispatch(page: &SharedPage, viewport: &WindowViewport, event: PageEvent<DomElement>) {
    page.borrow_mut().handle(event, viewport);
}

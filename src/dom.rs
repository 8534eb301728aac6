use page_core::{PageElement, PageError, PageIds, SectionFigurePair, Viewport};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// `document.readyState` before the markup has been fully parsed.
#[inline]
pub fn is_still_loading(ready_state: &str) -> bool {
    ready_state == "loading"
}

/// Register `handler` for `event` on `target` for the lifetime of the page.
pub fn listen(target: &web::EventTarget, event: &str, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let callback = closure.as_ref().unchecked_ref();
    if let Err(e) = target.add_event_listener_with_callback(event, callback) {
        log::warn!("[dom] could not listen for {}: {:?}", event, e);
    }
    closure.forget();
}

/// `PageElement` over a live `HtmlElement`.
#[derive(Clone, Debug, PartialEq)]
pub struct DomElement(pub web::HtmlElement);

impl PageElement for DomElement {
    fn offset_top(&self) -> f64 {
        self.0.offset_top() as f64
    }

    fn client_right(&self) -> f64 {
        self.0.get_bounding_client_rect().right()
    }

    fn style(&self, property: &str) -> String {
        self.0.style().get_property_value(property).unwrap_or_default()
    }

    fn set_style(&self, property: &str, value: &str) {
        if let Err(e) = self.0.style().set_property(property, value) {
            log::warn!("[dom] {}: {:?}", property, e);
        }
    }

    fn deep_clone(&self) -> Option<Self> {
        self.0
            .clone_node_with_deep(true)
            .ok()
            .and_then(|node| node.dyn_into::<web::HtmlElement>().ok())
            .map(DomElement)
    }

    fn remove_attribute(&self, name: &str) {
        _ = self.0.remove_attribute(name);
    }

    fn remove_class(&self, class: &str) {
        _ = self.0.class_list().remove_1(class);
    }

    fn append_child(&self, child: &Self) {
        _ = self.0.append_child(&child.0);
    }

    fn detach(&self) {
        self.0.remove();
    }
}

/// Live window geometry; every read hits the DOM.
#[derive(Clone, Debug)]
pub struct WindowViewport {
    window: web::Window,
    body: web::HtmlElement,
}

impl WindowViewport {
    pub fn new(window: web::Window, body: web::HtmlElement) -> Self {
        Self { window, body }
    }
}

#[inline]
fn js_f64(value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>) -> f64 {
    value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
}

impl Viewport for WindowViewport {
    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn page_height(&self) -> f64 {
        self.body.scroll_height() as f64
    }

    fn inner_width(&self) -> f64 {
        js_f64(self.window.inner_width())
    }

    fn inner_height(&self) -> f64 {
        js_f64(self.window.inner_height())
    }
}

pub fn element_by_id(document: &web::Document, id: &str) -> Result<DomElement, PageError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| PageError::MissingElement { id: id.to_string() })?
        .dyn_into::<web::HtmlElement>()
        .map(DomElement)
        .map_err(|_| PageError::NotHtmlElement { id: id.to_string() })
}

pub fn elements_by_tag(document: &web::Document, tag: &str) -> Vec<DomElement> {
    let collection = document.get_elements_by_tag_name(tag);
    (0..collection.length())
        .filter_map(|i| collection.item(i))
        .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
        .map(DomElement)
        .collect()
}

/// Every element the page effects need, resolved once at startup.
pub struct PageHandles {
    pub container: DomElement,
    pub pairs: Vec<SectionFigurePair<DomElement>>,
    pub overlay: DomElement,
    pub close_control: DomElement,
    pub figures: Vec<DomElement>,
}

pub fn resolve(document: &web::Document, ids: &PageIds) -> Result<PageHandles, PageError> {
    let pairs = ids
        .pairs
        .iter()
        .map(|(section, figure)| -> Result<_, PageError> {
            Ok(SectionFigurePair {
                section: element_by_id(document, section)?,
                figure: element_by_id(document, figure)?,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(PageHandles {
        container: element_by_id(document, &ids.perspective_container)?,
        pairs,
        overlay: element_by_id(document, &ids.modal_overlay)?,
        close_control: element_by_id(document, &ids.modal_close)?,
        figures: elements_by_tag(document, &ids.figure_tag),
    })
}

// In-memory element tree standing in for the DOM in host-side tests.

#![allow(dead_code)]

use page_core::PageElement;
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

#[derive(Default)]
pub struct Node {
    pub tag: String,
    pub id: RefCell<Option<String>>,
    pub classes: RefCell<Vec<String>>,
    pub styles: RefCell<BTreeMap<String, String>>,
    pub children: RefCell<Vec<FakeElement>>,
    parent: RefCell<Weak<Node>>,
    pub offset_top: Cell<f64>,
    pub client_right: Cell<f64>,
    /// Set on copies; points at the element they were cloned from.
    pub cloned_from: RefCell<Option<String>>,
    pub style_writes: Cell<usize>,
}

#[derive(Clone, Default)]
pub struct FakeElement(pub Rc<Node>);

impl FakeElement {
    pub fn new(tag: &str) -> Self {
        FakeElement(Rc::new(Node {
            tag: tag.to_string(),
            ..Default::default()
        }))
    }

    pub fn with_id(tag: &str, id: &str) -> Self {
        let el = Self::new(tag);
        *el.0.id.borrow_mut() = Some(id.to_string());
        el
    }

    pub fn with_classes(self, classes: &[&str]) -> Self {
        *self.0.classes.borrow_mut() = classes.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn at_top(self, offset_top: f64) -> Self {
        self.0.offset_top.set(offset_top);
        self
    }

    pub fn id(&self) -> Option<String> {
        self.0.id.borrow().clone()
    }

    pub fn classes(&self) -> Vec<String> {
        self.0.classes.borrow().clone()
    }

    pub fn style(&self, property: &str) -> Option<String> {
        self.0.styles.borrow().get(property).cloned()
    }

    pub fn styles(&self) -> BTreeMap<String, String> {
        self.0.styles.borrow().clone()
    }

    pub fn children(&self) -> Vec<FakeElement> {
        self.0.children.borrow().clone()
    }

    pub fn has_parent(&self) -> bool {
        self.0.parent.borrow().upgrade().is_some()
    }

    pub fn cloned_from(&self) -> Option<String> {
        self.0.cloned_from.borrow().clone()
    }

    pub fn style_writes(&self) -> usize {
        self.0.style_writes.get()
    }

    pub fn is(&self, other: &FakeElement) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PageElement for FakeElement {
    fn offset_top(&self) -> f64 {
        self.0.offset_top.get()
    }

    fn client_right(&self) -> f64 {
        self.0.client_right.get()
    }

    fn style(&self, property: &str) -> String {
        self.0.styles.borrow().get(property).cloned().unwrap_or_default()
    }

    fn set_style(&self, property: &str, value: &str) {
        self.0.style_writes.set(self.0.style_writes.get() + 1);
        let mut styles = self.0.styles.borrow_mut();
        if value.is_empty() {
            styles.remove(property);
        } else {
            styles.insert(property.to_string(), value.to_string());
        }
    }

    fn deep_clone(&self) -> Option<Self> {
        let copy = FakeElement(Rc::new(Node {
            tag: self.0.tag.clone(),
            id: RefCell::new(self.id()),
            classes: RefCell::new(self.classes()),
            styles: RefCell::new(self.styles()),
            offset_top: Cell::new(self.offset_top()),
            client_right: Cell::new(self.client_right()),
            cloned_from: RefCell::new(self.id().or_else(|| self.cloned_from())),
            ..Default::default()
        }));
        for child in self.children() {
            copy.append_child(&child.deep_clone()?);
        }
        Some(copy)
    }

    fn remove_attribute(&self, name: &str) {
        if name == "id" {
            *self.0.id.borrow_mut() = None;
        }
    }

    fn remove_class(&self, class: &str) {
        self.0.classes.borrow_mut().retain(|c| c != class);
    }

    fn append_child(&self, child: &Self) {
        child.detach();
        *child.0.parent.borrow_mut() = Rc::downgrade(&self.0);
        self.0.children.borrow_mut().push(child.clone());
    }

    fn detach(&self) {
        let parent = self.0.parent.borrow().upgrade();
        if let Some(parent) = parent {
            parent.children.borrow_mut().retain(|c| !Rc::ptr_eq(&c.0, &self.0));
        }
        *self.0.parent.borrow_mut() = Weak::new();
    }
}

/// The markup of the page: three sections with figures, an overlay with a
/// close control, and the body.
pub struct FakePage {
    pub container: FakeElement,
    pub sections: Vec<FakeElement>,
    pub figures: Vec<FakeElement>,
    pub overlay: FakeElement,
    pub close_control: FakeElement,
    pub body: FakeElement,
}

impl FakePage {
    pub fn new() -> Self {
        let sections = vec![
            FakeElement::with_id("section", "man").at_top(120.0),
            FakeElement::with_id("section", "career").at_top(940.0),
            FakeElement::with_id("section", "philosophy").at_top(1710.0),
        ];
        let figures = vec![
            FakeElement::with_id("figure", "man-section-figure").with_classes(&["hide-on-mobile"]),
            FakeElement::with_id("figure", "career-section-figure"),
            FakeElement::with_id("figure", "philosophy-section-figure")
                .with_classes(&["portrait", "hide-on-desktop"]),
        ];
        let overlay = FakeElement::with_id("div", "figure-modal");
        let close_control = FakeElement::with_id("span", "figure-modal-close");
        overlay.append_child(&close_control);
        FakePage {
            container: FakeElement::with_id("div", "perspective-container"),
            sections,
            figures,
            overlay,
            close_control,
            body: FakeElement::new("body"),
        }
    }

    pub fn pairs(&self) -> Vec<page_core::SectionFigurePair<FakeElement>> {
        self.sections
            .iter()
            .zip(&self.figures)
            .map(|(section, figure)| page_core::SectionFigurePair {
                section: section.clone(),
                figure: figure.clone(),
            })
            .collect()
    }

    /// Clones currently attached to the overlay (the close control excluded).
    pub fn overlay_clones(&self) -> Vec<FakeElement> {
        self.overlay
            .children()
            .into_iter()
            .filter(|c| !c.is(&self.close_control))
            .collect()
    }
}

pub fn viewport(
    scroll_y: f64,
    page_height: f64,
    inner_width: f64,
    inner_height: f64,
) -> page_core::ViewportMetrics {
    page_core::ViewportMetrics {
        scroll_y,
        page_height,
        inner_width,
        inner_height,
    }
}

//! Capabilities the core borrows from its host environment.
//!
//! The web front-end implements these over `web-sys`; tests implement them
//! over an in-memory element tree so layout math can be checked with fixed
//! numbers instead of a rendering engine.

/// Window-level geometry, sampled at call time.
pub trait Viewport {
    /// Vertical scroll offset of the document, in CSS pixels.
    fn scroll_y(&self) -> f64;
    /// Full scrollable height of the page body.
    fn page_height(&self) -> f64;
    fn inner_width(&self) -> f64;
    fn inner_height(&self) -> f64;
}

/// A handle to one element of the page.
///
/// Handles are cheap to clone and refer to the same underlying element;
/// `deep_clone` is the only way to obtain a structurally independent copy.
pub trait PageElement: Clone {
    /// Document-relative top offset (`offsetTop`).
    fn offset_top(&self) -> f64;
    /// Right edge of the viewport-relative bounding box.
    fn client_right(&self) -> f64;
    /// Inline style value, empty when unset.
    fn style(&self, property: &str) -> String;
    /// Write an inline style property; an empty value clears it.
    fn set_style(&self, property: &str, value: &str);
    /// Copy the element with its whole subtree, detached from the document.
    fn deep_clone(&self) -> Option<Self>;
    fn remove_attribute(&self, name: &str);
    fn remove_class(&self, class: &str);
    fn append_child(&self, child: &Self);
    /// Remove the element from its parent, if it has one.
    fn detach(&self);
}

/// A fixed snapshot of viewport geometry.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportMetrics {
    pub scroll_y: f64,
    pub page_height: f64,
    pub inner_width: f64,
    pub inner_height: f64,
}

impl Viewport for ViewportMetrics {
    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }
    fn page_height(&self) -> f64 {
        self.page_height
    }
    fn inner_width(&self) -> f64 {
        self.inner_width
    }
    fn inner_height(&self) -> f64 {
        self.inner_height
    }
}

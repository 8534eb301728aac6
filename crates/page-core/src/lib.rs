//! Page effects for a personal site: a scroll-driven CSS perspective origin,
//! decorative figures aligned to their sections, and a figure modal.
//!
//! Everything here is independent of web APIs; the `page-fx` front-end
//! supplies [`PageElement`] and [`Viewport`] implementations over `web-sys`.

pub mod config;
pub mod constants;
pub mod error;
pub mod host;
pub mod layout;
pub mod modal;
pub mod page;

pub use config::{LayoutConfig, PageIds};
pub use error::PageError;
pub use host::{PageElement, Viewport, ViewportMetrics};
pub use layout::{perspective_origin_value, scroll_percentage, LayoutSync, SectionFigurePair};
pub use modal::{ModalController, ModalState};
pub use page::{PageEffects, PageEvent};

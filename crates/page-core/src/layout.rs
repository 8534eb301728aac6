//! Scroll-driven perspective origin and figure alignment.
//!
//! The page's main column sits inside a container with a CSS `perspective`.
//! Moving the perspective origin along with the scroll position makes the
//! content look like it is being passed in a physical space. Because the
//! decorative figures live outside that container they are absolutely
//! positioned and need their `top` kept in step with their sections.

use crate::config::LayoutConfig;
use crate::host::{PageElement, Viewport};

/// Percentage of the page height reached by `scroll_y + offset_y`.
///
/// Not clamped, and a zero `page_height` yields an infinite or NaN result.
#[inline]
pub fn scroll_percentage(scroll_y: f64, offset_y: f64, page_height: f64) -> f64 {
    (scroll_y + offset_y) / page_height * 100.0
}

#[inline]
pub fn perspective_origin_value(percent: f64) -> String {
    format!("center {}%", percent)
}

#[inline]
pub fn px(value: f64) -> String {
    format!("{}px", value)
}

/// A content section and the decorative figure aligned to it.
#[derive(Clone, Debug)]
pub struct SectionFigurePair<E> {
    pub section: E,
    pub figure: E,
}

pub struct LayoutSync<E> {
    container: E,
    pairs: Vec<SectionFigurePair<E>>,
    config: LayoutConfig,
}

impl<E: PageElement> LayoutSync<E> {
    /// Figures are pinned to absolute positioning so their `top` is
    /// document-relative.
    pub fn new(container: E, pairs: Vec<SectionFigurePair<E>>, config: LayoutConfig) -> Self {
        for pair in &pairs {
            pair.figure.set_style("position", "absolute");
        }
        Self {
            container,
            pairs,
            config,
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn pairs(&self) -> &[SectionFigurePair<E>] {
        &self.pairs
    }

    /// Offset that keeps the most legible content near, not at, the
    /// vertical centre of the viewport.
    pub fn viewport_offset(&self, viewport: &impl Viewport) -> f64 {
        self.config
            .viewport_offset_divisor
            .map_or(0.0, |divisor| viewport.inner_height() / divisor)
    }

    pub fn compute_scroll_percentage(&self, viewport: &impl Viewport, scroll_y: f64) -> f64 {
        scroll_percentage(
            scroll_y,
            self.viewport_offset(viewport),
            viewport.page_height(),
        )
    }

    pub fn update_perspective_origin(&self, viewport: &impl Viewport) {
        let percent = self.compute_scroll_percentage(viewport, viewport.scroll_y());
        let value = perspective_origin_value(percent + self.config.origin_bias_pct);
        self.container.set_style("perspective-origin", &value);
        self.container.set_style("-webkit-perspective-origin", &value);
    }

    pub fn update_figure_vertical_positions(&self) {
        for pair in &self.pairs {
            pair.figure.set_style("top", &px(pair.section.offset_top()));
        }
    }

    /// Narrow viewports stack the content, where neither effect is wanted.
    pub fn is_active(&self, viewport: &impl Viewport) -> bool {
        self.config
            .breakpoint_px
            .map_or(true, |bp| viewport.inner_width() > bp)
    }

    /// Returns whether anything was recomputed.
    pub fn update(&self, viewport: &impl Viewport) -> bool {
        if !self.is_active(viewport) {
            log::trace!(
                "[layout] skipped below breakpoint, width={}",
                viewport.inner_width()
            );
            return false;
        }
        self.update_perspective_origin(viewport);
        self.update_figure_vertical_positions();
        true
    }
}

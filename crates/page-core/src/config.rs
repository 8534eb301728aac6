//! Tuning values and the markup contract.

use crate::constants::*;
use crate::error::PageError;

/// Knobs for the layout synchronizer.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Layout sync runs only when the viewport is strictly wider than this.
    /// `None` runs it at every width.
    pub breakpoint_px: Option<f64>,
    /// Added to the scroll percentage when writing the perspective origin.
    pub origin_bias_pct: f64,
    /// Scroll offset term is `inner_height / divisor`; `None` means no offset.
    pub viewport_offset_divisor: Option<f64>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: Some(BREAKPOINT_PX),
            origin_bias_pct: ORIGIN_BIAS_PCT,
            viewport_offset_divisor: Some(VIEWPORT_OFFSET_DIVISOR),
        }
    }
}

impl LayoutConfig {
    /// The first revision of the page: no breakpoint and no viewport offset.
    pub fn legacy() -> Self {
        Self {
            breakpoint_px: None,
            origin_bias_pct: ORIGIN_BIAS_PCT,
            viewport_offset_divisor: None,
        }
    }

    /// Apply overrides from `data-*` attributes. `lookup` returns the raw
    /// attribute value, if present.
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, PageError> {
        if let Some(raw) = lookup(ATTR_BREAKPOINT) {
            self.breakpoint_px = parse_optional(ATTR_BREAKPOINT, &raw)?;
        }
        if let Some(raw) = lookup(ATTR_ORIGIN_BIAS) {
            self.origin_bias_pct = parse_finite(ATTR_ORIGIN_BIAS, &raw)?;
        }
        if let Some(raw) = lookup(ATTR_OFFSET_DIVISOR) {
            let divisor = parse_optional(ATTR_OFFSET_DIVISOR, &raw)?;
            if divisor.is_some_and(|d| d <= 0.0) {
                return Err(invalid(ATTR_OFFSET_DIVISOR, &raw));
            }
            self.viewport_offset_divisor = divisor;
        }
        Ok(self)
    }
}

fn invalid(key: &'static str, raw: &str) -> PageError {
    PageError::InvalidConfig {
        key,
        value: raw.to_string(),
    }
}

fn parse_finite(key: &'static str, raw: &str) -> Result<f64, PageError> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(invalid(key, raw)),
    }
}

fn parse_optional(key: &'static str, raw: &str) -> Result<Option<f64>, PageError> {
    if raw.trim().eq_ignore_ascii_case(ATTR_DISABLED) {
        return Ok(None);
    }
    parse_finite(key, raw).map(Some)
}

/// Ids the page markup must provide.
#[derive(Clone, Debug, PartialEq)]
pub struct PageIds {
    pub perspective_container: String,
    /// (section id, figure id)
    pub pairs: Vec<(String, String)>,
    pub modal_overlay: String,
    pub modal_close: String,
    pub figure_tag: String,
}

impl Default for PageIds {
    fn default() -> Self {
        Self {
            perspective_container: PERSPECTIVE_CONTAINER_ID.to_string(),
            pairs: SECTION_FIGURE_IDS
                .iter()
                .map(|(s, f)| (s.to_string(), f.to_string()))
                .collect(),
            modal_overlay: MODAL_OVERLAY_ID.to_string(),
            modal_close: MODAL_CLOSE_ID.to_string(),
            figure_tag: FIGURE_TAG.to_string(),
        }
    }
}

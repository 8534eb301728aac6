// Markup contract and tuning defaults shared by the core and the web front-end.

// Element ids
pub const PERSPECTIVE_CONTAINER_ID: &str = "perspective-container";
pub const MODAL_OVERLAY_ID: &str = "figure-modal";
pub const MODAL_CLOSE_ID: &str = "figure-modal-close";
pub const FIGURE_TAG: &str = "figure";

// (section id, figure id) for each content section with a decorative figure
pub const SECTION_FIGURE_IDS: [(&str, &str); 3] = [
    ("man", "man-section-figure"),
    ("career", "career-section-figure"),
    ("philosophy", "philosophy-section-figure"),
];

// Classes that hide an element under a media query; stripped from modal clones
pub const RESPONSIVE_CLASSES: [&str; 2] = ["hide-on-mobile", "hide-on-desktop"];

// Layout tuning
pub const BREAKPOINT_PX: f64 = 900.0; // layout sync runs only above this viewport width
pub const ORIGIN_BIAS_PCT: f64 = 10.0; // least skewed content sits this far down the viewport
pub const VIEWPORT_OFFSET_DIVISOR: f64 = 2.7; // offset = inner_height / divisor, tuned by eye

// Configuration attributes read from the perspective container
pub const ATTR_BREAKPOINT: &str = "data-breakpoint";
pub const ATTR_ORIGIN_BIAS: &str = "data-origin-bias";
pub const ATTR_OFFSET_DIVISOR: &str = "data-offset-divisor";
pub const ATTR_DISABLED: &str = "none";

#![cfg(target_arch = "wasm32")]
use page_core::{LayoutConfig, LayoutSync, ModalController, PageEffects, PageIds, Viewport};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

pub mod dom;
mod events;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("page-fx starting");

    let Some(document) = dom::window_document() else {
        log::error!("init error: no document");
        return Ok(());
    };
    // The module may load before the markup it binds to has been parsed.
    if dom::is_still_loading(&document.ready_state()) {
        dom::listen(&document, "DOMContentLoaded", run_init);
    } else {
        run_init();
    }
    Ok(())
}

fn run_init() {
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;

    let ids = PageIds::default();
    let handles = dom::resolve(&document, &ids)?;
    let config = LayoutConfig::default()
        .with_overrides(|key| handles.container.0.get_attribute(key))?;
    log::info!(
        "[layout] breakpoint={:?} bias={} offset_divisor={:?}",
        config.breakpoint_px,
        config.origin_bias_pct,
        config.viewport_offset_divisor
    );

    let layout = LayoutSync::new(handles.container.clone(), handles.pairs, config);
    let modal = ModalController::new(
        handles.overlay.clone(),
        handles.close_control.clone(),
        dom::DomElement(body.clone()),
    );
    let page = Rc::new(RefCell::new(PageEffects::new(layout, modal)));
    let viewport = dom::WindowViewport::new(window.clone(), body);

    page.borrow_mut().update_layout(&viewport);

    events::wire_viewport_events(&window, &document, &page, &viewport);
    events::wire_figure_clicks(&handles.figures, &page, &viewport);
    events::wire_modal_close(&handles.overlay, &handles.close_control, &page, &viewport);

    log::info!(
        "page-fx ready: {} figures, width={}",
        handles.figures.len(),
        viewport.inner_width()
    );
    Ok(())
}

#![cfg(target_arch = "wasm32")]
//! Animated SVG wave background with live controls.
//!
//! Two entry modes, chosen by the page that loads the module:
//! - [`mount`] builds the whole page inside an element found by id and runs
//!   for the lifetime of the page.
//! - [`WaveBackground`] is an embeddable handle: the host passes the element
//!   to render into, drives settings through its methods and calls
//!   `destroy()` when done.

use anyhow::Context;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wave_core::{Action, DisplaySettings, HexColor};
use web_sys as web;

mod app;
mod constants;
mod controls;
mod dom;
mod frame;
mod lifecycle;
mod overlay;
mod scene;
mod wave_layer;

use app::App;
use constants::CONTAINER_STYLE;
use lifecycle::{MountGuard, Teardown};

fn init_logging() {
    console_error_panic_hook::set_once();
    // Errors only when a logger is already installed (second mount).
    console_log::init_with_level(log::Level::Info).ok();
}

fn to_js(e: anyhow::Error) -> JsValue {
    js_sys::Error::new(&format!("{e:#}")).into()
}

struct Mounted {
    app: Rc<RefCell<App>>,
    container: web::Element,
    listeners: dom::Listeners,
    frame_loop: frame::LoopHandle,
}

fn mount_into(host: &web::Element) -> anyhow::Result<Mounted> {
    let document = host
        .owner_document()
        .or_else(dom::window_document)
        .context("no document")?;
    let settings = DisplaySettings::default();

    let container = dom::html(&document, "div", CONTAINER_STYLE)?;
    let controls = controls::HeaderControls::build(&document).context("building header")?;
    let scene = scene::Scene::build(&document, &settings).context("building scene")?;
    dom::append(&container, &controls.header)?;
    dom::append(&container, &scene.hero)?;
    dom::append(host, &container)?;

    let app = Rc::new(RefCell::new(App::new(settings, controls, scene)));
    let mut listeners = dom::Listeners::new();
    controls::wire_controls(&app, &mut listeners);
    let frame_loop = frame::start_loop(frame::FrameContext::new(app.clone()));

    log::info!(
        "[mount] layers={} settings={:?}",
        app.borrow().scene().layer_count(),
        app.borrow().settings()
    );
    Ok(Mounted {
        app,
        container,
        listeners,
        frame_loop,
    })
}

impl Teardown for Mounted {
    fn teardown(self) {
        self.frame_loop.stop();
        self.container.remove();
        // the container is gone, so no listener can fire after this
        drop(self.listeners);
    }
}

/// Standalone mode: render into the element with id `root_id` and keep
/// running until the page unloads.
#[wasm_bindgen]
pub fn mount(root_id: &str) -> Result<(), JsValue> {
    init_logging();
    let root = dom::window_document()
        .context("no document")
        .and_then(|d| {
            d.get_element_by_id(root_id)
                .with_context(|| format!("missing #{root_id}"))
        })
        .map_err(to_js)?;
    let mounted = mount_into(&root).map_err(to_js)?;
    for l in mounted.listeners {
        l.forget();
    }
    log::info!("[mount] standalone in #{root_id}");
    Ok(())
}

/// Embeddable mode: a handle owned by the host page. Freeing the handle
/// without calling `destroy()` tears it down as well.
#[wasm_bindgen]
pub struct WaveBackground {
    mounted: MountGuard<Mounted>,
}

impl WaveBackground {
    fn dispatch(&self, action: Action) {
        match self.mounted.get() {
            Some(m) => m.app.borrow_mut().dispatch(action),
            None => log::warn!("[embed] {:?} after destroy", action),
        }
    }
}

#[wasm_bindgen]
impl WaveBackground {
    #[wasm_bindgen(constructor)]
    pub fn new(host: web::Element) -> Result<WaveBackground, JsValue> {
        init_logging();
        let mounted = mount_into(&host).map_err(to_js)?;
        log::info!("[mount] embedded");
        Ok(WaveBackground {
            mounted: MountGuard::new(mounted),
        })
    }

    pub fn set_amplitude(&self, value: f64) {
        self.dispatch(Action::SetAmplitude(value));
    }

    pub fn set_speed(&self, value: f64) {
        self.dispatch(Action::SetSpeed(value));
    }

    pub fn set_points(&self, value: u32) {
        self.dispatch(Action::SetPoints(value));
    }

    pub fn set_height(&self, value: f64) {
        self.dispatch(Action::SetHeight(value));
    }

    /// Accepts `#rgb` or `#rrggbb`.
    pub fn set_color(&self, hex: &str) -> Result<(), JsValue> {
        let color = HexColor::parse(hex).map_err(|e| to_js(e.into()))?;
        self.dispatch(Action::SetColor(color));
        Ok(())
    }

    pub fn toggle_paused(&self) {
        self.dispatch(Action::TogglePaused);
    }

    pub fn toggle_reversed(&self) {
        self.dispatch(Action::ToggleReversed);
    }

    pub fn set_show_second_layer(&self, show: bool) {
        self.dispatch(Action::SetShowSecondLayer(show));
    }

    /// Current settings as JSON (camelCase keys).
    pub fn settings_json(&self) -> Result<String, JsValue> {
        let m = self
            .mounted
            .get()
            .ok_or_else(|| to_js(anyhow::anyhow!("wave background destroyed")))?;
        let json = serde_json::to_string(m.app.borrow().settings());
        json.map_err(|e| to_js(e.into()))
    }

    pub fn is_destroyed(&self) -> bool {
        self.mounted.is_released()
    }

    /// Stop animating, detach the DOM and release listeners.
    pub fn destroy(&mut self) {
        if self.mounted.release() {
            log::info!("[embed] destroyed");
        }
    }
}

//! Adapter between a [`LayerSpec`] and one animated `<svg>` wave.
//!
//! The layer owns no settings. It forwards fill, options, pause state and
//! style to the wave renderer and writes the resulting path into the DOM.

use crate::dom;
use wave_core::{LayerKind, LayerSpec, WaveShape};
use web_sys as web;

pub struct WaveLayer {
    kind: LayerKind,
    host: web::Element,
    path: web::Element,
    shape: WaveShape,
    drawn_size: Option<(f64, f64)>,
    dirty: bool,
}

impl WaveLayer {
    pub fn create(document: &web::Document, spec: &LayerSpec) -> anyhow::Result<Self> {
        let host = dom::html(document, "div", "")?;
        let svg = dom::svg(document, "svg")?;
        dom::set_attrs(
            &svg,
            &[("width", "100%"), ("height", "100%"), ("version", "1.1")],
        );
        let path = dom::svg(document, "path")?;
        dom::append(&svg, &path)?;
        dom::append(&host, &svg)?;

        let mut layer = Self {
            kind: spec.kind,
            host,
            path,
            shape: WaveShape::new(spec.options, spec.paused),
            drawn_size: None,
            dirty: true,
        };
        layer.apply(spec);
        Ok(layer)
    }

    pub fn kind(&self) -> LayerKind {
        self.kind
    }

    pub fn element(&self) -> &web::Element {
        &self.host
    }

    pub fn apply(&mut self, spec: &LayerSpec) {
        _ = self.host.set_attribute("style", &spec.style.css());
        _ = self.path.set_attribute("fill", &spec.fill.url());
        self.shape.set_options(spec.options);
        self.shape.set_paused(spec.paused);
        self.dirty = true;
    }

    /// Advance the wave and redraw it if anything visible changed.
    pub fn tick(&mut self, dt_sec: f64) {
        self.shape.advance(dt_sec);
        let rect = self.host.get_bounding_client_rect();
        let size = (rect.width(), rect.height());
        if size.0 <= 0.0 || size.1 <= 0.0 {
            return;
        }
        if self.shape.is_paused() && !self.dirty && self.drawn_size == Some(size) {
            return;
        }
        _ = self.path.set_attribute("d", &self.shape.path(size.0, size.1));
        self.drawn_size = Some(size);
        self.dirty = false;
    }

    pub fn remove(&self) {
        self.host.remove();
    }
}

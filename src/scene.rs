//! Hero area: gradient definitions, the wave layer stack and the overlay
//! card. Layers are reconciled against [`compose_layers`] on every sync, so
//! turning multi-layer off simply drops the depth layer from the list.

use crate::constants::*;
use crate::dom;
use crate::overlay;
use crate::wave_layer::WaveLayer;
use smallvec::SmallVec;
use wave_core::{compose_layers, DisplaySettings, Fill, HexColor};
use web_sys as web;

pub struct Scene {
    pub hero: web::Element,
    document: web::Document,
    card: web::Element,
    // deepest `<stop>` of each gradient; follows the chosen color
    deep_stops: SmallVec<[web::Element; 2]>,
    layers: SmallVec<[WaveLayer; 3]>,
}

fn gradient(
    document: &web::Document,
    fill: Fill,
    color: HexColor,
) -> anyhow::Result<(web::Element, web::Element)> {
    let grad = dom::svg(document, "linearGradient")?;
    dom::set_attrs(
        &grad,
        &[("id", fill.id()), ("x1", "0"), ("x2", "0"), ("y1", "0"), ("y2", "1")],
    );
    let mut last = None;
    for stop in fill.stops(color) {
        let el = dom::svg(document, "stop")?;
        dom::set_attrs(
            &el,
            &[
                ("offset", format!("{}%", stop.offset_percent).as_str()),
                ("stop-color", stop.color.to_string().as_str()),
                ("stop-opacity", stop.opacity.to_string().as_str()),
            ],
        );
        dom::append(&grad, &el)?;
        last = Some(el);
    }
    let last = last.ok_or_else(|| anyhow::anyhow!("gradient {} has no stops", fill.id()))?;
    Ok((grad, last))
}

impl Scene {
    pub fn build(document: &web::Document, settings: &DisplaySettings) -> anyhow::Result<Self> {
        let hero = dom::html(document, "main", HERO_STYLE)?;
        _ = hero.set_attribute("id", HERO_ID);

        let defs_svg = dom::html(document, "div", "")?;
        let svg = dom::svg(document, "svg")?;
        dom::set_attrs(&svg, &[("style", DEFS_SVG_STYLE), ("aria-hidden", "true")]);
        let defs = dom::svg(document, "defs")?;
        let mut deep_stops = SmallVec::new();
        for fill in Fill::ALL {
            let (grad, deep) = gradient(document, fill, settings.color)?;
            dom::append(&defs, &grad)?;
            deep_stops.push(deep);
        }
        dom::append(&svg, &defs)?;
        dom::append(&defs_svg, &svg)?;
        dom::append(&hero, &defs_svg)?;

        let card = overlay::build_card(document)?;
        dom::append(&hero, &card)?;

        let mut scene = Self {
            hero,
            document: document.clone(),
            card,
            deep_stops,
            layers: SmallVec::new(),
        };
        scene.sync(settings)?;
        Ok(scene)
    }

    /// Bring gradients and layers in line with `settings`.
    pub fn sync(&mut self, settings: &DisplaySettings) -> anyhow::Result<()> {
        let color = settings.color.to_string();
        for stop in &self.deep_stops {
            _ = stop.set_attribute("stop-color", &color);
        }

        let specs = compose_layers(settings);
        self.layers.retain(|layer| {
            let keep = specs.iter().any(|s| s.kind == layer.kind());
            if !keep {
                layer.remove();
            }
            keep
        });
        for spec in &specs {
            match self.layers.iter_mut().find(|l| l.kind() == spec.kind) {
                Some(layer) => layer.apply(spec),
                None => {
                    let layer = WaveLayer::create(&self.document, spec)?;
                    let before: &web::Node = &self.card;
                    self.hero
                        .insert_before(layer.element(), Some(before))
                        .map_err(dom::js_err)?;
                    self.layers.push(layer);
                }
            }
        }
        Ok(())
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn animate(&mut self, dt_sec: f64) {
        for layer in &mut self.layers {
            layer.tick(dt_sec);
        }
    }
}

//! Header bar: title plus the sliders, color picker, buttons and checkbox
//! that drive the display settings.

use crate::app::App;
use crate::constants::*;
use crate::dom::{self, Listeners};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wave_core::{
    pause_button_label, reverse_button_label, Action, DisplaySettings, HexColor, Slider,
};
use web_sys as web;

/// Live handles to the header's inputs, used to mirror settings back into
/// the widgets after each action.
pub struct HeaderControls {
    pub header: web::Element,
    sliders: Vec<(Slider, web::HtmlInputElement)>,
    color: web::HtmlInputElement,
    pause: web::Element,
    reverse: web::Element,
    multi_layer: web::HtmlInputElement,
}

fn input(
    document: &web::Document,
    kind: &str,
    style: &str,
) -> anyhow::Result<web::HtmlInputElement> {
    let el = dom::html(document, "input", style)?;
    _ = el.set_attribute("type", kind);
    el.dyn_into::<web::HtmlInputElement>()
        .map_err(|e| dom::js_err(e.into()))
}

fn slider(
    document: &web::Document,
    parent: &web::Element,
    which: Slider,
) -> anyhow::Result<web::HtmlInputElement> {
    let label = dom::html(document, "label", "")?;
    dom::append_text(document, &label, which.label())?;
    let el = input(document, "range", "")?;
    let (min, max, step) = which.bounds();
    dom::set_attrs(
        &el,
        &[
            ("min", min.to_string().as_str()),
            ("max", max.to_string().as_str()),
            ("step", step.to_string().as_str()),
        ],
    );
    dom::append(&label, &el)?;
    dom::append(parent, &label)?;
    Ok(el)
}

impl HeaderControls {
    pub fn build(document: &web::Document) -> anyhow::Result<Self> {
        let header = dom::html(document, "header", HEADER_STYLE)?;
        _ = header.set_attribute("id", HEADER_ID);
        let title = dom::html(document, "strong", "")?;
        dom::append_text(document, &title, TITLE)?;
        dom::append(&header, &title)?;

        let row = dom::html(document, "div", CONTROLS_STYLE)?;
        let sliders = Slider::ALL
            .into_iter()
            .map(|which| slider(document, &row, which).map(|el| (which, el)))
            .collect::<anyhow::Result<Vec<_>>>()?;

        let color = input(document, "color", COLOR_INPUT_STYLE)?;
        dom::set_attrs(&color, &[("id", COLOR_INPUT_ID), ("title", COLOR_INPUT_TITLE)]);
        dom::append(&row, &color)?;

        let pause = dom::html(document, "button", "")?;
        _ = pause.set_attribute("id", PAUSE_BUTTON_ID);
        dom::append(&row, &pause)?;

        let reverse = dom::html(document, "button", "")?;
        _ = reverse.set_attribute("id", REVERSE_BUTTON_ID);
        dom::append(&row, &reverse)?;

        let multi_label = dom::html(document, "label", CHECKBOX_LABEL_STYLE)?;
        let multi_layer = input(document, "checkbox", "")?;
        _ = multi_layer.set_attribute("id", MULTI_LAYER_ID);
        dom::append(&multi_label, &multi_layer)?;
        dom::append_text(document, &multi_label, MULTI_LAYER_LABEL)?;
        dom::append(&row, &multi_label)?;

        dom::append(&header, &row)?;
        Ok(Self {
            header,
            sliders,
            color,
            pause,
            reverse,
            multi_layer,
        })
    }

    /// Reflect `settings` in every widget. Setting `.value` does not fire
    /// input events, so this never re-enters dispatch.
    pub fn sync(&self, settings: &DisplaySettings) {
        for (which, el) in &self.sliders {
            el.set_value_as_number(which.value(settings));
        }
        self.color.set_value(&settings.color.to_string());
        self.pause
            .set_text_content(Some(pause_button_label(settings.paused)));
        self.reverse
            .set_text_content(Some(reverse_button_label(settings.reversed)));
        self.multi_layer.set_checked(settings.show_second_layer);
    }
}

fn dispatch(app: &Rc<RefCell<App>>, action: Action) {
    app.borrow_mut().dispatch(action);
}

pub fn wire_controls(app: &Rc<RefCell<App>>, listeners: &mut Listeners) {
    let (sliders, color, pause, reverse, multi_layer) = {
        let a = app.borrow();
        let c = a.controls();
        (
            c.sliders.clone(),
            c.color.clone(),
            c.pause.clone(),
            c.reverse.clone(),
            c.multi_layer.clone(),
        )
    };

    for (which, el) in sliders {
        let app = app.clone();
        dom::listen(
            &el,
            "input",
            move |ev| {
                let raw = dom::event_input(&ev).map_or(f64::NAN, |i| i.value_as_number());
                match which.action(raw) {
                    Some(action) => dispatch(&app, action),
                    None => log::warn!("[controls] ignoring {} input {raw}", which.label()),
                }
            },
            listeners,
        );
    }

    let app_color = app.clone();
    dom::listen(
        &color,
        "input",
        move |ev| {
            let Some(value) = dom::event_input(&ev).map(|i| i.value()) else {
                return;
            };
            match HexColor::parse(&value) {
                Ok(c) => dispatch(&app_color, Action::SetColor(c)),
                Err(e) => log::warn!("[controls] {e}"),
            }
        },
        listeners,
    );

    let app_pause = app.clone();
    dom::listen(
        &pause,
        "click",
        move |_| dispatch(&app_pause, Action::TogglePaused),
        listeners,
    );

    let app_reverse = app.clone();
    dom::listen(
        &reverse,
        "click",
        move |_| dispatch(&app_reverse, Action::ToggleReversed),
        listeners,
    );

    let app_multi = app.clone();
    dom::listen(
        &multi_layer,
        "change",
        move |ev| {
            if let Some(i) = dom::event_input(&ev) {
                dispatch(&app_multi, Action::SetShowSecondLayer(i.checked()));
            }
        },
        listeners,
    );
}

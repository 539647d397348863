use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::SVG_NS;

/// Event listeners owned by a mounted app. A dropped closure throws when its
/// event fires, so owners keep these alive as long as the elements they are
/// attached to, or leak them for the page lifetime.
pub type Listeners = Vec<Closure<dyn FnMut(web::Event)>>;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn js_err(e: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow!("{:?}", e)
}

pub fn html(document: &web::Document, tag: &str, style: &str) -> anyhow::Result<web::Element> {
    let el = document.create_element(tag).map_err(js_err)?;
    if !style.is_empty() {
        _ = el.set_attribute("style", style);
    }
    Ok(el)
}

pub fn svg(document: &web::Document, tag: &str) -> anyhow::Result<web::Element> {
    document.create_element_ns(Some(SVG_NS), tag).map_err(js_err)
}

pub fn set_attrs(el: &web::Element, attrs: &[(&str, &str)]) {
    for (name, value) in attrs {
        _ = el.set_attribute(name, value);
    }
}

pub fn append(parent: &web::Element, child: &web::Element) -> anyhow::Result<()> {
    parent.append_child(child).map(|_| ()).map_err(js_err)
}

pub fn append_text(
    document: &web::Document,
    parent: &web::Element,
    text: &str,
) -> anyhow::Result<()> {
    let node = document.create_text_node(text);
    parent.append_child(&node).map(|_| ()).map_err(js_err)
}

pub fn listen(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(web::Event) + 'static,
    listeners: &mut Listeners,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    listeners.push(closure);
}

/// Input element behind an event, if any.
pub fn event_input(ev: &web::Event) -> Option<web::HtmlInputElement> {
    ev.target()
        .and_then(|t| t.dyn_into::<web::HtmlInputElement>().ok())
}

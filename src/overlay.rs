use crate::constants::*;
use crate::dom;
use web_sys as web;

/// Static headline card floating above the waves.
pub fn build_card(document: &web::Document) -> anyhow::Result<web::Element> {
    let card = dom::html(document, "div", CARD_STYLE)?;
    let heading = dom::html(document, "h1", CARD_HEADING_STYLE)?;
    dom::append_text(document, &heading, CARD_HEADING)?;
    let body = dom::html(document, "p", CARD_BODY_STYLE)?;
    dom::append_text(document, &body, CARD_BODY)?;
    dom::append(&card, &heading)?;
    dom::append(&card, &body)?;
    Ok(card)
}

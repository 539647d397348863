// Host-side tests for the web front end's constants.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

const IDS: [&str; 6] = [
    HEADER_ID,
    HERO_ID,
    PAUSE_BUTTON_ID,
    REVERSE_BUTTON_ID,
    MULTI_LAYER_ID,
    COLOR_INPUT_ID,
];

#[test]
fn element_ids_are_unique_and_prefixed() {
    for (i, id) in IDS.iter().enumerate() {
        assert!(id.starts_with("wave-"), "{id}");
        assert!(!IDS[i + 1..].contains(id), "duplicate id {id}");
    }
}

#[test]
fn inline_styles_are_terminated_declarations() {
    for style in [
        CONTAINER_STYLE,
        HEADER_STYLE,
        CONTROLS_STYLE,
        HERO_STYLE,
        CARD_STYLE,
        CARD_HEADING_STYLE,
        CARD_BODY_STYLE,
        COLOR_INPUT_STYLE,
        CHECKBOX_LABEL_STYLE,
        DEFS_SVG_STYLE,
    ] {
        assert!(style.ends_with(';'), "{style}");
        assert!(style.split(';').filter(|d| !d.is_empty()).all(|d| d.contains(':')));
    }
}

#[test]
fn overlay_card_sits_between_layers_and_header() {
    let z = |style: &str| -> i32 {
        style
            .split(';')
            .find_map(|d| d.strip_prefix("z-index:"))
            .and_then(|v| v.parse().ok())
            .unwrap_or(0)
    };
    assert!(z(CARD_STYLE) > wave_core::constants::MAIN_Z_INDEX);
    assert!(z(HEADER_STYLE) > z(CARD_STYLE));
}

// Element ids, inline styles and copy used by the web front end.

// Element ids (prefixed so an embedding page can host us without clashes)
pub const HEADER_ID: &str = "wave-header";
pub const HERO_ID: &str = "wave-hero";
pub const PAUSE_BUTTON_ID: &str = "wave-pause";
pub const REVERSE_BUTTON_ID: &str = "wave-reverse";
pub const MULTI_LAYER_ID: &str = "wave-multi-layer";
pub const COLOR_INPUT_ID: &str = "wave-color";

// Page layout
pub const CONTAINER_STYLE: &str = "font-family:system-ui,-apple-system,'Segoe UI',Roboto,'Helvetica Neue',Arial;height:100vh;margin:0;display:flex;flex-direction:column;";
pub const HEADER_STYLE: &str = "padding:18px 24px;display:flex;justify-content:space-between;align-items:center;background:rgba(255,255,255,0.9);z-index:20;";
pub const CONTROLS_STYLE: &str = "display:flex;gap:12px;align-items:center;flex-wrap:wrap;";
pub const HERO_STYLE: &str = "position:relative;flex:1;overflow:hidden;background:#f6fbff;display:flex;align-items:center;justify-content:center;";
pub const CARD_STYLE: &str = "position:absolute;z-index:10;top:20%;left:50%;transform:translateX(-50%);background:rgba(255,255,255,0.85);padding:28px;border-radius:12px;box-shadow:0 6px 24px rgba(20,30,60,0.12);max-width:720px;text-align:center;";
pub const CARD_HEADING_STYLE: &str = "margin:0 0 8px;";
pub const CARD_BODY_STYLE: &str = "margin:0;color:#334155;";
pub const COLOR_INPUT_STYLE: &str = "width:42px;height:34px;padding:0;border:none;";
pub const CHECKBOX_LABEL_STYLE: &str = "display:flex;align-items:center;gap:6px;";
pub const DEFS_SVG_STYLE: &str = "position:absolute;width:0;height:0;";

// Copy
pub const TITLE: &str = "Personal Web — Wave Demo";
pub const CARD_HEADING: &str = "Interactive Wave Background";
pub const CARD_BODY: &str = "Use the controls in the header to tweak the animation. Layer more waves, animate other elements or tie the parameters to music or scroll.";
pub const MULTI_LAYER_LABEL: &str = "Multi-layer";
pub const COLOR_INPUT_TITLE: &str = "Wave color";

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

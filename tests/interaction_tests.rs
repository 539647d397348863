// Host-side tests that replay header interactions through the reducer and
// check what the scene would render. Mirrors the event wiring in
// src/controls.rs without a DOM.

use wave_core::*;

fn press(settings: DisplaySettings, slider: Slider, raw: f64) -> DisplaySettings {
    match slider.action(raw) {
        Some(action) => settings.reduce(action),
        None => settings,
    }
}

#[test]
fn dragging_sliders_updates_all_layers() {
    let mut s = DisplaySettings::default();
    s = press(s, Slider::Amplitude, 100.0);
    s = press(s, Slider::Speed, 0.5);
    s = press(s, Slider::Points, 6.0);
    s = press(s, Slider::Height, 120.0);

    let stack = compose_layers(&s);
    assert_eq!(stack.len(), 3);
    let main = stack.iter().find(|l| l.kind == LayerKind::Main).map(|l| l.options);
    assert_eq!(
        main,
        Some(WaveOptions {
            height: 120.0,
            amplitude: 100.0,
            speed: 0.5,
            points: 6
        })
    );
    assert!(stack.iter().all(|l| l.options.height == 120.0));
}

#[test]
fn empty_slider_value_changes_nothing() {
    let s = DisplaySettings::default();
    assert_eq!(press(s, Slider::Amplitude, f64::NAN), s);
}

#[test]
fn pause_and_reverse_buttons_relabel_and_propagate() {
    let s = DisplaySettings::default();
    assert_eq!(pause_button_label(s.paused), "Pause");

    let s = s.reduce(Action::TogglePaused).reduce(Action::ToggleReversed);
    assert_eq!(pause_button_label(s.paused), "Play");
    assert_eq!(reverse_button_label(s.reversed), "Normal");
    for layer in compose_layers(&s) {
        assert!(layer.paused);
        assert!(layer.style.css().contains("scaleX(-1)"));
    }
}

#[test]
fn color_picker_drives_gradient_deep_stop() {
    let picked = HexColor::parse("#ff8800").expect("valid picker value");
    let s = DisplaySettings::default().reduce(Action::SetColor(picked));
    for fill in Fill::ALL {
        assert_eq!(fill.stops(s.color).last().map(|st| st.color), Some(picked));
    }
    // layer fills keep pointing at the same gradients
    let fills: Vec<_> = compose_layers(&s).iter().map(|l| l.fill.url()).collect();
    assert_eq!(
        fills,
        ["url(#waveGradientSoft)", "url(#waveGradientMain)", "url(#waveGradientSoft)"]
    );
}

#[test]
fn multi_layer_checkbox_round_trip() {
    let off = DisplaySettings::default().reduce(Action::SetShowSecondLayer(false));
    assert_eq!(compose_layers(&off).len(), 2);
    let on = off.reduce(Action::SetShowSecondLayer(true));
    assert_eq!(compose_layers(&on), compose_layers(&DisplaySettings::default()));
}

#[test]
fn paused_layers_keep_their_shape_across_frames() {
    let s = DisplaySettings::default().reduce(Action::TogglePaused);
    for spec in compose_layers(&s) {
        let mut shape = WaveShape::new(spec.options, spec.paused);
        let before = shape.path(1600.0, 540.0);
        shape.advance(1.0 / 60.0);
        assert_eq!(shape.path(1600.0, 540.0), before);
    }
}

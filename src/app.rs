use crate::controls::HeaderControls;
use crate::scene::Scene;
use wave_core::{Action, DisplaySettings};

/// Current settings plus the widgets and scene rendered from them.
pub struct App {
    settings: DisplaySettings,
    controls: HeaderControls,
    scene: Scene,
}

impl App {
    pub fn new(settings: DisplaySettings, controls: HeaderControls, scene: Scene) -> Self {
        controls.sync(&settings);
        Self {
            settings,
            controls,
            scene,
        }
    }

    pub fn settings(&self) -> &DisplaySettings {
        &self.settings
    }

    pub fn controls(&self) -> &HeaderControls {
        &self.controls
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Replace the settings with the result of `action` and re-render.
    pub fn dispatch(&mut self, action: Action) {
        log::debug!("[app] {:?}", action);
        self.settings = self.settings.reduce(action);
        self.controls.sync(&self.settings);
        if let Err(e) = self.scene.sync(&self.settings) {
            log::error!("[app] re-render failed: {:?}", e);
        }
        // Paused layers only redraw on demand; a zero step does that.
        self.scene.animate(0.0);
    }

    pub fn frame(&mut self, dt_sec: f64) {
        self.scene.animate(dt_sec);
    }
}

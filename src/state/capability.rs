use wasm_bindgen::JsValue;

/// Whether the pointing hardware reports real pressure values. Probed once at
/// app construction and passed down as configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ForceCapability {
    pub available: bool,
}

impl ForceCapability {
    /// Browsers that surface hardware pressure expose the `touchforcechange`
    /// handler slot on the window; everything else reports the simulated
    /// 0.0/0.5 pressure ramp.
    pub fn detect() -> Self {
        let available = web_sys::window()
            .map(|win| {
                js_sys::Reflect::has(win.as_ref(), &JsValue::from_str("ontouchforcechange"))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        Self { available }
    }

    pub const fn unavailable() -> Self {
        Self { available: false }
    }
}

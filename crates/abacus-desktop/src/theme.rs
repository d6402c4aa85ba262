//! Colors for the desktop app

/// Color palette for the application
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub bg_primary: &'static str,
    pub bg_secondary: &'static str,
    pub bg_tertiary: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub text_muted: &'static str,
    pub border: &'static str,
    /// Operator keys and primary actions
    pub accent: &'static str,
    pub accent_text: &'static str,
    /// `C`, `±` and `%` keys
    pub key_function: &'static str,
    pub key_function_text: &'static str,
    pub error: &'static str,
    pub overlay: &'static str,
}

/// The calculator disguise is always dark
pub const PALETTE: ColorPalette = ColorPalette {
    bg_primary: "#000000",
    bg_secondary: "#1c1c1e",
    bg_tertiary: "#333333",
    text_primary: "#ffffff",
    text_secondary: "#a1a1a6",
    text_muted: "#636366",
    border: "#2c2c2e",
    accent: "#ff9f0a",
    accent_text: "#ffffff",
    key_function: "#a5a5a5",
    key_function_text: "#000000",
    error: "#ff453a",
    overlay: "rgba(0, 0, 0, 0.92)",
};

/// Palette in use
#[must_use]
pub const fn palette() -> &'static ColorPalette {
    &PALETTE
}

//! Theme Engine — resolves the dark/light/system mode and owns the color palettes.

use std::collections::HashMap;

use crate::types::settings::ThemeMode;

/// Trait defining the theme engine interface.
pub trait ThemeEngineTrait {
    fn set_mode(&mut self, mode: ThemeMode);
    fn mode(&self) -> ThemeMode;
    fn effective_mode(&self) -> ThemeMode;
    fn is_dark(&self) -> bool;
    fn toggle(&mut self) -> ThemeMode;
    fn detect_system_theme(&self) -> ThemeMode;
    fn css_variables(&self) -> HashMap<String, String>;
}

/// Qio dark palette, the application's native look.
struct DarkPalette;
impl DarkPalette {
    const BACKGROUND: &'static str = "#121212";
    const SURFACE: &'static str = "#1E1E1E";
    const PRIMARY: &'static str = "#00E5FF";
    const SECONDARY: &'static str = "#bd00ff";
    const ACCENT: &'static str = "#ff0055";
    const TEXT: &'static str = "#ffffff";
    const TEXT_SECONDARY: &'static str = "#a0a0b0";
    const BORDER: &'static str = "#2a2a4a";
    const SUCCESS: &'static str = "#00ff9d";
    const ERROR: &'static str = "#ff3366";
    const OVERLAY: &'static str = "rgba(0,0,0,0.7)";
}

/// Qio light palette. Primary and secondary are darkened for contrast on
/// light surfaces.
struct LightPalette;
impl LightPalette {
    const BACKGROUND: &'static str = "#F5F5F5";
    const SURFACE: &'static str = "#FFFFFF";
    const PRIMARY: &'static str = "#00B8CC";
    const SECONDARY: &'static str = "#8a00bf";
    const ACCENT: &'static str = "#ff0055";
    const TEXT: &'static str = "#000000";
    const TEXT_SECONDARY: &'static str = "#666666";
    const BORDER: &'static str = "#E0E0E0";
    const SUCCESS: &'static str = "#00cc7d";
    const ERROR: &'static str = "#ff3366";
    const OVERLAY: &'static str = "rgba(0,0,0,0.1)";
}

/// The theme engine implementation.
pub struct ThemeEngine {
    mode: ThemeMode,
}

impl ThemeEngine {
    /// Creates a new ThemeEngine with the given initial mode.
    pub fn new(mode: ThemeMode) -> Self {
        Self { mode }
    }

    /// Builds the CSS variable map for a given palette.
    fn build_variables(
        background: &str,
        surface: &str,
        primary: &str,
        secondary: &str,
        accent: &str,
        text: &str,
        text_secondary: &str,
        border: &str,
        success: &str,
        error: &str,
        overlay: &str,
    ) -> HashMap<String, String> {
        let mut vars = HashMap::new();
        vars.insert("--background".into(), background.into());
        vars.insert("--surface".into(), surface.into());
        vars.insert("--primary".into(), primary.into());
        vars.insert("--secondary".into(), secondary.into());
        vars.insert("--accent".into(), accent.into());
        vars.insert("--text".into(), text.into());
        vars.insert("--text-secondary".into(), text_secondary.into());
        vars.insert("--border".into(), border.into());
        vars.insert("--success".into(), success.into());
        vars.insert("--error".into(), error.into());
        vars.insert("--overlay".into(), overlay.into());
        vars.insert(
            "--font-family".into(),
            "'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', Helvetica, Arial, sans-serif"
                .into(),
        );
        vars
    }
}

impl ThemeEngineTrait for ThemeEngine {
    fn set_mode(&mut self, mode: ThemeMode) {
        self.mode = mode;
    }

    fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Returns the effective mode, resolving `System` to a concrete one.
    fn effective_mode(&self) -> ThemeMode {
        match self.mode {
            ThemeMode::System => self.detect_system_theme(),
            other => other,
        }
    }

    fn is_dark(&self) -> bool {
        self.effective_mode() == ThemeMode::Dark
    }

    /// Flips the effective mode into an explicit one, overriding a `System`
    /// setting. Returns the new mode.
    fn toggle(&mut self) -> ThemeMode {
        self.mode = match self.effective_mode() {
            ThemeMode::Dark => ThemeMode::Light,
            _ => ThemeMode::Dark,
        };
        self.mode
    }

    fn detect_system_theme(&self) -> ThemeMode {
        // In a full desktop build this would query the toolkit's color-scheme
        // preference. Without that runtime we check the GTK_THEME environment
        // variable and fall back to dark, the application's native look.
        if let Ok(gtk_theme) = std::env::var("GTK_THEME") {
            if gtk_theme.to_lowercase().contains("dark") {
                return ThemeMode::Dark;
            }
            return ThemeMode::Light;
        }
        ThemeMode::Dark
    }

    fn css_variables(&self) -> HashMap<String, String> {
        match self.effective_mode() {
            ThemeMode::Dark => Self::build_variables(
                DarkPalette::BACKGROUND,
                DarkPalette::SURFACE,
                DarkPalette::PRIMARY,
                DarkPalette::SECONDARY,
                DarkPalette::ACCENT,
                DarkPalette::TEXT,
                DarkPalette::TEXT_SECONDARY,
                DarkPalette::BORDER,
                DarkPalette::SUCCESS,
                DarkPalette::ERROR,
                DarkPalette::OVERLAY,
            ),
            ThemeMode::Light => Self::build_variables(
                LightPalette::BACKGROUND,
                LightPalette::SURFACE,
                LightPalette::PRIMARY,
                LightPalette::SECONDARY,
                LightPalette::ACCENT,
                LightPalette::TEXT,
                LightPalette::TEXT_SECONDARY,
                LightPalette::BORDER,
                LightPalette::SUCCESS,
                LightPalette::ERROR,
                LightPalette::OVERLAY,
            ),
            // System is already resolved by effective_mode()
            ThemeMode::System => unreachable!(),
        }
    }
}

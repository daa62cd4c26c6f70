// ABOUTME: Drawing colors and the flat `key:#rrggbb` settings file.
// ABOUTME: Parsing stops at the first invalid color, keeping what was applied.

use std::fmt;
use std::path::Path;

use crate::storage::StorageError;
use crate::Color;

/// The three user-selectable colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    Text,
    Background,
    Node,
}

impl ColorRole {
    pub fn all() -> &'static [ColorRole] {
        &[ColorRole::Text, ColorRole::Background, ColorRole::Node]
    }

    /// Key used in the settings file
    pub fn key(&self) -> &'static str {
        match self {
            ColorRole::Text => "text-color",
            ColorRole::Background => "background-color",
            ColorRole::Node => "node-color",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().iter().copied().find(|role| role.key() == key)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ColorRole::Text => "Node text color",
            ColorRole::Background => "Background color",
            ColorRole::Node => "Node color",
        }
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub text: Color,
    pub background: Color,
    pub node: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text: Color::BLACK,
            background: Color::WHITE,
            node: Color::SKY,
        }
    }
}

/// Result of applying a settings file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsReport {
    /// Entries whose key was recognized and applied
    pub applied: usize,
    /// Entries with a valid color but an unknown key
    pub ignored: usize,
    /// The token whose color failed to parse, if parsing stopped early
    pub stopped_at: Option<String>,
}

impl Theme {
    pub fn get(&self, role: ColorRole) -> Color {
        match role {
            ColorRole::Text => self.text,
            ColorRole::Background => self.background,
            ColorRole::Node => self.node,
        }
    }

    pub fn set(&mut self, role: ColorRole, color: Color) {
        match role {
            ColorRole::Text => self.text = color,
            ColorRole::Background => self.background = color,
            ColorRole::Node => self.node = color,
        }
    }

    /// Edges use the text color so they stay visible against the background
    pub fn edge(&self) -> Color {
        self.text
    }

    pub fn highlight(&self) -> Color {
        Color::HIGHLIGHT
    }

    /// Fill and label colors of a red-black tree node
    pub fn red_black(&self, red: bool) -> (Color, Color) {
        if red {
            (Color::RB_RED, Color::WHITE)
        } else {
            (Color::RB_BLACK, Color::WHITE)
        }
    }

    /// Apply `key:#rrggbb` entries from `content` on top of the current colors.
    ///
    /// Entries are whitespace separated. The color is checked before the key,
    /// so an invalid color stops parsing even for an unknown key.
    pub fn apply_settings(&mut self, content: &str) -> SettingsReport {
        let mut report = SettingsReport::default();
        for token in content.split_whitespace() {
            let (key, value) = token.split_once(':').unwrap_or((token, ""));
            let color = match Color::from_hex(value) {
                Ok(color) => color,
                Err(e) => {
                    tracing::warn!("Stopped reading settings at {:?}: {}", token, e);
                    report.stopped_at = Some(token.to_string());
                    break;
                }
            };
            match ColorRole::from_key(key) {
                Some(role) => {
                    self.set(role, color);
                    report.applied += 1;
                }
                None => {
                    tracing::debug!("Ignoring unknown setting {:?}", key);
                    report.ignored += 1;
                }
            }
        }
        report
    }

    /// Render the settings file, one `key:#rrggbb` per line
    pub fn to_settings(&self) -> String {
        ColorRole::all()
            .iter()
            .map(|role| format!("{}:{}\n", role.key(), self.get(*role).to_hex()))
            .collect()
    }

    /// Load a settings file over the defaults
    pub fn load(path: &Path) -> Result<(Self, SettingsReport), StorageError> {
        let content = std::fs::read_to_string(path)?;
        let mut theme = Self::default();
        let report = theme.apply_settings(&content);
        Ok((theme, report))
    }

    pub fn save(&self, path: &Path) -> Result<(), StorageError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_settings())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applies_all_three_colors() {
        let mut theme = Theme::default();
        let report = theme.apply_settings(
            "text-color:#112233\nbackground-color:#445566\nnode-color:#778899\n",
        );
        assert_eq!(report.applied, 3);
        assert_eq!(report.stopped_at, None);
        assert_eq!(theme.text, Color::rgb(0x11, 0x22, 0x33));
        assert_eq!(theme.background, Color::rgb(0x44, 0x55, 0x66));
        assert_eq!(theme.node, Color::rgb(0x77, 0x88, 0x99));
    }

    #[test]
    fn invalid_color_stops_parsing() {
        let mut theme = Theme::default();
        let report = theme.apply_settings(
            "text-color:#112233\nbackground-color:nope\nnode-color:#778899\n",
        );
        assert_eq!(report.applied, 1);
        assert_eq!(report.stopped_at.as_deref(), Some("background-color:nope"));
        assert_eq!(theme.text, Color::rgb(0x11, 0x22, 0x33));
        assert_eq!(theme.background, Theme::default().background);
        assert_eq!(theme.node, Theme::default().node);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut theme = Theme::default();
        let report = theme.apply_settings("edge-color:#000000 node-color:#010203");
        assert_eq!(report.ignored, 1);
        assert_eq!(report.applied, 1);
        assert_eq!(theme.node, Color::rgb(1, 2, 3));
    }

    #[test]
    fn unknown_key_with_bad_color_still_stops() {
        let mut theme = Theme::default();
        let report = theme.apply_settings("whatever:red node-color:#010203");
        assert!(report.stopped_at.is_some());
        assert_eq!(theme, Theme::default());
    }

    #[test]
    fn settings_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.txt");
        let mut theme = Theme::default();
        theme.set(ColorRole::Background, Color::rgb(10, 20, 30));
        theme.save(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "text-color:#000000\nbackground-color:#0a141e\nnode-color:#87cefa\n"
        );

        let (loaded, report) = Theme::load(&path).unwrap();
        assert_eq!(loaded, theme);
        assert_eq!(report.applied, 3);
    }

    #[test]
    fn missing_settings_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Theme::load(&dir.path().join("absent.txt")).is_err());
    }
}

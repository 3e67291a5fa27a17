use sketchpad_engine::input::{Key, Modifiers};
use sketchpad_engine::paint::Color;
use sketchpad_engine::scene::{BrushSettings, SceneCommand, ShapeKind};

const CHANNEL_STEP: f32 = 10.0;
const SIZE_STEP: f32 = 5.0;
const SIZE_MIN: f32 = 5.0;
const SIZE_MAX: f32 = 100.0;
const SEGMENTS_MIN: i32 = 3;
const SEGMENTS_MAX: i32 = 64;

/// Outcome of a key press routed through [`BrushControls::handle_key`].
#[derive(Debug, Clone, PartialEq)]
pub enum KeyAction {
    /// The brush changed.
    Brush,
    Scene(SceneCommand),
    Exit,
    Ignored,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

/// Live brush controls, the keyboard stand-in for the page's sliders.
///
/// Color levels are kept in percent like slider values; [`settings`] turns
/// the current levels into an immutable [`BrushSettings`] snapshot.
///
/// [`settings`]: BrushControls::settings
#[derive(Debug, Clone, PartialEq)]
pub struct BrushControls {
    pub kind: ShapeKind,
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub size: f32,
    pub segments: i32,
}

impl Default for BrushControls {
    fn default() -> Self {
        let brush = BrushSettings::default();
        Self {
            kind: brush.kind,
            red: brush.color.r * 100.0,
            green: brush.color.g * 100.0,
            blue: brush.color.b * 100.0,
            size: brush.size,
            segments: brush.segments,
        }
    }
}

impl BrushControls {
    /// Snapshot of the current levels.
    pub fn settings(&self) -> BrushSettings {
        BrushSettings::new(
            self.kind,
            Color::from_percent(self.red, self.green, self.blue),
            self.size,
            self.segments,
        )
    }

    pub fn set_kind(&mut self, kind: ShapeKind) {
        self.kind = kind;
    }

    pub fn adjust_channel(&mut self, channel: Channel, delta: f32) {
        let level = match channel {
            Channel::Red => &mut self.red,
            Channel::Green => &mut self.green,
            Channel::Blue => &mut self.blue,
        };
        *level = (*level + delta).clamp(0.0, 100.0);
    }

    pub fn adjust_size(&mut self, delta: f32) {
        self.size = (self.size + delta).clamp(SIZE_MIN, SIZE_MAX);
    }

    pub fn adjust_segments(&mut self, delta: i32) {
        self.segments = (self.segments + delta).clamp(SEGMENTS_MIN, SEGMENTS_MAX);
    }

    /// Maps a key press onto the controls or the scene.
    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> KeyAction {
        let step = if modifiers.shift { -CHANNEL_STEP } else { CHANNEL_STEP };

        match key {
            Key::Digit1 => self.set_kind(ShapeKind::Point),
            Key::Digit2 => self.set_kind(ShapeKind::Triangle),
            Key::Digit3 => self.set_kind(ShapeKind::Circle),
            Key::Digit4 => self.set_kind(ShapeKind::Star),

            Key::R => self.adjust_channel(Channel::Red, step),
            Key::G => self.adjust_channel(Channel::Green, step),
            Key::B => self.adjust_channel(Channel::Blue, step),

            Key::ArrowUp => self.adjust_size(SIZE_STEP),
            Key::ArrowDown => self.adjust_size(-SIZE_STEP),
            Key::ArrowRight => self.adjust_segments(1),
            Key::ArrowLeft => self.adjust_segments(-1),

            Key::C => return KeyAction::Scene(SceneCommand::Clear),
            Key::P => return KeyAction::Scene(SceneCommand::LoadIllustration),
            Key::Escape => return KeyAction::Exit,

            _ => return KeyAction::Ignored,
        }

        log::info!(
            "brush: {} rgb=({:.0}%, {:.0}%, {:.0}%) size={} segments={}",
            self.kind.name(),
            self.red,
            self.green,
            self.blue,
            self.size,
            self.segments,
        );
        KeyAction::Brush
    }
}

//! Difficulty table: three fixed presets plus one player-tunable preset.
//!
//! The tunable preset lives in a [`Settings`] value owned by the state machine
//! and is copied into each session when it starts, so edits only ever affect
//! sessions started after them.

/// Named difficulty selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Custom,
}

impl Difficulty {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Easy => "EASY",
            Self::Medium => "MEDIUM",
            Self::Hard => "HARD",
            Self::Custom => "CUSTOM",
        }
    }
}

/// Physics and obstacle tuning for one session.
///
/// Gravity is stored in hundredths so repeated +/- steps never drift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyPreset {
    /// Vertical opening between the two barriers.
    pub gap_size: u32,
    /// Obstacle and ground scroll per frame.
    pub scroll_speed: u32,
    /// Gravity in hundredths of a unit per frame squared.
    pub gravity_centi: u32,
    /// Velocity assigned on flap (negative = upward).
    pub flap_impulse: f64,
}

impl DifficultyPreset {
    pub const EASY: Self = Self {
        gap_size: 200,
        scroll_speed: 3,
        gravity_centi: 40,
        flap_impulse: -7.0,
    };

    pub const MEDIUM: Self = Self {
        gap_size: 170,
        scroll_speed: 4,
        gravity_centi: 45,
        flap_impulse: -7.5,
    };

    pub const HARD: Self = Self {
        gap_size: 140,
        scroll_speed: 5,
        gravity_centi: 55,
        flap_impulse: -8.5,
    };

    pub fn gap(&self) -> f64 {
        f64::from(self.gap_size)
    }

    pub fn speed(&self) -> f64 {
        f64::from(self.scroll_speed)
    }

    pub fn gravity(&self) -> f64 {
        f64::from(self.gravity_centi) / 100.0
    }
}

/// Which custom field an adjustment touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingField {
    Speed,
    Gap,
    Gravity,
}

impl SettingField {
    pub const ALL: [SettingField; 3] = [Self::Speed, Self::Gap, Self::Gravity];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Speed => "Speed",
            Self::Gap => "Pipe Gap",
            Self::Gravity => "Gravity",
        }
    }

    /// (min, max, step) in the field's stored units.
    pub fn bounds(&self) -> (u32, u32, u32) {
        match self {
            Self::Speed => (1, 15, 1),
            Self::Gap => (80, 300, 10),
            Self::Gravity => (10, 150, 5),
        }
    }
}

/// Direction of a single adjustment step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Increase,
    Decrease,
}

/// The difficulty table, including the live custom preset.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    custom: DifficultyPreset,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            custom: DifficultyPreset::MEDIUM,
        }
    }
}

impl Settings {
    /// Snapshot of the preset for a difficulty.
    pub fn preset(&self, difficulty: Difficulty) -> DifficultyPreset {
        match difficulty {
            Difficulty::Easy => DifficultyPreset::EASY,
            Difficulty::Medium => DifficultyPreset::MEDIUM,
            Difficulty::Hard => DifficultyPreset::HARD,
            Difficulty::Custom => self.custom,
        }
    }

    pub fn custom(&self) -> &DifficultyPreset {
        &self.custom
    }

    /// Move one custom field a single step, saturating at its bounds.
    /// Returns whether the value changed.
    pub fn adjust(&mut self, field: SettingField, step: Step) -> bool {
        let (min, max, delta) = field.bounds();
        let value = self.field_mut(field);
        let before = *value;
        *value = match step {
            Step::Increase => value.saturating_add(delta).min(max),
            Step::Decrease => value.saturating_sub(delta).max(min),
        };
        *value != before
    }

    /// Display string for a custom field.
    pub fn display_value(&self, field: SettingField) -> String {
        match field {
            SettingField::Speed => self.custom.scroll_speed.to_string(),
            SettingField::Gap => self.custom.gap_size.to_string(),
            SettingField::Gravity => format!("{:.2}", self.custom.gravity()),
        }
    }

    fn field_mut(&mut self, field: SettingField) -> &mut u32 {
        match field {
            SettingField::Speed => &mut self.custom.scroll_speed,
            SettingField::Gap => &mut self.custom.gap_size,
            SettingField::Gravity => &mut self.custom.gravity_centi,
        }
    }
}

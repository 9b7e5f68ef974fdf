//! Key bindings
//!
//! Maps discrete key presses to simulation commands. Pause and quit belong to
//! the driver; everything else mutates simulation parameters.

use serde::{Deserialize, Serialize};

use crate::sim::{Direction, LineCounts, Report, SimState};

/// Keys the simulation responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    LeftCtrl,
    RightCtrl,
    C,
    Space,
    Escape,
}

/// A discrete request from the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    AdjustPeriod(Direction),
    AdjustSpeed(Direction),
    ToggleCenterPin,
    CountLines,
    TogglePause,
    Quit,
}

/// Result of applying a command
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CommandOutcome {
    /// Parameters may have changed; carries the fresh report
    Reported(Report),
    Counted(LineCounts, Report),
    /// Handled by the driver, not the simulation
    Driver(Command),
}

impl Key {
    /// Parse a key name as typed in a script ("left", "ctrl", "c", ...)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "left" => Some(Key::Left),
            "right" => Some(Key::Right),
            "up" => Some(Key::Up),
            "down" => Some(Key::Down),
            "ctrl" | "lctrl" => Some(Key::LeftCtrl),
            "rctrl" => Some(Key::RightCtrl),
            "c" => Some(Key::C),
            "space" => Some(Key::Space),
            "esc" | "escape" => Some(Key::Escape),
            _ => None,
        }
    }

    pub fn command(self) -> Command {
        match self {
            Key::Left => Command::AdjustPeriod(Direction::Decrease),
            Key::Right => Command::AdjustPeriod(Direction::Increase),
            Key::Up => Command::AdjustSpeed(Direction::Increase),
            Key::Down => Command::AdjustSpeed(Direction::Decrease),
            Key::LeftCtrl | Key::RightCtrl => Command::ToggleCenterPin,
            Key::C => Command::CountLines,
            Key::Space => Command::TogglePause,
            Key::Escape => Command::Quit,
        }
    }
}

impl Command {
    /// Apply to the simulation; every key press ends with a parameter report
    pub fn apply(self, state: &mut SimState) -> CommandOutcome {
        match self {
            Command::AdjustPeriod(direction) => state.adjust_period(direction),
            Command::AdjustSpeed(direction) => state.adjust_speed(direction),
            Command::ToggleCenterPin => state.toggle_center_pin(),
            Command::CountLines => {
                let counts = state.count_lines();
                return CommandOutcome::Counted(counts, state.report());
            }
            Command::TogglePause | Command::Quit => {
                state.report();
                return CommandOutcome::Driver(self);
            }
        }
        CommandOutcome::Reported(state.report())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    use crate::sim::Params;

    fn state() -> SimState {
        SimState::new(Vec2::new(10.0, 10.0), Params::default(), 1)
    }

    #[test]
    fn test_key_bindings() {
        assert_eq!(Key::Left.command(), Command::AdjustPeriod(Direction::Decrease));
        assert_eq!(Key::Right.command(), Command::AdjustPeriod(Direction::Increase));
        assert_eq!(Key::Up.command(), Command::AdjustSpeed(Direction::Increase));
        assert_eq!(Key::Down.command(), Command::AdjustSpeed(Direction::Decrease));
        assert_eq!(Key::RightCtrl.command(), Command::ToggleCenterPin);
        assert_eq!(Key::C.command(), Command::CountLines);
        assert_eq!(Key::Escape.command(), Command::Quit);
    }

    #[test]
    fn test_key_names() {
        assert_eq!(Key::from_name("LEFT"), Some(Key::Left));
        assert_eq!(Key::from_name("ctrl"), Some(Key::LeftCtrl));
        assert_eq!(Key::from_name("esc"), Some(Key::Escape));
        assert_eq!(Key::from_name("f1"), None);
    }

    #[test]
    fn test_apply_reports_new_params() {
        let mut state = state();
        match Key::Right.command().apply(&mut state) {
            CommandOutcome::Reported(report) => assert_eq!(report.period, 15),
            other => panic!("unexpected outcome {other:?}"),
        }
        match Key::LeftCtrl.command().apply(&mut state) {
            CommandOutcome::Reported(report) => assert!(report.center_pinned),
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn test_count_lines_command() {
        let mut state = state();
        state.advance();
        match Command::CountLines.apply(&mut state) {
            CommandOutcome::Counted(counts, _) => {
                assert_eq!(counts, LineCounts { near: 1, far: 1 });
            }
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn test_driver_commands_pass_through() {
        let mut state = state();
        let before = state.params;
        assert_eq!(
            Command::TogglePause.apply(&mut state),
            CommandOutcome::Driver(Command::TogglePause)
        );
        assert_eq!(state.params, before);
    }
}

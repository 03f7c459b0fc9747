//! Scripted sequences of board operations.
//!
//! A step is written `ACTION=PIN`, e.g. `on=PA13`, `toggle=gpio1p8` or
//! `pulldown=STATUS_LED`. The CLI takes its steps in this form.

use crate::board::OrangePiOne;
use crate::error::{GpioError, Result};
use crate::gpio::Level;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    On,
    Off,
    Toggle,
    Pullup,
    Pulldown,
    Pullclear,
    Read,
    Peek,
    IsHigh,
    IsLow,
    IsOutput,
    IsInput,
}

impl Action {
    pub const ALL: [Action; 12] = [
        Action::On,
        Action::Off,
        Action::Toggle,
        Action::Pullup,
        Action::Pulldown,
        Action::Pullclear,
        Action::Read,
        Action::Peek,
        Action::IsHigh,
        Action::IsLow,
        Action::IsOutput,
        Action::IsInput,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            Action::On => "on",
            Action::Off => "off",
            Action::Toggle => "toggle",
            Action::Pullup => "pullup",
            Action::Pulldown => "pulldown",
            Action::Pullclear => "pullclear",
            Action::Read => "read",
            Action::Peek => "peek",
            Action::IsHigh => "is_high",
            Action::IsLow => "is_low",
            Action::IsOutput => "is_output",
            Action::IsInput => "is_input",
        }
    }
}

impl FromStr for Action {
    type Err = GpioError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Action::ALL
            .into_iter()
            .find(|action| action.keyword() == wanted)
            .ok_or_else(|| GpioError::InvalidStep(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    pub action: Action,
    pub pin: String,
}

impl FromStr for Step {
    type Err = GpioError;

    fn from_str(s: &str) -> Result<Self> {
        let (action, pin) = s
            .split_once('=')
            .ok_or_else(|| GpioError::InvalidStep(s.to_string()))?;
        let pin = pin.trim();
        if pin.is_empty() {
            return Err(GpioError::InvalidStep(s.to_string()));
        }
        let action = action
            .parse()
            .map_err(|_| GpioError::InvalidStep(s.to_string()))?;
        Ok(Step {
            action,
            pin: pin.to_string(),
        })
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.action.keyword(), self.pin)
    }
}

/// What a step produced, if anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Done,
    Level(Option<Level>),
    Flag(bool),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Done => f.write_str("ok"),
            Outcome::Level(Some(Level::High)) => f.write_str("high"),
            Outcome::Level(Some(Level::Low)) => f.write_str("low"),
            Outcome::Level(None) => f.write_str("unset"),
            Outcome::Flag(flag) => write!(f, "{}", flag),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepOutcome {
    pub step: Step,
    pub outcome: Outcome,
}

pub fn apply(board: &mut OrangePiOne, step: &Step) -> Result<Outcome> {
    let pin = step.pin.as_str();
    let outcome = match step.action {
        Action::On => board.turn_on(pin).map(|_| Outcome::Done)?,
        Action::Off => board.turn_off(pin).map(|_| Outcome::Done)?,
        Action::Toggle => Outcome::Level(Some(board.toggle(pin)?)),
        Action::Pullup => board.set_pullup(pin).map(|_| Outcome::Done)?,
        Action::Pulldown => board.set_pulldown(pin).map(|_| Outcome::Done)?,
        Action::Pullclear => board.clear_pull(pin).map(|_| Outcome::Done)?,
        Action::Read => Outcome::Level(board.read_as_input(pin)?),
        Action::Peek => Outcome::Level(board.peek(pin)?),
        Action::IsHigh => Outcome::Flag(board.is_high(pin)?),
        Action::IsLow => Outcome::Flag(board.is_low(pin)?),
        Action::IsOutput => Outcome::Flag(board.is_output(pin)?),
        Action::IsInput => Outcome::Flag(board.is_input(pin)?),
    };
    tracing::debug!("{} -> {}", step, outcome);
    Ok(outcome)
}

/// Runs the steps in order, stopping at the first failure.
pub fn run_steps(board: &mut OrangePiOne, steps: &[Step]) -> Result<Vec<StepOutcome>> {
    steps
        .iter()
        .map(|step| {
            apply(board, step).map(|outcome| StepOutcome {
                step: step.clone(),
                outcome,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_step() {
        let step: Step = "toggle=gpio1p8".parse().unwrap();
        assert_eq!(step.action, Action::Toggle);
        assert_eq!(step.pin, "gpio1p8");
        assert_eq!(step.to_string(), "toggle=gpio1p8");
        assert_eq!("IS_HIGH=PA13".parse::<Step>().unwrap().action, Action::IsHigh);
    }

    #[test]
    fn test_parse_rejects_malformed_steps() {
        for bad in ["on", "on=", "blink=PA13", "=PA13"] {
            assert_eq!(
                bad.parse::<Step>(),
                Err(GpioError::InvalidStep(bad.to_string())),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_run_steps_stops_on_unknown_pin() {
        let mut board = OrangePiOne::new();
        let steps: Vec<Step> = ["off=PA13", "on=PX0", "on=PA14"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        let result = run_steps(&mut board, &steps);
        assert_eq!(result, Err(GpioError::UnknownPin("PX0".to_string())));
        assert_eq!(board.peek("PA13"), Ok(Some(Level::Low)));
        // Steps after the failure never ran
        assert_eq!(board.is_input("PA14"), Ok(true));
    }

    #[test]
    fn test_outcomes() {
        let mut board = OrangePiOne::new();
        let steps: Vec<Step> = ["on=PA13", "toggle=gpio1p8", "is_low=PA13", "peek=PA13"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        let outcomes: Vec<Outcome> = run_steps(&mut board, &steps)
            .unwrap()
            .into_iter()
            .map(|o| o.outcome)
            .collect();
        assert_eq!(
            outcomes,
            vec![
                Outcome::Done,
                Outcome::Level(Some(Level::Low)),
                Outcome::Flag(true),
                Outcome::Level(Some(Level::Low)),
            ]
        );
    }
}

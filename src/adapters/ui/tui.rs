//! Implements InputPort. Inquire-based single-screen form.
//!
//! Menu loop over the three inputs plus Calculate/Quit. The form state is a
//! local `EstimatorInputs`; the estimator only ever reads it.

use crate::domain::{CoffeeIntake, DomainError, EstimatorInputs, Notice, SleepAmount, WakeTime};
use crate::ports::InputPort;
use crate::usecases::BedtimeEstimator;
use async_trait::async_trait;
use crossterm::ExecutableCommand;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use inquire::error::InquireError;
use inquire::ui::{Color as PromptColor, RenderConfig, Styled};
use inquire::validator::Validation;
use inquire::{CustomType, CustomUserError, Select, Text};
use std::fmt;
use std::io::{Write, stdout};
use std::sync::Arc;
use tracing::debug;

const WAKE_PROMPT: &str = "When do you want to wake up?";
const SLEEP_PROMPT: &str = "Desired amount of sleep";
const COFFEE_PROMPT: &str = "Daily coffee intake";

/// Applies the prompt theme for all subsequent inquire prompts.
pub fn apply_theme() {
    let config = RenderConfig::default()
        .with_prompt_prefix(Styled::new("☾").with_fg(PromptColor::LightCyan))
        .with_highlighted_option_prefix(Styled::new("›").with_fg(PromptColor::LightMagenta));
    inquire::set_global_render_config(config);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    EditWake,
    EditSleep,
    EditCoffee,
    Calculate,
    Quit,
}

/// Menu row: action plus its rendered label (current value included).
struct MenuEntry {
    action: Action,
    label: String,
}

impl fmt::Display for MenuEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// One press on a stepper control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepAction {
    Increment,
    Decrement,
    Enter,
    Done,
}

impl fmt::Display for StepAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Increment => "+",
            Self::Decrement => "-",
            Self::Enter => "Type a value",
            Self::Done => "Done",
        };
        f.write_str(s)
    }
}

/// A bounded value edited with +/- presses.
pub trait Stepper: Copy {
    fn up(self) -> Self;
    fn down(self) -> Self;
    fn at_min(&self) -> bool;
    fn at_max(&self) -> bool;
    fn display(&self) -> String;
}

impl Stepper for SleepAmount {
    fn up(self) -> Self {
        self.increment()
    }
    fn down(self) -> Self {
        self.decrement()
    }
    fn at_min(&self) -> bool {
        self.is_min()
    }
    fn at_max(&self) -> bool {
        self.is_max()
    }
    fn display(&self) -> String {
        self.label()
    }
}

impl Stepper for CoffeeIntake {
    fn up(self) -> Self {
        self.increment()
    }
    fn down(self) -> Self {
        self.decrement()
    }
    fn at_min(&self) -> bool {
        self.is_min()
    }
    fn at_max(&self) -> bool {
        self.is_max()
    }
    fn display(&self) -> String {
        self.label()
    }
}

/// Applies a +/- press. Other actions leave the value unchanged.
pub fn step<T: Stepper>(value: T, action: StepAction) -> T {
    match action {
        StepAction::Increment => value.up(),
        StepAction::Decrement => value.down(),
        StepAction::Enter | StepAction::Done => value,
    }
}

/// Options offered for a value; +/- are hidden at the bounds.
fn step_options<T: Stepper>(value: &T) -> Vec<StepAction> {
    let mut options = Vec::with_capacity(4);
    if !value.at_max() {
        options.push(StepAction::Increment);
    }
    if !value.at_min() {
        options.push(StepAction::Decrement);
    }
    options.push(StepAction::Enter);
    options.push(StepAction::Done);
    options
}

/// Outcome of one prompt: a value, Esc (keep what we had), or Ctrl-C (leave).
enum Prompted<T> {
    Value(T),
    Cancelled,
    Interrupted,
}

fn prompted<T>(result: Result<T, InquireError>) -> Result<Prompted<T>, DomainError> {
    match result {
        Ok(v) => Ok(Prompted::Value(v)),
        Err(InquireError::OperationCanceled) => Ok(Prompted::Cancelled),
        Err(InquireError::OperationInterrupted) => Ok(Prompted::Interrupted),
        Err(e) => Err(DomainError::Ui(e.to_string())),
    }
}

/// TUI adapter. Inquire prompts over a single form.
pub struct FormScreen {
    estimator: Arc<BedtimeEstimator>,
    initial: EstimatorInputs,
}

impl FormScreen {
    pub fn new(estimator: Arc<BedtimeEstimator>, initial: EstimatorInputs) -> Self {
        Self { estimator, initial }
    }

    fn menu(&self, inputs: &EstimatorInputs) -> Vec<MenuEntry> {
        let clock = self.estimator.clock();
        vec![
            MenuEntry {
                action: Action::EditWake,
                label: format!(
                    "{WAKE_PROMPT}  {}",
                    clock.format(inputs.wake_time.as_naive())
                ),
            },
            MenuEntry {
                action: Action::EditSleep,
                label: format!("{SLEEP_PROMPT}  {}", inputs.sleep_amount.label()),
            },
            MenuEntry {
                action: Action::EditCoffee,
                label: format!("{COFFEE_PROMPT}  {}", inputs.coffee_intake.label()),
            },
            MenuEntry {
                action: Action::Calculate,
                label: "Calculate".to_string(),
            },
            MenuEntry {
                action: Action::Quit,
                label: "Quit".to_string(),
            },
        ]
    }

    fn edit_wake(&self, current: WakeTime) -> Result<Prompted<WakeTime>, DomainError> {
        let default = self.estimator.clock().format(current.as_naive());
        let answer = Text::new(WAKE_PROMPT)
            .with_default(&default)
            .with_help_message("HH:MM or h:MM AM/PM")
            .with_validator(|input: &str| -> Result<Validation, CustomUserError> {
                Ok(match WakeTime::parse(input) {
                    Ok(_) => Validation::Valid,
                    Err(e) => Validation::Invalid(e.to_string().into()),
                })
            })
            .prompt();
        Ok(match prompted(answer)? {
            // validator already accepted it
            Prompted::Value(text) => Prompted::Value(WakeTime::parse(&text)?),
            Prompted::Cancelled => Prompted::Cancelled,
            Prompted::Interrupted => Prompted::Interrupted,
        })
    }

    fn edit_stepper<T, F>(
        &self,
        title: &str,
        mut value: T,
        from_typed: F,
    ) -> Result<Prompted<T>, DomainError>
    where
        T: Stepper,
        F: Fn(f64) -> T,
    {
        loop {
            let message = format!("{title}: {}", value.display());
            let action = match prompted(Select::new(&message, step_options(&value)).prompt())? {
                Prompted::Value(a) => a,
                Prompted::Cancelled => return Ok(Prompted::Value(value)),
                Prompted::Interrupted => return Ok(Prompted::Interrupted),
            };
            match action {
                StepAction::Done => return Ok(Prompted::Value(value)),
                StepAction::Enter => {
                    let typed = CustomType::<f64>::new(title)
                        .with_error_message("Please type a number")
                        .prompt();
                    match prompted(typed)? {
                        Prompted::Value(n) => value = from_typed(n),
                        Prompted::Cancelled => {}
                        Prompted::Interrupted => return Ok(Prompted::Interrupted),
                    }
                }
                other => value = step(value, other),
            }
        }
    }

    fn show_notice(&self, notice: &mut Notice) -> Result<Prompted<()>, DomainError> {
        if !notice.visible {
            return Ok(Prompted::Value(()));
        }
        render_notice(notice);
        let ack = prompted(Select::new("", vec!["Ok"]).without_help_message().prompt())?;
        notice.dismiss();
        Ok(match ack {
            Prompted::Interrupted => Prompted::Interrupted,
            _ => Prompted::Value(()),
        })
    }
}

fn render_notice(notice: &Notice) {
    let mut out = stdout();
    let color = if notice.is_error() {
        Color::Red
    } else {
        Color::Cyan
    };
    let _ = out.execute(Print("\r\n"));
    let _ = out.execute(SetForegroundColor(color));
    let _ = out.execute(SetAttribute(Attribute::Bold));
    let _ = out.execute(Print(format!("{}\r\n", notice.title)));
    let _ = out.execute(SetAttribute(Attribute::Reset));
    let _ = out.execute(ResetColor);
    let _ = out.execute(Print(format!("{}\r\n\r\n", notice.message)));
    let _ = out.flush();
}

#[async_trait]
impl InputPort for FormScreen {
    async fn run(&self) -> Result<(), DomainError> {
        let mut inputs = self.initial;

        loop {
            let choice = Select::new("BetterRest", self.menu(&inputs))
                .without_help_message()
                .prompt();
            let action = match prompted(choice)? {
                Prompted::Value(entry) => entry.action,
                Prompted::Cancelled | Prompted::Interrupted => Action::Quit,
            };
            debug!(?action, "menu selection");

            let outcome = match action {
                Action::EditWake => match self.edit_wake(inputs.wake_time)? {
                    Prompted::Value(w) => {
                        inputs.wake_time = w;
                        Prompted::Value(())
                    }
                    other => discard(other),
                },
                Action::EditSleep => {
                    match self.edit_stepper(SLEEP_PROMPT, inputs.sleep_amount, SleepAmount::new)? {
                        Prompted::Value(s) => {
                            inputs.sleep_amount = s;
                            Prompted::Value(())
                        }
                        other => discard(other),
                    }
                }
                Action::EditCoffee => {
                    let from_typed = |n: f64| CoffeeIntake::new(n.round() as i64);
                    match self.edit_stepper(COFFEE_PROMPT, inputs.coffee_intake, from_typed)? {
                        Prompted::Value(c) => {
                            inputs.coffee_intake = c;
                            Prompted::Value(())
                        }
                        other => discard(other),
                    }
                }
                Action::Calculate => {
                    let mut notice = self.estimator.calculate(&inputs).await;
                    self.show_notice(&mut notice)?
                }
                Action::Quit => return Ok(()),
            };

            if matches!(outcome, Prompted::Interrupted) {
                return Ok(());
            }
        }
    }
}

fn discard<T>(p: Prompted<T>) -> Prompted<()> {
    match p {
        Prompted::Value(_) => Prompted::Value(()),
        Prompted::Cancelled => Prompted::Cancelled,
        Prompted::Interrupted => Prompted::Interrupted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_clamps_at_bounds() {
        let sleep = SleepAmount::new(11.75);
        let sleep = step(sleep, StepAction::Increment);
        assert_eq!(sleep.hours(), 12.0);
        assert_eq!(step(sleep, StepAction::Increment).hours(), 12.0);
        assert_eq!(step(sleep, StepAction::Done).hours(), 12.0);

        let coffee = CoffeeIntake::default();
        assert_eq!(step(coffee, StepAction::Decrement).cups(), 1);
        assert_eq!(step(coffee, StepAction::Increment).cups(), 2);
    }

    #[test]
    fn test_step_options_hide_exhausted_direction() {
        let min = step_options(&CoffeeIntake::new(1));
        assert_eq!(min, vec![StepAction::Increment, StepAction::Enter, StepAction::Done]);
        let max = step_options(&SleepAmount::new(12.0));
        assert_eq!(max, vec![StepAction::Decrement, StepAction::Enter, StepAction::Done]);
        assert_eq!(step_options(&SleepAmount::default()).len(), 4);
    }

    #[test]
    fn test_prompted_maps_cancellation() {
        assert!(matches!(
            prompted::<()>(Err(InquireError::OperationCanceled)),
            Ok(Prompted::Cancelled)
        ));
        assert!(matches!(
            prompted::<()>(Err(InquireError::OperationInterrupted)),
            Ok(Prompted::Interrupted)
        ));
        assert!(matches!(
            prompted::<()>(Err(InquireError::NotTTY)),
            Err(DomainError::Ui(_))
        ));
    }
}

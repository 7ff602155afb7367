//! Line-oriented terminal driver
//!
//! Reads one command per line, applies it to the open panel and prints the
//! result. Confirmation prompts are answered on the same input stream.

use super::command::{Command, HELP, parse_command};
use crate::controls::{ActionRunner, Confirmer, Control};
use crate::panels::SettingsWindow;
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

/// Yes/no prompt on a terminal; anything but `y` or `yes` declines
pub struct TerminalConfirmer<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
}

impl<'a, R: BufRead, W: Write> TerminalConfirmer<'a, R, W> {
    /// Prompt on `output`, read the answer from `input`
    pub fn new(input: &'a mut R, output: &'a mut W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, prompt: &str) -> io::Result<bool> {
        write!(self.output, "{prompt} [y/N] ")?;
        self.output.flush()?;
        let mut answer = String::new();
        self.input.read_line(&mut answer)?;
        let answer = answer.trim();
        Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
    }
}

impl<R: BufRead, W: Write> Confirmer for TerminalConfirmer<'_, R, W> {
    fn confirm(&mut self, prompt: &str) -> bool {
        self.ask(prompt).unwrap_or_else(|e| {
            warn!("Confirmation prompt failed: {}", e);
            false
        })
    }
}

/// Terminal session over a settings window
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Session reading from `input` and writing to `output`
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output stream
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until `quit` or end of input
    pub fn run(&mut self, window: &mut SettingsWindow, runner: &dyn ActionRunner) -> io::Result<()> {
        self.print_panel(window)?;
        loop {
            write!(self.output, "{}> ", window.current().name())?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(());
            }

            match parse_command(&line) {
                Ok(Command::Quit) => return Ok(()),
                Ok(command) => self.execute(command, window, runner)?,
                Err(message) => writeln!(self.output, "{message}")?,
            }
        }
    }

    fn execute(
        &mut self,
        command: Command,
        window: &mut SettingsWindow,
        runner: &dyn ActionRunner,
    ) -> io::Result<()> {
        debug!("Command {:?}", command);
        match command {
            Command::Panels => {
                for (i, panel) in window.panels().iter().enumerate() {
                    let marker = if i == window.current_index() { '*' } else { ' ' };
                    writeln!(self.output, "{marker}{i} {}", panel.name())?;
                }
            }
            Command::Open(index) => {
                if window.select(index) {
                    window.refresh();
                    self.print_panel(window)?;
                } else {
                    writeln!(self.output, "No panel {index}")?;
                }
            }
            Command::List => self.print_panel(window)?,
            Command::Refresh => {
                window.refresh();
                self.print_panel(window)?;
            }
            Command::Onroad => {
                window.set_offroad(false);
                writeln!(self.output, "Onroad")?;
            }
            Command::Offroad => {
                window.set_offroad(true);
                writeln!(self.output, "Offroad")?;
            }
            Command::Help => writeln!(self.output, "{HELP}")?,
            Command::Quit => {}
            Command::Decrement(row)
            | Command::Increment(row)
            | Command::Toggle(row)
            | Command::Press(row)
            | Command::SelectCar(row, _) => {
                let mut confirmer = TerminalConfirmer::new(&mut self.input, &mut self.output);
                match apply_to_row(window, row, command, &mut confirmer, runner) {
                    Ok(Some((title, value))) => self.print_row(row, &title, &value)?,
                    Ok(None) => {}
                    Err(message) => writeln!(self.output, "{message}")?,
                }
            }
        }
        Ok(())
    }

    fn print_panel(&mut self, window: &SettingsWindow) -> io::Result<()> {
        let panel = window.current();
        writeln!(self.output, "== {} ==", panel.name())?;
        for (i, control) in panel.controls().iter().enumerate() {
            if let Control::Header(header) = control {
                writeln!(self.output, "   -- {} {}", header.title, header.note)?;
            } else {
                self.print_row(i, control.title(), &control.value())?;
            }
        }
        Ok(())
    }

    fn print_row(&mut self, index: usize, title: &str, value: &str) -> io::Result<()> {
        writeln!(self.output, "{index:>3} {title:<32} {value}")
    }
}

/// Apply a row command; returns the row's new title and value
fn apply_to_row(
    window: &mut SettingsWindow,
    row: usize,
    command: Command,
    confirmer: &mut dyn Confirmer,
    runner: &dyn ActionRunner,
) -> Result<Option<(String, String)>, String> {
    let control = window
        .current_mut()
        .control_mut(row)
        .ok_or_else(|| format!("No row {row}"))?;

    match (command, &mut *control) {
        (Command::Decrement(_), Control::Stepper(stepper)) => stepper.decrement(),
        (Command::Increment(_), Control::Stepper(stepper)) => stepper.increment(),
        (Command::Toggle(_), Control::Toggle(toggle)) => {
            if !toggle.is_enabled() {
                return Err(format!("{} is locked", toggle.spec().title));
            }
            toggle.toggle();
        }
        (Command::Press(_), Control::Action(action)) => {
            if !action.is_enabled() {
                return Err(format!("{} only works while offroad", action.spec().title));
            }
            if !action.invoke(confirmer, runner) {
                return Ok(None);
            }
        }
        (Command::Press(_), Control::Button(button)) => {
            if !button.is_enabled() {
                return Err(format!("{} only works while offroad", button.spec().title));
            }
            button.press();
        }
        (Command::Press(_), Control::Car(car)) => car.apply(runner),
        (Command::Press(_), Control::Ssh(keys)) => {
            if !keys.remove() {
                return Err("No SSH keys installed".to_string());
            }
        }
        (Command::SelectCar(_, model), Control::Car(car)) => {
            if !car.select(&model) {
                return Err(format!("Unknown car model {model:?}"));
            }
        }
        (command, other) => {
            return Err(format!(
                "Row {row} ({}) does not support {command:?}",
                other.title()
            ));
        }
    }
    Ok(Some((control.title().to_string(), control.value())))
}

//! Command text parsing for the terminal front-end

/// One line typed by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List the panels
    Panels,
    /// Open a panel by index
    Open(usize),
    /// List the rows of the open panel
    List,
    /// Step a stepper down
    Decrement(usize),
    /// Step a stepper up
    Increment(usize),
    /// Flip a toggle
    Toggle(usize),
    /// Press a button, run an action or apply the car selection
    Press(usize),
    /// Choose a car model on a car row
    SelectCar(usize, String),
    /// The car was switched on
    Onroad,
    /// The car was switched off
    Offroad,
    /// Re-read every row from the store
    Refresh,
    /// Show the command list
    Help,
    /// Leave the settings
    Quit,
}

/// Usage text shown by `help`
pub const HELP: &str = "\
panels            list panels
open <n>          open panel n
list              list rows of the open panel
+ <n> / - <n>     step row n up / down
toggle <n>        flip toggle n
press <n>         press button n
select <n> <car>  pick a car model on row n
onroad / offroad  simulate ignition
refresh           re-read values
quit              exit";

/// Parse a command line; the error is a message for the user
pub fn parse_command(text: &str) -> Result<Command, String> {
    let parts: Vec<&str> = text.split_whitespace().collect();
    let Some(&cmd) = parts.first() else {
        return Ok(Command::List);
    };

    let index = |pos: usize| -> Result<usize, String> {
        let raw = parts
            .get(pos)
            .ok_or_else(|| format!("{cmd} needs a row number"))?;
        raw.parse()
            .map_err(|_| format!("{raw:?} is not a row number"))
    };

    match cmd {
        "panels" => Ok(Command::Panels),
        "open" => index(1).map(Command::Open),
        "list" | "ls" => Ok(Command::List),
        "-" => index(1).map(Command::Decrement),
        "+" => index(1).map(Command::Increment),
        "toggle" => index(1).map(Command::Toggle),
        "press" => index(1).map(Command::Press),
        "select" => {
            let row = index(1)?;
            let model = parts
                .get(2)
                .ok_or_else(|| "select needs a car model".to_string())?;
            Ok(Command::SelectCar(row, (*model).to_string()))
        }
        "onroad" => Ok(Command::Onroad),
        "offroad" => Ok(Command::Offroad),
        "refresh" => Ok(Command::Refresh),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => Err(format!("Unknown command {other:?}, try help")),
    }
}

use anyhow::Result;
use passmeter::charset::CharacterClass;
use passmeter::configtool::Settings;
use passmeter::session::Session;
use passmeter::strength;
use super::{print_evaluation, prompt_input, read_password_from_stdin};

const HELP: &str = "\
Commands:
  check            evaluate a password (input is hidden)
  gen [length]     generate a password with the current options
  toggle <class>   switch lowercase, uppercase, digit or special on/off
  options          show the current generator options
  last             show the last generated password
  help             show this message
  quit             leave";

#[derive(Debug, PartialEq, Eq)]
enum Action {
    Check,
    Generate(Option<usize>),
    Toggle(CharacterClass),
    Options,
    Last,
    Help,
    Quit,
}

fn parse_action(line: &str) -> Result<Action, String> {
    let mut parts = line.split_whitespace();
    let command = parts.next().unwrap_or("").to_ascii_lowercase();
    let arg = parts.next();
    match command.as_str() {
        "check" | "c" => Ok(Action::Check),
        "gen" | "g" => match arg {
            Some(n) => n
                .parse::<usize>()
                .map(|n| Action::Generate(Some(n)))
                .map_err(|_| format!("Invalid length: {}", n)),
            None => Ok(Action::Generate(None)),
        },
        "toggle" | "t" => {
            let name = arg.ok_or("Usage: toggle <class>")?;
            name.parse::<CharacterClass>().map(Action::Toggle)
        }
        "options" | "o" => Ok(Action::Options),
        "last" | "l" => Ok(Action::Last),
        "help" | "h" | "?" => Ok(Action::Help),
        "quit" | "q" | "exit" => Ok(Action::Quit),
        other => Err(format!("Unknown command: {} (type 'help')", other)),
    }
}

fn print_options(session: &Session) {
    println!("Length: {}", session.length());
    println!("Classes: {}", session.classes());
}

pub fn run_interactive(settings: Settings) -> Result<()> {
    let mut session = Session::new(settings);
    println!("Secure Password Strength Meter & Generator");
    println!("{}", HELP);

    loop {
        let line = match prompt_input("> ")? {
            Some(line) => line,
            None => break,
        };
        if line.is_empty() {
            continue;
        }
        let action = match parse_action(&line) {
            Ok(action) => action,
            Err(msg) => {
                println!("{}", msg);
                continue;
            }
        };

        match action {
            Action::Check => {
                let password = read_password_from_stdin("Enter your password: ")?;
                if !password.is_empty() {
                    print_evaluation(&strength::evaluate(&password));
                }
            }
            Action::Generate(length) => match session.generate(length) {
                Ok(generated) => println!("Generated Password: {}", generated.password),
                Err(e) => println!("{}", e),
            },
            Action::Toggle(class) => {
                let enabled = session.toggle(class);
                println!("{} {}", class, if enabled { "enabled" } else { "disabled" });
            }
            Action::Options => print_options(&session),
            Action::Last => match session.last_generated() {
                Some(last) => println!(
                    "{} (generated {})",
                    last.password,
                    last.generated_at.format("%Y-%m-%d %H:%M:%S")
                ),
                None => println!("No password generated yet."),
            },
            Action::Help => println!("{}", HELP),
            Action::Quit => break,
        }
    }
    log::debug!("interactive session closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(parse_action("check"), Ok(Action::Check));
        assert_eq!(parse_action("gen"), Ok(Action::Generate(None)));
        assert_eq!(parse_action("gen 20"), Ok(Action::Generate(Some(20))));
        assert_eq!(parse_action("toggle special"), Ok(Action::Toggle(CharacterClass::Special)));
        assert_eq!(parse_action("Q"), Ok(Action::Quit));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse_action("gen twenty").is_err());
        assert!(parse_action("toggle").is_err());
        assert!(parse_action("toggle emoji").is_err());
        assert!(parse_action("dance").is_err());
    }
}

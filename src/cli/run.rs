use crate::cli;
use crate::cli::command::Command;
use crate::domain::handlers::{add_contact, change_contact, normalize, show_all, show_phone};
use crate::domain::ContactStore;
use crate::errors::AppError;
use crate::parser::parse_input;

/// Runs one interactive session: prompt, read, dispatch, print, until the
/// user exits or the input stream closes. The contact store lives exactly as
/// long as the session.
pub fn run_app() -> Result<(), AppError> {
    let mut contacts = ContactStore::new();

    println!("Welcome to the assistant bot!");

    loop {
        cli::prompt("Enter a command: ")?;

        let Some(line) = cli::read_line()? else {
            // The prompt is still open on this line; the farewell starts on
            // a fresh one.
            println!("\nGood bye!");
            break;
        };

        if line.is_empty() {
            continue;
        }

        let (command, args) = parse_input(&line);

        match Command::parse(&command) {
            Some(Command::Exit) => {
                println!("Good bye!");
                break;
            }
            Some(Command::Hello) => println!("How can I help you?"),
            Some(Command::Add) => println!("{}", normalize(add_contact(&args, &mut contacts))),
            Some(Command::Change) => {
                println!("{}", normalize(change_contact(&args, &mut contacts)))
            }
            Some(Command::Phone) => println!("{}", normalize(show_phone(&args, &contacts))),
            Some(Command::All) => println!("{}", show_all(&contacts)),
            None => println!("Invalid command."),
        }
    }

    Ok(())
}

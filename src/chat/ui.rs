//! Chat mode UI components.

use crate::ui::Style;

use super::command::SlashCommand;
use super::persona::Persona;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header(persona: &Persona) {
    println!(
        "{} {} - chatting with {}",
        Style::header("buddy"),
        Style::version(format!("v{VERSION}")),
        Style::assistant(&persona.name)
    );
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    for cmd in SlashCommand::ALL {
        let aliases: Vec<String> = cmd.aliases().iter().map(|a| format!("/{a}")).collect();
        println!(
            "  {}  {} {}",
            Style::command(format!("{:<8}", format!("/{}", cmd.name()))),
            Style::secondary(cmd.summary()),
            Style::hint(format!("({})", aliases.join(", ")))
        );
    }
    println!(
        "  {}",
        Style::hint("Start a message with // to send text beginning with /")
    );
    println!();
}

pub fn print_interrupted() {
    println!("{}", Style::hint("(interrupted)"));
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}

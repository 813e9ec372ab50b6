//! # Help Command
//!
//! Prints the fixed description of a command chosen by the operator.

use super::{Command, COMMAND_NAMES};
use crate::repl::io::{LineReader, Output};

pub const NOT_RECOGNIZED: &str = "The command provided was not recognized";
pub const GATHER_FAILED: &str = "An error was seen when gathering the command of interest";

const GET_HELP: &[&str] = &[
    "This command allows users to retrieve data from the DB.",
    "Below are the promts provided with the GET command:",
    "From: Provide the name of the table in the database you would like data from.",
    "Select: A query of format \"key\" \"operation\" \"value\", given over three inputs.",
];

const POST_HELP: &[&str] = &[
    "This command allows users to insert data into the DB.",
    "Below are the promts provided with the POST command:",
    "From: Provide the name of the table in the database you would like to insert data.",
    "Select: A query of format \"key\" \"operation\" \"value\", given over three inputs.",
    "Insert: An item to insert, in key-value pairs provided in 2D arrays in one 2D array",
];

const UPDATE_HELP: &[&str] = &[
    "This command allows users to update data in the DB.",
    "Below are the promts provided with the UPDATE command:",
    "From: Provide the name of the table in the database you would like to update.",
    "Select: A query of format \"key\" \"operation\" \"value\", given over three inputs",
    "Update: An update action of format \"key\" \"operation\" \"value\" in three inputs",
];

const DELETE_HELP: &[&str] = &[
    "This command allows users to remove data from the DB.",
    "Below are the promts provided with the DELETE command:",
    "From: Provide the name of the table in the database you would remove data from.",
    "Select: A query of format \"key\" \"operation\" \"value\", given over three inputs",
];

const HELP_HELP: &[&str] =
    &["After typing help in any casing, when prompted, provide the command of interest."];

const EXIT_HELP: &[&str] =
    &["Just simply type exit when promted in any casing and you will exit the app."];

/// Help lines for a command; `None` for anything unrecognized
pub fn help_text(command: Command) -> Option<&'static [&'static str]> {
    match command {
        Command::Get => Some(GET_HELP),
        Command::Post => Some(POST_HELP),
        Command::Update => Some(UPDATE_HELP),
        Command::Delete => Some(DELETE_HELP),
        Command::Help => Some(HELP_HELP),
        Command::Exit => Some(EXIT_HELP),
        Command::Skip => None,
    }
}

/// Ask which command to describe and print its help
pub fn help_command(reader: &mut dyn LineReader, output: &mut dyn Output) {
    output.general(&format!(
        "What command would you like more info on?\n{COMMAND_NAMES}"
    ));
    output.general("This is not case sensitive.");

    let selected = match reader.read("Gather Info On") {
        Ok(selected) => selected,
        Err(e) => {
            tracing::warn!("Failed to read help target: {}", e);
            output.error(GATHER_FAILED);
            return;
        }
    };

    match help_text(Command::parse(&selected)) {
        Some(lines) => lines.iter().for_each(|line| output.general(line)),
        None => output.error(NOT_RECOGNIZED),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repl::io::{MockLineReader, OutputLine, RecordingOutput};

    fn run_help(answer: Option<&str>) -> RecordingOutput {
        let mut reader = MockLineReader::scripted([answer.map(str::to_string)]);
        let mut output = RecordingOutput::new();
        help_command(&mut reader, &mut output);
        output
    }

    #[test]
    fn help_should_print_intro_before_reading() {
        let output = run_help(Some("exit"));
        assert_eq!(
            &output.generals()[..2],
            [
                "What command would you like more info on?\nGET, POST, UPDATE, DELETE, HELP, EXIT",
                "This is not case sensitive.",
            ]
        );
    }

    #[test]
    fn help_for_get_should_print_four_lines() {
        let output = run_help(Some("get"));
        assert_eq!(&output.generals()[2..], GET_HELP);
        assert!(output.errors().is_empty());
    }

    #[test]
    fn help_for_post_should_describe_insert() {
        let output = run_help(Some("POST"));
        assert_eq!(&output.generals()[2..], POST_HELP);
    }

    #[test]
    fn help_for_update_should_describe_update() {
        let output = run_help(Some("Update"));
        assert_eq!(
            output.generals().last(),
            Some(
                &"Update: An update action of format \"key\" \"operation\" \"value\" in three inputs"
            )
        );
    }

    #[test]
    fn help_for_delete_help_and_exit_should_print_their_text() {
        assert_eq!(&run_help(Some("delete")).generals()[2..], DELETE_HELP);
        assert_eq!(&run_help(Some("help")).generals()[2..], HELP_HELP);
        assert_eq!(&run_help(Some("EXIT")).generals()[2..], EXIT_HELP);
    }

    #[test]
    fn unknown_target_should_report_only_not_recognized() {
        let output = run_help(Some("bogus"));
        assert_eq!(output.generals().len(), 2);
        assert_eq!(
            output.lines().last(),
            Some(&OutputLine::Error(NOT_RECOGNIZED.to_string()))
        );
        assert_eq!(output.errors(), [NOT_RECOGNIZED]);
    }

    #[test]
    fn read_failure_should_skip_lookup() {
        let output = run_help(None);
        assert_eq!(output.generals().len(), 2);
        assert_eq!(output.errors(), [GATHER_FAILED]);
    }
}

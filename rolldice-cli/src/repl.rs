use crate::helper::ReplHelper;
use colored::Colorize;
use rolldice_lib::dice::Dice;
use rustyline::error::ReadlineError;
use rustyline::hint::HistoryHinter;
use rustyline::CompletionType;
use rustyline::Config;
use rustyline::EditMode;
use rustyline::Editor;
use std::process::ExitCode;

const HISTORY_FILE: &str = "history";

/// Read dice strings from the terminal until EOF, one per line, rolling
/// each valid one and reporting malformed ones without stopping
pub(crate) fn run(separate: bool) -> ExitCode {
    let config = Config::builder()
        .history_ignore_space(true)
        .completion_type(CompletionType::List)
        .edit_mode(EditMode::Emacs)
        .build();
    let helper = ReplHelper {
        hinter: HistoryHinter {},
        colored: "".to_owned(),
    };
    let mut rline = match Editor::with_config(config) {
        Ok(editor) => editor,
        Err(error) => {
            eprintln!("{}", format!("rolldice: error: `{error:?}`").bold().red());
            return ExitCode::FAILURE;
        }
    };
    rline.set_helper(Some(helper));
    if rline.load_history(HISTORY_FILE).is_err() {
        tracing::debug!("no previous history");
    }

    let mut exit = ExitCode::SUCCESS;
    let mut count = 1u64;
    loop {
        let prompt = format!("rolldice: {count}> ");
        if let Some(helper) = rline.helper_mut() {
            helper.colored = prompt.bold().green().to_string();
        }
        match rline.readline(&prompt) {
            Ok(line) => {
                if !line.is_empty() {
                    let _ = rline.add_history_entry(line.as_str());
                    match Dice::parse(&line) {
                        Ok(dice) => print!("{}", dice.roll().render(separate)),
                        Err(error) => {
                            tracing::debug!("{line}: {error}");
                            eprintln!("{}", format!("{line}: malformed dice string").bold().red());
                            exit = ExitCode::FAILURE;
                        }
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                eprintln!("{}", "rolldice: signal: CTRL-C".bold().yellow());
                break;
            }
            Err(ReadlineError::Eof) => break,
            Err(error) => {
                eprintln!("{}", format!("rolldice: error: `{error:?}`").bold().red());
                exit = ExitCode::FAILURE;
                break;
            }
        }
        count += 1;
    }
    if let Err(error) = rline.append_history(HISTORY_FILE) {
        tracing::debug!("history not saved: {error}");
    }
    exit
}

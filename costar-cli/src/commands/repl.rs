//! Repl command - interactive lookups against one target
//!
//! Loads the record file once, then keeps asking for a start name and prints
//! how it connects to the target. An empty name (or end of input) ends the
//! session. On a terminal the prompts go through `dialoguer`; piped input is
//! read line by line without echoing prompts.

use super::path::{PathReport, CSV_HEADERS};
use crate::output::{CsvOutput, OutputConfig, OutputFormat, Outputter};
use anyhow::{bail, Result};
use costar_core::Graph;
use dialoguer::Input;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};

const NAME_PROMPT: &str = "Enter Actor";
const FILE_PROMPT: &str = "enter filename";

/// Source of user answers
pub trait Prompt {
    /// Ask one question. `None` once input is exhausted.
    fn ask(&mut self, question: &str) -> Result<Option<String>>;
}

/// Prompts on an interactive terminal
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        let answer: Result<String, dialoguer::Error> = Input::new()
            .with_prompt(question)
            .allow_empty(true)
            .interact_text();
        match answer {
            Ok(answer) => Ok(Some(answer)),
            Err(dialoguer::Error::IO(err)) if is_end_of_input(&err) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

/// Ctrl-D or Ctrl-C at a terminal prompt ends the session like piped EOF.
fn is_end_of_input(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::UnexpectedEof | io::ErrorKind::Interrupted
    )
}

/// Reads answers line by line from any buffered reader
pub struct LinePrompt<R> {
    reader: R,
}

impl<R: BufRead> LinePrompt<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> Prompt for LinePrompt<R> {
    fn ask(&mut self, _question: &str) -> Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// Answer names from `prompt` until an empty one. Returns how many were answered.
pub fn session<P: Prompt, W: Write>(
    graph: &Graph,
    target: &str,
    config: &OutputConfig,
    prompt: &mut P,
    out: &mut W,
) -> Result<usize> {
    let mut answered = 0;

    // CSV answers share one header so the whole session is a single document
    if config.format == OutputFormat::Csv {
        writeln!(out, "{}", CSV_HEADERS.join(","))?;
    }

    while let Some(name) = prompt.ask(NAME_PROMPT)? {
        let name = name.trim();
        if name.is_empty() {
            break;
        }

        let report = PathReport::lookup(graph, name, target);
        match config.format {
            OutputFormat::Csv => {
                for row in report.csv_rows() {
                    writeln!(out, "{}", CsvOutput::format_row(&row))?;
                }
            }
            OutputFormat::Table => {
                writeln!(out, "{}", report.render(config))?;
                writeln!(out)?;
            }
            OutputFormat::Json => writeln!(out, "{}", report.render(config))?,
        }
        answered += 1;
    }

    Ok(answered)
}

/// Run the repl command
pub fn run(file: Option<&Path>, target: &str, format: OutputFormat) -> Result<()> {
    if io::stdin().is_terminal() && io::stdout().is_terminal() {
        run_with(file, target, format, &mut TerminalPrompt)
    } else {
        let stdin = io::stdin();
        run_with(file, target, format, &mut LinePrompt::new(stdin.lock()))
    }
}

fn run_with<P: Prompt>(
    file: Option<&Path>,
    target: &str,
    format: OutputFormat,
    prompt: &mut P,
) -> Result<()> {
    let file = match file {
        Some(file) => file.to_path_buf(),
        None => match prompt.ask(FILE_PROMPT)? {
            Some(answer) if !answer.trim().is_empty() => PathBuf::from(answer.trim()),
            _ => bail!("No record file given"),
        },
    };

    let graph = super::load_graph(&file)?;
    super::check_target(&graph, target);

    // One JSON object per answer
    let config = OutputConfig::new(format).compact();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let answered = session(&graph, target, &config, prompt, &mut out)?;
    tracing::debug!(answered, "session finished");
    Ok(())
}

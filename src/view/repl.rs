//! The interactive read-eval loop (impure shell).
//!
//! Reads menu choices and operand lines from any `BufRead`, writes all
//! user-facing text to any `Write`. Production wires stdin/stdout;
//! tests drive the loop with in-memory buffers. One command per loop
//! iteration; every error is reported and the loop continues. EOF on
//! the input stream ends the session gracefully.

use crate::model::{Operation, OperationKind};
use crate::parser::parse_operands;
use crate::state::Ledger;
use crate::view::menu::{render_menu, MenuChoice, MenuMode};
use crossterm::{cursor::MoveTo, execute, terminal};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{info, warn};

/// The interactive calculator session.
pub struct Repl<R, W> {
    input: R,
    output: W,
    ledger: Ledger,
    mode: MenuMode,
    export_dir: PathBuf,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    /// Build a session over the given streams and ledger.
    pub fn new(input: R, output: W, ledger: Ledger, mode: MenuMode, export_dir: PathBuf) -> Self {
        Self {
            input,
            output,
            ledger,
            mode,
            export_dir,
        }
    }

    /// The session's ledger (for inspection after the loop ends).
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Run the menu loop until the user quits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        info!(mode = ?self.mode, "session started");

        loop {
            write!(self.output, "{}", render_menu(self.mode))?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                break;
            };

            match MenuChoice::parse(&line, self.mode) {
                None => {
                    writeln!(self.output, "{}", self.mode.invalid_choice_message())?;
                }
                Some(MenuChoice::Quit) => {
                    writeln!(self.output, "Saindo da calculadora. Até mais!")?;
                    break;
                }
                Some(MenuChoice::Operate(kind)) => self.run_operation(kind)?,
                Some(MenuChoice::ShowHistory) => self.show_history()?,
                Some(MenuChoice::Statistics) => self.show_statistics()?,
                Some(MenuChoice::Export) => self.export_history()?,
                Some(MenuChoice::SetPrecision) => self.configure_precision()?,
                Some(MenuChoice::SetLimit) => self.configure_limit()?,
                Some(MenuChoice::ClearScreen) => self.clear_screen()?,
            }
        }

        info!(entries = self.ledger.len(), "session ended");
        Ok(())
    }

    /// Read one input line; `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Prompt for operands until a valid list is entered, then execute.
    fn run_operation(&mut self, kind: OperationKind) -> io::Result<()> {
        let limit = self.ledger.settings().max_operands();

        let operands = loop {
            match self.mode {
                MenuMode::Simple => write!(
                    self.output,
                    "Digite os números separados por espaço (ex: 10 5 3): "
                )?,
                MenuMode::Advanced => write!(
                    self.output,
                    "Digite os números separados por espaço (máx. {limit}, ex: 10 5 3): "
                )?,
            }
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(());
            };

            match parse_operands(&line, limit) {
                Ok(operands) => break operands,
                Err(err) => writeln!(self.output, "Erro: {err}")?,
            }
        };

        match self.ledger.execute(Operation::new(kind, operands)) {
            Ok(message) => writeln!(self.output, "{message}"),
            Err(err) => writeln!(self.output, "Erro: {err}"),
        }
    }

    fn show_history(&mut self) -> io::Result<()> {
        if self.ledger.is_empty() {
            return writeln!(self.output, "Nenhuma operação realizada ainda.");
        }

        writeln!(self.output, "\n=== Histórico de Operações ===")?;
        for (idx, entry) in self.ledger.entries().enumerate() {
            writeln!(self.output, "[{idx}] {entry}")?;
        }
        Ok(())
    }

    fn show_statistics(&mut self) -> io::Result<()> {
        match self.ledger.statistics() {
            Ok(stats) => {
                writeln!(self.output, "\n=== Estatísticas ===")?;
                writeln!(self.output, "Média dos resultados: {}", stats.mean)?;
                writeln!(self.output, "Maior resultado: {}", stats.max)?;
                writeln!(self.output, "Menor resultado: {}", stats.min)
            }
            Err(_) => writeln!(
                self.output,
                "Nenhuma operação realizada para calcular estatísticas."
            ),
        }
    }

    /// Render the export and write it into the export directory.
    fn export_history(&mut self) -> io::Result<()> {
        let export = match self.ledger.export() {
            Ok(export) => export,
            Err(err) => return writeln!(self.output, "{err}"),
        };

        let path = self.export_dir.join(&export.filename);
        match std::fs::write(&path, &export.content) {
            Ok(()) => writeln!(
                self.output,
                "Histórico exportado para {}.",
                path.display()
            ),
            Err(err) => {
                warn!(%err, path = %path.display(), "export write failed");
                writeln!(self.output, "Erro: falha ao gravar {}: {err}", path.display())
            }
        }
    }

    /// Prompt for a precision until the setter accepts one.
    fn configure_precision(&mut self) -> io::Result<()> {
        loop {
            write!(self.output, "Digite a precisão decimal (0-10): ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(());
            };

            let Ok(value) = line.trim().parse::<u8>() else {
                writeln!(self.output, "Erro: Valor deve estar entre 0 e 10!")?;
                continue;
            };

            match self.ledger.set_precision(value) {
                Ok(()) => {
                    return writeln!(
                        self.output,
                        "Precisão decimal ajustada para {value} casas."
                    );
                }
                Err(err) => writeln!(self.output, "Erro: {err}")?,
            }
        }
    }

    /// Prompt for an operand limit until the setter accepts one.
    fn configure_limit(&mut self) -> io::Result<()> {
        loop {
            write!(self.output, "Digite o limite de números (2-100): ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(());
            };

            let Ok(value) = line.trim().parse::<usize>() else {
                writeln!(self.output, "Erro: Valor deve estar entre 2 e 100!")?;
                continue;
            };

            match self.ledger.set_max_operands(value) {
                Ok(()) => {
                    return writeln!(
                        self.output,
                        "Limite de números ajustado para {value}."
                    );
                }
                Err(err) => writeln!(self.output, "Erro: {err}")?,
            }
        }
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        execute!(
            self.output,
            terminal::Clear(terminal::ClearType::All),
            MoveTo(0, 0)
        )
    }
}

#[cfg(test)]
#[path = "repl_tests.rs"]
mod tests;

//! Menu rendering and choice parsing (pure).
//!
//! Two menu modes exist: the advanced menu (options 1-11, the default)
//! with history, statistics, export, and configuration commands, and
//! the simple menu (options 1-5) with the four operations and quit.
//! Everything here is testable without a terminal.

use crate::model::OperationKind;

/// Which menu variant the session runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuMode {
    /// Options 1-5: the four operations and quit.
    Simple,
    /// Options 1-11: operations plus ledger and settings commands.
    Advanced,
}

impl MenuMode {
    /// Message shown when the menu choice doesn't parse or is out of
    /// range for this mode.
    pub fn invalid_choice_message(self) -> &'static str {
        match self {
            MenuMode::Simple => {
                "Erro: Opção inválida! Por favor, digite um número entre 1 e 5."
            }
            MenuMode::Advanced => "Opção inválida! Escolha entre 1 e 11.",
        }
    }
}

/// One parsed menu command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Run one of the four arithmetic operations.
    Operate(OperationKind),
    /// Print the recorded history.
    ShowHistory,
    /// Print statistics over the recorded results.
    Statistics,
    /// Export the history to a text file.
    Export,
    /// Prompt for a new decimal precision.
    SetPrecision,
    /// Prompt for a new operand limit.
    SetLimit,
    /// Clear the terminal.
    ClearScreen,
    /// Leave the calculator.
    Quit,
}

impl MenuChoice {
    /// Parse a menu input line for the given mode.
    ///
    /// Returns `None` for non-numeric input and for numbers outside the
    /// mode's range.
    pub fn parse(input: &str, mode: MenuMode) -> Option<Self> {
        let choice: u32 = input.trim().parse().ok()?;

        match (mode, choice) {
            (_, 1) => Some(MenuChoice::Operate(OperationKind::Sum)),
            (_, 2) => Some(MenuChoice::Operate(OperationKind::Difference)),
            (_, 3) => Some(MenuChoice::Operate(OperationKind::Product)),
            (_, 4) => Some(MenuChoice::Operate(OperationKind::Quotient)),
            (MenuMode::Simple, 5) => Some(MenuChoice::Quit),
            (MenuMode::Advanced, 5) => Some(MenuChoice::ShowHistory),
            (MenuMode::Advanced, 6) => Some(MenuChoice::Statistics),
            (MenuMode::Advanced, 7) => Some(MenuChoice::Export),
            (MenuMode::Advanced, 8) => Some(MenuChoice::SetPrecision),
            (MenuMode::Advanced, 9) => Some(MenuChoice::SetLimit),
            (MenuMode::Advanced, 10) => Some(MenuChoice::ClearScreen),
            (MenuMode::Advanced, 11) => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}

/// Render the numbered menu for a mode, ending with the choice prompt
/// (no trailing newline: the cursor stays on the prompt line).
pub fn render_menu(mode: MenuMode) -> String {
    match mode {
        MenuMode::Simple => "\n=== Calculadora ===\n\
             1. Somar\n\
             2. Subtrair\n\
             3. Multiplicar\n\
             4. Dividir\n\
             5. Sair\n\
             Escolha uma opção (1-5): "
            .to_string(),
        MenuMode::Advanced => "\n=== Calculadora Avançada ===\n\
             1. Somar\n\
             2. Subtrair\n\
             3. Multiplicar\n\
             4. Dividir\n\
             5. Ver Histórico\n\
             6. Estatísticas\n\
             7. Exportar Histórico\n\
             8. Configurar Precisão Decimal\n\
             9. Configurar Limite de Números\n\
             10. Limpar Tela\n\
             11. Sair\n\
             Escolha uma opção (1-11): "
            .to_string(),
    }
}

//! Scenario tests for the read-eval loop, driven over in-memory streams.

use super::*;
use std::fs;
use std::path::Path;

/// Run a session feeding `input` lines, returning the produced output.
fn run_session(input: &str, mode: MenuMode) -> String {
    run_session_in(input, mode, Path::new("."))
}

fn run_session_in(input: &str, mode: MenuMode, export_dir: &Path) -> String {
    let mut output = Vec::new();
    let mut repl = Repl::new(
        input.as_bytes(),
        &mut output,
        Ledger::default(),
        mode,
        export_dir.to_path_buf(),
    );
    repl.run().expect("in-memory session should not fail");
    String::from_utf8(output).expect("output should be UTF-8")
}

#[test]
fn sum_scenario_prints_the_result_and_quits() {
    let output = run_session("1\n10 5 3\n11\n", MenuMode::Advanced);
    assert!(output.contains("Resultado da Soma: 18"));
    assert!(output.contains("Saindo da calculadora. Até mais!"));
}

#[test]
fn invalid_menu_choice_reports_and_continues() {
    let output = run_session("99\n11\n", MenuMode::Advanced);
    assert!(output.contains("Opção inválida! Escolha entre 1 e 11."));
    assert!(output.contains("Saindo da calculadora"));
}

#[test]
fn invalid_operand_line_reprompts_until_valid() {
    let output = run_session("1\nabc\n10 5\n11\n", MenuMode::Advanced);
    assert!(output.contains("Erro: 'abc' não é um número válido!"));
    assert!(output.contains("Resultado da Soma: 15"));
}

#[test]
fn empty_operand_line_reprompts() {
    let output = run_session("1\n\n2 3\n11\n", MenuMode::Advanced);
    assert!(output.contains("Erro: Nenhuma entrada fornecida!"));
    assert!(output.contains("Resultado da Soma: 5"));
}

#[test]
fn division_by_zero_is_reported_and_not_archived() {
    let output = run_session("4\n10 0 3\n5\n11\n", MenuMode::Advanced);
    assert!(output.contains("Erro: Divisão por zero não é permitida!"));
    // Option 5 right after: the history must still be empty.
    assert!(output.contains("Nenhuma operação realizada ainda."));
}

#[test]
fn history_lists_entries_with_indices() {
    let output = run_session("1\n1 2\n3\n2 3\n5\n11\n", MenuMode::Advanced);
    assert!(output.contains("=== Histórico de Operações ==="));
    assert!(output.contains("[0] Soma de [1, 2] = 3 ("));
    assert!(output.contains("[1] Multiplicação de [2, 3] = 6 ("));
}

#[test]
fn statistics_on_empty_history() {
    let output = run_session("6\n11\n", MenuMode::Advanced);
    assert!(output.contains("Nenhuma operação realizada para calcular estatísticas."));
}

#[test]
fn statistics_reports_mean_max_min() {
    let output = run_session("1\n4 6\n1\n8 12\n1\n10 20\n6\n11\n", MenuMode::Advanced);
    assert!(output.contains("=== Estatísticas ==="));
    assert!(output.contains("Média dos resultados: 20"));
    assert!(output.contains("Maior resultado: 30"));
    assert!(output.contains("Menor resultado: 10"));
}

#[test]
fn precision_prompt_rejects_out_of_range_then_accepts() {
    let output = run_session("8\n11\n3\n4\n10 3\n11\n", MenuMode::Advanced);
    assert!(output.contains("Erro: Precisão deve estar entre 0 e 10!"));
    assert!(output.contains("Precisão decimal ajustada para 3 casas."));
    assert!(output.contains("Resultado da Divisão: 3.333"));
}

#[test]
fn limit_prompt_enforces_the_new_limit() {
    // Lower the limit to 2, then try three operands.
    let output = run_session("9\n2\n1\n1 2 3\n1 2\n11\n", MenuMode::Advanced);
    assert!(output.contains("Limite de números ajustado para 2."));
    assert!(output.contains("Erro: Limite de 2 números excedido!"));
    assert!(output.contains("Resultado da Soma: 3"));
}

#[test]
fn limit_prompt_rejects_garbage_with_bound_message() {
    let output = run_session("9\nmuitos\n50\n11\n", MenuMode::Advanced);
    assert!(output.contains("Erro: Valor deve estar entre 2 e 100!"));
    assert!(output.contains("Limite de números ajustado para 50."));
}

#[test]
fn export_writes_the_file_into_the_export_dir() {
    let dir = std::env::temp_dir().join(format!("calcula_repl_export_{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();

    let output = run_session_in("1\n2 3\n7\n11\n", MenuMode::Advanced, &dir);
    assert!(output.contains("Histórico exportado para "));

    let exported: Vec<_> = fs::read_dir(&dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(exported.len(), 1, "exactly one export file expected");

    let content = fs::read_to_string(&exported[0]).unwrap();
    assert!(content.starts_with("Histórico de Operações\n\n"));
    assert!(content.contains("Soma de [2, 3] = 5 ("));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn export_on_empty_history_reports_without_writing() {
    let dir = std::env::temp_dir().join(format!("calcula_repl_noexport_{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();

    let output = run_session_in("7\n11\n", MenuMode::Advanced, &dir);
    assert!(output.contains("Nenhum histórico para exportar."));
    assert_eq!(fs::read_dir(&dir).unwrap().count(), 0);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn simple_mode_quits_on_five_and_hides_ledger_commands() {
    let output = run_session("7\n5\n", MenuMode::Simple);
    assert!(output.contains("Erro: Opção inválida! Por favor, digite um número entre 1 e 5."));
    assert!(output.contains("Saindo da calculadora. Até mais!"));
    assert!(output.contains("=== Calculadora ==="));
    assert!(!output.contains("Exportar"));
}

#[test]
fn simple_mode_runs_operations() {
    let output = run_session("2\n10 4\n5\n", MenuMode::Simple);
    assert!(output.contains("Resultado da Subtração: 6"));
}

#[test]
fn eof_at_the_menu_ends_the_session() {
    let output = run_session("", MenuMode::Advanced);
    assert!(output.contains("=== Calculadora Avançada ==="));
}

#[test]
fn eof_during_operand_entry_ends_the_session() {
    // The operand prompt gets EOF; the loop must not spin.
    let output = run_session("1\n", MenuMode::Advanced);
    assert!(output.contains("Digite os números separados por espaço"));
}

#[test]
fn operand_prompt_shows_the_current_limit() {
    let output = run_session("1\n1 2\n11\n", MenuMode::Advanced);
    assert!(output.contains("(máx. 10, ex: 10 5 3)"));
}

#[test]
fn clear_screen_emits_terminal_control_sequences() {
    let output = run_session("10\n11\n", MenuMode::Advanced);
    assert!(
        output.contains('\u{1b}'),
        "Limpar Tela should write escape sequences to the output stream"
    );
}

#[test]
fn ledger_accessor_reflects_the_session() {
    let mut output = Vec::new();
    let mut repl = Repl::new(
        "1\n10 5 3\n11\n".as_bytes(),
        &mut output,
        Ledger::default(),
        MenuMode::Advanced,
        PathBuf::from("."),
    );
    repl.run().unwrap();

    assert_eq!(repl.ledger().len(), 1);
    let entry = repl.ledger().entries().next().unwrap();
    assert_eq!(entry.operation_name(), "Soma");
    assert_eq!(entry.result(), 18.0);
}

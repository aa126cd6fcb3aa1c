//! End-to-end compiler scenarios, driven through the `nanoc` binary.
//!
//! Ground: the six scenarios spec.md §8 names explicitly, run here
//! through `assert_cmd` instead of asserted against in-process (so
//! the CLI's argument handling and exit code are covered too).

use assert_cmd::Command;
use std::fs;
use std::io::Write;

fn compile(source: &str) -> (String, i32) {
    let mut input = tempfile::NamedTempFile::new().unwrap();
    input.write_all(source.as_bytes()).unwrap();
    let output = tempfile::NamedTempFile::new().unwrap();

    let status = Command::cargo_bin("nanoc")
        .unwrap()
        .arg(input.path())
        .arg(output.path())
        .status()
        .unwrap();

    let asm = fs::read_to_string(output.path()).unwrap_or_default();
    (asm, status.code().unwrap_or(-1))
}

#[test]
fn empty_program_contains_only_prologue_and_epilogue() {
    let (asm, code) = compile("");
    assert_eq!(code, 0);
    assert!(asm.contains("push rbp"));
    assert!(asm.contains("xor eax, eax"));
    assert!(!asm.contains("add "));
    assert!(!asm.contains("sub rsp"));
}

#[test]
fn single_assignment_emits_the_expected_instruction_sequence() {
    let (asm, code) = compile("x = 42;");
    assert_eq!(code, 0);
    assert!(asm.contains("mov rax, 42"));
    assert!(asm.contains("sub rsp, 8"));
    assert!(asm.contains("mov [rbp-8], rax"));
}

#[test]
fn constant_folding_collapses_the_whole_expression_to_one_literal() {
    let (asm, code) = compile("x = 2 + 3 * 4;");
    assert_eq!(code, 0);
    assert!(asm.contains("mov rax, 14"));
    assert!(!asm.contains("add "));
    assert!(!asm.contains("imul"));
}

#[test]
fn strength_reduction_rewrites_multiply_by_eight_into_a_shift() {
    let (asm, code) = compile("x = y * 8;");
    assert_eq!(code, 0);
    assert!(asm.contains("shl rax, cl"));
    assert!(!asm.contains("imul"));
}

#[test]
fn dead_branch_is_eliminated_and_only_the_live_assignment_remains() {
    let (asm, code) = compile("if (0) { x = 1; } else { x = 2; }");
    assert_eq!(code, 0);
    assert!(asm.contains("mov rax, 2"));
    assert!(!asm.contains("mov rax, 1"));
    assert!(!asm.contains("cmp rax, 0"));
    assert!(!asm.contains("je "));
}

#[test]
fn loop_with_comparison_emits_labels_in_the_expected_order() {
    let (asm, code) = compile("i = 0; while (i < 10) { i = i + 1; }");
    assert_eq!(code, 0);
    assert!(asm.contains(".L0:"));
    assert!(asm.contains(".L1:"));
    assert!(asm.contains("setl al"));
    let start = asm.find(".L0:").unwrap();
    let cmp = asm.find("cmp rax, 0").unwrap();
    let jmp_back = asm.rfind("jmp .L0").unwrap();
    let end = asm.find(".L1:").unwrap();
    assert!(start < cmp);
    assert!(cmp < jmp_back);
    assert!(jmp_back < end);
}

#[test]
fn wrong_argument_count_exits_nonzero_with_a_usage_message() {
    let mut cmd = Command::cargo_bin("nanoc").unwrap();
    cmd.arg("only-one-arg");
    cmd.assert().failure();
}

#[test]
fn malformed_source_still_produces_output_but_exits_nonzero() {
    let (asm, code) = compile("x = ;");
    assert_ne!(code, 0);
    assert!(!asm.is_empty());
}

// Copyright (C) Brian G. Milnes 2025

//! Tests for argument extraction and placeholder substitution

use define_expand::{
    expand_invocation, rewrite_line, ExpandError, ExpansionContext, Invocation, RunCounter,
    SymbolDefinition,
};
use std::path::Path;

fn rewrite(
    line: &str,
    name: &str,
    expansion: &str,
    line_number: usize,
    file: &str,
    counter: &mut RunCounter,
) -> Result<String, ExpandError> {
    let def = SymbolDefinition::parse(expansion).unwrap();
    let at = line.find(name).unwrap();
    let context = ExpansionContext {
        line_number,
        file_path: Path::new(file),
    };
    rewrite_line(line, at, name, &def, &context, counter)
}

#[test]
fn test_invocation_parse_splits_arguments() {
    let inv = Invocation::parse("x = LOG(a, b ,c);", 4, "LOG").unwrap();
    assert_eq!(inv.macro_name, "LOG");
    assert_eq!(inv.actual_arguments, vec!["a", " b ", "c"]);
}

#[test]
fn test_invocation_empty_call_has_no_arguments() {
    let inv = Invocation::parse("ERR();", 0, "ERR").unwrap();
    assert!(inv.actual_arguments.is_empty());
    let inv = Invocation::parse("ERR(  );", 0, "ERR").unwrap();
    assert!(inv.actual_arguments.is_empty());
}

#[test]
fn test_defaulted_slots_use_context() {
    let mut counter = RunCounter::new();
    let out = rewrite(
        "LOG(\"hi\");",
        "LOG",
        "doLog(msg,__LINE__,__FILE__,__ARG0__)",
        5,
        "src/a.js",
        &mut counter,
    )
    .unwrap();
    assert_eq!(out, "doLog(\"hi\",5,'a.js','\"hi\"');");
    assert_eq!(counter.current(), 0);
}

#[test]
fn test_all_slots_defaulted_without_arguments() {
    let mut counter = RunCounter::new();
    let out = rewrite(
        "LOG();",
        "LOG",
        "doLog(__LINE__,__FILE__,__FILEPATH__)",
        12,
        "src/lib/a.js",
        &mut counter,
    )
    .unwrap();
    assert_eq!(out, "doLog(12,'a.js','src/lib/a.js');");
}

#[test]
fn test_counter_advances_per_substitution() {
    let mut counter = RunCounter::new();
    let mut outputs = Vec::new();
    for line in 1..=3 {
        outputs.push(rewrite("ERR();", "ERR", "fail(__INDEX__)", line, "a.js", &mut counter).unwrap());
    }
    assert_eq!(outputs, ["fail(0);", "fail(1);", "fail(2);"]);
    assert_eq!(counter.current(), 3);
}

#[test]
fn test_counter_untouched_for_supplied_slot() {
    let mut counter = RunCounter::new();
    let out = rewrite("ERR(42);", "ERR", "fail(__INDEX__)", 1, "a.js", &mut counter).unwrap();
    assert_eq!(out, "fail(42);");
    assert_eq!(counter.current(), 0);
}

#[test]
fn test_counter_left_to_right_within_template() {
    let mut counter = RunCounter::new();
    let out = rewrite("ID();", "ID", "pair(__INDEX__-__INDEX__,__INDEX__)", 1, "a.js", &mut counter)
        .unwrap();
    assert_eq!(out, "pair(0-1,2);");
}

#[test]
fn test_prefix_and_trailing_text_preserved() {
    let mut counter = RunCounter::new();
    let out = rewrite(
        "    if (ok) ASSERT(x > 0); // checked",
        "ASSERT",
        "check(cond,__INDEX__,__LINE__)",
        7,
        "a.js",
        &mut counter,
    )
    .unwrap();
    assert_eq!(out, "    if (ok) check(x > 0,0,7); // checked");
}

#[test]
fn test_unresolved_argument_placeholder_left_literal() {
    let mut counter = RunCounter::new();
    let out = rewrite("T(a);", "T", "t(x,__ARG0__,__ARG1__,__ARG3__)", 1, "a.js", &mut counter)
        .unwrap();
    assert_eq!(out, "t(a,'a',__ARG1__,__ARG3__);");
}

#[test]
fn test_substituted_values_not_rescanned() {
    let mut counter = RunCounter::new();
    let out = rewrite("T();", "T", "t(__FILE__)", 1, "__LINE__.js", &mut counter).unwrap();
    assert_eq!(out, "t('__LINE__.js');");
}

#[test]
fn test_too_many_arguments_is_arity_error() {
    let mut counter = RunCounter::new();
    let err = rewrite("LOG(a,b);", "LOG", "doLog(msg)", 3, "a.js", &mut counter).unwrap_err();
    match err.root() {
        ExpandError::Arity { symbol, actual, declared } => {
            assert_eq!(symbol, "LOG");
            assert_eq!(*actual, 2);
            assert_eq!(*declared, 1);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().contains("LOG(a,b);"));
}

#[test]
fn test_missing_parentheses_is_syntax_error() {
    let mut counter = RunCounter::new();
    let err = rewrite("x = LOG;", "LOG", "doLog(msg)", 1, "a.js", &mut counter).unwrap_err();
    assert!(matches!(err.root(), ExpandError::Syntax(_)));

    let err = rewrite("LOG(a;", "LOG", "doLog(msg)", 1, "a.js", &mut counter).unwrap_err();
    assert!(matches!(err.root(), ExpandError::Syntax(_)));
}

#[test]
fn test_expand_invocation_directly() {
    let def = SymbolDefinition::parse("doLog(msg,__LINE__)").unwrap();
    let inv = Invocation::parse("LOG(m)", 0, "LOG").unwrap();
    let context = ExpansionContext {
        line_number: 9,
        file_path: Path::new("b.ts"),
    };
    let mut counter = RunCounter::new();
    let out = expand_invocation(&inv, &def, &context, &mut counter).unwrap();
    assert_eq!(out, "doLog(m,9)");
}

#[test]
fn test_argument_list_opens_after_macro_name() {
    let inv = Invocation::parse("if (x) LOG(y);", 7, "LOG").unwrap();
    assert_eq!(inv.actual_arguments, vec!["y"]);

    let mut counter = RunCounter::new();
    let out = rewrite("if (x) LOG(y);", "LOG", "doLog(msg,__LINE__)", 2, "a.js", &mut counter).unwrap();
    assert_eq!(out, "if (x) doLog(y,2);");
}

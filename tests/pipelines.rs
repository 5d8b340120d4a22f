//! End-to-end scenarios chaining several operations.

mod common;
use common::init_tracing;

use anyhow::{anyhow, Context, Result};
use eagerseq::{
    chain, chunk, chunk_padded, dedup_by, drop_while, flat_map, for_each, map, reduce_with,
    repeat, scan_with, take, take_while, try_filter, try_map, try_reduce, try_scan, window, zip,
    zip_longest, ChunkOptions, SeqError, ZipOptions,
};

#[test]
fn test_take_while_map_take() {
    init_tracing();
    let words = ["foo", "bar", "baz", "foobar"];
    let short = take_while(words, |w, _| w.len() <= 3);
    let upper = map(short, |w, _| w.to_uppercase());
    assert_eq!(take(upper, 2), vec!["FOO", "BAR"]);
}

#[test]
fn test_generator_style_source() {
    init_tracing();
    let mut state = 1u64;
    let powers = std::iter::from_fn(move || {
        let current = state;
        state *= 2;
        Some(current)
    });
    let small = take_while(powers, |p, _| *p < 100);
    assert_eq!(small, vec![1, 2, 4, 8, 16, 32, 64]);
}

#[test]
fn test_running_word_lengths() {
    init_tracing();
    let lengths = scan_with(["foo", "bar", "baz"], 0usize, |acc, w, _| acc + w.len());
    assert_eq!(lengths, vec![3, 6, 9]);

    let total = reduce_with(lengths, 0usize, |acc, n, _| acc + n);
    assert_eq!(total, 18);
}

#[test]
fn test_chunk_then_zip_columns() -> Result<()> {
    init_tracing();
    let rows = chunk(1..=9, 3, ChunkOptions::strict())?;
    let columns = zip(rows, ZipOptions::strict())?;
    assert_eq!(columns, vec![vec![1, 4, 7], vec![2, 5, 8], vec![3, 6, 9]]);
    Ok(())
}

#[test]
fn test_window_moving_average() -> Result<()> {
    init_tracing();
    let readings = [2.0, 4.0, 6.0, 8.0];
    let averages = map(window(readings, 2)?, |w, _| w.iter().sum::<f64>() / w.len() as f64);
    assert_eq!(averages, vec![3.0, 5.0, 7.0]);
    Ok(())
}

#[test]
fn test_log_compaction_pipeline() {
    init_tracing();
    let lines = [
        "INFO start",
        "INFO start",
        "WARN disk",
        "WARN disk",
        "INFO start",
    ];
    let compact = dedup_by(lines, |a, b| a == b);
    assert_eq!(compact, vec!["INFO start", "WARN disk", "INFO start"]);

    let after_warn = drop_while(compact, |l, _| !l.starts_with("WARN"));
    assert_eq!(after_warn, vec!["WARN disk", "INFO start"]);
}

#[test]
fn test_chain_repeat_flat_map() {
    init_tracing();
    let joined = chain([repeat(0, 2), vec![1, 2], repeat(9, 1)]);
    assert_eq!(joined, vec![0, 0, 1, 2, 9]);

    let pairs = flat_map(joined, |x, i| if i % 2 == 0 { vec![x, x] } else { vec![] });
    assert_eq!(pairs, vec![0, 0, 1, 1, 9, 9]);
}

#[test]
fn test_absent_filled_variants() -> Result<()> {
    init_tracing();
    let padded = chunk_padded(["a", "b", "c"], 2)?;
    assert_eq!(padded[1], vec![Some("c"), None]);

    let rows = zip_longest([vec![1, 2], vec![3]]);
    assert_eq!(rows[1], vec![Some(2), None]);
    Ok(())
}

#[test]
fn test_for_each_collects_side_effects() {
    init_tracing();
    let mut log = Vec::new();
    for_each(["x", "y"], |s, i| log.push((i, s)));
    assert_eq!(log, vec![(0, "x"), (1, "y")]);
}

#[test]
fn test_fallible_parsing_pipeline() {
    init_tracing();
    let parsed: Result<Vec<i64>> = try_map(["3", "4", "5"], |s, i| {
        s.parse::<i64>()
            .with_context(|| format!("field {i} is not a number"))
    });
    let parsed = parsed.unwrap();
    assert_eq!(parsed, vec![3, 4, 5]);

    let failed: Result<Vec<i64>> = try_map(["3", "four"], |s, i| {
        s.parse::<i64>()
            .with_context(|| format!("field {i} is not a number"))
    });
    assert_eq!(failed.unwrap_err().to_string(), "field 1 is not a number");
}

#[test]
fn test_callback_errors_are_not_wrapped() {
    init_tracing();
    let result: Result<Vec<i32>> =
        try_filter([1, 2, 3], |x, _| if *x > 2 { Err(anyhow!("too big: {x}")) } else { Ok(true) });
    assert_eq!(result.unwrap_err().to_string(), "too big: 3");

    let scanned: Result<Vec<i32>> = try_scan([1, 2, 3], |acc, x, _| Ok(acc * 10 + x));
    assert_eq!(scanned.unwrap(), vec![1, 12, 123]);
}

#[test]
fn test_try_reduce_surfaces_empty_input_through_caller_error() {
    init_tracing();
    let result: Result<i32> = try_reduce(Vec::<i32>::new(), |a, b, _| Ok(a + b));
    let err = result.unwrap_err();
    assert_eq!(err.downcast_ref::<SeqError>(), Some(&SeqError::EmptyReduce));
}

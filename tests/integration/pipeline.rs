//! Streaming pipelines: file lines through iterator adapters, memoized
//! loaders, and composed formatting stages.

use std::cell::Cell;
use std::path::PathBuf;
use std::time::Duration;
use sundry::func::Memoized;
use sundry::fs::{WriteOptions, read_text_lines, safe_write_text};
use sundry::iter::{chunked, unique_everseen, windowed};
use tempfile::tempdir;

#[test]
fn test_log_level_summary_pipeline() {
    let temp = tempdir().unwrap();
    let log = temp.path().join("app.log");

    safe_write_text(
        &log,
        "INFO start\nWARN disk\nINFO tick\nERROR io\nWARN disk\nINFO tick\n",
        WriteOptions::default(),
    )
    .unwrap();

    let levels = read_text_lines(&log)
        .unwrap()
        .map(|line| {
            line.unwrap()
                .split_whitespace()
                .next()
                .unwrap_or_default()
                .to_string()
        });

    let distinct: Vec<String> = unique_everseen(levels).collect();
    assert_eq!(distinct, vec!["INFO", "WARN", "ERROR"]);
}

#[test]
fn test_moving_average_over_file_lines() {
    let temp = tempdir().unwrap();
    let series = temp.path().join("series.txt");
    safe_write_text(&series, "1\n2\n3\n4\n5\n", WriteOptions::default()).unwrap();

    let values = read_text_lines(&series)
        .unwrap()
        .map(|line| line.unwrap().parse::<f64>().unwrap());

    let averages: Vec<f64> = windowed(values, 3)
        .unwrap()
        .map(|window| window.iter().sum::<f64>() / window.len() as f64)
        .collect();

    assert_eq!(averages, vec![2.0, 3.0, 4.0]);
}

#[test]
fn test_batched_line_processing() {
    let temp = tempdir().unwrap();
    let queue = temp.path().join("queue.txt");
    let content: String = (1..=7).map(|i| format!("job-{i}\n")).collect();
    safe_write_text(&queue, &content, WriteOptions::default()).unwrap();

    let jobs = read_text_lines(&queue).unwrap().map(|line| line.unwrap());
    let batches: Vec<Vec<String>> = chunked(jobs, 3).unwrap().collect();

    assert_eq!(batches.len(), 3);
    assert_eq!(batches[0], vec!["job-1", "job-2", "job-3"]);
    assert_eq!(batches[2], vec!["job-7"]);
}

#[test]
fn test_memoized_loader_skips_disk_after_first_read() {
    let temp = tempdir().unwrap();
    let file = temp.path().join("blob.txt");
    safe_write_text(&file, "payload", WriteOptions::default()).unwrap();

    let reads = Cell::new(0);
    let mut loader = Memoized::new(|path: &PathBuf| {
        reads.set(reads.get() + 1);
        std::fs::read_to_string(path).unwrap()
    });

    assert_eq!(loader.call(file.clone()), "payload");

    // Even with the file gone, the cached content is served.
    std::fs::remove_file(&file).unwrap();
    assert_eq!(loader.call(file.clone()), "payload");
    assert_eq!(reads.get(), 1);
}

#[test]
fn test_memoized_loader_with_ttl_picks_up_changes() {
    let temp = tempdir().unwrap();
    let file = temp.path().join("mutable.txt");
    safe_write_text(&file, "first", WriteOptions::default()).unwrap();

    let mut loader = Memoized::with_ttl(
        |path: &PathBuf| std::fs::read_to_string(path).unwrap(),
        Duration::from_millis(30),
    );

    assert_eq!(loader.call(file.clone()), "first");

    safe_write_text(&file, "second", WriteOptions::default()).unwrap();
    // Within the TTL the stale content is still served.
    assert_eq!(loader.call(file.clone()), "first");

    std::thread::sleep(Duration::from_millis(60));
    assert_eq!(loader.call(file.clone()), "second");
}

#[test]
fn test_composed_stages_format_report() {
    let render = sundry::compose!(
        |lines: Vec<String>| lines.join("; "),
        |lines: Vec<String>| {
            lines
                .into_iter()
                .map(|line| line.to_uppercase())
                .collect::<Vec<_>>()
        },
    );

    let report = render(vec!["ok".to_string(), "degraded".to_string()]);
    assert_eq!(report, "OK; DEGRADED");
}

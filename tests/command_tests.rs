use fuzz_call_metrics::chart::BarChartConfig;
use fuzz_call_metrics::commands::{execute_plot, render_report, validate_args, PlotArgs};
use fuzz_call_metrics::parser::parse;
use pretty_assertions::assert_eq;
use std::io::Write;
use std::path::PathBuf;
use std::process::Command;
use tempfile::NamedTempFile;

#[test]
fn test_default_input_path() {
    let args = PlotArgs::default();
    assert_eq!(args.input, PathBuf::from("call-metrics.txt"));
    assert!(validate_args(&args).is_ok());
}

#[test]
fn test_validate_args_width_zero() {
    let args = PlotArgs {
        chart_config: BarChartConfig::new().with_width(0),
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_execute_plot_reads_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "foo:1|x").unwrap();
    writeln!(temp_file, "foo.zero:1|x").unwrap();

    let args = PlotArgs {
        input: temp_file.path().to_path_buf(),
        ..Default::default()
    };

    assert!(execute_plot(args).is_ok());
}

#[test]
fn test_execute_plot_tolerates_invalid_utf8() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"foo:1|x\nbar:\xff|y\nfoo:2|z\n").unwrap();

    let args = PlotArgs {
        input: temp_file.path().to_path_buf(),
        ..Default::default()
    };

    assert!(execute_plot(args).is_ok());
}

#[test]
fn test_execute_plot_missing_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let args = PlotArgs {
        input: temp_dir.path().join("does-not-exist.txt"),
        ..Default::default()
    };

    let err = execute_plot(args).unwrap_err();
    assert!(err.to_string().contains("Failed to read call metrics"));
}

#[test]
fn test_render_report_global_then_per_kind() {
    let state = parse("b:1|x\na:1|x\nb.zero:1|x\nb:1|x\n");
    let config = BarChartConfig::new().with_width(4).with_bar_char('*');

    let report = render_report(&state, &config);

    let expected = [
        "Fuzz test metrics (4 runs):",
        "",
        "a *    1 (25.00%)",
        "b **** 3 (75.00%)",
        "----------------------------------------",
        "b      **** 2 (66.67%)",
        "b.zero **   1 (33.33%)",
        "----------------------------------------",
        "a      **** 1 (100.00%)",
        "a.zero      0 (0.00%)",
    ]
    .join("\n");
    assert_eq!(report, expected);
}

#[test]
fn test_cli_missing_file_exits_nonzero() {
    let temp_dir = tempfile::tempdir().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_plot-metrics"))
        .current_dir(temp_dir.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_cli_prints_charts() {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "foo:1|x\nfoo:1|x\nbar:1|x\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_plot-metrics"))
        .arg(temp_file.path())
        .arg("--width")
        .arg("10")
        .output()
        .unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Fuzz test metrics (3 runs):"));
    assert!(stdout.contains("1 (33.33%)"));
    assert!(stdout.contains("2 (66.67%)"));
    assert!(stdout.contains("foo.zero"));
}

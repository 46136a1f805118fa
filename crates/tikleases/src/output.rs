//! Output formatting: table, JSON, YAML, plain.
//!
//! Renders data in the format selected by `--output`. Table uses `tabled`,
//! structured formats use serde, plain emits one identifier per line.

use std::io::{self, IsTerminal, Write};

use tabled::{Table, Tabled, settings::Style};

use crate::cli::{ColorMode, OutputFormat};

/// Determine whether color output should be enabled.
pub fn should_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
    }
}

// ── Render dispatchers ───────────────────────────────────────────────

/// Render a list of serde-serializable items in the chosen format.
///
/// - `table`: maps each item through `to_row` and builds a rounded table
/// - `json` / `json-compact`: serializes the original data via serde
/// - `yaml`: serializes via serde_yaml
/// - `plain`: calls `id_fn` on each item to emit one identifier per line
pub fn render_list<T, R>(
    format: OutputFormat,
    data: &[T],
    to_row: impl Fn(&T) -> R,
    id_fn: impl Fn(&T) -> String,
) -> String
where
    T: serde::Serialize,
    R: Tabled,
{
    match format {
        OutputFormat::Table => {
            let rows: Vec<R> = data.iter().map(to_row).collect();
            render_table(&rows)
        }
        OutputFormat::Json => render_json_pretty(data),
        OutputFormat::JsonCompact => render_json_compact(data),
        OutputFormat::Yaml => render_yaml(data),
        OutputFormat::Plain => data.iter().map(&id_fn).collect::<Vec<_>>().join("\n"),
    }
}

/// Print the rendered output to stdout, respecting quiet mode.
///
/// A closed pipe (`tikleases leases | head`) is not an error.
pub fn print_output(output: &str, quiet: bool) -> io::Result<()> {
    if quiet || output.is_empty() {
        return Ok(());
    }
    write_output(&mut io::stdout().lock(), output)
}

fn write_output(out: &mut impl Write, output: &str) -> io::Result<()> {
    match writeln!(out, "{output}") {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        result => result,
    }
}

/// Print a status line to stderr, respecting quiet mode.
pub fn print_status(message: &str, quiet: bool) {
    if !quiet {
        eprintln!("{message}");
    }
}

// ── Format-specific renderers ────────────────────────────────────────

fn render_table<R: Tabled>(rows: &[R]) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

/// Pretty-printed JSON.
fn render_json_pretty<T: serde::Serialize + ?Sized>(data: &T) -> String {
    serde_json::to_string_pretty(data).expect("serialization should not fail")
}

/// Compact single-line JSON.
fn render_json_compact<T: serde::Serialize + ?Sized>(data: &T) -> String {
    serde_json::to_string(data).expect("serialization should not fail")
}

/// YAML output.
fn render_yaml<T: serde::Serialize + ?Sized>(data: &T) -> String {
    serde_yaml::to_string(data).expect("serialization should not fail")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Tabled)]
    struct Row {
        #[tabled(rename = "Name")]
        name: String,
    }

    fn names() -> Vec<String> {
        vec!["vlan10".into(), "vlan20".into()]
    }

    fn render(format: OutputFormat) -> String {
        render_list(
            format,
            &names(),
            |n| Row { name: n.clone() },
            Clone::clone,
        )
    }

    #[test]
    fn plain_is_one_per_line() {
        assert_eq!(render(OutputFormat::Plain), "vlan10\nvlan20");
    }

    #[test]
    fn compact_json_is_single_line() {
        assert_eq!(render(OutputFormat::JsonCompact), r#"["vlan10","vlan20"]"#);
    }

    #[test]
    fn yaml_is_a_sequence() {
        assert_eq!(render(OutputFormat::Yaml), "- vlan10\n- vlan20\n");
    }

    #[test]
    fn table_has_header_and_rows() {
        let table = render(OutputFormat::Table);
        assert!(table.contains("Name"));
        assert!(table.contains("vlan10"));
        assert!(table.contains("vlan20"));
    }

    struct FailingWriter(io::ErrorKind);

    impl Write for FailingWriter {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(self.0.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_output_appends_newline() {
        let mut buf = Vec::new();
        write_output(&mut buf, "vlan10").expect("write to vec");
        assert_eq!(buf, b"vlan10\n");
    }

    #[test]
    fn closed_pipe_is_not_an_error() {
        let mut out = FailingWriter(io::ErrorKind::BrokenPipe);
        assert!(write_output(&mut out, "vlan10").is_ok());
    }

    #[test]
    fn other_write_errors_propagate() {
        let mut out = FailingWriter(io::ErrorKind::PermissionDenied);
        let err = write_output(&mut out, "vlan10").expect_err("must fail");
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
    }

    #[test]
    fn never_means_no_color() {
        assert!(!should_color(ColorMode::Never));
        assert!(should_color(ColorMode::Always));
    }
}

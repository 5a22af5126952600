//! Line patterns for zap console records and Go stack traces.
//!
//! Pure per-line helpers used by [`super::classify::Classifier`] to decide
//! whether a line is a zap record, a stack-trace function identifier, or an
//! indented `path:line` continuation. Each pattern is compiled once through
//! `Lazy` and reused for every line.

use once_cell::sync::Lazy;
use regex::Regex;

/// Zap console encoding:
/// `<timestamp><sep><LEVEL><sep><file:line><sep><message>[<sep><json-object>]`
/// where `<sep>` is a tab run or a run of two-or-more spaces.
static ZAP_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
          ^(?P<ts>\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(?:\.\d+)?(?:Z|[+-]\d{2}:?\d{2})?)
          (?:\t+|\x20{2,})
          (?P<level>[A-Za-z]+)
          (?:\t+|\x20{2,})
          (?P<caller>\S+:\d+)
          (?:\t+|\x20{2,})
          (?P<msg>.*?)
          (?:(?:\t+|\x20{2,})(?P<fields>\{.*\}))?
          $",
    )
    .expect("zap line pattern must compile")
});

/// Stack-trace function identifier with no leading whitespace, e.g.
/// `go.temporal.io/sdk/internal.(*baseWorker).runPoller.func1` or
/// `main.main()`.
static STACK_FUNC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
          ^[A-Za-z_][A-Za-z0-9_\-./@~]*
          (?:\.\(\*?[A-Za-z0-9_]+\))?
          (?:\.[A-Za-z0-9_]+)+
          (?:\(.*\))?
          $",
    )
    .expect("stack function pattern must compile")
});

/// Indented `path:line` continuation under a function identifier, e.g.
/// `\t/go/pkg/mod/go.temporal.io/sdk@v1.38.0/internal/worker.go:486 +0x1a8`.
static STACK_FILE_RE: Lazy<Regex> =
    Lazy::new(|| {
        Regex::new(r"^[\t ]+\S+:\d+(?:\s+\+0x[0-9a-fA-F]+)?\s*$")
            .expect("stack file pattern must compile")
    });

/// Borrowed view over the five zap columns.
#[derive(Debug)]
pub(crate) struct ZapCapture<'a> {
    pub timestamp: &'a str,
    pub level: &'a str,
    pub caller: &'a str,
    pub message: &'a str,
    pub fields: Option<&'a str>,
}

/// Match the zap console encoding and split out its columns.
pub(crate) fn match_zap_line(line: &str) -> Option<ZapCapture<'_>> {
    let caps = ZAP_LINE_RE.captures(line)?;
    Some(ZapCapture {
        timestamp: caps.name("ts")?.as_str(),
        level: caps.name("level")?.as_str(),
        caller: caps.name("caller")?.as_str(),
        message: caps.name("msg")?.as_str(),
        fields: caps.name("fields").map(|m| m.as_str()),
    })
}

/// Detect a bare stack-trace function-identifier line. Requires a
/// call/receiver parenthesis or a dotted package root before the first `/`
/// (`go.temporal.io/...`), so ordinary dotted words like `example.com` and
/// plain relative paths like `src/main.rs` are not swallowed.
pub(crate) fn is_stack_function_line(line: &str) -> bool {
    if line.starts_with([' ', '\t']) || line.contains('{') {
        return false;
    }
    (line.contains('(') || has_dotted_package_root(line)) && STACK_FUNC_RE.is_match(line)
}

/// True when the segment before the first `/` is domain-like (`go.uber.org`,
/// `github.com`), as Go import paths always are.
fn has_dotted_package_root(line: &str) -> bool {
    match line.find('/') {
        Some(idx) => line[..idx].contains('.'),
        None => false,
    }
}

/// Detect an indented `path:line` continuation. Only meaningful when the
/// previous line was part of a stack trace; the classifier gates on that.
pub(crate) fn is_stack_file_line(line: &str) -> bool {
    STACK_FILE_RE.is_match(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ─── Zap console pattern ─────────────────────────────────────

    #[test]
    fn test_zap_tab_separated_with_fields() {
        let line = "2025-12-10T08:36:15.591-0500\tINFO\treflect/value.go:581\tcreating cleaner\t{\"Namespace\": \"default\"}";
        let cap = match_zap_line(line).expect("should match zap encoding");
        assert_eq!(cap.timestamp, "2025-12-10T08:36:15.591-0500");
        assert_eq!(cap.level, "INFO");
        assert_eq!(cap.caller, "reflect/value.go:581");
        assert_eq!(cap.message, "creating cleaner");
        assert_eq!(cap.fields, Some("{\"Namespace\": \"default\"}"));
    }

    #[test]
    fn test_zap_space_separated() {
        let line = "2025-12-10T08:36:15.591-0500    INFO    file.go:1    message here    {\"key\": \"val\"}";
        let cap = match_zap_line(line).expect("multi-space separators should match");
        assert_eq!(cap.level, "INFO");
        assert_eq!(cap.caller, "file.go:1");
        assert_eq!(cap.message, "message here");
        assert_eq!(cap.fields, Some("{\"key\": \"val\"}"));
    }

    #[test]
    fn test_zap_without_trailing_fields() {
        let line = "2025-12-10T08:36:15.591-0500\tWARN\tutil.go:10\tno fields here";
        let cap = match_zap_line(line).expect("trailing JSON is optional");
        assert_eq!(cap.level, "WARN");
        assert_eq!(cap.message, "no fields here");
        assert_eq!(cap.fields, None);
    }

    #[test]
    fn test_zap_zulu_timestamp() {
        let line = "2025-12-10T08:36:15Z\tERROR\tapp.go:42\tsomething failed";
        assert!(match_zap_line(line).is_some());
    }

    #[test]
    fn test_zap_rejects_single_space_separator() {
        // One space between columns is ordinary prose, not the console encoding.
        assert!(match_zap_line("2025-12-10T08:36:15Z INFO file.go:1 message").is_none());
    }

    #[test]
    fn test_zap_rejects_non_timestamp_first_column() {
        assert!(match_zap_line("hello\tINFO\tfile.go:1\tmessage").is_none());
        assert!(match_zap_line("INFO: already formatted").is_none());
    }

    // ─── Stack-trace function identifier ─────────────────────────

    #[test]
    fn test_stack_function_with_receiver() {
        assert!(is_stack_function_line(
            "go.temporal.io/sdk/internal.(*baseWorker).runPoller.func1"
        ));
    }

    #[test]
    fn test_stack_function_plain_path() {
        assert!(is_stack_function_line(
            "go.temporal.io/sdk/internal.SomeFunction"
        ));
    }

    #[test]
    fn test_stack_function_with_call_args() {
        assert!(is_stack_function_line("main.main()"));
        assert!(is_stack_function_line(
            "github.com/foo/bar.Run(0xc000123456, 0x1)"
        ));
    }

    #[test]
    fn test_stack_function_rejects_prose() {
        assert!(!is_stack_function_line("plain text line"));
        assert!(!is_stack_function_line("INFO: already formatted"));
        assert!(!is_stack_function_line("hello.world"));
        assert!(!is_stack_function_line("example.com"));
    }

    #[test]
    fn test_stack_function_rejects_bare_relative_path() {
        // A path-looking token with no dotted package root is ordinary
        // text, and must not arm the continuation flag.
        assert!(!is_stack_function_line("src/main.rs"));
        assert!(!is_stack_function_line("target/debug/build.rs"));
    }

    #[test]
    fn test_stack_function_rejects_indented_or_braced() {
        assert!(!is_stack_function_line("  go.temporal.io/sdk.Run"));
        assert!(!is_stack_function_line("pkg/path.Fn{\"x\"}"));
    }

    // ─── Stack-trace file:line continuation ──────────────────────

    #[test]
    fn test_stack_file_tab_indented() {
        assert!(is_stack_file_line(
            "\t/Users/dan/go/pkg/mod/go.temporal.io/sdk@v1.38.0/internal/internal_worker_base.go:486"
        ));
    }

    #[test]
    fn test_stack_file_space_indented() {
        assert!(is_stack_file_line(
            "        /Users/dan/go/pkg/mod/something.go:123"
        ));
    }

    #[test]
    fn test_stack_file_with_frame_offset() {
        assert!(is_stack_file_line("\t/path/to/worker.go:486 +0x1a8"));
    }

    #[test]
    fn test_stack_file_rejects_unindented() {
        assert!(!is_stack_file_line("/path/to/worker.go:486"));
    }

    #[test]
    fn test_stack_file_rejects_prose() {
        assert!(!is_stack_file_line("    indented text without a line number"));
    }
}

use ariadne::Source;
use binexp_attrs::ErrorKind;
use binexp_error::{Error, ErrorKind};

#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot use `{}` here", symbol),
    labels = ["this token"],
    help = "remove it",
)]
struct BadToken {
    symbol: String,
}

#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(message = "nothing to see", labels = ["here"])]
struct Unlocated;

/// Renders the report of the error into a plain string, with all color codes removed.
fn render(error: &Error, source: &str) -> String {
    let mut buf = Vec::new();
    error.build_report("input")
        .write(("input", Source::from(source)), &mut buf)
        .unwrap();
    String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap()
}

#[test]
fn report_contains_message_and_help() {
    let error = Error::new(vec![2..4], BadToken { symbol: "++".to_string() });
    let report = render(&error, "+ ++ 1");

    assert!(report.contains("cannot use `++` here"));
    assert!(report.contains("this token"));
    assert!(report.contains("remove it"));
}

#[test]
fn report_without_spans() {
    let error = Error::new(vec![], Unlocated);
    let report = render(&error, "");

    assert!(report.contains("nothing to see"));
}

#[test]
fn downcast_kind() {
    let error = Error::new(vec![0..1], Unlocated);
    assert!(error.is::<Unlocated>());
    assert!(!error.is::<BadToken>());
    assert_eq!(error.downcast_ref::<Unlocated>(), Some(&Unlocated));
}

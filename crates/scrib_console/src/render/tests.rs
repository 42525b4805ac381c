use super::*;
use pretty_assertions::assert_eq;
use scrib_highlight::Highlighter;

fn doc(text: &str) -> Document {
    Document::from_text(Highlighter::new(), text)
}

#[test]
fn plain_text_is_unchanged() {
    assert_eq!(render_ansi(&doc("abc\nxyz"), &ColorScheme::default()), "abc\nxyz\n");
}

#[test]
fn keyword_is_bold_and_colored() {
    let rendered = render_ansi(&doc("pass x"), &ColorScheme::default());
    assert_eq!(rendered, "\x1b[1;38;2;0;0;127mpass\x1b[0m x\n");
}

#[test]
fn comment_is_italic() {
    let rendered = render_ansi(&doc("# hi"), &ColorScheme::default());
    assert_eq!(rendered, "\x1b[3;38;2;160;160;160m# hi\x1b[0m\n");
}

#[test]
fn adjacent_runs_are_painted_separately() {
    let rendered = render_ansi(&doc("1+2"), &ColorScheme::default());
    let number = "\x1b[38;2;255;170;0m";
    let sign = "\x1b[38;2;170;0;255m";
    assert_eq!(
        rendered,
        format!("{number}1{RESET}{sign}+{RESET}{number}2{RESET}\n")
    );
}

#[test]
fn span_dump_marks_string_continuation() {
    let dumped = render_spans(&doc("s = \"\"\"a\nb\"\"\" # c"));
    assert_eq!(
        dumped,
        "0: [operator 2..3, string 4..8]\"\"\"\n\
         1: \"\"\"[string 0..4, comment 5..8]\n"
    );
}

#[test]
fn span_dump_of_empty_document() {
    assert_eq!(render_spans(&doc("")), "0: []\n");
}

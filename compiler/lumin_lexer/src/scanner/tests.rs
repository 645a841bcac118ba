use super::*;
use crate::tokenize;
use pretty_assertions::assert_eq;

/// Helper: tokenize and return `(kind, text)` pairs.
fn lex(source: &str) -> Vec<(TokenKind, String)> {
    tokenize(source)
        .unwrap()
        .into_iter()
        .map(|t| (t.kind, t.text))
        .collect()
}

/// Helper: tokenize and return kinds only.
fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).into_iter().map(|(kind, _)| kind).collect()
}

fn concat(source: &str) -> String {
    tokenize(source).unwrap().into_iter().map(|t| t.text).collect()
}

use TokenKind::{Comment, LParen, RParen, Space, String as Str, Symbol, Word};

// === Classification ===

#[test]
fn empty_source_has_no_tokens() {
    assert!(tokenize("").unwrap().is_empty());
}

#[test]
fn local_assignment() {
    assert_eq!(
        kinds("local x = 10"),
        vec![Word, Space, Word, Space, Symbol, Space, Word]
    );
}

#[test]
fn whitespace_run_is_one_token() {
    assert_eq!(lex(" \t\r\n\x0b\x0c"), vec![(Space, " \t\r\n\x0b\x0c".into())]);
}

#[test]
fn parens_have_their_own_kinds() {
    assert_eq!(kinds("f(x)"), vec![Word, LParen, Word, RParen]);
}

#[test]
fn numbers_are_word_runs() {
    assert_eq!(
        lex("1.5"),
        vec![(Word, "1".into()), (Symbol, ".".into()), (Word, "5".into())]
    );
}

#[test]
fn multi_char_operators_are_single_symbols() {
    assert_eq!(kinds("a..b"), vec![Word, Symbol, Symbol, Word]);
    assert_eq!(kinds("a~=b"), vec![Word, Symbol, Symbol, Word]);
}

#[test]
fn single_minus_is_a_symbol() {
    assert_eq!(kinds("a - b"), vec![Word, Space, Symbol, Space, Word]);
}

// === Comments ===

#[test]
fn line_comment_stops_before_newline() {
    assert_eq!(
        lex("-- hi\nx"),
        vec![
            (Comment, "-- hi".into()),
            (Space, "\n".into()),
            (Word, "x".into()),
        ]
    );
}

#[test]
fn block_comment_spans_lines() {
    assert_eq!(
        lex("--[[ a\nb ]]x"),
        vec![(Comment, "--[[ a\nb ]]".into()), (Word, "x".into())]
    );
}

#[test]
fn leveled_block_comment_ignores_lower_closers() {
    assert_eq!(
        lex("--[==[ ]] ]=] ]==]"),
        vec![(Comment, "--[==[ ]] ]=] ]==]".into())]
    );
}

#[test]
fn broken_long_bracket_falls_back_to_line_comment() {
    assert_eq!(
        lex("--[= not long\n"),
        vec![(Comment, "--[= not long".into()), (Space, "\n".into())]
    );
}

#[test]
fn sentinel_comments_are_single_tokens() {
    assert_eq!(
        lex("--[[minify-delete]]--[[/minify-delete]]"),
        vec![
            (Comment, "--[[minify-delete]]".into()),
            (Comment, "--[[/minify-delete]]".into()),
        ]
    );
}

#[test]
fn unterminated_block_comment_is_an_error() {
    assert_eq!(
        tokenize("x --[[ never closed"),
        Err(LexError::UnterminatedComment { position: 2 })
    );
}

#[test]
fn shebang_only_at_start() {
    assert_eq!(
        lex("#!/usr/bin/lua\nx"),
        vec![
            (Comment, "#!/usr/bin/lua".into()),
            (Space, "\n".into()),
            (Word, "x".into()),
        ]
    );
    assert_eq!(kinds("x#!"), vec![Word, Symbol, Symbol]);
}

// === Strings ===

#[test]
fn double_and_single_quoted_strings() {
    assert_eq!(
        lex(r#""a" 'b'"#),
        vec![(Str, "\"a\"".into()), (Space, " ".into()), (Str, "'b'".into())]
    );
}

#[test]
fn other_quote_inside_string_does_not_terminate() {
    assert_eq!(lex(r#""it's""#), vec![(Str, r#""it's""#.into())]);
}

#[test]
fn escaped_quote_does_not_terminate() {
    // "a\"b"
    assert_eq!(lex(r#""a\"b""#), vec![(Str, r#""a\"b""#.into())]);
}

#[test]
fn escaped_backslash_then_quote_terminates() {
    // "a\\" followed by x: two backslashes, so the quote closes the string
    assert_eq!(
        lex(r#""a\\"x"#),
        vec![(Str, r#""a\\""#.into()), (Word, "x".into())]
    );
}

#[test]
fn three_backslashes_escape_the_quote() {
    // "a\\\"b" is one literal
    assert_eq!(lex(r#""a\\\"b""#), vec![(Str, r#""a\\\"b""#.into())]);
}

#[test]
fn block_string() {
    assert_eq!(
        lex("[[a\n\"b]]"),
        vec![(Str, "[[a\n\"b]]".into())]
    );
    assert_eq!(lex("[=[]]]=]"), vec![(Str, "[=[]]]=]".into())]);
}

#[test]
fn lone_bracket_is_symbol() {
    assert_eq!(kinds("t[1]"), vec![Word, Symbol, Word, Symbol]);
    assert_eq!(kinds("t[=x"), vec![Word, Symbol, Symbol, Word]);
}

#[test]
fn unterminated_strings() {
    assert_eq!(
        tokenize("x = \"abc"),
        Err(LexError::UnterminatedString { position: 4 })
    );
    assert_eq!(
        tokenize("'abc\\'"),
        Err(LexError::UnterminatedString { position: 0 })
    );
    assert_eq!(
        tokenize("[[abc]"),
        Err(LexError::UnterminatedString { position: 0 })
    );
}

// === Errors ===

#[test]
fn unexpected_non_ascii_character() {
    assert_eq!(
        tokenize("x = é"),
        Err(LexError::UnexpectedCharacter {
            character: 'é',
            position: 4,
        })
    );
}

#[test]
fn unexpected_control_character() {
    let err = tokenize("a\u{1}").unwrap_err();
    assert_eq!(err.position(), 1);
    assert!(err.to_string().contains("unexpected character"));
}

#[test]
fn non_ascii_inside_strings_and_comments_is_fine() {
    assert_eq!(kinds("\"é\" -- ü"), vec![Str, Space, Comment]);
}

// === Lossless ===

#[test]
fn concatenation_reproduces_source() {
    let sources = [
        "",
        "local t = { 1, 2, [\"k\"] = 'v' }\nreturn t\n",
        "#!/bin/lua\nprint(\"a\\\\\") -- done",
        "--[[minify-delete]] x = 1 --[[/minify-delete]]",
        "s = [==[ ]] ]==] .. 'x'",
    ];
    for source in sources {
        assert_eq!(concat(source), source);
    }
}

mod proptest_lossless {
    use super::concat;
    use crate::{tokenize, TokenKind};
    use proptest::prelude::*;

    /// Source fragments that always tokenize, separated so they cannot
    /// merge into something else.
    fn fragment() -> impl Strategy<Value = String> {
        prop_oneof![
            "[a-zA-Z_][a-zA-Z0-9_]{0,8}",
            "[0-9]{1,4}",
            "[ \t\n]{1,3}",
            "[-+*/%^#=<>~;:,.{}()]",
            "\"[a-z ]{0,6}\"",
            "'[a-z ]{0,6}'",
            "--[a-z ]{0,8}\n",
            "--\\[\\[[a-z \n]{0,8}\\]\\]",
            "\\[\\[[a-z \n]{0,8}\\]\\]",
        ]
    }

    proptest! {
        #[test]
        fn tokens_concatenate_to_source(parts in proptest::collection::vec(fragment(), 0..24)) {
            let source: String = parts.join(" ");
            prop_assert_eq!(concat(&source), source);
        }

        #[test]
        fn backslash_parity_decides_termination(run in 0usize..9) {
            let source = format!("\"a{}\"", "\\".repeat(run));
            let result = tokenize(&source);
            if run % 2 == 0 {
                let tokens = result.unwrap();
                prop_assert_eq!(tokens.len(), 1);
                prop_assert_eq!(tokens[0].kind, TokenKind::String);
            } else {
                prop_assert!(result.is_err());
            }
        }
    }
}

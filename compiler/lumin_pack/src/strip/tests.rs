use super::*;
use lumin_lexer::{tokenize, TokenKind};
use pretty_assertions::assert_eq;

#[test]
fn removes_space_and_comments_only() {
    let tokens = tokenize("#!/bin/lua\nlocal x = 1 -- one\n--[[ block ]]return x").unwrap();
    let texts: Vec<String> = strip(tokens).into_iter().map(|t| t.text).collect();
    assert_eq!(texts, vec!["local", "x", "=", "1", "return", "x"]);
}

#[test]
fn keeps_strings_that_look_like_comments() {
    let stripped = strip(tokenize("s = \"-- not a comment\"").unwrap());
    assert_eq!(stripped.last().map(|t| t.kind), Some(TokenKind::String));
}

#[test]
fn leveled_comments_are_trivia() {
    let stripped = strip(tokenize("a --[==[ ]] ]==] b").unwrap());
    assert_eq!(stripped.len(), 2);
}

#[test]
fn empty_in_empty_out() {
    assert!(strip(Vec::new()).is_empty());
}

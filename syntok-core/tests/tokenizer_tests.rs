//! Token assembly tests: prefixes, offsets and values

use syntok_core::{split, tokenize, Token};

fn tokens(text: &str) -> Vec<(&str, usize, &str)> {
    split(text)
        .into_iter()
        .map(|token| (token.prefix, token.offset, token.value))
        .collect()
}

#[test]
fn test_basic() {
    assert_eq!(tokens("text"), vec![("", 0, "text")]);
}

#[test]
fn test_split_two_tokens() {
    assert_eq!(
        tokens("token1 token2"),
        vec![("", 0, "token1"), (" ", 7, "token2")]
    );
    assert_eq!(
        tokens("token1  token2"),
        vec![("", 0, "token1"), ("  ", 8, "token2")]
    );
}

#[test]
fn test_capture_tail_spaces() {
    assert_eq!(tokens(" text "), vec![(" ", 1, "text"), (" ", 6, "")]);
}

#[test]
fn test_newline_aware() {
    assert_eq!(
        tokens("token1\r\ntoken2"),
        vec![("", 0, "token1"), ("\r\n", 8, "token2")]
    );
}

#[test]
fn test_unicode_space_aware() {
    assert_eq!(
        tokens("token1\u{00A0}token2"),
        vec![("", 0, "token1"), ("\u{00A0}", 8, "token2")]
    );
    assert_eq!(
        tokens("token1\u{2028}token2"),
        vec![("", 0, "token1"), ("\u{2028}", 9, "token2")]
    );
}

#[test]
fn test_split_and_preserve_punctuation() {
    let text = "This, that, and him!";
    assert_eq!(
        tokens(text),
        vec![
            ("", 0, "This"),
            ("", "This".len(), ","),
            (" ", "This, ".len(), "that"),
            ("", "This, that".len(), ","),
            (" ", "This, that, ".len(), "and"),
            (" ", "This, that, and ".len(), "him"),
            ("", "This, that, and him".len(), "!"),
        ]
    );
}

#[test]
fn test_preserve_tokens_with_inner_punctuation() {
    assert_eq!(
        tokens("31.12.2000 23:59:59"),
        vec![("", 0, "31.12.2000"), (" ", 11, "23:59:59")]
    );
}

#[test]
fn test_split_camel_case() {
    assert_eq!(tokens("camelCase"), vec![("", 0, "camel"), ("", 5, "Case")]);
}

#[test]
fn test_hyphens_move_into_prefix() {
    assert_eq!(tokens("hyphen-ate"), vec![("", 0, "hyphen"), ("-", 7, "ate")]);
    assert_eq!(
        tokens("10-11-2012 alpha-1"),
        vec![("", 0, "10-11-2012"), (" ", 11, "alpha"), ("-", 17, "1")]
    );
    assert_eq!(
        tokens("this_that 123_456"),
        vec![("", 0, "this"), ("_", 5, "that"), (" ", 10, "123_456")]
    );
}

#[test]
fn test_split_inner_sentence_markers() {
    for marker in [".", "!", "?"] {
        let text = format!("last{marker}First");
        assert_eq!(
            tokens(&text),
            vec![("", 0, "last"), ("", 4, marker), ("", 5, "First")]
        );
    }
}

#[test]
fn test_split_around_open_close_punctuation() {
    assert_eq!(
        tokens("this(that)there"),
        vec![
            ("", 0, "this"),
            ("", 4, "("),
            ("", 5, "that"),
            ("", 9, ")"),
            ("", 10, "there"),
        ]
    );
}

#[test]
fn test_split_apostrophes_in_text() {
    assert_eq!(
        tokens("He's 'tis 1'234'567 10's"),
        vec![
            ("", 0, "He"),
            ("", 2, "'s"),
            (" ", 5, "'"),
            ("", 6, "tis"),
            (" ", 10, "1'234'567"),
            (" ", 20, "10"),
            ("", 22, "'s"),
        ]
    );
}

#[test]
fn test_correctly_split_single_quotes() {
    assert_eq!(
        tokens("Here's it: 'They said so!'"),
        vec![
            ("", 0, "Here"),
            ("", 4, "'s"),
            (" ", 7, "it"),
            ("", 9, ":"),
            (" ", 11, "'"),
            ("", 12, "They"),
            (" ", 17, "said"),
            (" ", 22, "so"),
            ("", 24, "!"),
            ("", 25, "'"),
        ]
    );
}

#[test]
fn test_terminal_before_space_joins_next_prefix() {
    assert_eq!(
        tokens("Hello World! It's me."),
        vec![
            ("", 0, "Hello"),
            (" ", 6, "World"),
            ("! ", 13, "It"),
            ("", 15, "'s"),
            (" ", 18, "me"),
            ("", 20, "."),
        ]
    );
}

#[test]
fn test_negation_tokens() {
    assert_eq!(tokens("Isn't"), vec![("", 0, "Is"), ("", 2, "n't")]);
}

#[test]
fn test_trailing_token_only_for_separator_tail() {
    let all = split("word");
    assert!(!all.last().unwrap().is_trailing());

    let all = split("word \n");
    let last = all.last().unwrap();
    assert!(last.is_trailing());
    assert_eq!(*last, Token::new(" \n", 6, ""));
}

#[test]
fn test_tokens_reconstruct_text() {
    let text = "  Mr. O'Neil's e-mail: 1'000 (approx.) -- won't\tfit!  ";
    let rebuilt: String = tokenize(text).map(|token| token.to_string()).collect();
    assert_eq!(rebuilt, text);
}

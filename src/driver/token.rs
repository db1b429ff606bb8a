use nom::branch::alt;
use nom::bytes::complete::{tag, take_till, take_till1, take_while};
use nom::combinator::{iterator, map, recognize};
use nom::sequence::{pair, preceded};
use nom::IResult;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token<'a> {
    Quit(&'a str),
    Word(&'a str),
}

fn is_space(c: char) -> bool {
    c.is_whitespace()
}

fn word(input: &str) -> IResult<&str, Token> {
    map(take_till1(is_space), Token::Word)(input)
}

/// Splits one input line into tokens. A token that merely starts with
/// `sentinel` still counts as the sentinel.
pub fn tokens<'a>(line: &'a str, sentinel: &str) -> Vec<Token<'a>> {
    let quit = |input: &'a str| -> IResult<&'a str, Token<'a>> {
        map(recognize(pair(tag(sentinel), take_till(is_space))), Token::Quit)(input)
    };

    // separators and token boundaries share `is_space`, so only trailing
    // whitespace can stop the iterator
    let mut it = iterator(line, preceded(take_while(is_space), alt((quit, word))));
    let parsed = (&mut it).collect();
    parsed
}

#[cfg(test)]
mod tests {
    use crate::driver::token::tokens;
    use crate::driver::token::Token::*;

    #[test]
    fn splits_on_whitespace() {
        assert_eq!(tokens("  cat car\tdog \n", ":q"),
                   vec![Word("cat"), Word("car"), Word("dog")]);
    }

    #[test]
    fn recognizes_sentinel_prefix() {
        assert_eq!(tokens("cat :q dog", ":q"),
                   vec![Word("cat"), Quit(":q"), Word("dog")]);
        assert_eq!(tokens(":quit", ":q"), vec![Quit(":quit")]);
        assert_eq!(tokens("q:", ":q"), vec![Word("q:")]);
    }

    #[test]
    fn custom_sentinel() {
        assert_eq!(tokens("exit done", "done"),
                   vec![Word("exit"), Quit("done")]);
    }

    #[test]
    fn blank_lines_have_no_tokens() {
        assert!(tokens("", ":q").is_empty());
        assert!(tokens("   \r\n", ":q").is_empty());
    }

    #[test]
    fn any_unicode_whitespace_separates() {
        assert_eq!(tokens("cat\x0cdog\u{a0}x\x0bb\u{2003}:q", ":q"),
                   vec![Word("cat"), Word("dog"), Word("x"), Word("b"), Quit(":q")]);
        assert!(tokens("\u{a0}\x0c", ":q").is_empty());
    }

    #[test]
    fn keeps_invalid_words_for_the_store_to_reject() {
        assert_eq!(tokens("Cat d0g", ":q"),
                   vec![Word("Cat"), Word("d0g")]);
    }
}

//! The ordered rule table.
//!
//! Each rule recognises a prefix of the remaining input. The scanner tries
//! them top to bottom and takes the first hit, so the order here is the
//! language's tie-breaking policy: `==` must come before `=`, `>=` before
//! `>`, and so on. Reserved words carry no trailing word boundary (except
//! those that demand whitespace), which means `elsewhere` scans as `else`
//! followed by `where`.

use quill_ir::TokenType;

/// How a rule matches the start of the remaining input.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Pattern {
    /// A single `\n`.
    Newline,
    /// One whitespace character other than `\n`.
    Whitespace,
    /// `#` to the end of the line, newline excluded.
    Comment,
    /// A fixed spelling, optionally requiring (but not consuming) a
    /// following whitespace character.
    Word {
        text: &'static str,
        needs_whitespace: bool,
    },
    /// A fixed operator or punctuation spelling.
    Symbol(&'static str),
    /// `"` up to the next `"` on the same line.
    StringConstant,
    /// One or more ASCII digits.
    IntConstant,
    /// One or more ASCII letters.
    Identifier,
}

impl Pattern {
    /// Length in bytes of the match at the start of `rest`, if any.
    pub(crate) fn match_prefix(self, rest: &str) -> Option<usize> {
        let len = match self {
            Pattern::Newline => usize::from(rest.starts_with('\n')),
            Pattern::Whitespace => rest
                .chars()
                .next()
                .filter(|&c| c != '\n' && c.is_whitespace())
                .map_or(0, char::len_utf8),
            Pattern::Comment => {
                if rest.starts_with('#') {
                    rest.find('\n').unwrap_or(rest.len())
                } else {
                    0
                }
            }
            Pattern::Word {
                text,
                needs_whitespace,
            } => {
                let after = rest.strip_prefix(text)?;
                if needs_whitespace && !after.chars().next().is_some_and(char::is_whitespace) {
                    return None;
                }
                text.len()
            }
            Pattern::Symbol(text) => {
                if rest.starts_with(text) {
                    text.len()
                } else {
                    0
                }
            }
            Pattern::StringConstant => {
                let body = rest.strip_prefix('"')?;
                let end = body.find(|c: char| c == '"' || c == '\n')?;
                if body[end..].starts_with('"') {
                    end + 2
                } else {
                    0
                }
            }
            Pattern::IntConstant => rest.bytes().take_while(u8::is_ascii_digit).count(),
            Pattern::Identifier => rest.bytes().take_while(u8::is_ascii_alphabetic).count(),
        };
        (len > 0).then_some(len)
    }
}

/// One entry of the rule table.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Rule {
    pub(crate) token_type: TokenType,
    pub(crate) pattern: Pattern,
}

const fn word(token_type: TokenType, text: &'static str) -> Rule {
    Rule {
        token_type,
        pattern: Pattern::Word {
            text,
            needs_whitespace: false,
        },
    }
}

const fn type_word(token_type: TokenType, text: &'static str) -> Rule {
    Rule {
        token_type,
        pattern: Pattern::Word {
            text,
            needs_whitespace: true,
        },
    }
}

const fn symbol(token_type: TokenType, text: &'static str) -> Rule {
    Rule {
        token_type,
        pattern: Pattern::Symbol(text),
    }
}

const fn rule(token_type: TokenType, pattern: Pattern) -> Rule {
    Rule {
        token_type,
        pattern,
    }
}

/// Every rule, in match priority order.
pub(crate) const RULES: &[Rule] = &[
    rule(TokenType::Newline, Pattern::Newline),
    rule(TokenType::Whitespace, Pattern::Whitespace),
    rule(TokenType::Comment, Pattern::Comment),
    // Reserved words
    type_word(TokenType::BoolType, "bool"),
    word(TokenType::Else, "else"),
    word(TokenType::False, "false"),
    word(TokenType::For, "for"),
    type_word(TokenType::Fun, "fun"),
    word(TokenType::If, "if"),
    type_word(TokenType::IntType, "int"),
    word(TokenType::Null, "null"),
    type_word(TokenType::Return, "return"),
    type_word(TokenType::StrType, "str"),
    word(TokenType::True, "true"),
    word(TokenType::While, "while"),
    // Operators and punctuation
    symbol(TokenType::And, "&&"),
    symbol(TokenType::Eq, "=="),
    symbol(TokenType::Assign, "="),
    symbol(TokenType::Comma, ","),
    symbol(TokenType::Div, "/"),
    symbol(TokenType::Dot, "."),
    symbol(TokenType::Geq, ">="),
    symbol(TokenType::Gt, ">"),
    symbol(TokenType::LeftBrace, "{"),
    symbol(TokenType::Leq, "<="),
    symbol(TokenType::LeftParen, "("),
    symbol(TokenType::Lt, "<"),
    symbol(TokenType::Minus, "-"),
    symbol(TokenType::Mod, "%"),
    symbol(TokenType::Mult, "*"),
    symbol(TokenType::Neq, "!="),
    symbol(TokenType::Not, "!"),
    symbol(TokenType::Or, "||"),
    symbol(TokenType::Plus, "+"),
    symbol(TokenType::RightBrace, "}"),
    symbol(TokenType::RightParen, ")"),
    // Constants
    rule(TokenType::StringConstant, Pattern::StringConstant),
    rule(TokenType::IntConstant, Pattern::IntConstant),
    rule(TokenType::Id, Pattern::Identifier),
];

/// First rule matching the start of `rest`, with the match length.
pub(crate) fn first_match(rest: &str) -> Option<(TokenType, usize)> {
    RULES.iter().find_map(|rule| {
        rule.pattern
            .match_prefix(rest)
            .map(|len| (rule.token_type, len))
    })
}

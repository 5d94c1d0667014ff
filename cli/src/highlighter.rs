use exprs_core::parser::{Lexer, Token};
use nu_ansi_term::{Color, Style};
use reedline::StyledText;

/// Colors input by token kind, using the same lexer as the evaluator.
pub struct Highlighter;

fn style_of(token: &Token<'_>) -> Style {
    let fg = match token {
        Token::Int(_) | Token::Float(_) => Color::Cyan,
        Token::Str(_) => Color::Green,
        Token::Unterminated => Color::Red,
        Token::LParen | Token::RParen => Color::DarkGray,
        _ => Color::White,
    };
    Style::new().fg(fg)
}

impl reedline::Highlighter for Highlighter {
    fn highlight(&self, line: &str, _: usize) -> StyledText {
        let mut output = StyledText::new();
        let plain = Style::new().fg(Color::White);
        let mut curr_end = 0;

        for token in Lexer::new(line) {
            let (style, span) = match token {
                Ok(spanned) => (style_of(&spanned.token), spanned.span),
                Err((_, span)) => (Style::new().fg(Color::Red).underline(), span),
            };
            let range = span.0;
            if range.start > curr_end {
                output.push((plain, line[curr_end..range.start].to_string()));
            }
            output.push((style, line[range.clone()].to_string()));
            curr_end = range.end;
        }

        if curr_end < line.len() {
            output.push((plain, line[curr_end..].to_string()));
        }

        output
    }
}

use crate::lexer::tokens::TokenKind;

#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum BindingPower {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    Call,
}

/// Rules for a token that starts an expression (null denotation).
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum NudRule {
    Identifier,
    Integer,
    Boolean,
    Grouping,
    Prefix,
    If,
    Function,
}

/// Rules for a token that continues an expression (left denotation).
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum LedRule {
    Binary,
    Call,
}

// The matches below are exhaustive: every TokenKind is classified here.

pub fn nud_rule(kind: TokenKind) -> Option<NudRule> {
    match kind {
        TokenKind::Identifier => Some(NudRule::Identifier),
        TokenKind::Number => Some(NudRule::Integer),
        TokenKind::True | TokenKind::False => Some(NudRule::Boolean),
        TokenKind::OpenParen => Some(NudRule::Grouping),
        TokenKind::Not | TokenKind::Dash => Some(NudRule::Prefix),
        TokenKind::If => Some(NudRule::If),
        TokenKind::Fn => Some(NudRule::Function),

        TokenKind::EOF
        | TokenKind::Illegal
        | TokenKind::Assignment
        | TokenKind::Equals
        | TokenKind::NotEquals
        | TokenKind::Plus
        | TokenKind::Star
        | TokenKind::Slash
        | TokenKind::Less
        | TokenKind::Greater
        | TokenKind::Comma
        | TokenKind::Semicolon
        | TokenKind::CloseParen
        | TokenKind::OpenCurly
        | TokenKind::CloseCurly
        | TokenKind::Let
        | TokenKind::Else
        | TokenKind::Return => None,
    }
}

pub fn led_rule(kind: TokenKind) -> Option<LedRule> {
    match kind {
        TokenKind::Equals
        | TokenKind::NotEquals
        | TokenKind::Less
        | TokenKind::Greater
        | TokenKind::Plus
        | TokenKind::Dash
        | TokenKind::Star
        | TokenKind::Slash => Some(LedRule::Binary),
        TokenKind::OpenParen => Some(LedRule::Call),

        TokenKind::EOF
        | TokenKind::Illegal
        | TokenKind::Identifier
        | TokenKind::Number
        | TokenKind::Assignment
        | TokenKind::Not
        | TokenKind::Comma
        | TokenKind::Semicolon
        | TokenKind::CloseParen
        | TokenKind::OpenCurly
        | TokenKind::CloseCurly
        | TokenKind::Fn
        | TokenKind::Let
        | TokenKind::True
        | TokenKind::False
        | TokenKind::If
        | TokenKind::Else
        | TokenKind::Return => None,
    }
}

/// Binding power of `kind` when it appears after a complete left operand.
pub fn binding_power(kind: TokenKind) -> BindingPower {
    match kind {
        TokenKind::Equals | TokenKind::NotEquals => BindingPower::Equals,
        TokenKind::Less | TokenKind::Greater => BindingPower::LessGreater,
        TokenKind::Plus | TokenKind::Dash => BindingPower::Sum,
        TokenKind::Star | TokenKind::Slash => BindingPower::Product,
        TokenKind::OpenParen => BindingPower::Call,

        TokenKind::EOF
        | TokenKind::Illegal
        | TokenKind::Identifier
        | TokenKind::Number
        | TokenKind::Assignment
        | TokenKind::Not
        | TokenKind::Comma
        | TokenKind::Semicolon
        | TokenKind::CloseParen
        | TokenKind::OpenCurly
        | TokenKind::CloseCurly
        | TokenKind::Fn
        | TokenKind::Let
        | TokenKind::True
        | TokenKind::False
        | TokenKind::If
        | TokenKind::Else
        | TokenKind::Return => BindingPower::Lowest,
    }
}

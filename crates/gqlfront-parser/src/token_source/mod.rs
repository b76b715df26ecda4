//! Token sources: the character-level half of the lexer.

mod str_token_source;

pub use str_token_source::StrTokenSource;

#[cfg(test)]
mod tests;

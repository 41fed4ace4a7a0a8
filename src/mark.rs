//! Main module for mark library functionality

pub mod ast;
pub mod config;
pub mod formats;
pub mod grammar;
pub mod lexing;
pub mod parsing;
pub mod testing;
pub mod token;

pub use ast::{Node, Range};
pub use lexing::{Lexer, LexerError, LexerOptions};
pub use parsing::{parse_document, Parser};
pub use token::{NodeKind, Token, TokenDefinition, TokenSet};

// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message model and the conventional commit grammar parser.

mod message;
mod parser;

pub use message::{Commit, Footer, Header};
pub use parser::parse;

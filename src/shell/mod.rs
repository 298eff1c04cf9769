//! Line-oriented command front end for the knowledge base.

mod command;
mod session;

pub use command::{parse, tokenize, Command};
pub use session::Session;

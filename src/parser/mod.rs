pub mod ticket_parser;

pub use ticket_parser::{JsonTicketParser, Parser};

// JSON ticket list parsing
use crate::model::{ParserError, TicketList};

pub trait Parser {
    fn parse(&self, content: &str) -> Result<TicketList, ParserError>;
}

pub struct JsonTicketParser;

impl JsonTicketParser {
    pub fn new() -> Self {
        Self
    }
}

impl Parser for JsonTicketParser {
    fn parse(&self, content: &str) -> Result<TicketList, ParserError> {
        // tickets.json exports often start with a UTF-8 BOM
        let content = content.trim_start_matches('\u{feff}');
        if content.trim().is_empty() {
            return Err(ParserError::EmptyInput);
        }
        Ok(serde_json::from_str(content)?)
    }
}

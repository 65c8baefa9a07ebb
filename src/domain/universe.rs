//! Ticker universe parsing.
//!
//! Parses comma-separated ticker lists from configuration or CLI overrides.

use std::collections::HashSet;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UniverseError {
    #[error("empty token in ticker list")]
    EmptyToken,

    #[error("duplicate ticker: {0}")]
    DuplicateTicker(String),
}

pub fn parse_tickers(input: &str) -> Result<Vec<String>, UniverseError> {
    let mut tickers = Vec::new();
    let mut seen = HashSet::new();

    for token in input.split(',') {
        let trimmed = token.trim();
        if trimmed.is_empty() {
            return Err(UniverseError::EmptyToken);
        }
        let ticker = trimmed.to_uppercase();
        if seen.contains(&ticker) {
            return Err(UniverseError::DuplicateTicker(ticker));
        }
        seen.insert(ticker.clone());
        tickers.push(ticker);
    }

    Ok(tickers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_tickers_basic() {
        let result = parse_tickers("RELIANCE,TCS,HDFCBANK").unwrap();
        assert_eq!(result, vec!["RELIANCE", "TCS", "HDFCBANK"]);
    }

    #[test]
    fn parse_tickers_trims_and_uppercases() {
        let result = parse_tickers("  infy , tcs ").unwrap();
        assert_eq!(result, vec!["INFY", "TCS"]);
    }

    #[test]
    fn parse_tickers_empty_token() {
        let result = parse_tickers("INFY,,TCS");
        assert!(matches!(result, Err(UniverseError::EmptyToken)));
    }

    #[test]
    fn parse_tickers_duplicate() {
        let result = parse_tickers("INFY,TCS,INFY");
        assert!(matches!(result, Err(UniverseError::DuplicateTicker(t)) if t == "INFY"));
    }
}

//! Hardcoded stock lookups exposed as tools.
//!
//! Despite the names, nothing here talks to a market feed: the quotes are a
//! fixed three-row table, and both lookups are total functions over
//! arbitrary input. Matching is case-sensitive exact equality; anything
//! outside the table gets the `Unknown company:` sentinel with the input
//! echoed verbatim.

mod tools;

pub use tools::{GET_STOCK_PRICE, HOWS_STOCKS, StockTools};

/// One row of the quote table.
#[derive(Debug, Clone, Copy)]
pub struct StockQuote {
    pub company: &'static str,
    pub trend: &'static str,
    pub price: &'static str,
}

const QUOTES: &[StockQuote] = &[
    StockQuote {
        company: "IBM",
        trend: "stocks are up 10%",
        price: "135.67 USD",
    },
    StockQuote {
        company: "MSFT",
        trend: "MSFT stocks are up 20%",
        price: "256.78 USD",
    },
    StockQuote {
        company: "SAP",
        trend: "SAP stocks are up 50%",
        price: "123.45 EUR",
    },
];

fn lookup(company: &str) -> Option<&'static StockQuote> {
    QUOTES.iter().find(|quote| quote.company == company)
}

fn unknown(company: &str) -> String {
    format!("Unknown company: {company}")
}

/// How the stocks are doing for a given company.
pub fn hows_stocks(company: &str) -> String {
    match lookup(company) {
        Some(quote) => quote.trend.to_string(),
        None => unknown(company),
    }
}

/// The current stock price for a given company.
pub fn get_stock_price(company: &str) -> String {
    match lookup(company) {
        Some(quote) => quote.price.to_string(),
        None => unknown(company),
    }
}

//! The quote lookups as boundary tools.

use mcp::{CallToolResult, Tool, ToolHandler};
use serde_json::{Value, json};

use crate::{get_stock_price, hows_stocks};

pub const HOWS_STOCKS: &str = "hows_stocks";
pub const GET_STOCK_PRICE: &str = "get_stock_price";

/// Handler exposing the two stock lookups.
pub struct StockTools;

/// A missing or non-string `company` argument is treated as the empty
/// string, which lands in the unknown-company branch — the tools never fail.
fn company_arg(arguments: Option<&Value>) -> &str {
    arguments
        .and_then(|a| a.get("company"))
        .and_then(Value::as_str)
        .unwrap_or_default()
}

fn company_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "company": {
                "type": "string",
                "description": "The company name, e.g. IBM"
            }
        },
        "required": ["company"]
    })
}

impl ToolHandler for StockTools {
    fn tools(&self) -> Vec<Tool> {
        vec![
            Tool {
                name: HOWS_STOCKS.to_string(),
                description: Some(
                    "Check how the stocks are doing for a given company".to_string(),
                ),
                input_schema: company_schema(),
            },
            Tool {
                name: GET_STOCK_PRICE.to_string(),
                description: Some(
                    "Get the current stock price for a given company".to_string(),
                ),
                input_schema: company_schema(),
            },
        ]
    }

    async fn call(&self, name: &str, arguments: Option<Value>) -> CallToolResult {
        let company = company_arg(arguments.as_ref());
        match name {
            HOWS_STOCKS => CallToolResult::text(hows_stocks(company)),
            GET_STOCK_PRICE => CallToolResult::text(get_stock_price(company)),
            other => CallToolResult::error(format!("unknown tool: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn advertises_both_tools_with_company_schema() {
        let tools = StockTools.tools();
        let names: Vec<_> = tools.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, [HOWS_STOCKS, GET_STOCK_PRICE]);
        for tool in &tools {
            assert_eq!(tool.input_schema["required"], json!(["company"]));
        }
    }

    #[tokio::test]
    async fn dispatches_by_name() {
        let result = StockTools
            .call(GET_STOCK_PRICE, Some(json!({"company": "SAP"})))
            .await;
        assert!(!result.is_error);
        assert_eq!(result.content[0].as_text(), Some("123.45 EUR"));

        let result = StockTools
            .call(HOWS_STOCKS, Some(json!({"company": "IBM"})))
            .await;
        assert_eq!(result.content[0].as_text(), Some("stocks are up 10%"));
    }

    #[tokio::test]
    async fn missing_company_is_the_unknown_branch() {
        let result = StockTools.call(GET_STOCK_PRICE, None).await;
        assert!(!result.is_error);
        assert_eq!(result.content[0].as_text(), Some("Unknown company: "));

        let result = StockTools
            .call(HOWS_STOCKS, Some(json!({"company": null})))
            .await;
        assert_eq!(result.content[0].as_text(), Some("Unknown company: "));
    }

    #[tokio::test]
    async fn unknown_tool_name_is_an_error_result() {
        let result = StockTools.call("buy_stocks", None).await;
        assert!(result.is_error);
    }
}

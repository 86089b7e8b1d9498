//! Natural-language calculator.

use super::generate_text;
use crate::prompts::{CALCULATION_FALLBACK, CALCULATION_INSTRUCTION};
use artdoc_abstraction::{ContentPart, ModelGateway};

/// Answers `query` with the bare numeric result, as returned by the model.
pub async fn perform_calculation(gateway: &dyn ModelGateway, model: &str, query: &str) -> String {
    let parts = [ContentPart::text(CALCULATION_INSTRUCTION), ContentPart::text(query)];

    generate_text(gateway, model, "calculation", &parts)
        .await
        .unwrap_or_else(|_| CALCULATION_FALLBACK.to_string())
}

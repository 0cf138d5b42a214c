//! JSON export of collaboration pairs

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use crate::pipeline::{Pair, Pairing};
use crate::report::PairingSummary;

/// Metadata about the pairing run
#[derive(Serialize)]
pub struct PairingMetadata {
    /// Timestamp of the export (RFC 3339)
    pub timestamp: String,
    pub gradelens_version: String,
    /// Dataset the pairs were computed from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_file: Option<String>,
}

/// Complete pairing export
#[derive(Serialize)]
pub struct PairingExport<'a> {
    pub metadata: PairingMetadata,
    pub summary: PairingSummary,
    pub pairs: &'a [Pair],
}

/// Write the pairing result to a JSON file
pub fn export_pairs_json(
    pairing: &Pairing,
    input_file: Option<&Path>,
    output_path: &Path,
) -> Result<()> {
    let export = PairingExport {
        metadata: PairingMetadata {
            timestamp: Utc::now().to_rfc3339(),
            gradelens_version: env!("CARGO_PKG_VERSION").to_string(),
            input_file: input_file.map(|p| p.display().to_string()),
        },
        summary: PairingSummary::from_pairing(pairing),
        pairs: &pairing.pairs,
    };

    let json =
        serde_json::to_string_pretty(&export).context("Failed to serialize pairs to JSON")?;

    std::fs::write(output_path, json)
        .with_context(|| format!("Failed to write pairs to {}", output_path.display()))?;

    tracing::info!(path = %output_path.display(), pairs = pairing.pairs.len(), "Exported pairs");
    Ok(())
}

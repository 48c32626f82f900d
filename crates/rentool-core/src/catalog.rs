//! # Tool Catalog
//!
//! Resolves a tool code to the tool's full billing profile.
//!
//! The catalog is built once at startup from config and never mutated.
//! Lookups are pure: the same code against the same catalog always
//! resolves identically (or fails identically).

use serde::{Deserialize, Serialize};

use crate::error::{RentalError, RentalResult};
use crate::types::{Tool, ToolInformation, ToolType};

/// The immutable catalog of rentable tools and their types.
///
/// An unconfigured catalog (both lists empty) is valid: every lookup then
/// fails with `UnknownToolCode`, which is the behavior the terminal
/// surfaces when no catalog file was found.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolCatalog {
    tools: Vec<Tool>,
    tool_types: Vec<ToolType>,
}

impl ToolCatalog {
    /// Creates a catalog from the configured tool and tool-type lists.
    pub fn new(tools: Vec<Tool>, tool_types: Vec<ToolType>) -> Self {
        Self { tools, tool_types }
    }

    /// Resolves a tool code to the tool joined with its billing profile.
    ///
    /// The code is trimmed and matched case-insensitively against the
    /// stored tool codes, and the tool's type name is matched
    /// case-insensitively against the stored tool types.
    ///
    /// ## Errors
    /// - [`RentalError::MissingToolCode`] if the code is blank
    /// - [`RentalError::UnknownToolCode`] if no tool matches
    /// - [`RentalError::UnresolvedToolType`] if the matched tool names a
    ///   type with no catalog entry
    ///
    /// ## Example
    /// ```rust
    /// use rentool_core::catalog::ToolCatalog;
    /// use rentool_core::types::{Tool, ToolType};
    ///
    /// let catalog = ToolCatalog::new(
    ///     vec![Tool {
    ///         code: "LADW".to_string(),
    ///         type_name: "Ladder".to_string(),
    ///         brand: "Werner".to_string(),
    ///     }],
    ///     vec![ToolType {
    ///         type_name: "Ladder".to_string(),
    ///         daily_charge_cents: 199,
    ///         charge_on_weekday: true,
    ///         charge_on_weekend: true,
    ///         charge_on_holiday: false,
    ///     }],
    /// );
    ///
    /// let info = catalog.resolve("ladw").unwrap();
    /// assert_eq!(info.brand, "Werner");
    /// ```
    pub fn resolve(&self, code: &str) -> RentalResult<ToolInformation> {
        let code = code.trim();
        if code.is_empty() {
            return Err(RentalError::MissingToolCode);
        }

        let tool = self
            .tools
            .iter()
            .find(|tool| tool.code.eq_ignore_ascii_case(code))
            .ok_or_else(|| RentalError::UnknownToolCode {
                code: code.to_string(),
            })?;

        let tool_type = self
            .tool_types
            .iter()
            .find(|tool_type| tool_type.type_name.eq_ignore_ascii_case(&tool.type_name))
            .ok_or_else(|| RentalError::UnresolvedToolType {
                code: code.to_string(),
            })?;

        Ok(ToolInformation {
            code: tool.code.clone(),
            brand: tool.brand.clone(),
            tool_type: tool_type.clone(),
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

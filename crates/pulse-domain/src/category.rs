//! Domain types representing budget categories.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{color::ColorHex, common::CategoryId, DomainError};

/// Categorises transactions for budgeting and reporting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorHex>,
    pub semantic_type: SemanticType,
    #[serde(default)]
    pub is_predefined: bool,
}

impl Category {
    pub fn new(id: CategoryId, name: impl Into<String>, semantic_type: SemanticType) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            color: None,
            semantic_type,
            is_predefined: false,
        }
    }

    pub fn with_color(mut self, color: ColorHex) -> Self {
        self.color = Some(color);
        self
    }

    pub fn predefined(mut self) -> Self {
        self.is_predefined = true;
        self
    }

    pub fn is_savings(&self) -> bool {
        self.semantic_type == SemanticType::Savings
    }

    /// Color to display for this category, gray when none is set.
    pub fn display_color(&self) -> ColorHex {
        self.color.clone().unwrap_or_default()
    }
}

/// Budget classification of a category, independent of the transaction kind.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SemanticType {
    Needs,
    Wants,
    Savings,
    Income,
}

impl SemanticType {
    pub const ALL: [SemanticType; 4] = [
        SemanticType::Needs,
        SemanticType::Wants,
        SemanticType::Savings,
        SemanticType::Income,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SemanticType::Needs => "Needs",
            SemanticType::Wants => "Wants",
            SemanticType::Savings => "Savings",
            SemanticType::Income => "Income",
        }
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SemanticType {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim();
        SemanticType::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(normalized))
            .ok_or_else(|| DomainError::UnknownSemanticType(value.to_string()))
    }
}

//! Closed value enumerations used by compliance annotations.
//!
//! Each enum serializes to the upper snake case wire value the persistence
//! layer expects, and parses case-insensitively from the same value.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ModelError;

fn normalize(s: &str) -> String {
    s.trim().to_uppercase().replace(['-', ' '], "_")
}

/// Category of identifier a dataset field holds.
///
/// `None` marks a field that carries no identifier at all; it is still a
/// valid choice in the field identifier dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComplianceFieldIdValue {
    None,
    MemberId,
    SubjectMemberId,
    GroupId,
    CompanyId,
    MixedId,
    CustomId,
    EnterpriseProfileId,
    EnterpriseAccountId,
    ContractId,
    SeatId,
    AdvertiserId,
    SlideshareUserId,
}

impl ComplianceFieldIdValue {
    pub const ALL: [ComplianceFieldIdValue; 13] = [
        ComplianceFieldIdValue::None,
        ComplianceFieldIdValue::MemberId,
        ComplianceFieldIdValue::SubjectMemberId,
        ComplianceFieldIdValue::GroupId,
        ComplianceFieldIdValue::CompanyId,
        ComplianceFieldIdValue::MixedId,
        ComplianceFieldIdValue::CustomId,
        ComplianceFieldIdValue::EnterpriseProfileId,
        ComplianceFieldIdValue::EnterpriseAccountId,
        ComplianceFieldIdValue::ContractId,
        ComplianceFieldIdValue::SeatId,
        ComplianceFieldIdValue::AdvertiserId,
        ComplianceFieldIdValue::SlideshareUserId,
    ];

    /// Returns the wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplianceFieldIdValue::None => "NONE",
            ComplianceFieldIdValue::MemberId => "MEMBER_ID",
            ComplianceFieldIdValue::SubjectMemberId => "SUBJECT_MEMBER_ID",
            ComplianceFieldIdValue::GroupId => "GROUP_ID",
            ComplianceFieldIdValue::CompanyId => "COMPANY_ID",
            ComplianceFieldIdValue::MixedId => "MIXED_ID",
            ComplianceFieldIdValue::CustomId => "CUSTOM_ID",
            ComplianceFieldIdValue::EnterpriseProfileId => "ENTERPRISE_PROFILE_ID",
            ComplianceFieldIdValue::EnterpriseAccountId => "ENTERPRISE_ACCOUNT_ID",
            ComplianceFieldIdValue::ContractId => "CONTRACT_ID",
            ComplianceFieldIdValue::SeatId => "SEAT_ID",
            ComplianceFieldIdValue::AdvertiserId => "ADVERTISER_ID",
            ComplianceFieldIdValue::SlideshareUserId => "SLIDESHARE_USER_ID",
        }
    }
}

impl fmt::Display for ComplianceFieldIdValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComplianceFieldIdValue {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize(s);
        Self::ALL
            .into_iter()
            .find(|value| value.as_str() == normalized)
            .ok_or_else(|| ModelError::UnknownFieldId(s.to_string()))
    }
}

/// Format of the identifier value stored in a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IdLogicalType {
    Numeric,
    Urn,
    ReversedUrn,
    CompositeUrn,
    Custom,
}

impl IdLogicalType {
    pub const ALL: [IdLogicalType; 5] = [
        IdLogicalType::Numeric,
        IdLogicalType::Urn,
        IdLogicalType::ReversedUrn,
        IdLogicalType::CompositeUrn,
        IdLogicalType::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IdLogicalType::Numeric => "NUMERIC",
            IdLogicalType::Urn => "URN",
            IdLogicalType::ReversedUrn => "REVERSED_URN",
            IdLogicalType::CompositeUrn => "COMPOSITE_URN",
            IdLogicalType::Custom => "CUSTOM",
        }
    }

    /// Returns the label shown in the field format dropdown.
    pub fn label(&self) -> &'static str {
        match self {
            IdLogicalType::Numeric => "Numeric",
            IdLogicalType::Urn => "URN",
            IdLogicalType::ReversedUrn => "Reversed URN",
            IdLogicalType::CompositeUrn => "Composite URN",
            IdLogicalType::Custom => "Custom",
        }
    }
}

impl fmt::Display for IdLogicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdLogicalType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize(s);
        Self::ALL
            .into_iter()
            .find(|value| value.as_str() == normalized)
            .ok_or_else(|| ModelError::UnknownLogicalType(s.to_string()))
    }
}

/// Security classification of a field or of a whole dataset.
///
/// Variants are declared most sensitive first, so the derived `Ord` sorts
/// from most to least sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Classification {
    HighlyConfidential,
    Confidential,
    LimitedDistribution,
    General,
}

impl Classification {
    pub const ALL: [Classification; 4] = [
        Classification::HighlyConfidential,
        Classification::Confidential,
        Classification::LimitedDistribution,
        Classification::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::HighlyConfidential => "HIGHLY_CONFIDENTIAL",
            Classification::Confidential => "CONFIDENTIAL",
            Classification::LimitedDistribution => "LIMITED_DISTRIBUTION",
            Classification::General => "GENERAL",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Classification::HighlyConfidential => "Highly Confidential",
            Classification::Confidential => "Confidential",
            Classification::LimitedDistribution => "Limited Distribution",
            Classification::General => "General",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Classification {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize(s);
        Self::ALL
            .into_iter()
            .find(|value| value.as_str() == normalized)
            .ok_or_else(|| ModelError::UnknownClassification(s.to_string()))
    }
}

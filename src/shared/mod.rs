//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw format the backend sends, so they can be used directly in wire types
//! without conversion overhead.

pub mod fmt;
pub mod serde_util;

use crate::error::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── WalletAddress ───────────────────────────────────────────────────────────

/// An Ethereum account address: `0x` followed by 40 hex digits.
///
/// Construction trims surrounding whitespace and lowercases the hex body,
/// matching how the backend stores addresses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WalletAddress(String);

impl WalletAddress {
    /// Number of hex digits after the `0x` prefix.
    pub const HEX_LEN: usize = 40;

    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if !Self::is_valid(trimmed) {
            return Err(ValidationError::InvalidAddress(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_ascii_lowercase()))
    }

    /// `^0x[0-9a-fA-F]{40}$`, no trimming.
    pub fn is_valid(candidate: &str) -> bool {
        match candidate.strip_prefix("0x") {
            Some(body) => body.len() == Self::HEX_LEN && hex::decode(body).is_ok(),
            None => false,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against a raw address string from a transaction.
    pub fn matches(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other.trim())
    }
}

impl std::fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for WalletAddress {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for WalletAddress {
    type Error = ValidationError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl Serialize for WalletAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for WalletAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        WalletAddress::parse(&s).map_err(serde::de::Error::custom)
    }
}

// ─── Direction ───────────────────────────────────────────────────────────────

/// Transfer direction relative to the tracked wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    In,
    Out,
    #[serde(rename = "self")]
    SelfTransfer,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Out => "out",
            Self::SelfTransfer => "self",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Direction::In => write!(f, "In"),
            Direction::Out => write!(f, "Out"),
            Direction::SelfTransfer => write!(f, "Self"),
        }
    }
}

// ─── NetworkName ─────────────────────────────────────────────────────────────

/// Networks a wallet can be registered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NetworkName {
    EthereumMainnet,
    SepoliaTestnet,
    GoerliTestnet,
    PolygonMainnet,
    PolygonMumbai,
    BscMainnet,
    BscTestnet,
}

impl NetworkName {
    pub const ALL: [NetworkName; 7] = [
        Self::EthereumMainnet,
        Self::SepoliaTestnet,
        Self::GoerliTestnet,
        Self::PolygonMainnet,
        Self::PolygonMumbai,
        Self::BscMainnet,
        Self::BscTestnet,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EthereumMainnet => "ethereum-mainnet",
            Self::SepoliaTestnet => "sepolia-testnet",
            Self::GoerliTestnet => "goerli-testnet",
            Self::PolygonMainnet => "polygon-mainnet",
            Self::PolygonMumbai => "polygon-mumbai",
            Self::BscMainnet => "bsc-mainnet",
            Self::BscTestnet => "bsc-testnet",
        }
    }

    /// Human-readable name for a select box.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::EthereumMainnet => "Ethereum Mainnet",
            Self::SepoliaTestnet => "Sepolia Testnet",
            Self::GoerliTestnet => "Goerli Testnet",
            Self::PolygonMainnet => "Polygon Mainnet",
            Self::PolygonMumbai => "Polygon Mumbai",
            Self::BscMainnet => "BSC Mainnet",
            Self::BscTestnet => "BSC Testnet",
        }
    }
}

impl std::fmt::Display for NetworkName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NetworkName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|n| n.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownNetwork(s.to_string()))
    }
}

//! # Request DTOs
//!
//! Structured transfer, bridge and stake requests.
//!
//! Amounts arrive as decimal strings in whole-token units and addresses as
//! hex strings. Field-presence rules are checked here; chain resolution and
//! address parsing happen in the use cases.

use crate::domain::errors::{WalletError, WalletResult};
use serde::{Deserialize, Serialize};
use std::fmt;

fn present(value: Option<&String>) -> Option<&str> {
    value.map(|s| s.trim()).filter(|s| !s.is_empty())
}

/// Request to move native currency or an ERC-20 token on one chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    /// Target chain.
    pub chain: String,
    /// Token symbol or address; absent means native currency.
    #[serde(default)]
    pub token: Option<String>,
    /// Decimal amount; absent means the whole balance.
    #[serde(default)]
    pub amount: Option<String>,
    /// Recipient address.
    pub to: String,
    /// Hex call data, native transfers only.
    #[serde(default)]
    pub data: Option<String>,
}

impl TransferRequest {
    /// Creates a native transfer of the whole balance.
    #[must_use]
    pub fn new(chain: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            chain: chain.into(),
            token: None,
            amount: None,
            to: to.into(),
            data: None,
        }
    }

    /// Sets the token.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Sets the amount.
    #[must_use]
    pub fn with_amount(mut self, amount: impl Into<String>) -> Self {
        self.amount = Some(amount.into());
        self
    }

    /// Attaches hex call data.
    #[must_use]
    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }

    /// Returns the token reference, if any.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        present(self.token.as_ref())
    }

    /// Returns the amount, if any.
    #[must_use]
    pub fn amount(&self) -> Option<&str> {
        present(self.amount.as_ref())
    }

    /// Returns the call data, if any.
    #[must_use]
    pub fn data(&self) -> Option<&str> {
        present(self.data.as_ref())
    }
}

impl fmt::Display for TransferRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "transfer {} {} to {} on {}",
            self.amount().unwrap_or("all"),
            self.token().unwrap_or("native"),
            self.to,
            self.chain
        )
    }
}

/// Request to move funds between BSC and opBNB.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeRequest {
    /// Source chain.
    pub from_chain: String,
    /// Destination chain.
    pub to_chain: String,
    /// Token address on the source chain; absent for native currency.
    #[serde(default)]
    pub from_token: Option<String>,
    /// Token address on the destination chain; absent for native currency.
    #[serde(default)]
    pub to_token: Option<String>,
    /// Decimal amount in whole-token units.
    pub amount: String,
    /// Recipient; absent bridges to the sender.
    #[serde(default)]
    pub to_address: Option<String>,
}

impl BridgeRequest {
    /// Creates a native self-bridge request.
    #[must_use]
    pub fn new(
        from_chain: impl Into<String>,
        to_chain: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            from_chain: from_chain.into(),
            to_chain: to_chain.into(),
            from_token: None,
            to_token: None,
            amount: amount.into(),
            to_address: None,
        }
    }

    /// Sets the token pair.
    #[must_use]
    pub fn with_tokens(mut self, from_token: impl Into<String>, to_token: impl Into<String>) -> Self {
        self.from_token = Some(from_token.into());
        self.to_token = Some(to_token.into());
        self
    }

    /// Sets the recipient.
    #[must_use]
    pub fn with_recipient(mut self, to_address: impl Into<String>) -> Self {
        self.to_address = Some(to_address.into());
        self
    }

    /// Returns the token pair, if any.
    #[must_use]
    pub fn tokens(&self) -> Option<(&str, &str)> {
        Some((
            present(self.from_token.as_ref())?,
            present(self.to_token.as_ref())?,
        ))
    }

    /// Returns the recipient, if any.
    #[must_use]
    pub fn to_address(&self) -> Option<&str> {
        present(self.to_address.as_ref())
    }

    /// Validates field presence.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::MissingField` if the amount is empty, or
    /// `WalletError::InvalidRequest` if only one token of the pair is given.
    pub fn validate(&self) -> WalletResult<()> {
        if self.amount.trim().is_empty() {
            return Err(WalletError::MissingField("amount"));
        }

        let from = present(self.from_token.as_ref());
        let to = present(self.to_token.as_ref());
        if from.is_some() != to.is_some() {
            return Err(WalletError::InvalidRequest(
                "fromToken and toToken must both be present or both absent".to_string(),
            ));
        }

        Ok(())
    }
}

impl fmt::Display for BridgeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "bridge {} {} from {} to {}",
            self.amount,
            present(self.from_token.as_ref()).unwrap_or("native"),
            self.from_chain,
            self.to_chain
        )
    }
}

/// Validator staking action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StakeAction {
    /// Stake native currency with a validator.
    Delegate,
    /// Withdraw stake from a validator.
    Undelegate,
    /// Move stake between validators.
    Redelegate,
    /// Claim matured unbonded stake.
    Claim,
}

impl StakeAction {
    /// Returns the action name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Delegate => "delegate",
            Self::Undelegate => "undelegate",
            Self::Redelegate => "redelegate",
            Self::Claim => "claim",
        }
    }

    /// Returns true if the action needs an amount.
    #[must_use]
    pub fn requires_amount(&self) -> bool {
        !matches!(self, Self::Claim)
    }

    /// Returns true if the action needs a source validator.
    #[must_use]
    pub fn requires_from_validator(&self) -> bool {
        !matches!(self, Self::Delegate)
    }

    /// Returns true if the action needs a target validator.
    #[must_use]
    pub fn requires_to_validator(&self) -> bool {
        matches!(self, Self::Delegate | Self::Redelegate)
    }
}

impl fmt::Display for StakeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StakeAction {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "delegate" => Ok(Self::Delegate),
            "undelegate" => Ok(Self::Undelegate),
            "redelegate" => Ok(Self::Redelegate),
            "claim" => Ok(Self::Claim),
            other => Err(WalletError::InvalidRequest(format!(
                "unknown stake action '{other}'"
            ))),
        }
    }
}

fn default_vote_power() -> bool {
    true
}

/// Request to act on the validator staking hub.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StakeRequest {
    /// Target chain; only BSC mainnet is accepted.
    pub chain: String,
    /// Action to perform.
    pub action: StakeAction,
    /// Decimal amount; required except for `claim`.
    #[serde(default)]
    pub amount: Option<String>,
    /// Source validator operator address.
    #[serde(default)]
    pub from_validator: Option<String>,
    /// Target validator operator address.
    #[serde(default)]
    pub to_validator: Option<String>,
    /// Whether delegation also delegates vote power.
    #[serde(default = "default_vote_power")]
    pub delegate_vote_power: bool,
}

impl StakeRequest {
    /// Creates a request with no optional fields set.
    #[must_use]
    pub fn new(chain: impl Into<String>, action: StakeAction) -> Self {
        Self {
            chain: chain.into(),
            action,
            amount: None,
            from_validator: None,
            to_validator: None,
            delegate_vote_power: true,
        }
    }

    /// Sets the amount.
    #[must_use]
    pub fn with_amount(mut self, amount: impl Into<String>) -> Self {
        self.amount = Some(amount.into());
        self
    }

    /// Sets the source validator.
    #[must_use]
    pub fn with_from_validator(mut self, validator: impl Into<String>) -> Self {
        self.from_validator = Some(validator.into());
        self
    }

    /// Sets the target validator.
    #[must_use]
    pub fn with_to_validator(mut self, validator: impl Into<String>) -> Self {
        self.to_validator = Some(validator.into());
        self
    }

    /// Sets the vote-power flag.
    #[must_use]
    pub fn with_vote_power(mut self, delegate_vote_power: bool) -> Self {
        self.delegate_vote_power = delegate_vote_power;
        self
    }

    /// Returns the amount, if any.
    #[must_use]
    pub fn amount(&self) -> Option<&str> {
        present(self.amount.as_ref())
    }

    /// Returns the source validator, if any.
    #[must_use]
    pub fn from_validator(&self) -> Option<&str> {
        present(self.from_validator.as_ref())
    }

    /// Returns the target validator, if any.
    #[must_use]
    pub fn to_validator(&self) -> Option<&str> {
        present(self.to_validator.as_ref())
    }

    /// Checks the fields the action requires.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::MissingField` naming the first absent field.
    pub fn validate(&self) -> WalletResult<()> {
        if self.action.requires_amount() && self.amount().is_none() {
            return Err(WalletError::MissingField("amount"));
        }
        if self.action.requires_from_validator() && self.from_validator().is_none() {
            return Err(WalletError::MissingField("fromValidator"));
        }
        if self.action.requires_to_validator() && self.to_validator().is_none() {
            return Err(WalletError::MissingField("toValidator"));
        }
        Ok(())
    }
}

impl fmt::Display for StakeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on {}", self.action, self.chain)?;
        if let Some(amount) = self.amount() {
            write!(f, " amount {amount}")?;
        }
        Ok(())
    }
}

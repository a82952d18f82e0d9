//! Transfer authorization rules.
//!
//! The decision logic is kept free of storage access so it can be tested
//! exhaustively without externalities. The pallet snapshots per-account
//! policy flags and hands them to [`authorize`] before any balance mutation.

/// Policy flags for one transfer participant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccountStatus {
    /// Account is barred from sending and receiving.
    pub blocklisted: bool,
    /// Account is exempt from the pause restriction.
    pub whitelisted: bool,
}

/// Why a transfer was denied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DenyReason {
    /// A participant is on the blocklist.
    Blocklisted,
    /// Transfers are paused and no participant is whitelisted.
    Paused,
}

/// Outcome of a transfer authorization check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Allow,
    Deny(DenyReason),
}

/// Decide whether value may move between `sender` and `recipient`.
///
/// The blocklist is an absolute bar and is evaluated first: a blocklisted
/// account is denied even if it is also whitelisted. The whitelist only
/// exempts a transfer from the pause restriction, and one whitelisted
/// participant is enough for the exemption.
pub fn authorize(paused: bool, sender: &AccountStatus, recipient: &AccountStatus) -> Verdict {
    if sender.blocklisted || recipient.blocklisted {
        return Verdict::Deny(DenyReason::Blocklisted);
    }
    if paused && !sender.whitelisted && !recipient.whitelisted {
        return Verdict::Deny(DenyReason::Paused);
    }
    Verdict::Allow
}

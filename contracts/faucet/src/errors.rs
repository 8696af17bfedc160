/// Errors returned by the faucet contract.
///
/// Codes start at 100, above the range reserved by `common::CommonError`.
///
/// | Range     | Purpose                                  |
/// |-----------|------------------------------------------|
/// | 100 – 109 | Lifecycle and caller authorisation       |
/// | 110 – 119 | Request rejections reported to callers   |
/// | 120 – 129 | Referral failures, recovered internally  |
#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum FaucetError {
    NotInitialized = 100,
    AlreadyInitialized = 101,
    Unauthorized = 102,

    /// Distribution is paused or the identity is blacklisted.
    AccessDenied = 110,
    /// The identity's cooldown has not elapsed.
    RateLimited = 111,
    /// The reserve cannot cover the computed payout.
    InsufficientReserve = 112,
    /// The ledger refused the payout transfer.
    TransferFailed = 113,
    /// A request for the same identity is already being processed.
    RequestInFlight = 114,

    ReferralCodeNotFound = 120,
    SelfReferral = 121,
    ReferrerNotEligible = 122,
    AlreadyReferred = 123,
    CodeAlreadyAssigned = 124,
}

impl FaucetError {
    /// Referral failures never reach the requester; the coordinator falls
    /// back to issuing the identity its own code.
    pub fn is_referral_failure(&self) -> bool {
        matches!(
            self,
            FaucetError::ReferralCodeNotFound
                | FaucetError::SelfReferral
                | FaucetError::ReferrerNotEligible
                | FaucetError::AlreadyReferred
                | FaucetError::CodeAlreadyAssigned
        )
    }
}

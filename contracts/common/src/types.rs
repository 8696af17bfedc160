use soroban_sdk::contracttype;

/// Reserve-scaling and counting parameters owned by the admin contract.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DynamicConfig {
    /// Whether reserve/time multipliers and traffic-scaled cooldowns apply.
    pub enabled: bool,
    /// Reserve level treated as 100 %. Zero disables reserve scaling.
    pub max_reserve: i128,
    /// Length of the window reported by the recent-traffic view.
    pub counting_window_seconds: u64,
}

/// The subset of admin configuration the request path needs in one read.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CooldownConfig {
    pub base_cooldown: u64,
    pub dynamic_enabled: bool,
    pub max_reserve: i128,
}

/// Per-identity counters kept by the stats contract.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct UserStats {
    pub total_received: i128,
    pub request_count: u32,
    pub first_request_at: u64,
    pub last_request_at: u64,
}

/// Faucet-wide counters kept by the stats contract.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct GlobalStats {
    pub total_distributed: i128,
    pub total_requests: u64,
    pub unique_users: u64,
}

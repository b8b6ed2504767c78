use soroban_sdk::{contracterror, contracttype, Address, BytesN, String, Symbol};

/// Reputation levels, lowest to highest. The derived ordering is what tier
/// comparisons rely on, so variants must stay sorted.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum Tier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

/// One reputation record per wallet, for the wallet's lifetime. Deactivation
/// flips `active` and keeps the row for historical lookups.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReputationRecord {
    pub token_id: u64,
    pub owner: Address,
    pub contribution_score: u64,
    pub tier: Tier,
    pub created_at: u64,
    /// Credential hash copied from the identity registry at mint time, if the
    /// wallet was linked then. Never written again.
    pub identity_hash: Option<BytesN<32>>,
    pub active: bool,
}

/// A time-boxed request to raise one record's tier. Mutated only by votes
/// before `deadline` and by a single successful execution after it.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub id: u64,
    pub token_id: u64,
    pub proposer: Address,
    pub tier_at_proposal: Tier,
    pub proposed_tier: Tier,
    pub votes_for: u32,
    pub votes_against: u32,
    pub created_at: u64,
    pub deadline: u64,
    pub executed: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoteRecord {
    pub proposal_id: u64,
    pub voter: Address,
    pub support: bool,
    pub reason: String,
}

/// Derived lifecycle of a proposal. `Passed` means the deadline has closed
/// with the passing policy met but `execute` has not landed yet; `Failed` is
/// terminal.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProposalState {
    Open,
    Passed,
    Executed,
    Failed,
}

/// Descriptive document for a record. Exposes whether an identity link exists
/// but never the hash itself.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecordMetadata {
    pub token_id: u64,
    pub contribution_score: u64,
    pub tier: Symbol,
    pub created_at: u64,
    pub active: bool,
    pub identity_linked: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Admin,                // Instance
    IdentityRegistry,     // Instance
    TokenCount,           // Instance
    ProposalCount,        // Instance
    Record(u64),          // Persistent
    WalletToken(Address), // Persistent
    Proposal(u64),        // Persistent
    Vote(u64, Address),   // Persistent
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotAuthorized = 3,
    AlreadyHasRecord = 4,
    RecordNotFound = 5,
    ProposalNotFound = 6,
    NotEligible = 7,
    TierNotHigher = 8,
    VotingClosed = 9,
    VotingStillOpen = 10,
    AlreadyVoted = 11,
    AlreadyExecuted = 12,
    ProposalNotPassing = 13,
}

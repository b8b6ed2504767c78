use soroban_sdk::{symbol_short, Symbol};

use crate::types::{RecordMetadata, ReputationRecord, Tier};

pub fn tier_name(tier: Tier) -> Symbol {
    match tier {
        Tier::Bronze => symbol_short!("Bronze"),
        Tier::Silver => symbol_short!("Silver"),
        Tier::Gold => symbol_short!("Gold"),
        Tier::Platinum => symbol_short!("Platinum"),
    }
}

/// Projects a record into its descriptive document. The same record state
/// always yields the same document, and only the presence of an identity link
/// is exposed, never the hash.
pub fn render_record(record: &ReputationRecord) -> RecordMetadata {
    RecordMetadata {
        token_id: record.token_id,
        contribution_score: record.contribution_score,
        tier: tier_name(record.tier),
        created_at: record.created_at,
        active: record.active,
        identity_linked: record.identity_hash.is_some(),
    }
}

use soroban_sdk::{Address, Env};

use crate::types::{DataKey, Proposal, ReputationRecord, VoteRecord};

pub struct Storage;

impl Storage {
    pub fn has_admin(env: &Env) -> bool {
        env.storage().instance().has(&DataKey::Admin)
    }

    pub fn set_admin(env: &Env, admin: &Address) {
        env.storage().instance().set(&DataKey::Admin, admin);
    }

    pub fn get_admin(env: &Env) -> Option<Address> {
        env.storage().instance().get(&DataKey::Admin)
    }

    pub fn set_identity_registry(env: &Env, registry: &Address) {
        env.storage()
            .instance()
            .set(&DataKey::IdentityRegistry, registry);
    }

    pub fn get_identity_registry(env: &Env) -> Option<Address> {
        env.storage().instance().get(&DataKey::IdentityRegistry)
    }

    pub fn get_token_count(env: &Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::TokenCount)
            .unwrap_or(0)
    }

    /// Assigns the next sequential token id, starting at 1.
    pub fn increment_token_count(env: &Env) -> u64 {
        let next = Self::get_token_count(env) + 1;
        env.storage().instance().set(&DataKey::TokenCount, &next);
        next
    }

    pub fn get_proposal_count(env: &Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::ProposalCount)
            .unwrap_or(0)
    }

    pub fn increment_proposal_count(env: &Env) -> u64 {
        let next = Self::get_proposal_count(env) + 1;
        env.storage().instance().set(&DataKey::ProposalCount, &next);
        next
    }

    pub fn set_record(env: &Env, record: &ReputationRecord) {
        env.storage()
            .persistent()
            .set(&DataKey::Record(record.token_id), record);
    }

    pub fn get_record(env: &Env, token_id: u64) -> Option<ReputationRecord> {
        env.storage().persistent().get(&DataKey::Record(token_id))
    }

    /// The wallet index row is written once at mint and never removed; its
    /// existence is what makes a wallet's record unique for its lifetime.
    pub fn set_wallet_token(env: &Env, wallet: &Address, token_id: u64) {
        env.storage()
            .persistent()
            .set(&DataKey::WalletToken(wallet.clone()), &token_id);
    }

    pub fn get_wallet_token(env: &Env, wallet: &Address) -> Option<u64> {
        env.storage()
            .persistent()
            .get(&DataKey::WalletToken(wallet.clone()))
    }

    pub fn has_wallet_token(env: &Env, wallet: &Address) -> bool {
        env.storage()
            .persistent()
            .has(&DataKey::WalletToken(wallet.clone()))
    }

    pub fn set_proposal(env: &Env, proposal: &Proposal) {
        env.storage()
            .persistent()
            .set(&DataKey::Proposal(proposal.id), proposal);
    }

    pub fn get_proposal(env: &Env, proposal_id: u64) -> Option<Proposal> {
        env.storage()
            .persistent()
            .get(&DataKey::Proposal(proposal_id))
    }

    pub fn set_vote(env: &Env, vote: &VoteRecord) {
        env.storage()
            .persistent()
            .set(&DataKey::Vote(vote.proposal_id, vote.voter.clone()), vote);
    }

    pub fn get_vote(env: &Env, proposal_id: u64, voter: &Address) -> Option<VoteRecord> {
        env.storage()
            .persistent()
            .get(&DataKey::Vote(proposal_id, voter.clone()))
    }

    pub fn has_voted(env: &Env, proposal_id: u64, voter: &Address) -> bool {
        env.storage()
            .persistent()
            .has(&DataKey::Vote(proposal_id, voter.clone()))
    }
}

#![no_std]

mod metadata;
mod storage;
pub mod types;

use soroban_sdk::{
    contract, contractimpl, contractmeta, symbol_short, Address, BytesN, Env, IntoVal, String,
    Symbol, Val, Vec,
};

use crate::storage::Storage;
use crate::types::{
    Error, Proposal, ProposalState, RecordMetadata, ReputationRecord, Tier, VoteRecord,
};

contractmeta!(
    key = "Description",
    val = "Per-wallet reputation records with community-voted tier upgrades"
);

/// Votes are accepted for this long after a proposal is created (ledger seconds).
pub const VOTING_PERIOD: u64 = 7 * 24 * 60 * 60;

/// Minimum number of supporting votes a proposal needs to be eligible to pass,
/// independent of opposing votes.
pub const MIN_QUORUM: u32 = 3;

const EVT_MINT: Symbol = symbol_short!("mint");
const EVT_SCORE: Symbol = symbol_short!("score");
const EVT_DEACT: Symbol = symbol_short!("deact");
const EVT_PROPOSE: Symbol = symbol_short!("propose");
const EVT_VOTE: Symbol = symbol_short!("vote");
const EVT_EXEC: Symbol = symbol_short!("execute");

#[contract]
pub struct ReputationContract;

#[contractimpl]
impl ReputationContract {
    pub fn initialize(
        env: Env,
        admin: Address,
        identity_registry: Option<Address>,
    ) -> Result<(), Error> {
        if Storage::has_admin(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();

        Storage::set_admin(&env, &admin);
        if let Some(registry) = identity_registry {
            Storage::set_identity_registry(&env, &registry);
        }
        Ok(())
    }

    /// Issue the caller's reputation record. A wallet gets at most one record,
    /// ever; deactivation does not free the slot.
    pub fn mint(
        env: Env,
        caller: Address,
        contribution_score: u64,
        initial_tier: Tier,
    ) -> Result<u64, Error> {
        caller.require_auth();
        if !Storage::has_admin(&env) {
            return Err(Error::NotInitialized);
        }
        if Storage::has_wallet_token(&env, &caller) {
            return Err(Error::AlreadyHasRecord);
        }

        let token_id = Storage::increment_token_count(&env);
        let identity_hash = match Storage::get_identity_registry(&env) {
            Some(registry) => Self::linked_identity(&env, &registry, &caller),
            None => None,
        };

        let record = ReputationRecord {
            token_id,
            owner: caller.clone(),
            contribution_score,
            tier: initial_tier,
            created_at: env.ledger().timestamp(),
            identity_hash,
            active: true,
        };
        Storage::set_record(&env, &record);
        Storage::set_wallet_token(&env, &caller, token_id);

        env.events().publish(
            (EVT_MINT, caller),
            (token_id, initial_tier, contribution_score),
        );
        Ok(token_id)
    }

    /// Overwrite a record's contribution score. Owner or admin only; the tier
    /// is never touched here.
    pub fn update_score(
        env: Env,
        caller: Address,
        token_id: u64,
        new_score: u64,
    ) -> Result<(), Error> {
        caller.require_auth();

        let mut record = Storage::get_record(&env, token_id).ok_or(Error::RecordNotFound)?;
        let admin = Storage::get_admin(&env).ok_or(Error::NotInitialized)?;
        if caller != record.owner && caller != admin {
            return Err(Error::NotAuthorized);
        }

        let old_score = record.contribution_score;
        record.contribution_score = new_score;
        Storage::set_record(&env, &record);

        env.events().publish(
            (EVT_SCORE, record.owner),
            (token_id, old_score, new_score),
        );
        Ok(())
    }

    /// Soft-delete a record. The row stays readable for history.
    pub fn deactivate(env: Env, caller: Address, token_id: u64) -> Result<(), Error> {
        Self::require_admin(&env, &caller)?;

        let mut record = Storage::get_record(&env, token_id).ok_or(Error::RecordNotFound)?;
        record.active = false;
        Storage::set_record(&env, &record);

        env.events().publish((EVT_DEACT, record.owner), token_id);
        Ok(())
    }

    pub fn update_identity_registry(
        env: Env,
        caller: Address,
        new_registry: Address,
    ) -> Result<(), Error> {
        Self::require_admin(&env, &caller)?;
        Storage::set_identity_registry(&env, &new_registry);
        Ok(())
    }

    pub fn transfer_admin(env: Env, caller: Address, new_admin: Address) -> Result<(), Error> {
        Self::require_admin(&env, &caller)?;
        new_admin.require_auth();
        Storage::set_admin(&env, &new_admin);
        Ok(())
    }

    /// Open a tier-upgrade proposal for a record. Any authenticated wallet may
    /// propose, record holder or not.
    pub fn propose(
        env: Env,
        caller: Address,
        token_id: u64,
        proposed_tier: Tier,
    ) -> Result<u64, Error> {
        caller.require_auth();

        let record = Storage::get_record(&env, token_id).ok_or(Error::RecordNotFound)?;
        if !record.active {
            return Err(Error::RecordNotFound);
        }
        if proposed_tier <= record.tier {
            return Err(Error::TierNotHigher);
        }

        let id = Storage::increment_proposal_count(&env);
        let now = env.ledger().timestamp();
        let proposal = Proposal {
            id,
            token_id,
            proposer: caller.clone(),
            tier_at_proposal: record.tier,
            proposed_tier,
            votes_for: 0,
            votes_against: 0,
            created_at: now,
            deadline: now + VOTING_PERIOD,
            executed: false,
        };
        Storage::set_proposal(&env, &proposal);

        env.events()
            .publish((EVT_PROPOSE, caller), (id, token_id, proposed_tier));
        Ok(id)
    }

    /// Cast the caller's vote. One active record = one vote, regardless of
    /// tier or score; the stored vote row doubles as the double-vote guard.
    pub fn vote(
        env: Env,
        caller: Address,
        proposal_id: u64,
        support: bool,
        reason: String,
    ) -> Result<(), Error> {
        caller.require_auth();

        let mut proposal = Storage::get_proposal(&env, proposal_id).ok_or(Error::ProposalNotFound)?;
        if env.ledger().timestamp() >= proposal.deadline || proposal.executed {
            return Err(Error::VotingClosed);
        }
        if !Self::holds_active_record(&env, &caller) {
            return Err(Error::NotEligible);
        }
        if Storage::has_voted(&env, proposal_id, &caller) {
            return Err(Error::AlreadyVoted);
        }

        if support {
            proposal.votes_for += 1;
        } else {
            proposal.votes_against += 1;
        }
        Storage::set_proposal(&env, &proposal);
        Storage::set_vote(
            &env,
            &VoteRecord {
                proposal_id,
                voter: caller.clone(),
                support,
                reason,
            },
        );

        env.events()
            .publish((EVT_VOTE, caller), (proposal_id, support));
        Ok(())
    }

    /// Apply a proposal after its deadline. Passing policy: more votes for
    /// than against, and at least MIN_QUORUM supporting votes. Open to any
    /// caller, not just the proposer. A failing proposal stays un-executed and
    /// cannot be retried; only a fresh proposal can.
    pub fn execute(env: Env, caller: Address, proposal_id: u64) -> Result<(), Error> {
        caller.require_auth();

        let mut proposal = Storage::get_proposal(&env, proposal_id).ok_or(Error::ProposalNotFound)?;
        if env.ledger().timestamp() < proposal.deadline {
            return Err(Error::VotingStillOpen);
        }
        if proposal.executed {
            return Err(Error::AlreadyExecuted);
        }
        if proposal.votes_for <= proposal.votes_against || proposal.votes_for < MIN_QUORUM {
            return Err(Error::ProposalNotPassing);
        }

        let mut record =
            Storage::get_record(&env, proposal.token_id).ok_or(Error::RecordNotFound)?;
        // Another proposal may have already raised the tier further; a tier
        // never goes down.
        if proposal.proposed_tier > record.tier {
            record.tier = proposal.proposed_tier;
            Storage::set_record(&env, &record);
        }
        proposal.executed = true;
        Storage::set_proposal(&env, &proposal);

        env.events().publish(
            (EVT_EXEC, caller),
            (proposal_id, proposal.token_id, proposal.proposed_tier),
        );
        Ok(())
    }

    // Read-only helpers

    pub fn get_record(env: Env, wallet: Address) -> Option<ReputationRecord> {
        Storage::get_wallet_token(&env, &wallet).and_then(|id| Storage::get_record(&env, id))
    }

    pub fn get_record_by_id(env: Env, token_id: u64) -> Option<ReputationRecord> {
        Storage::get_record(&env, token_id)
    }

    pub fn get_proposal(env: Env, proposal_id: u64) -> Option<Proposal> {
        Storage::get_proposal(&env, proposal_id)
    }

    pub fn get_vote(env: Env, proposal_id: u64, voter: Address) -> Option<VoteRecord> {
        Storage::get_vote(&env, proposal_id, &voter)
    }

    pub fn has_voted(env: Env, proposal_id: u64, voter: Address) -> bool {
        Storage::has_voted(&env, proposal_id, &voter)
    }

    pub fn proposal_state(env: Env, proposal_id: u64) -> Result<ProposalState, Error> {
        let proposal = Storage::get_proposal(&env, proposal_id).ok_or(Error::ProposalNotFound)?;
        Ok(Self::state_of(&env, &proposal))
    }

    /// Deterministic descriptive document for a record.
    pub fn render(env: Env, token_id: u64) -> Result<RecordMetadata, Error> {
        let record = Storage::get_record(&env, token_id).ok_or(Error::RecordNotFound)?;
        Ok(metadata::render_record(&record))
    }

    pub fn total_records(env: Env) -> u64 {
        Storage::get_token_count(&env)
    }

    pub fn total_proposals(env: Env) -> u64 {
        Storage::get_proposal_count(&env)
    }

    pub fn get_admin(env: Env) -> Option<Address> {
        Storage::get_admin(&env)
    }

    pub fn get_identity_registry(env: Env) -> Option<Address> {
        Storage::get_identity_registry(&env)
    }

    // Internal helpers

    fn require_admin(env: &Env, caller: &Address) -> Result<(), Error> {
        caller.require_auth();

        let stored_admin: Option<Address> = Storage::get_admin(env);
        match stored_admin {
            Some(stored) if stored == *caller => Ok(()),
            Some(_) => Err(Error::NotAuthorized),
            None => Err(Error::NotInitialized),
        }
    }

    fn holds_active_record(env: &Env, wallet: &Address) -> bool {
        match Storage::get_wallet_token(env, wallet).and_then(|id| Storage::get_record(env, id)) {
            Some(record) => record.active,
            None => false,
        }
    }

    /// Fetch the caller's credential hash from the identity registry. Any
    /// failure along the way (unreachable registry, unknown wallet) means
    /// "not linked", never a failed mint.
    fn linked_identity(env: &Env, registry: &Address, wallet: &Address) -> Option<BytesN<32>> {
        let args: Vec<Val> = Vec::from_array(env, [wallet.into_val(env)]);

        match env.try_invoke_contract::<bool, soroban_sdk::Error>(
            registry,
            &Symbol::new(env, "has_identity"),
            args.clone(),
        ) {
            Ok(Ok(true)) => (),
            _ => return None,
        }

        match env.try_invoke_contract::<Option<BytesN<32>>, soroban_sdk::Error>(
            registry,
            &Symbol::new(env, "identity_hash"),
            args,
        ) {
            Ok(Ok(hash)) => hash,
            _ => None,
        }
    }

    fn state_of(env: &Env, proposal: &Proposal) -> ProposalState {
        if proposal.executed {
            ProposalState::Executed
        } else if env.ledger().timestamp() < proposal.deadline {
            ProposalState::Open
        } else if proposal.votes_for > proposal.votes_against && proposal.votes_for >= MIN_QUORUM {
            ProposalState::Passed
        } else {
            ProposalState::Failed
        }
    }
}

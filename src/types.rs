multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Proposal Status: lifecycle states
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ProposalStatus {
    /// Created or edited by the proposer. Voting has not started.
    Pending,
    /// Voting is open until `end_time`.
    Active,
    /// Quorum and threshold met at finalization. Terminal.
    Approved,
    /// Quorum or threshold missed at finalization. Terminal.
    Rejected,
}

// ============================================================
// Proposal Type: fixed category set
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ProposalType {
    Grant,
    Education,
    Arts,
}

impl ProposalType {
    /// Longest accepted category name, in bytes.
    pub const MAX_NAME_LEN: usize = 9;

    pub fn from_name(name: &[u8]) -> Option<Self> {
        match name {
            b"grant" => Some(ProposalType::Grant),
            b"education" => Some(ProposalType::Education),
            b"arts" => Some(ProposalType::Arts),
            _ => None,
        }
    }
}

// ============================================================
// Proposal: the core ledger record
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    pub title: ManagedBuffer<M>,
    pub description: ManagedBuffer<M>,
    pub requested_amount: BigUint<M>,
    pub recipient: ManagedAddress<M>,
    /// Informational only, never used by the lifecycle.
    pub duration: u64,
    /// Block nonce from which the proposer may open voting.
    /// Reset to the current nonce on every edit.
    pub start_time: u64,
    /// First block nonce at which votes are refused and finalization is allowed.
    pub end_time: u64,
    pub status: ProposalStatus,
    pub proposer: ManagedAddress<M>,
    pub proposal_type: ProposalType,
    /// Minimum votes_for + votes_against.
    pub quorum: u64,
    /// Minimum absolute votes_for.
    pub threshold: u64,
    pub votes_for: u64,
    pub votes_against: u64,
    pub funding_goal: BigUint<M>,
    pub milestone_count: u32,
    pub report_submitted: bool,
}

impl<M: ManagedTypeApi> Proposal<M> {
    /// Applies a proposer edit in place. `now` re-bases the pending clock.
    pub fn apply_update(
        &mut self,
        title: ManagedBuffer<M>,
        description: ManagedBuffer<M>,
        amount: BigUint<M>,
        now: u64,
    ) {
        self.title = title;
        self.description = description;
        self.requested_amount = amount;
        self.start_time = now;
    }

    pub fn record_vote(&mut self, direction: &VoteDirection) {
        match direction {
            VoteDirection::For => self.votes_for += 1,
            VoteDirection::Against => self.votes_against += 1,
        }
    }
}

// ============================================================
// Proposal Draft: createProposal arguments, not stored
// ============================================================

pub struct ProposalDraft<M: ManagedTypeApi> {
    pub title: ManagedBuffer<M>,
    pub description: ManagedBuffer<M>,
    pub requested_amount: BigUint<M>,
    pub recipient: ManagedAddress<M>,
    pub duration: u64,
    pub proposal_type: ManagedBuffer<M>,
    pub quorum: u64,
    pub threshold: u64,
    pub start_time: u64,
    pub end_time: u64,
    pub funding_goal: BigUint<M>,
    pub milestone_count: u32,
}

impl<M: ManagedTypeApi> ProposalDraft<M> {
    pub fn into_proposal(
        self,
        id: u64,
        proposer: ManagedAddress<M>,
        proposal_type: ProposalType,
    ) -> Proposal<M> {
        Proposal {
            id,
            title: self.title,
            description: self.description,
            requested_amount: self.requested_amount,
            recipient: self.recipient,
            duration: self.duration,
            start_time: self.start_time,
            end_time: self.end_time,
            status: ProposalStatus::Pending,
            proposer,
            proposal_type,
            quorum: self.quorum,
            threshold: self.threshold,
            votes_for: 0,
            votes_against: 0,
            funding_goal: self.funding_goal,
            milestone_count: self.milestone_count,
            report_submitted: false,
        }
    }
}

// ============================================================
// Proposal Update: audit entry for the most recent edit
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct ProposalUpdate<M: ManagedTypeApi> {
    pub update_title: ManagedBuffer<M>,
    pub update_description: ManagedBuffer<M>,
    pub update_amount: BigUint<M>,
    pub update_timestamp: u64,
    pub updater: ManagedAddress<M>,
}

// ============================================================
// Vote Record: one per (proposal, voter), never revoked
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub enum VoteDirection {
    Against,
    For,
}

impl VoteDirection {
    pub fn from_bool(support: bool) -> Self {
        if support {
            VoteDirection::For
        } else {
            VoteDirection::Against
        }
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct VoteRecord<M: ManagedTypeApi> {
    pub voter: ManagedAddress<M>,
    pub direction: VoteDirection,
}

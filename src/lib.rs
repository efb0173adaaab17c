#![no_std]

multiversx_sc::imports!();

pub mod errors;
pub mod types;
pub mod validation;

use errors::ProposalError;
use types::{
    Proposal, ProposalDraft, ProposalStatus, ProposalType, ProposalUpdate, VoteDirection,
    VoteRecord,
};

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait GrantLedger {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, max_proposals: u64, proposal_fee: BigUint) {
        self.next_proposal_id().set(0u64);
        self.max_proposals().set(max_proposals);
        self.proposal_fee().set(&proposal_fee);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: setGovernanceContract
    // Set once. Unlocks proposal creation and fee changes.
    // ========================================================

    #[endpoint(setGovernanceContract)]
    fn set_governance_contract(&self, address: ManagedAddress) {
        if address.is_zero() {
            self.signal(ProposalError::InvalidGovernanceContract);
        }
        if !self.governance_contract().is_empty() {
            self.signal(ProposalError::GovernanceAlreadySet);
        }

        self.governance_contract().set(&address);
        self.governance_contract_set_event(&address);
    }

    // ========================================================
    // ENDPOINT: setProposalFee
    // Any further authorization is up to the governance contract.
    // ========================================================

    #[endpoint(setProposalFee)]
    fn set_proposal_fee(&self, new_fee: BigUint) {
        if self.governance_contract().is_empty() {
            self.signal(ProposalError::NotAuthorized);
        }

        self.proposal_fee().set(&new_fee);
        self.proposal_fee_changed_event(&new_fee);
    }

    // ========================================================
    // ENDPOINT: createProposal
    // Caller attaches exactly the current fee, which is forwarded
    // to the governance contract once every check has passed.
    // ========================================================

    #[endpoint(createProposal)]
    #[payable("EGLD")]
    fn create_proposal(
        &self,
        title: ManagedBuffer,
        description: ManagedBuffer,
        requested_amount: BigUint,
        recipient: ManagedAddress,
        duration: u64,
        proposal_type: ManagedBuffer,
        quorum: u64,
        threshold: u64,
        start_time: u64,
        end_time: u64,
        funding_goal: BigUint,
        milestone_count: u32,
    ) -> u64 {
        let caller = self.blockchain().get_caller();
        let now = self.blockchain().get_block_nonce();

        let draft = ProposalDraft {
            title,
            description,
            requested_amount,
            recipient,
            duration,
            proposal_type,
            quorum,
            threshold,
            start_time,
            end_time,
            funding_goal,
            milestone_count,
        };
        let proposal_type = match self.check_draft(&caller, &draft, now) {
            Ok(proposal_type) => proposal_type,
            Err(err) => self.signal(err),
        };

        self.collect_fee();

        let proposal_id = self.next_proposal_id().get();
        let proposal = draft.into_proposal(proposal_id, caller.clone(), proposal_type);

        self.proposal_ids_by_title()
            .insert(proposal.title.clone(), proposal_id);
        self.proposals(proposal_id).set(&proposal);
        self.next_proposal_id().set(proposal_id + 1);

        self.proposal_created_event(
            proposal_id,
            &caller,
            &proposal.recipient,
            &proposal.requested_amount,
        );

        proposal_id
    }

    // ========================================================
    // ENDPOINT: updateProposal
    // Proposer edits title, description and amount while pending.
    // ========================================================

    #[endpoint(updateProposal)]
    fn update_proposal(
        &self,
        proposal_id: u64,
        update_title: ManagedBuffer,
        update_description: ManagedBuffer,
        update_amount: BigUint,
    ) {
        let caller = self.blockchain().get_caller();
        let now = self.blockchain().get_block_nonce();

        let mut proposal = self.require_proposal(proposal_id);
        if proposal.proposer != caller {
            self.signal(ProposalError::NotProposer);
        }
        if proposal.status != ProposalStatus::Pending {
            self.signal(ProposalError::ProposalNotPending);
        }
        if let Err(err) = self.check_edit(
            proposal_id,
            &update_title,
            &update_description,
            &update_amount,
        ) {
            self.signal(err);
        }

        // Re-point the title index before the record forgets its old title
        let mut titles = self.proposal_ids_by_title();
        titles.remove(&proposal.title);
        titles.insert(update_title.clone(), proposal_id);

        proposal.apply_update(
            update_title.clone(),
            update_description.clone(),
            update_amount.clone(),
            now,
        );
        self.proposals(proposal_id).set(&proposal);

        let update = ProposalUpdate {
            update_title,
            update_description,
            update_amount,
            update_timestamp: now,
            updater: caller.clone(),
        };
        self.proposal_updates(proposal_id).set(&update);

        self.proposal_updated_event(proposal_id, &caller, now);
    }

    // ========================================================
    // ENDPOINT: startVoting
    // Pending → Active, by the proposer, from start_time on.
    // ========================================================

    #[endpoint(startVoting)]
    fn start_voting(&self, proposal_id: u64) {
        let caller = self.blockchain().get_caller();
        let now = self.blockchain().get_block_nonce();

        let mut proposal = self.require_proposal(proposal_id);
        if proposal.proposer != caller {
            self.signal(ProposalError::NotProposer);
        }
        if proposal.status != ProposalStatus::Pending {
            self.signal(ProposalError::ProposalNotPending);
        }
        if now < proposal.start_time {
            self.signal(ProposalError::VotingNotStarted);
        }

        proposal.status = ProposalStatus::Active;
        self.proposals(proposal_id).set(&proposal);

        self.voting_started_event(proposal_id, now);
    }

    // ========================================================
    // ENDPOINT: voteOnProposal
    // One unweighted vote per identity, before end_time.
    // ========================================================

    #[endpoint(voteOnProposal)]
    fn vote_on_proposal(&self, proposal_id: u64, vote: bool) {
        let caller = self.blockchain().get_caller();
        let now = self.blockchain().get_block_nonce();

        let mut proposal = self.require_proposal(proposal_id);
        if proposal.status != ProposalStatus::Active {
            self.signal(ProposalError::ProposalNotActive);
        }
        if now >= proposal.end_time {
            self.signal(ProposalError::VotingEnded);
        }
        if self.has_voted(proposal_id, &caller).get() {
            self.signal(ProposalError::AlreadyVoted);
        }

        let direction = VoteDirection::from_bool(vote);
        proposal.record_vote(&direction);

        let vote_record = VoteRecord {
            voter: caller.clone(),
            direction,
        };
        self.vote_records(proposal_id).push(&vote_record);
        self.has_voted(proposal_id, &caller).set(true);
        self.proposals(proposal_id).set(&proposal);

        self.vote_event(proposal_id, &caller, vote);
    }

    // ========================================================
    // ENDPOINT: finalizeProposal
    // Active → Approved or Rejected once end_time is reached.
    // ========================================================

    #[endpoint(finalizeProposal)]
    fn finalize_proposal(&self, proposal_id: u64) {
        let now = self.blockchain().get_block_nonce();

        let mut proposal = self.require_proposal(proposal_id);
        if proposal.status != ProposalStatus::Active {
            self.signal(ProposalError::ProposalNotActive);
        }
        if now < proposal.end_time {
            self.signal(ProposalError::VotingNotEnded);
        }

        proposal.status = validation::decide_outcome(
            proposal.votes_for,
            proposal.votes_against,
            proposal.quorum,
            proposal.threshold,
        );
        self.proposals(proposal_id).set(&proposal);

        if proposal.status == ProposalStatus::Approved {
            self.proposal_approved_event(proposal_id, proposal.votes_for, proposal.votes_against);
        } else {
            self.proposal_rejected_event(proposal_id, proposal.votes_for, proposal.votes_against);
        }
    }

    // ========================================================
    // ENDPOINT: submitReport
    // Recipient of an approved proposal sets the report flag.
    // ========================================================

    #[endpoint(submitReport)]
    fn submit_report(&self, proposal_id: u64, report_submitted: bool) {
        let caller = self.blockchain().get_caller();

        let mut proposal = self.require_proposal(proposal_id);
        if proposal.recipient != caller {
            self.signal(ProposalError::NotRecipient);
        }
        if proposal.status != ProposalStatus::Approved {
            self.signal(ProposalError::ProposalNotApproved);
        }

        proposal.report_submitted = report_submitted;
        self.proposals(proposal_id).set(&proposal);

        self.report_submitted_event(proposal_id, &caller, report_submitted);
    }

    // ========================================================
    // INTERNAL: checks
    // ========================================================

    /// Runs the creation checks in their fixed order. The first failure wins.
    fn check_draft(
        &self,
        caller: &ManagedAddress,
        draft: &ProposalDraft<Self::Api>,
        now: u64,
    ) -> Result<ProposalType, ProposalError> {
        if self.next_proposal_id().get() >= self.max_proposals().get() {
            return Err(ProposalError::MaxProposalsExceeded);
        }
        validation::check_title(self.char_count(&draft.title))?;
        validation::check_description(self.char_count(&draft.description))?;
        if draft.requested_amount == 0u64 {
            return Err(ProposalError::InvalidAmount);
        }
        if &draft.recipient == caller {
            return Err(ProposalError::InvalidRecipient);
        }
        validation::check_duration(draft.duration)?;
        let proposal_type = self
            .parse_proposal_type(&draft.proposal_type)
            .ok_or(ProposalError::InvalidProposalType)?;
        validation::check_quorum(draft.quorum)?;
        validation::check_threshold(draft.threshold)?;
        validation::check_schedule(draft.start_time, draft.end_time, now)?;
        if draft.funding_goal == 0u64 {
            return Err(ProposalError::InvalidFundingGoal);
        }
        validation::check_milestones(draft.milestone_count)?;
        if self.proposal_ids_by_title().contains_key(&draft.title) {
            return Err(ProposalError::ProposalAlreadyExists);
        }
        if self.governance_contract().is_empty() {
            return Err(ProposalError::NotAuthorized);
        }

        Ok(proposal_type)
    }

    /// Keeping the proposal's own title is allowed.
    fn check_edit(
        &self,
        proposal_id: u64,
        title: &ManagedBuffer,
        description: &ManagedBuffer,
        amount: &BigUint,
    ) -> Result<(), ProposalError> {
        validation::check_title(self.char_count(title))?;
        validation::check_description(self.char_count(description))?;
        if *amount == 0u64 {
            return Err(ProposalError::InvalidAmount);
        }
        match self.proposal_ids_by_title().get(title) {
            Some(holder) if holder != proposal_id => Err(ProposalError::ProposalAlreadyExists),
            _ => Ok(()),
        }
    }

    /// `None` when the text is too long to possibly be valid, or not UTF-8.
    fn char_count(&self, text: &ManagedBuffer) -> Option<usize> {
        if text.len() > validation::TEXT_SCRATCH_LEN {
            return None;
        }
        let mut scratch = [0u8; validation::TEXT_SCRATCH_LEN];
        let bytes = text.load_to_byte_array(&mut scratch);
        validation::utf8_char_count(bytes)
    }

    fn parse_proposal_type(&self, name: &ManagedBuffer) -> Option<ProposalType> {
        if name.len() > ProposalType::MAX_NAME_LEN {
            return None;
        }
        let mut scratch = [0u8; ProposalType::MAX_NAME_LEN];
        ProposalType::from_name(name.load_to_byte_array(&mut scratch))
    }

    // ========================================================
    // INTERNAL: fee collection
    // Runs after validation. A failure here reverts the whole call,
    // so no id or title is consumed.
    // ========================================================

    fn collect_fee(&self) {
        let payment = self.call_value().egld_value().clone_value();
        let fee = self.proposal_fee().get();
        if payment != fee {
            self.signal(ProposalError::FeePaymentMismatch);
        }

        if fee > 0u64 {
            let governance = self.governance_contract().get();
            self.send().direct_egld(&governance, &fee);
        }
    }

    // ========================================================
    // INTERNAL: error signalling
    // ========================================================

    fn require_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        let mapper = self.proposals(proposal_id);
        if mapper.is_empty() {
            self.signal(ProposalError::ProposalNotFound);
        }
        mapper.get()
    }

    fn signal(&self, err: ProposalError) -> ! {
        sc_panic!(err.as_str())
    }

    // ========================================================
    // VIEWS: read-only queries
    // ========================================================

    #[view(getProposal)]
    fn get_proposal(&self, proposal_id: u64) -> OptionalValue<Proposal<Self::Api>> {
        let mapper = self.proposals(proposal_id);
        if mapper.is_empty() {
            return OptionalValue::None;
        }
        OptionalValue::Some(mapper.get())
    }

    #[view(getProposals)]
    fn get_proposals(&self, from: u64, count: u64) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let total = self.next_proposal_id().get();
        let end = core::cmp::min(from.saturating_add(count), total);

        for proposal_id in from..end {
            result.push(self.proposals(proposal_id).get());
        }
        result
    }

    #[view(getProposalCount)]
    fn get_proposal_count(&self) -> u64 {
        self.next_proposal_id().get()
    }

    #[view(checkProposalExistence)]
    fn check_proposal_existence(&self, title: ManagedBuffer) -> bool {
        self.proposal_ids_by_title().contains_key(&title)
    }

    #[view(getProposalIdByTitle)]
    fn get_proposal_id_by_title(&self, title: ManagedBuffer) -> OptionalValue<u64> {
        match self.proposal_ids_by_title().get(&title) {
            Some(proposal_id) => OptionalValue::Some(proposal_id),
            None => OptionalValue::None,
        }
    }

    #[view(getProposalUpdate)]
    fn get_proposal_update(&self, proposal_id: u64) -> OptionalValue<ProposalUpdate<Self::Api>> {
        let mapper = self.proposal_updates(proposal_id);
        if mapper.is_empty() {
            return OptionalValue::None;
        }
        OptionalValue::Some(mapper.get())
    }

    #[view(hasVoted)]
    fn has_voter_voted(&self, proposal_id: u64, voter: ManagedAddress) -> bool {
        self.has_voted(proposal_id, &voter).get()
    }

    #[view(getVoteRecords)]
    fn get_vote_records(&self, proposal_id: u64) -> MultiValueEncoded<VoteRecord<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        for record in self.vote_records(proposal_id).iter() {
            result.push(record);
        }
        result
    }

    #[view(getGovernanceContract)]
    fn get_governance_contract(&self) -> OptionalValue<ManagedAddress> {
        let mapper = self.governance_contract();
        if mapper.is_empty() {
            return OptionalValue::None;
        }
        OptionalValue::Some(mapper.get())
    }

    #[view(getProposalFee)]
    fn get_proposal_fee(&self) -> BigUint {
        self.proposal_fee().get()
    }

    #[view(getMaxProposals)]
    fn get_max_proposals(&self) -> u64 {
        self.max_proposals().get()
    }

    #[view(getLedgerConfig)]
    fn get_ledger_config(&self) -> MultiValue3<u64, u64, BigUint> {
        let next_id = self.next_proposal_id().get();
        let max = self.max_proposals().get();
        let fee = self.proposal_fee().get();
        (next_id, max, fee).into()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("governanceContractSet")]
    fn governance_contract_set_event(&self, #[indexed] governance: &ManagedAddress);

    #[event("proposalFeeChanged")]
    fn proposal_fee_changed_event(&self, #[indexed] new_fee: &BigUint);

    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] proposer: &ManagedAddress,
        #[indexed] recipient: &ManagedAddress,
        requested_amount: &BigUint,
    );

    #[event("proposalUpdated")]
    fn proposal_updated_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] updater: &ManagedAddress,
        #[indexed] updated_at: u64,
    );

    #[event("votingStarted")]
    fn voting_started_event(&self, #[indexed] proposal_id: u64, #[indexed] started_at: u64);

    #[event("vote")]
    fn vote_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] support: bool,
    );

    #[event("proposalApproved")]
    fn proposal_approved_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] votes_for: u64,
        #[indexed] votes_against: u64,
    );

    #[event("proposalRejected")]
    fn proposal_rejected_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] votes_for: u64,
        #[indexed] votes_against: u64,
    );

    #[event("reportSubmitted")]
    fn report_submitted_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] recipient: &ManagedAddress,
        #[indexed] report_submitted: bool,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Configuration ──

    #[storage_mapper("nextProposalId")]
    fn next_proposal_id(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("maxProposals")]
    fn max_proposals(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposalFee")]
    fn proposal_fee(&self) -> SingleValueMapper<BigUint>;

    /// Empty until set. Never changes afterwards.
    #[storage_mapper("governanceContract")]
    fn governance_contract(&self) -> SingleValueMapper<ManagedAddress>;

    // ── Proposals ──

    #[storage_mapper("proposals")]
    fn proposals(&self, id: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    #[storage_mapper("proposalUpdates")]
    fn proposal_updates(&self, id: u64) -> SingleValueMapper<ProposalUpdate<Self::Api>>;

    // A MapMapper keeps id 0 distinguishable from a missing title
    #[storage_mapper("proposalIdsByTitle")]
    fn proposal_ids_by_title(&self) -> MapMapper<ManagedBuffer, u64>;

    // ── Votes ──

    #[storage_mapper("hasVoted")]
    fn has_voted(&self, proposal_id: u64, voter: &ManagedAddress) -> SingleValueMapper<bool>;

    #[storage_mapper("voteRecords")]
    fn vote_records(&self, proposal_id: u64) -> VecMapper<VoteRecord<Self::Api>>;
}

#![no_std]

multiversx_sc::imports!();

pub mod errors;
pub mod types;

use errors::*;
use types::{Proposal, Voter, WorkflowStatus};

// ============================================================
// Constants
// ============================================================

/// Longest proposal description accepted, in bytes
pub const MAX_DESCRIPTION_LENGTH: usize = 1_000;

/// Registry size cap, keeps the tally scan within one transaction's gas
pub const MAX_PROPOSALS: usize = 100;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait VotingApp {
    // ========================================================
    // Init / Upgrade
    // The deployer becomes the administrator for the lifetime
    // of the election.
    // ========================================================

    #[init]
    fn init(&self) {
        let caller = self.blockchain().get_caller();
        self.administrator().set(&caller);
        self.workflow_status().set(WorkflowStatus::NotStarted);
        self.voters_count().set(0u64);
        self.total_votes().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: registerVoter
    // Whitelisting happens before proposals registration opens.
    // ========================================================

    #[endpoint(registerVoter)]
    fn register_voter(&self, voter: ManagedAddress) {
        self.require_administrator();
        self.require_status(
            WorkflowStatus::NotStarted,
            ERR_NOT_BEFORE_PROPOSALS_REGISTRATION,
        );
        require!(
            !self.is_registered_voter(&voter),
            ERR_VOTER_ALREADY_REGISTERED
        );

        self.voters(&voter).set(Voter::registered());
        self.voters_count().update(|count| *count += 1);

        self.voter_registered_event(&voter);
    }

    // ========================================================
    // WORKFLOW: administrator-only phase transitions
    // ========================================================

    #[endpoint(startProposalsRegistration)]
    fn start_proposals_registration(&self) {
        self.advance_workflow(
            WorkflowStatus::NotStarted,
            ERR_NOT_BEFORE_PROPOSALS_REGISTRATION,
        );
    }

    #[endpoint(endProposalsRegistration)]
    fn end_proposals_registration(&self) {
        self.advance_workflow(
            WorkflowStatus::ProposalsRegistrationStarted,
            ERR_NOT_DURING_PROPOSALS_REGISTRATION,
        );
    }

    #[endpoint(startVotingSession)]
    fn start_voting_session(&self) {
        self.advance_workflow(
            WorkflowStatus::ProposalsRegistrationEnded,
            ERR_NOT_AFTER_PROPOSALS_REGISTRATION,
        );
    }

    #[endpoint(endVotingSession)]
    fn end_voting_session(&self) {
        self.advance_workflow(
            WorkflowStatus::VotingSessionStarted,
            ERR_NOT_DURING_VOTING_SESSION,
        );
    }

    // ========================================================
    // ENDPOINT: submitProposal
    // Any registered voter, during proposals registration.
    // ========================================================

    #[endpoint(submitProposal)]
    fn submit_proposal(&self, description: ManagedBuffer) -> u64 {
        let caller = self.blockchain().get_caller();
        self.require_registered_voter(&caller);
        self.require_status(
            WorkflowStatus::ProposalsRegistrationStarted,
            ERR_NOT_DURING_PROPOSALS_REGISTRATION,
        );
        require!(!description.is_empty(), ERR_EMPTY_DESCRIPTION);
        require!(
            description.len() <= MAX_DESCRIPTION_LENGTH,
            ERR_DESCRIPTION_TOO_LONG
        );
        require!(
            self.proposals().len() < MAX_PROPOSALS,
            ERR_TOO_MANY_PROPOSALS
        );

        // VecMapper indexes from 1, so the push index is the id
        let proposal_id = self.proposals().len() as u64 + 1;
        let proposal = Proposal {
            id: proposal_id,
            description,
            proposer: caller.clone(),
        };
        self.proposals().push(&proposal);

        self.proposal_registered_event(proposal_id, &caller);

        proposal_id
    }

    // ========================================================
    // ENDPOINT: castVote
    // One ballot per registered voter, during the voting session.
    // ========================================================

    #[endpoint(castVote)]
    fn cast_vote(&self, proposal_id: u64) {
        let caller = self.blockchain().get_caller();
        self.require_registered_voter(&caller);
        self.require_status(
            WorkflowStatus::VotingSessionStarted,
            ERR_NOT_DURING_VOTING_SESSION,
        );

        let mut voter = self.voters(&caller).get();
        require!(!voter.has_voted, ERR_ALREADY_VOTED);
        self.require_proposal_exists(proposal_id);

        // All checks passed, nothing has been written yet
        voter.has_voted = true;
        voter.voted_proposal_id = Some(proposal_id);
        self.voters(&caller).set(&voter);
        self.vote_count(proposal_id).update(|count| *count += 1);
        self.total_votes().update(|total| *total += 1);

        self.voted_event(&caller, proposal_id);
    }

    // ========================================================
    // ENDPOINT: tallyVotes
    // Highest count wins. Ties go to the lowest proposal id.
    // ========================================================

    #[endpoint(tallyVotes)]
    fn tally_votes(&self) {
        self.require_administrator();
        self.require_status(
            WorkflowStatus::VotingSessionEnded,
            ERR_NOT_AFTER_VOTING_SESSION,
        );

        let proposal_count = self.proposals().len() as u64;
        let mut winner: Option<(u64, u64)> = None;
        for proposal_id in 1..=proposal_count {
            let count = self.vote_count(proposal_id).get();
            let leads = match winner {
                Some((_, best)) => count > best,
                None => true,
            };
            if leads {
                winner = Some((proposal_id, count));
            }
        }

        // An election closed without proposals still terminates, just with no winner
        if let Some((winning_id, winning_count)) = winner {
            self.winning_proposal_id().set(winning_id);
            self.votes_tallied_event(winning_id, winning_count);
        }

        self.move_to_next_status(WorkflowStatus::VotingSessionEnded);
    }

    // ========================================================
    // INTERNAL: guards
    // Role guard always runs before the phase guard.
    // ========================================================

    fn require_administrator(&self) {
        let caller = self.blockchain().get_caller();
        require!(
            caller == self.administrator().get(),
            ERR_NOT_ADMINISTRATOR
        );
    }

    fn require_registered_voter(&self, caller: &ManagedAddress) {
        require!(
            self.is_registered_voter(caller),
            ERR_NOT_REGISTERED_VOTER
        );
    }

    fn require_status(&self, required: WorkflowStatus, error_message: &str) {
        let current = self.workflow_status().get();
        require!(current.rank() == required.rank(), error_message);
    }

    fn require_proposal_exists(&self, proposal_id: u64) {
        require!(
            proposal_id >= 1 && proposal_id <= self.proposals().len() as u64,
            ERR_PROPOSAL_NOT_FOUND
        );
    }

    fn is_registered_voter(&self, address: &ManagedAddress) -> bool {
        let voter = self.voters(address);
        !voter.is_empty() && voter.get().is_registered
    }

    /// Administrator-gated transition out of `from`.
    fn advance_workflow(&self, from: WorkflowStatus, error_message: &str) {
        self.require_administrator();
        self.require_status(from, error_message);
        self.move_to_next_status(from);
    }

    /// Caller must have checked that the current status is `from`.
    fn move_to_next_status(&self, from: WorkflowStatus) {
        let next = match from.next() {
            Some(status) => status,
            None => sc_panic!(ERR_WORKFLOW_FINISHED),
        };
        self.workflow_status().set(next);

        self.workflow_status_change_event(from, next);
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(administrator)]
    fn get_administrator(&self) -> ManagedAddress {
        self.administrator().get()
    }

    #[view(getWorkflowStatus)]
    fn get_workflow_status(&self) -> WorkflowStatus {
        self.workflow_status().get()
    }

    #[view(getVoter)]
    fn get_voter(&self, address: &ManagedAddress) -> Voter {
        require!(!self.voters(address).is_empty(), ERR_VOTER_NOT_FOUND);
        self.voters(address).get()
    }

    #[view(isRegisteredVoter)]
    fn is_registered_voter_view(&self, address: &ManagedAddress) -> bool {
        self.is_registered_voter(address)
    }

    #[view(getVotersCount)]
    fn get_voters_count(&self) -> u64 {
        self.voters_count().get()
    }

    #[view(getProposal)]
    fn get_proposal(&self, id: u64) -> Proposal<Self::Api> {
        self.require_proposal_exists(id);
        self.proposals().get(id as usize)
    }

    #[view(getProposalsCount)]
    fn get_proposals_count(&self) -> u64 {
        self.proposals().len() as u64
    }

    #[view(getProposals)]
    fn get_proposals(&self, from: u64, count: u64) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let proposals = self.proposals();
        let first = core::cmp::max(from, 1) as usize;
        let last = core::cmp::min(first.saturating_add(count as usize), proposals.len() + 1);

        for id in first..last {
            result.push(proposals.get(id));
        }
        result
    }

    #[view(getVoteCount)]
    fn get_vote_count(&self, proposal_id: u64) -> u64 {
        self.require_proposal_exists(proposal_id);
        self.vote_count(proposal_id).get()
    }

    #[view(getTotalVotes)]
    fn get_total_votes(&self) -> u64 {
        self.total_votes().get()
    }

    #[view(getWinner)]
    fn get_winner(&self) -> u64 {
        self.require_status(WorkflowStatus::VotesTallied, ERR_NOT_AFTER_VOTES_TALLIED);
        require!(!self.winning_proposal_id().is_empty(), ERR_NO_PROPOSALS);
        self.winning_proposal_id().get()
    }

    #[view(getWinningProposal)]
    fn get_winning_proposal(&self) -> MultiValue3<u64, ManagedBuffer, u64> {
        let winning_id = self.get_winner();
        let proposal = self.proposals().get(winning_id as usize);
        let count = self.vote_count(winning_id).get();
        (winning_id, proposal.description, count).into()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("workflowStatusChange")]
    fn workflow_status_change_event(
        &self,
        #[indexed] previous_status: WorkflowStatus,
        #[indexed] new_status: WorkflowStatus,
    );

    #[event("voterRegistered")]
    fn voter_registered_event(&self, #[indexed] voter: &ManagedAddress);

    #[event("proposalRegistered")]
    fn proposal_registered_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] proposer: &ManagedAddress,
    );

    #[event("voted")]
    fn voted_event(&self, #[indexed] voter: &ManagedAddress, #[indexed] proposal_id: u64);

    #[event("votesTallied")]
    fn votes_tallied_event(
        &self,
        #[indexed] winning_proposal_id: u64,
        #[indexed] winning_vote_count: u64,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Workflow ──

    #[storage_mapper("administrator")]
    fn administrator(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("workflowStatus")]
    fn workflow_status(&self) -> SingleValueMapper<WorkflowStatus>;

    // ── Voters ──

    #[storage_mapper("voters")]
    fn voters(&self, address: &ManagedAddress) -> SingleValueMapper<Voter>;

    #[storage_mapper("votersCount")]
    fn voters_count(&self) -> SingleValueMapper<u64>;

    // ── Proposals ──

    #[storage_mapper("proposals")]
    fn proposals(&self) -> VecMapper<Proposal<Self::Api>>;

    // ── Ballot box ──

    #[storage_mapper("voteCount")]
    fn vote_count(&self, proposal_id: u64) -> SingleValueMapper<u64>;

    #[storage_mapper("totalVotes")]
    fn total_votes(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("winningProposalId")]
    fn winning_proposal_id(&self) -> SingleValueMapper<u64>;
}

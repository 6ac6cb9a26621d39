multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Workflow Status — election lifecycle, strictly increasing
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum WorkflowStatus {
    /// Deployed. The administrator whitelists voters.
    NotStarted,
    /// Registered voters may submit proposals.
    ProposalsRegistrationStarted,
    /// Proposal list is frozen.
    ProposalsRegistrationEnded,
    /// Registered voters may cast their single ballot.
    VotingSessionStarted,
    /// Ballot box is closed, waiting for the tally.
    VotingSessionEnded,
    /// Winner recorded. Terminal state.
    VotesTallied,
}

impl WorkflowStatus {
    pub const fn rank(self) -> u8 {
        match self {
            WorkflowStatus::NotStarted => 0,
            WorkflowStatus::ProposalsRegistrationStarted => 1,
            WorkflowStatus::ProposalsRegistrationEnded => 2,
            WorkflowStatus::VotingSessionStarted => 3,
            WorkflowStatus::VotingSessionEnded => 4,
            WorkflowStatus::VotesTallied => 5,
        }
    }

    pub const fn from_rank(rank: u8) -> Option<Self> {
        match rank {
            0 => Some(WorkflowStatus::NotStarted),
            1 => Some(WorkflowStatus::ProposalsRegistrationStarted),
            2 => Some(WorkflowStatus::ProposalsRegistrationEnded),
            3 => Some(WorkflowStatus::VotingSessionStarted),
            4 => Some(WorkflowStatus::VotingSessionEnded),
            5 => Some(WorkflowStatus::VotesTallied),
            _ => None,
        }
    }

    /// The phase that follows this one, `None` once votes are tallied.
    pub const fn next(self) -> Option<Self> {
        Self::from_rank(self.rank() + 1)
    }
}

// ============================================================
// Proposal — immutable once registered
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    /// 1-based position in the registry.
    pub id: u64,
    pub description: ManagedBuffer<M>,
    pub proposer: ManagedAddress<M>,
}

// ============================================================
// Voter — whitelisted before the election opens
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Voter {
    pub is_registered: bool,
    pub has_voted: bool,
    /// Set once, together with `has_voted`.
    pub voted_proposal_id: Option<u64>,
}

impl Voter {
    pub fn registered() -> Self {
        Voter {
            is_registered: true,
            has_voted: false,
            voted_proposal_id: None,
        }
    }
}

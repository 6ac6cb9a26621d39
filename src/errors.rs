//! User error messages. These strings are surfaced verbatim to callers and
//! must stay stable.

// ── Unauthorized ──

pub const ERR_NOT_ADMINISTRATOR: &str = "the caller of this function must be the administrator";
pub const ERR_NOT_REGISTERED_VOTER: &str = "the caller of this function must be a registered voter";

// ── InvalidPhase ──

pub const ERR_NOT_BEFORE_PROPOSALS_REGISTRATION: &str =
    "this function can be called only before proposals registration has started";
pub const ERR_NOT_DURING_PROPOSALS_REGISTRATION: &str =
    "this function can be called only during proposals registration";
pub const ERR_NOT_AFTER_PROPOSALS_REGISTRATION: &str =
    "this function can be called only after proposals registration has ended";
pub const ERR_NOT_DURING_VOTING_SESSION: &str =
    "this function can be called only during the voting session";
pub const ERR_NOT_AFTER_VOTING_SESSION: &str =
    "this function can be called only after the voting session has ended";
pub const ERR_NOT_AFTER_VOTES_TALLIED: &str =
    "this function can be called only after votes have been tallied";
pub const ERR_WORKFLOW_FINISHED: &str = "the workflow has already reached its final status";

// ── InvalidInput ──

pub const ERR_EMPTY_DESCRIPTION: &str = "the proposal description cannot be empty";
pub const ERR_DESCRIPTION_TOO_LONG: &str = "the proposal description is too long";
pub const ERR_TOO_MANY_PROPOSALS: &str = "the maximum number of proposals has been reached";
pub const ERR_VOTER_ALREADY_REGISTERED: &str = "the voter is already registered";

// ── AlreadyVoted ──

pub const ERR_ALREADY_VOTED: &str = "the caller has already voted";

// ── NotFound ──

pub const ERR_PROPOSAL_NOT_FOUND: &str = "proposal not found";
pub const ERR_VOTER_NOT_FOUND: &str = "voter not found";
pub const ERR_NO_PROPOSALS: &str = "no proposal has been registered";

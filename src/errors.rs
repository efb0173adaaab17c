// ============================================================
// Error codes
//
// Every rejected call is signalled with one of these messages.
// The numeric prefix is stable and part of the public interface.
// ============================================================

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ProposalError {
    NotAuthorized,
    InvalidTitle,
    InvalidDescription,
    InvalidAmount,
    InvalidRecipient,
    InvalidDuration,
    ProposalAlreadyExists,
    ProposalNotFound,
    NotProposer,
    NotRecipient,
    ProposalNotPending,
    VotingNotStarted,
    VotingEnded,
    AlreadyVoted,
    VotingNotEnded,
    ProposalNotApproved,
    GovernanceAlreadySet,
    MaxProposalsExceeded,
    InvalidProposalType,
    InvalidStartTime,
    InvalidEndTime,
    InvalidQuorum,
    InvalidThreshold,
    ProposalNotActive,
    InvalidGovernanceContract,
    FeePaymentMismatch,
    InvalidFundingGoal,
    InvalidMilestone,
}

impl ProposalError {
    pub const ALL: [ProposalError; 28] = [
        ProposalError::NotAuthorized,
        ProposalError::InvalidTitle,
        ProposalError::InvalidDescription,
        ProposalError::InvalidAmount,
        ProposalError::InvalidRecipient,
        ProposalError::InvalidDuration,
        ProposalError::ProposalAlreadyExists,
        ProposalError::ProposalNotFound,
        ProposalError::NotProposer,
        ProposalError::NotRecipient,
        ProposalError::ProposalNotPending,
        ProposalError::VotingNotStarted,
        ProposalError::VotingEnded,
        ProposalError::AlreadyVoted,
        ProposalError::VotingNotEnded,
        ProposalError::ProposalNotApproved,
        ProposalError::GovernanceAlreadySet,
        ProposalError::MaxProposalsExceeded,
        ProposalError::InvalidProposalType,
        ProposalError::InvalidStartTime,
        ProposalError::InvalidEndTime,
        ProposalError::InvalidQuorum,
        ProposalError::InvalidThreshold,
        ProposalError::ProposalNotActive,
        ProposalError::InvalidGovernanceContract,
        ProposalError::FeePaymentMismatch,
        ProposalError::InvalidFundingGoal,
        ProposalError::InvalidMilestone,
    ];

    /// Public error code. `as_str()` carries it as the `E<code>:` prefix,
    /// which is all a caller sees of it on chain.
    pub fn code(&self) -> u32 {
        match self {
            ProposalError::NotAuthorized => 100,
            ProposalError::InvalidTitle => 101,
            ProposalError::InvalidDescription => 102,
            ProposalError::InvalidAmount => 103,
            ProposalError::InvalidRecipient => 104,
            ProposalError::InvalidDuration => 105,
            ProposalError::ProposalAlreadyExists => 106,
            ProposalError::ProposalNotFound => 107,
            ProposalError::NotProposer => 108,
            ProposalError::NotRecipient => 109,
            ProposalError::ProposalNotPending => 110,
            ProposalError::VotingNotStarted => 111,
            ProposalError::VotingEnded => 112,
            ProposalError::AlreadyVoted => 113,
            ProposalError::VotingNotEnded => 114,
            ProposalError::ProposalNotApproved => 115,
            ProposalError::GovernanceAlreadySet => 116,
            ProposalError::MaxProposalsExceeded => 118,
            ProposalError::InvalidProposalType => 119,
            ProposalError::InvalidStartTime => 120,
            ProposalError::InvalidEndTime => 121,
            ProposalError::InvalidQuorum => 122,
            ProposalError::InvalidThreshold => 123,
            ProposalError::ProposalNotActive => 124,
            ProposalError::InvalidGovernanceContract => 126,
            ProposalError::FeePaymentMismatch => 127,
            ProposalError::InvalidFundingGoal => 128,
            ProposalError::InvalidMilestone => 129,
        }
    }

    /// Message signalled to the caller. Starts with the numeric code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProposalError::NotAuthorized => "E100: governance contract not set",
            ProposalError::InvalidTitle => "E101: invalid title",
            ProposalError::InvalidDescription => "E102: invalid description",
            ProposalError::InvalidAmount => "E103: invalid amount",
            ProposalError::InvalidRecipient => "E104: recipient cannot be the proposer",
            ProposalError::InvalidDuration => "E105: invalid duration",
            ProposalError::ProposalAlreadyExists => "E106: title already in use",
            ProposalError::ProposalNotFound => "E107: proposal not found",
            ProposalError::NotProposer => "E108: only the proposer can do this",
            ProposalError::NotRecipient => "E109: only the recipient can do this",
            ProposalError::ProposalNotPending => "E110: proposal is not pending",
            ProposalError::VotingNotStarted => "E111: start time not reached",
            ProposalError::VotingEnded => "E112: voting period has ended",
            ProposalError::AlreadyVoted => "E113: already voted",
            ProposalError::VotingNotEnded => "E114: voting period has not ended",
            ProposalError::ProposalNotApproved => "E115: proposal is not approved",
            ProposalError::GovernanceAlreadySet => "E116: governance contract already set",
            ProposalError::MaxProposalsExceeded => "E118: maximum proposal count reached",
            ProposalError::InvalidProposalType => "E119: invalid proposal type",
            ProposalError::InvalidStartTime => "E120: start time is in the past",
            ProposalError::InvalidEndTime => "E121: end time must follow start time",
            ProposalError::InvalidQuorum => "E122: quorum must be in 1..=100",
            ProposalError::InvalidThreshold => "E123: threshold must be in 1..=100",
            ProposalError::ProposalNotActive => "E124: proposal is not active",
            ProposalError::InvalidGovernanceContract => "E126: invalid governance contract",
            ProposalError::FeePaymentMismatch => "E127: payment does not match proposal fee",
            ProposalError::InvalidFundingGoal => "E128: invalid funding goal",
            ProposalError::InvalidMilestone => "E129: too many milestones",
        }
    }
}

//! Field checks and the finalization rule.
//!
//! Everything here works on plain values so it can run outside the VM.
//! The contract loads what it needs from managed types and calls these
//! in the documented order.

use crate::errors::ProposalError;
use crate::types::ProposalStatus;

pub const MAX_TITLE_CHARS: usize = 100;
pub const MAX_DESCRIPTION_CHARS: usize = 500;
pub const MAX_MILESTONES: u32 = 10;
/// Upper bound for quorum and threshold.
pub const MAX_PERCENT: u64 = 100;

/// Longest UTF-8 encoding of one char.
pub const MAX_UTF8_WIDTH: usize = 4;

/// Scratch space large enough for any text that could still be valid.
pub const TEXT_SCRATCH_LEN: usize = MAX_DESCRIPTION_CHARS * MAX_UTF8_WIDTH;

/// Char count of a UTF-8 payload. `None` if the bytes are not valid UTF-8.
pub fn utf8_char_count(bytes: &[u8]) -> Option<usize> {
    core::str::from_utf8(bytes).ok().map(|text| text.chars().count())
}

fn check_text(chars: usize, max: usize, err: ProposalError) -> Result<(), ProposalError> {
    if chars == 0 || chars > max {
        return Err(err);
    }
    Ok(())
}

/// `chars` is `None` when the payload is too large or not UTF-8.
pub fn check_title(chars: Option<usize>) -> Result<(), ProposalError> {
    let chars = chars.ok_or(ProposalError::InvalidTitle)?;
    check_text(chars, MAX_TITLE_CHARS, ProposalError::InvalidTitle)
}

pub fn check_description(chars: Option<usize>) -> Result<(), ProposalError> {
    let chars = chars.ok_or(ProposalError::InvalidDescription)?;
    check_text(chars, MAX_DESCRIPTION_CHARS, ProposalError::InvalidDescription)
}

pub fn check_duration(duration: u64) -> Result<(), ProposalError> {
    if duration == 0 {
        return Err(ProposalError::InvalidDuration);
    }
    Ok(())
}

pub fn check_quorum(quorum: u64) -> Result<(), ProposalError> {
    if quorum == 0 || quorum > MAX_PERCENT {
        return Err(ProposalError::InvalidQuorum);
    }
    Ok(())
}

pub fn check_threshold(threshold: u64) -> Result<(), ProposalError> {
    if threshold == 0 || threshold > MAX_PERCENT {
        return Err(ProposalError::InvalidThreshold);
    }
    Ok(())
}

/// Start may be the current block; end must come strictly after start.
pub fn check_schedule(start_time: u64, end_time: u64, now: u64) -> Result<(), ProposalError> {
    if start_time < now {
        return Err(ProposalError::InvalidStartTime);
    }
    if end_time <= start_time {
        return Err(ProposalError::InvalidEndTime);
    }
    Ok(())
}

pub fn check_milestones(milestone_count: u32) -> Result<(), ProposalError> {
    if milestone_count > MAX_MILESTONES {
        return Err(ProposalError::InvalidMilestone);
    }
    Ok(())
}

/// Outcome of an active proposal once voting closed.
///
/// Threshold is compared against the absolute `votes_for` count, not a
/// share of the votes cast.
pub fn decide_outcome(
    votes_for: u64,
    votes_against: u64,
    quorum: u64,
    threshold: u64,
) -> ProposalStatus {
    let quorum_met = votes_for.saturating_add(votes_against) >= quorum;
    let threshold_met = votes_for >= threshold;

    if quorum_met && threshold_met {
        ProposalStatus::Approved
    } else {
        ProposalStatus::Rejected
    }
}

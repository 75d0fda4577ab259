// web_app/model/sum.rs - Background sum request/reply and trigger state
//
// The worker protocol carries exactly one request and one reply. The bound is
// 32 bits wide so the reply (sum of 0..bound) always fits in 64 bits.

use serde::{Deserialize, Serialize};

/// Bound sent by the demo button
pub const DEFAULT_SUM_BOUND: u32 = 1_000_000_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SumRequest(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SumReply(pub u64);

/// Sum of every integer in `0..bound`, computed by iteration
pub fn sum_below(bound: u32) -> u64 {
    let mut sum = 0u64;
    for i in 0..bound {
        sum += u64::from(i);
    }
    sum
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SumPhase {
    #[default]
    Idle,
    AwaitingReply,
}

/// Client-side state of the sum button: `Idle -> AwaitingReply -> Idle`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SumTrigger {
    phase: SumPhase,
    bound: u32,
    last_result: Option<u64>,
    last_error: Option<String>,
}

impl SumTrigger {
    pub fn new(bound: u32) -> Self {
        Self {
            phase: SumPhase::Idle,
            bound,
            last_result: None,
            last_error: None,
        }
    }

    pub fn phase(&self) -> SumPhase {
        self.phase
    }

    pub fn is_busy(&self) -> bool {
        self.phase == SumPhase::AwaitingReply
    }

    pub fn bound(&self) -> u32 {
        self.bound
    }

    pub fn last_result(&self) -> Option<u64> {
        self.last_result
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Move to `AwaitingReply`; yields the request to send, or `None` while busy
    pub fn begin(&mut self) -> Option<SumRequest> {
        match self.phase {
            SumPhase::Idle => {
                self.phase = SumPhase::AwaitingReply;
                self.last_error = None;
                Some(SumRequest(self.bound))
            }
            SumPhase::AwaitingReply => None,
        }
    }

    /// Record the outcome and return to `Idle`. Returns `false` (and changes
    /// nothing) when no reply was outstanding.
    pub fn complete(&mut self, outcome: Result<SumReply, String>) -> bool {
        if self.phase != SumPhase::AwaitingReply {
            return false;
        }
        match outcome {
            Ok(SumReply(sum)) => self.last_result = Some(sum),
            Err(e) => self.last_error = Some(e),
        }
        self.phase = SumPhase::Idle;
        true
    }
}

impl Default for SumTrigger {
    fn default() -> Self {
        Self::new(DEFAULT_SUM_BOUND)
    }
}

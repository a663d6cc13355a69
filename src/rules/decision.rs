//! Accept/reject outcome of rule evaluation.

use super::errors::RejectReason;

/// Outcome of evaluating one enroll or drop request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// All rules pass; the coordinator may mutate.
    Accept,
    /// First violated rule, in evaluation order.
    Reject(RejectReason),
}

impl Decision {
    pub fn is_accept(&self) -> bool {
        matches!(self, Decision::Accept)
    }

    /// Convert into a result for `?`-style handling.
    pub fn into_result(self) -> Result<(), RejectReason> {
        match self {
            Decision::Accept => Ok(()),
            Decision::Reject(reason) => Err(reason),
        }
    }
}

impl From<Result<(), RejectReason>> for Decision {
    fn from(result: Result<(), RejectReason>) -> Self {
        match result {
            Ok(()) => Decision::Accept,
            Err(reason) => Decision::Reject(reason),
        }
    }
}

//! Config composition: defaults and source ordering.

pub(super) mod merge_policy;
pub(super) mod service;

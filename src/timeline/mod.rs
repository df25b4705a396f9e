pub(crate) mod sequence;
pub(crate) mod transitions;

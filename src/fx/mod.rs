pub(crate) mod noise;
pub(crate) mod particles;
pub(crate) mod random;

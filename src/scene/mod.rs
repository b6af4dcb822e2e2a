pub(crate) mod orbs;
pub(crate) mod particles;
pub(crate) mod planet;
pub(crate) mod trail;

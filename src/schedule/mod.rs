pub(crate) mod anim_loop;
pub(crate) mod clock;
pub(crate) mod scheduler;

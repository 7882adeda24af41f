pub(crate) mod budget;
pub(crate) mod health;
pub(crate) mod stats;

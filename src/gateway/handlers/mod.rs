pub(crate) mod categories;
pub(crate) mod health;
pub(crate) mod positions;
pub(crate) mod skills;

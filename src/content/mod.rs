pub(crate) mod stage;
pub(crate) mod table;

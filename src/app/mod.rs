pub(crate) mod explainer;
pub(crate) mod view;

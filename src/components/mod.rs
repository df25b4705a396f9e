pub(crate) mod backgrounds;
pub(crate) mod code_editor;
pub(crate) mod countdown;
pub(crate) mod spec;
pub(crate) mod title;
pub(crate) mod visual;

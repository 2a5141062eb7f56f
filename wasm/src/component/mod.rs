pub mod alert;
pub mod tab_group;
pub mod template;

pub mod apply;
pub mod doctor;
pub mod validate;

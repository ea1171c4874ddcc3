pub mod bool_ext;
pub mod float_ext;

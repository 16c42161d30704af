pub mod ary_op;
pub mod str_op;
pub mod validate;

pub mod dictionary;
pub mod lzw;
pub mod packing;
pub mod reference;

pub use dictionary::{Dictionary, FIRST_DYNAMIC_CODE, SEED_SIZE};
pub use lzw::{encode, encode_with, encode_with_dictionary};

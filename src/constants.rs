use super::Platter;
use std::mem;

pub const WORD_BYTES         : u32 = mem::size_of::<Platter>() as u32;

pub const OPERATOR_WIDTH     : u32 = 4;
pub const REGISTER_WIDTH     : u32 = 3;
pub const IMMEDIATE_WIDTH    : u32 = 25;

pub const OPERATOR_MASK      : Platter = 0b11110000000000000000000000000000;
pub const SPECIAL_REG_MASK   : Platter = 0b00001110000000000000000000000000;
pub const IMMEDIATE_MASK     : Platter = 0b00000001111111111111111111111111;
pub const RESERVED_MASK      : Platter = 0b00001111111111111111111000000000;
pub const REG_A_MASK         : Platter = 0b00000000000000000000000111000000;
pub const REG_B_MASK         : Platter = 0b00000000000000000000000000111000;
pub const REG_C_MASK         : Platter = 0b00000000000000000000000000000111;

pub const OPERATOR_OFFSET    : u32 = 28;
pub const SPECIAL_REG_OFFSET : u32 = 25;
pub const REG_A_OFFSET       : u32 = 6;
pub const REG_B_OFFSET       : u32 = 3;
pub const REG_C_OFFSET       : u32 = 0;

pub const REGISTER_COUNT     : usize = 8;

/// Value produced by `Input` when the input stream is exhausted.
pub const END_OF_INPUT       : Platter = 0xFFFF_FFFF;

/// Largest raw value the base generator produces.
pub const RAND_MAX: u32 = 0x7FFF_FFFF;

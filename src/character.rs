/// Trait for character types that can appear in null-terminated data
pub trait Character: Copy + PartialEq + std::fmt::Debug {
    /// The terminator value for this character type
    const NUL: Self;

    fn is_nul(self) -> bool {
        self == Self::NUL
    }
}

impl Character for u8 {
    const NUL: Self = 0;
}

impl Character for i8 {
    const NUL: Self = 0;
}

impl Character for u16 {
    const NUL: Self = 0;
}

impl Character for u32 {
    const NUL: Self = 0;
}

impl Character for char {
    const NUL: Self = '\0';
}

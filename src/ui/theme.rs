#![cfg(feature = "gui")]

/// Color tokens for the lister window.
pub mod theme {
    pub const WHITE: u32 = 0xFFFFFF;

    pub const GRAY_50: u32 = 0xF9FAFB;
    pub const GRAY_200: u32 = 0xE5E7EB;
    pub const GRAY_300: u32 = 0xD1D5DB;
    pub const GRAY_500: u32 = 0x6B7280;
    pub const GRAY_900: u32 = 0x111827;

    pub const BG: u32 = WHITE;
    pub const BG_SECONDARY: u32 = GRAY_50;
    pub const FG: u32 = GRAY_900;
    pub const FG_SECONDARY: u32 = GRAY_500;
    pub const BORDER: u32 = GRAY_200;
    pub const BORDER_HOVER: u32 = GRAY_300;

    pub const ACCENT: u32 = 0x3B82F6;
    pub const ACCENT_HOVER: u32 = 0x2563EB;
}

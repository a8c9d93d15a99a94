//! # Static lookup tables
//!
//! Lookup tables that turn a packed byte of eight pixels into something
//! printable or into 8-bit luma samples.

/// Helper macro that generates arrays with 256 elements where the value is a
/// mapping of the bit pattern of the index based on using $a for 0 and $b for 1.
///
/// If $x is `b`, the elements will be byte arrays, if $x is `str`, the elements
/// will be `&'static str`
macro_rules! bits {
    [$($x:ident)? $a:literal $b:literal] => {
        // Initial step
        bits![$($x)? $a $b => 0 0 0 0 0 0 0 0 => []]
    };
    [$($x:ident)? $a:literal $b:literal => $c0:literal $($c:literal)* => $([$($d:literal),*]),*] => {
        // Recursion with two output arrays per input array
        bits![$($x)? $a $b => $($c)* => $([$($d,)* $a], [$($d,)* $b]),*]
    };
    [str $a:literal $b:literal => => $([$($d:literal),*]),*] => {
        // Recursion anchor with conversion to `&str`
        [$(unsafe { std::str::from_utf8_unchecked(&[$($d),*])}),*]
    };
    [$a:literal $b:literal => => $([$($d:literal),*]),*] => {
        // Simple recursion anchor
        [$([$($d),*]),*]
    };
}

/// Lookup table for bytes as a string of `.` (0) and `#` (1)
pub const BIT_STRING: [&str; 256] = bits![str b'.' b'#'];

/// Lookup table for bytes as luma samples, `0x00` / black (0) and `0xFF` / white (1)
pub const BIT_PROJECTION: [[u8; 8]; 256] = bits![0x00 0xFF];

/// Luma values at or above this threshold read as a set bit
pub const LUMA_THRESHOLD: u8 = 0x80;

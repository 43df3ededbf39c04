//! Hash related utils.

use md5::{Digest, Md5};

/// Hex encoded MD5 hash.
///
/// Use this function instead of `hex::encode(md5(content))` can reduce
/// extra copy.
pub fn hex_md5(content: &[u8]) -> String {
    hex::encode(Md5::digest(content).as_slice())
}

/// Uppercase hex encoded MD5 hash.
pub fn hex_md5_upper(content: &[u8]) -> String {
    hex::encode_upper(Md5::digest(content).as_slice())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_md5() {
        assert_eq!(hex_md5(b"hello"), "5d41402abc4b2a76b9719d911017c592");
        assert_eq!(hex_md5(b""), "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn test_hex_md5_upper() {
        assert_eq!(hex_md5_upper(b"hello"), "5D41402ABC4B2A76B9719D911017C592");
    }
}

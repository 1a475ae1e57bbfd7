pub use constants::*;

use crate::error::ParamsError;

pub mod constants;

/// Convert bytes array to HEX format
pub fn to_hex(buf: &[u8]) -> String {
    let mut result = String::with_capacity(buf.len() * 2);
    for x in buf.iter() {
        result.push_str(&format!("{:02x}", x));
    }
    result
}

pub fn from_hex(string: &str) -> Result<Vec<u8>, ParamsError> {
    let string = string.trim();
    if string.len() % 2 != 0 || !string.is_ascii() {
        return Err(ParamsError::InvalidHex(string.to_owned()));
    }
    split_n(string, 2)
        .iter()
        .map(|b| u8::from_str_radix(b, 16).map_err(|_| ParamsError::InvalidHex(string.to_owned())))
        .collect()
}

fn split_n(s: &str, n: usize) -> Vec<&str> {
    (0..s.len() / n).map(|i| &s[n * i..n * i + n]).collect()
}

#[cfg(any(target_os = "windows", target_os = "linux", target_os = "openbsd", target_os = "freebsd", target_os = "netbsd"))]
pub fn setup_miner_thread() {
    use thread_priority::{set_current_thread_priority, ThreadPriority};
    let _ = set_current_thread_priority(ThreadPriority::Min);
}

#[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "openbsd", target_os = "freebsd", target_os = "netbsd")))]
pub fn setup_miner_thread() {
    // Not supported by thread_priority crate
}

//! Storage for Daybook journals.
//!
//! The journal store keeps an ordered map of date to encrypted entry and
//! persists it through a pluggable [`EntryFormat`]. The default format is a
//! flat `yyyy-MM-dd=<base64>` text file.
//!
//! ## Security
//!
//! - Every value on disk is an independently encrypted blob (no plaintext mode)
//! - Saves replace the file atomically via a temp file and rename
//! - The store holds the session password, never a derived key

pub mod date_key;
pub mod format;
pub mod journal;

pub use date_key::{ensure_key_range, format_date_key, parse_date_key, DATE_KEY_FORMAT, KEY_YEAR_RANGE};
pub use format::{EntryFormat, PropertiesFormat};
pub use journal::Journal;

// Exact substring search
//
// Architecture:
//   - `failure`: failure-function (LPS) table construction
//   - `kmp`: linear scan returning every, possibly overlapping, match offset
//   - `cursor`: current-match navigation for stepping through results

pub mod cursor;
pub mod failure;
pub mod kmp;

pub use cursor::MatchCursor;
pub use failure::build_failure_table;
pub use kmp::{find_all, search, search_chars};

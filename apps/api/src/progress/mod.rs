//! Progress tracking endpoints. Course completion and milestone changes are
//! applied by storage as a single read-modify-write (`ProgressChange`).

pub mod handlers;

/// Per-read chunk size, and the size requests historically fit into.
pub const INITIAL_READ_BUFFER_SIZE: usize = 1024;

/// Requests whose header block grows past this are dropped rather than
/// truncated.
pub const MAX_REQUEST_SIZE: usize = 64 * 1024;

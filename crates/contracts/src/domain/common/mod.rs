//! Common traits for list items

/// Numeric identity assigned by the remote system.
///
/// This is the only identity the client relies on; records themselves are
/// snapshots replaced on every fetch.
pub trait HasId {
    fn id(&self) -> i64;
}

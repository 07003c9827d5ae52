use std::collections::TryReserveError;

#[derive(Debug, thiserror::Error)]
pub enum HeapError {
    #[error("cannot reserve {additional} more slots on a heap of {len} items")]
    CapacityOverflow {
        len: usize,
        additional: usize,
        #[source]
        source: TryReserveError,
    },
}

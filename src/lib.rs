//! A partitioned ring buffer: a fixed-capacity, crash-safe FIFO log that
//! lives entirely inside caller-provided memory.
//!
//! The buffer needs no sidecar metadata and no allocator: every byte it
//! needs to describe itself — its capacity, and the bounds of its oldest
//! and newest records — lives in a small header at the front of the same
//! slice the records themselves occupy. [`open`] can reconstruct a
//! [`PrBuf`] from nothing but those raw bytes, which is what makes the type
//! useful for data that must survive a crash: map the same region back into
//! memory (or read it back off disk) and call `open` again.
//!
//! ```
//! let mut mem = vec![0u8; 256];
//! let mut buf = prbuf::create(&mut mem).unwrap();
//!
//! buf.prepare(5).unwrap().copy_from_slice(b"hello");
//! buf.commit();
//!
//! assert_eq!(buf.iter().next(), Some(&b"hello"[..]));
//! ```
//!
//! Writing is split into [`PrBuf::prepare`] and [`PrBuf::commit`]: `prepare`
//! reserves space (evicting the oldest records if the buffer is full) and
//! hands back a slice to fill in; `commit` makes that slice visible to
//! [`PrBuf::iter`]. A `prepare` call that is never followed by `commit`
//! leaves no trace — the next `prepare` simply reuses or overwrites the
//! same reservation.

mod error;
mod iter;
mod layout;
mod prbuf;

pub use error::{CreateError, OpenError};
pub use iter::Iter;
pub use layout::PRBUF_SIZE_MAX;
pub use prbuf::{create, open, PrBuf};

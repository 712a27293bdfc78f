//! One transaction per command.

use tracing::warn;

use arena_core::{ArenaDatabase, ArenaTransaction};

use crate::api::{Result, RuntimeError};

/// Run `work` inside a fresh transaction of `db`.
///
/// Commits when `work` returns `Ok`, rolls back when it returns `Err`.
/// Game errors are `Ok` values, so they commit whatever `work` wrote before
/// deciding to answer with one.
pub fn with_arena_transaction<'db, D, F, T>(db: &'db D, work: F) -> Result<T>
where
    D: ArenaDatabase + ?Sized,
    F: FnOnce(&mut D::Tx<'db>) -> Result<T>,
{
    let mut tx = db.begin()?;
    match work(&mut tx) {
        Ok(value) => {
            tx.commit()?;
            Ok(value)
        }
        Err(err) => {
            warn!(error = %err, "rolling back arena transaction");
            tx.rollback();
            Err(err)
        }
    }
}

/// Same as [`with_arena_transaction`] for work that only fails with store errors.
pub fn with_store_transaction<'db, D, F, T>(db: &'db D, work: F) -> Result<T>
where
    D: ArenaDatabase + ?Sized,
    F: FnOnce(&mut D::Tx<'db>) -> arena_core::StoreResult<T>,
{
    with_arena_transaction(db, |tx| work(tx).map_err(RuntimeError::from))
}

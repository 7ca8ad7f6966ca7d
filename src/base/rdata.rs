//! Resource record data.
//!
//! Each resource record type has its own definition of the content and
//! formatting of its data. This module provides the trait shared by the
//! types representing such data. The concrete types for the supported
//! record types live in the top-level [`rdata`][crate::rdata] module.

use super::iana::Rtype;
use super::wire::Compose;
use octseq::builder::OctetsBuilder;

//----------- ComposeRecordData ----------------------------------------------

/// A type of record data that can be composed.
///
/// Since names are never compressed, the length of the record data is
/// always known in advance.
pub trait ComposeRecordData {
    /// Returns the record type associated with this record data instance.
    fn rtype(&self) -> Rtype;

    /// Returns the length of the record data in wire format.
    fn rdlen(&self) -> u16;

    /// Appends the wire format of the record data into `target`.
    fn compose_rdata<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError>;

    /// Appends the record data prefixed with its length.
    fn compose_len_rdata<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        self.rdlen().compose(target)?;
        self.compose_rdata(target)
    }
}

//! Schema-stable CSV serialization
//!
//! Shared by the store rewrite and the download artifacts (single-row,
//! filtered and full exports), so the registry file and every export stay
//! byte-compatible: UTF-8 signature, fixed header, one row per evaluation.

use crate::entry::RegistryEntry;
use crate::error::RegistryResult;
use crate::schema;

/// Serialize rows into a CSV byte buffer with signature and header
///
/// An empty slice yields a header-only document with the full column set.
pub fn write_csv(rows: &[RegistryEntry]) -> RegistryResult<Vec<u8>> {
    let mut buf = Vec::from(schema::UTF8_BOM);
    {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(&mut buf);
        writer.write_record(schema::COLUMNS)?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
    }
    Ok(buf)
}

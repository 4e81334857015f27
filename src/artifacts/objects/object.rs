use anyhow::Result;
use bytes::Bytes;
use std::io::BufRead;

/// Serialization into the on-disk text format of a record
pub trait Packable {
    fn serialize(&self) -> Result<Bytes>;
}

/// Parsing from the on-disk text format of a record
pub trait Unpackable {
    fn deserialize(reader: impl BufRead) -> Result<Self>
    where
        Self: Sized;
}

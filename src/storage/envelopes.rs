//! Envelopes table, stored in envelopes.json

use crate::models::Envelope;

use super::table::{Row, Table};

pub type EnvelopeTable = Table<Envelope>;

impl Row for Envelope {
    const TABLE: &'static str = "envelopes";

    fn unique_name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn check(&self) -> Result<(), String> {
        self.validate().map_err(|e| e.to_string())
    }
}

//! Aggregate counters over parsed access records.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::types::AccessRecord;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AccessStats {
    pub total: u64,
    /// Requests per status code, as written in the log.
    pub status_codes: BTreeMap<String, u64>,
    /// Requests per client address.
    pub clients: BTreeMap<String, u64>,
    /// Sum of numeric response sizes. `-` and other non-numeric sizes are skipped.
    pub response_bytes: u64,
}

impl AccessStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, record: &AccessRecord) {
        self.total += 1;
        *self.status_codes.entry(record.status_code.clone()).or_default() += 1;
        *self.clients.entry(record.client_ip.clone()).or_default() += 1;
        if let Ok(bytes) = record.response_size.parse::<u64>() {
            self.response_bytes += bytes;
        }
    }

    /// The `n` busiest clients, most requests first, ties by address.
    pub fn top_clients(&self, n: usize) -> Vec<(&str, u64)> {
        let mut clients: Vec<(&str, u64)> = self
            .clients
            .iter()
            .map(|(ip, count)| (ip.as_str(), *count))
            .collect();
        clients.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        clients.truncate(n);
        clients
    }

    /// Responses with a 5xx status.
    pub fn server_errors(&self) -> u64 {
        self.status_codes
            .iter()
            .filter(|(code, _)| code.len() == 3 && code.starts_with('5'))
            .map(|(_, count)| count)
            .sum()
    }
}

impl<'a> Extend<&'a AccessRecord> for AccessStats {
    fn extend<T: IntoIterator<Item = &'a AccessRecord>>(&mut self, iter: T) {
        for record in iter {
            self.add(record);
        }
    }
}

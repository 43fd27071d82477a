//! The profile data index.
//!
//! Profile data lives in a UTF-8 text file, one sample per line, four
//! comma-separated fields:
//!
//! ```text
//! qualified_name,location,timestamp,duration
//! mx.matmul,kernels/gemm.mx:10:3,100,5
//! mx.relu,-,40,1
//! ```
//!
//! `location` is a `file:line:col` site, `?` for an unknown site, or `-` as
//! a wildcard meaning "this sample applies to the name at any site". Blank
//! lines and lines starting with `#` are skipped; field-surrounding
//! whitespace is trimmed. Anything else is malformed and fails the load.
//!
//! Lookup resolves an operation identity to at most one sample: an exact
//! `(name, location)` entry wins over a name-only wildcard entry, and within
//! each class the first occurrence in file order wins. No match is not an
//! error; it yields [`ProfilingRecord::ABSENT`].
use std::{collections::HashMap, fs, path::Path};

use log::debug;
use mxir::{Location, ProfilingRecord};

use crate::error::{AnnotateError, AnnotateResult};

/// Samples recorded for one qualified name.
#[derive(Debug, Default)]
struct NameSamples {
    /// Site-qualified samples, in file order. Small per name; matched by a
    /// linear scan.
    sites: Vec<(Location, ProfilingRecord)>,
    /// The wildcard (`-` location) sample, if any.
    any: Option<ProfilingRecord>,
}

/// Parsed, immutable view of one profile data file.
#[derive(Debug, Default)]
pub struct ProfileIndex {
    by_name: HashMap<String, NameSamples>,
    samples: usize,
}

impl ProfileIndex {
    /// The index used when no profile data is configured: every lookup
    /// yields the absent record.
    pub fn empty() -> Self {
        ProfileIndex::default()
    }

    /// Load and parse the profile data file at `path`.
    pub fn load(path: impl AsRef<Path>) -> AnnotateResult<Self> {
        let path = path.as_ref();
        let text =
            fs::read_to_string(path).map_err(|source| AnnotateError::DataSourceUnreadable {
                path: path.display().to_string(),
                source,
            })?;
        let index = Self::parse(&path.display().to_string(), &text)?;
        debug!(
            "loaded {} profile samples for {} names from `{}`",
            index.samples,
            index.by_name.len(),
            path.display()
        );
        Ok(index)
    }

    /// Parse profile data from `text`; `path` only labels error messages.
    pub(crate) fn parse(path: &str, text: &str) -> AnnotateResult<Self> {
        let mut index = ProfileIndex::default();

        for (line_no, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let malformed = || AnnotateError::DataSourceMalformed {
                path: path.to_string(),
                line_no: line_no + 1,
                line: raw.to_string(),
            };

            let fields: Vec<&str> = line.split(',').map(str::trim).collect();
            let [name, location, timestamp, duration] = fields.as_slice() else {
                return Err(malformed());
            };
            if name.is_empty() {
                return Err(malformed());
            }

            let timestamp: u64 = timestamp.parse().map_err(|_| malformed())?;
            let duration: u64 = duration.parse().map_err(|_| malformed())?;
            let record = ProfilingRecord::new(timestamp, duration);

            let samples = index.by_name.entry(name.to_string()).or_default();
            if *location == "-" {
                // First wildcard occurrence for a name wins.
                if samples.any.is_none() {
                    samples.any = Some(record);
                    index.samples += 1;
                }
            } else {
                let site: Location = location.parse().map_err(|_| malformed())?;
                // First occurrence for a (name, site) pair wins.
                if !samples.sites.iter().any(|(seen, _)| *seen == site) {
                    samples.sites.push((site, record));
                    index.samples += 1;
                }
            }
        }

        Ok(index)
    }

    /// Number of distinct samples held by the index.
    pub fn len(&self) -> usize {
        self.samples
    }

    pub fn is_empty(&self) -> bool {
        self.samples == 0
    }

    /// Resolve an operation identity to its sample. Total: no match yields
    /// the absent record.
    pub fn lookup(&self, name: &str, location: &Location) -> ProfilingRecord {
        let Some(samples) = self.by_name.get(name) else {
            return ProfilingRecord::ABSENT;
        };
        samples
            .sites
            .iter()
            .find(|(site, _)| site == location)
            .map(|(_, record)| *record)
            .or(samples.any)
            .unwrap_or(ProfilingRecord::ABSENT)
    }
}

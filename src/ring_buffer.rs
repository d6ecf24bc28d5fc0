//! Bounded in-memory ledger of observed service errors.
//!
//! Keeps the most recent observations in a fixed-size ring with FIFO
//! eviction, plus a cumulative count per received code. The counts mirror the
//! "API invoked error" metric, keyed by code, that callers export.
//!
//! # Design Principles
//!
//! - **Bounded memory**: fixed number of entries, per-entry byte cap, and a
//!   cap on the number of distinct codes counted
//! - **FIFO eviction**: oldest entries dropped first
//! - **Counts outlive eviction**: they only reset on [`ErrorLedger::clear`]
//! - **RwLock-based**: concurrent readers, exclusive writers; a poisoned lock
//!   is recovered rather than propagated
//!
//! # Example
//!
//! ```rust
//! use tke_error_codes::{Action, ApiError, ErrorLedger};
//!
//! let ledger = ErrorLedger::new(1000, 512);
//!
//! let err = ApiError::new("InternalError.Db", "db timeout", "req-1")
//!     .with_action(Action::DescribeClusterAsGroups);
//! ledger.record(&err);
//!
//! assert_eq!(ledger.count_for("InternalError.Db"), 1);
//! for entry in ledger.get_recent(10) {
//!     println!("{} {:?} {}", entry.timestamp, entry.action, entry.code);
//! }
//! ```

use crate::{Action, ApiError};
use smallvec::SmallVec;
use std::borrow::Cow;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::{SystemTime, UNIX_EPOCH};

/// Byte cap for the code stored in an entry and used as a count key.
const MAX_CODE_BYTES: usize = 128;

/// Byte cap for the request id stored in an entry.
const MAX_REQUEST_ID_BYTES: usize = 128;

/// Distinct codes counted before further new codes go to the untracked total.
pub const MAX_TRACKED_CODES: usize = 256;

/// Appended to fields cut to fit an entry.
const TRUNC_INDICATOR: &str = "...[TRUNC]";

/// One observed error, bounded in size.
///
/// String fields are `Arc<str>`, so cloning an entry out of the ledger is a
/// refcount increment.
#[derive(Clone, Debug)]
pub struct LedgerEntry {
    /// Unix timestamp (seconds) when the error was recorded.
    pub timestamp: u64,
    /// Action that returned the error, when recorded.
    pub action: Option<Action>,
    /// Received code, capped in length.
    pub code: Arc<str>,
    /// Whether the code is a catalog entry.
    pub recognized: bool,
    /// Request id, capped in length.
    pub request_id: Arc<str>,
    /// Bytes of string payload held by this entry.
    pub size_bytes: usize,
}

/// Cumulative count for one received code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeCount {
    /// Received code, cut only past 128 bytes, never by the entry cap.
    pub code: Arc<str>,
    /// Number of times it was recorded.
    pub count: u64,
}

/// Fixed-size ring with exact allocation.
struct Ring {
    entries: Box<[Option<LedgerEntry>]>,
    tail: usize,
    head: usize,
    len: usize,
}

impl Ring {
    fn new(capacity: usize) -> Self {
        Self {
            entries: std::iter::repeat_with(|| None)
                .take(capacity)
                .collect::<Box<[Option<LedgerEntry>]>>(),
            tail: 0,
            head: 0,
            len: 0,
        }
    }

    fn push(&mut self, entry: LedgerEntry) -> Option<LedgerEntry> {
        let evicted = self.entries[self.tail].replace(entry);
        self.tail = (self.tail + 1) % self.entries.len();

        if self.len < self.entries.len() {
            self.len += 1;
        } else {
            self.head = (self.head + 1) % self.entries.len();
        }

        evicted
    }

    /// Oldest first.
    fn iter(&self) -> impl DoubleEndedIterator<Item = &LedgerEntry> {
        let head = self.head;
        let cap = self.entries.len();

        (0..self.len).filter_map(move |i| self.entries[(head + i) % cap].as_ref())
    }

    fn clear(&mut self) {
        for entry in self.entries.iter_mut() {
            *entry = None;
        }
        self.head = 0;
        self.tail = 0;
        self.len = 0;
    }
}

/// Per-code counters. Linear scan: the catalog has about a hundred codes and
/// the set is capped at [`MAX_TRACKED_CODES`].
#[derive(Default)]
struct Counts {
    by_code: SmallVec<[CodeCount; 32]>,
    untracked: u64,
}

impl Counts {
    fn increment(&mut self, code: &Arc<str>) {
        if let Some(slot) = self.by_code.iter_mut().find(|c| c.code == *code) {
            slot.count += 1;
        } else if self.by_code.len() < MAX_TRACKED_CODES {
            self.by_code.push(CodeCount {
                code: Arc::clone(code),
                count: 1,
            });
        } else {
            self.untracked += 1;
        }
    }

    fn get(&self, code: &str) -> u64 {
        self.by_code
            .iter()
            .find(|c| c.code.as_ref() == code)
            .map_or(0, |c| c.count)
    }

    fn clear(&mut self) {
        self.by_code.clear();
        self.untracked = 0;
    }
}

struct LedgerState {
    ring: Ring,
    counts: Counts,
}

/// Ring buffer of observed errors with per-code counts.
///
/// `Clone` shares the underlying state, so one ledger can be handed to every
/// worker that talks to the service.
pub struct ErrorLedger {
    state: Arc<RwLock<LedgerState>>,
    max_entries: usize,
    max_entry_bytes: usize,
    eviction_count: Arc<AtomicU64>,
}

impl ErrorLedger {
    /// Create a ledger.
    ///
    /// * `max_entries` - entries kept before FIFO eviction, at least 1
    /// * `max_entry_bytes` - cap on the string payload of one entry
    ///
    /// ```rust
    /// use tke_error_codes::ErrorLedger;
    ///
    /// let ledger = ErrorLedger::new(0, 256);
    /// assert_eq!(ledger.capacity(), 1);
    /// ```
    pub fn new(max_entries: usize, max_entry_bytes: usize) -> Self {
        let bounded_entries = max_entries.max(1);
        Self {
            state: Arc::new(RwLock::new(LedgerState {
                ring: Ring::new(bounded_entries),
                counts: Counts::default(),
            })),
            max_entries: bounded_entries,
            max_entry_bytes,
            eviction_count: Arc::new(AtomicU64::new(0)),
        }
    }

    #[inline]
    fn read_state(&self) -> RwLockReadGuard<'_, LedgerState> {
        match self.state.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    #[inline]
    fn write_state(&self) -> RwLockWriteGuard<'_, LedgerState> {
        match self.state.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Record an error, evicting the oldest entry if the ledger is full.
    pub fn record(&self, err: &ApiError) {
        let entry = self.create_entry(err);

        // Counted under the received code, independent of the entry cap.
        let key = truncate_to_bytes(err.code(), MAX_CODE_BYTES);
        let key = if key.as_ref() == entry.code.as_ref() {
            Arc::clone(&entry.code)
        } else {
            Arc::from(key.as_ref())
        };

        let mut state = self.write_state();
        state.counts.increment(&key);
        if state.ring.push(entry).is_some() {
            self.eviction_count.fetch_add(1, Ordering::Relaxed);
        }
    }

    fn create_entry(&self, err: &ApiError) -> LedgerEntry {
        err.with_log(|log| {
            let mut remaining = self.max_entry_bytes;

            let code = truncate_to_bytes(log.code(), remaining.min(MAX_CODE_BYTES));
            remaining = remaining.saturating_sub(code.len());

            let request_id =
                truncate_to_bytes(log.request_id(), remaining.min(MAX_REQUEST_ID_BYTES));

            LedgerEntry {
                timestamp: SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .map_or(0, |d| d.as_secs()),
                action: log.action(),
                size_bytes: code.len() + request_id.len(),
                code: Arc::from(code.as_ref()),
                recognized: log.is_recognized(),
                request_id: Arc::from(request_id.as_ref()),
            }
        })
    }

    /// The `count` most recent entries, newest first.
    pub fn get_recent(&self, count: usize) -> Vec<LedgerEntry> {
        let state = self.read_state();
        state.ring.iter().rev().take(count).cloned().collect()
    }

    /// Every entry, newest first.
    pub fn get_all(&self) -> Vec<LedgerEntry> {
        let state = self.read_state();
        state.ring.iter().rev().cloned().collect()
    }

    /// Entries matching a predicate, oldest first.
    ///
    /// ```rust
    /// # use tke_error_codes::{ApiError, ErrorLedger};
    /// let ledger = ErrorLedger::new(100, 512);
    /// ledger.record(&ApiError::new("SomeNewCode.Whatever", "m", "r"));
    /// let unknown = ledger.get_filtered(|entry| !entry.recognized);
    /// assert_eq!(unknown.len(), 1);
    /// ```
    pub fn get_filtered<F>(&self, predicate: F) -> Vec<LedgerEntry>
    where
        F: Fn(&LedgerEntry) -> bool,
    {
        let state = self.read_state();
        state.ring.iter().filter(|e| predicate(e)).cloned().collect()
    }

    /// Times `code` was recorded since creation or the last [`clear`](Self::clear).
    /// Evicted entries still count.
    pub fn count_for(&self, code: &str) -> u64 {
        self.read_state().counts.get(code)
    }

    /// Every counted code, highest count first, ties by code.
    pub fn counts(&self) -> Vec<CodeCount> {
        let mut counts = self.read_state().counts.by_code.to_vec();
        counts.sort_unstable_by(|a, b| b.count.cmp(&a.count).then_with(|| a.code.cmp(&b.code)));
        counts
    }

    /// Records of new codes that arrived after [`MAX_TRACKED_CODES`] distinct
    /// codes were already counted.
    pub fn untracked_count(&self) -> u64 {
        self.read_state().counts.untracked
    }

    /// Current number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.read_state().ring.len
    }

    /// Whether no entry is held.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total string payload of held entries.
    pub fn payload_bytes(&self) -> usize {
        let state = self.read_state();
        state.ring.iter().map(|e| e.size_bytes).sum()
    }

    /// Entries evicted since creation.
    #[inline]
    pub fn eviction_count(&self) -> u64 {
        self.eviction_count.load(Ordering::Relaxed)
    }

    /// Drop every entry and reset the counts. The eviction counter is kept.
    pub fn clear(&self) {
        let mut state = self.write_state();
        state.ring.clear();
        state.counts.clear();
    }

    /// Maximum number of entries.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.max_entries
    }

    /// Whether the ledger holds `capacity()` entries.
    pub fn is_full(&self) -> bool {
        self.len() >= self.max_entries
    }
}

impl fmt::Debug for ErrorLedger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorLedger")
            .field("capacity", &self.max_entries)
            .field("len", &self.len())
            .field("eviction_count", &self.eviction_count())
            .finish()
    }
}

impl Clone for ErrorLedger {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            max_entries: self.max_entries,
            max_entry_bytes: self.max_entry_bytes,
            eviction_count: Arc::clone(&self.eviction_count),
        }
    }
}

/// Cut to at most `max_bytes` on a UTF-8 boundary, marking the cut.
fn truncate_to_bytes(s: &str, max_bytes: usize) -> Cow<'_, str> {
    if max_bytes == 0 {
        return Cow::Borrowed("");
    }
    if s.len() <= max_bytes {
        return Cow::Borrowed(s);
    }

    if max_bytes <= TRUNC_INDICATOR.len() {
        return Cow::Borrowed(&TRUNC_INDICATOR[..max_bytes]);
    }
    let max_content = max_bytes - TRUNC_INDICATOR.len();

    let mut idx = max_content;
    while idx > 0 && !s.is_char_boundary(idx) {
        idx -= 1;
    }

    if idx == 0 {
        return Cow::Borrowed(TRUNC_INDICATOR);
    }

    let mut out = String::with_capacity(idx + TRUNC_INDICATOR.len());
    out.push_str(&s[..idx]);
    out.push_str(TRUNC_INDICATOR);
    Cow::Owned(out)
}

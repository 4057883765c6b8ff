//! # Live Data Descriptors
//!
//! A [`LiveData<T>`] describes one slot of mirrored state: a unique [`LiveKey`] and a
//! default value. Descriptors are usually created once at module scope and shared by
//! reference between a view-model and whatever code reads the host's state.
//!
//! ## Identity
//!
//! Keys are minted from a process-wide counter and cannot be built by callers. Two
//! descriptors created with the same default and the same label still get distinct
//! keys, so independently written view-models can share one host without collisions.
//! Cloning a descriptor keeps its key: a clone names the same slot.
//!
//! ## Descriptor Sets
//!
//! A [`LiveDataSet`] is what a view-model is initialized from. Entry names exist for the
//! caller's own bookkeeping only; storage is always keyed by [`LiveKey`]. An entry that
//! carries no key ([`LiveEntry::default`]) is accepted and ignored during initialization.

use std::any::{type_name, Any};
use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::trace;

static NEXT_KEY: AtomicU64 = AtomicU64::new(1);

/// Opaque identity of a live data slot.
///
/// Only [`LiveData`] constructors can mint one. Keys compare by value, which is
/// equivalent to comparing descriptor identity since no two descriptors share a key.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LiveKey(u64);

impl LiveKey {
    fn mint() -> Self {
        Self(NEXT_KEY.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for LiveKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "live#{}", self.0)
    }
}

impl fmt::Debug for LiveKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LiveKey({})", self.0)
    }
}

/// A shared, type-erased value stored in a slot.
///
/// Cloning is cheap and keeps pointing at the same allocation, so a value handed to the
/// host and the value kept by the view-model are the same object (see [`LiveValue::ptr_eq`]).
#[derive(Clone)]
pub struct LiveValue {
    inner: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl LiveValue {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self::from_arc(Arc::new(value))
    }

    /// Wraps an existing allocation without copying it.
    pub fn from_arc<T: Any + Send + Sync>(value: Arc<T>) -> Self {
        Self {
            inner: value,
            type_name: type_name::<T>(),
        }
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    /// Returns a new strong reference to the stored value if it has type `T`.
    pub fn downcast_arc<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        Arc::clone(&self.inner).downcast::<T>().ok()
    }

    pub fn is<T: Any>(&self) -> bool {
        self.inner.is::<T>()
    }

    /// True when both handles point at the same allocation.
    pub fn ptr_eq(&self, other: &LiveValue) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.inner), Arc::as_ptr(&other.inner))
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Debug for LiveValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LiveValue").field(&self.type_name).finish()
    }
}

/// Describes one slot of mirrored state: a unique key, a default and a debug label.
///
/// # Example
/// ```
/// use live_state::framework::LiveData;
///
/// let count = LiveData::new(0u32);
/// let other = LiveData::new(0u32);
/// assert_ne!(count.key(), other.key());
///
/// let name = LiveData::with_label(String::new(), "name");
/// assert_eq!(name.label(), "name");
///
/// // Anything that is not text is dropped silently.
/// let odd = LiveData::with_label(1.5f64, 42);
/// assert_eq!(odd.label(), "");
/// ```
pub struct LiveData<T> {
    key: LiveKey,
    default: Arc<T>,
    label: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Any + Send + Sync> LiveData<T> {
    /// Creates an unlabeled descriptor with a freshly minted key.
    pub fn new(default: T) -> Self {
        Self::build(default, String::new())
    }

    /// Creates a labeled descriptor.
    ///
    /// `label` is accepted as any value. Owned and shared text (`String`, `&str`,
    /// `Cow<str>`, `Box<str>`, `Arc<str>`, `Rc<str>`) and their `Option` forms are kept;
    /// every other type normalizes to an empty label. Use
    /// [`LiveData::with_text_label`] for text borrowed for less than `'static`.
    pub fn with_label<L: Any>(default: T, label: L) -> Self {
        Self::build(default, normalize_label(&label))
    }

    /// Creates a descriptor labeled with borrowed text.
    pub fn with_text_label(default: T, label: &str) -> Self {
        Self::build(default, label.to_string())
    }

    fn build(default: T, label: String) -> Self {
        let key = LiveKey::mint();
        trace!(%key, label = %label, value_type = type_name::<T>(), "Minted live key");
        Self {
            key,
            default: Arc::new(default),
            label,
            _marker: PhantomData,
        }
    }

    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// The default as a shared value. Every call returns the same allocation.
    pub fn default_live_value(&self) -> LiveValue {
        LiveValue::from_arc(Arc::clone(&self.default))
    }
}

impl<T> LiveData<T> {
    pub fn key(&self) -> LiveKey {
        self.key
    }

    /// Display-only; never used for equality or lookup.
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl<T> Clone for LiveData<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            default: Arc::clone(&self.default),
            label: self.label.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T> PartialEq for LiveData<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<T> Eq for LiveData<T> {}

impl<T> fmt::Debug for LiveData<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LiveData")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("type", &type_name::<T>())
            .finish()
    }
}

fn normalize_label(label: &dyn Any) -> String {
    if let Some(text) = label.downcast_ref::<Option<String>>() {
        return text.clone().unwrap_or_default();
    }
    if let Some(text) = label.downcast_ref::<Option<&'static str>>() {
        return text.map(str::to_string).unwrap_or_default();
    }
    match text_label(label) {
        Some(text) => text.to_string(),
        None => {
            trace!("Ignoring non-text debug label");
            String::new()
        }
    }
}

fn text_label(label: &dyn Any) -> Option<&str> {
    if let Some(text) = label.downcast_ref::<String>() {
        Some(text.as_str())
    } else if let Some(text) = label.downcast_ref::<&'static str>() {
        Some(*text)
    } else if let Some(text) = label.downcast_ref::<&'static String>() {
        Some(text.as_str())
    } else if let Some(text) = label.downcast_ref::<Cow<'static, str>>() {
        Some(&**text)
    } else if let Some(text) = label.downcast_ref::<Box<str>>() {
        Some(&**text)
    } else if let Some(text) = label.downcast_ref::<Arc<str>>() {
        Some(&**text)
    } else if let Some(text) = label.downcast_ref::<Rc<str>>() {
        Some(&**text)
    } else {
        None
    }
}

/// One entry of a [`LiveDataSet`].
///
/// Built from a descriptor with `From<&LiveData<T>>`. The default entry carries no key
/// and is skipped when a view-model initializes from the set.
#[derive(Clone, Debug, Default)]
pub struct LiveEntry {
    slot: Option<(LiveKey, LiveValue)>,
    label: String,
}

impl LiveEntry {
    pub fn key(&self) -> Option<LiveKey> {
        self.slot.as_ref().map(|(key, _)| *key)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_bound(&self) -> bool {
        self.slot.is_some()
    }

    pub(crate) fn slot(&self) -> Option<(LiveKey, &LiveValue)> {
        self.slot.as_ref().map(|(key, value)| (*key, value))
    }
}

impl<T: Any + Send + Sync> From<&LiveData<T>> for LiveEntry {
    fn from(live_data: &LiveData<T>) -> Self {
        Self {
            slot: Some((live_data.key, live_data.default_live_value())),
            label: live_data.label.clone(),
        }
    }
}

/// Caller-named collection of descriptors used to initialize a view-model.
#[derive(Clone, Debug, Default)]
pub struct LiveDataSet {
    entries: Vec<(String, LiveEntry)>,
}

impl LiveDataSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`LiveDataSet::insert`].
    pub fn with(mut self, name: impl Into<String>, entry: impl Into<LiveEntry>) -> Self {
        self.insert(name, entry);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, entry: impl Into<LiveEntry>) {
        self.entries.push((name.into(), entry.into()));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LiveEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn get(&self, name: &str) -> Option<&LiveEntry> {
        self.entries
            .iter()
            .find(|(entry_name, _)| entry_name == name)
            .map(|(_, entry)| entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, LiveEntry)> for LiveDataSet {
    fn from_iter<I: IntoIterator<Item = (S, LiveEntry)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(name, entry)| (name.into(), entry))
                .collect(),
        }
    }
}

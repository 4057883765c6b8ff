//! A concrete view-model for a small submit form.
//!
//! The descriptors live in the module-level [`FORM`] table so that rendering code can read
//! the same slots from the host that [`FormViewModel`] writes:
//!
//! ```
//! use live_state::form_view_model::{FormViewModel, FORM};
//! use live_state::framework::mock::RecordingHost;
//!
//! let host = RecordingHost::new();
//! let mut form = FormViewModel::new(host.clone()).unwrap();
//! form.increment().unwrap();
//!
//! assert_eq!(host.last().unwrap().get_as(&FORM.count), Some(&1));
//! ```

use crate::framework::{LiveData, LiveDataSet, StateHost, ViewModel};
use once_cell::sync::Lazy;
use tracing::{info, instrument, warn};

/// Slots mirrored by [`FormViewModel`].
pub struct FormLiveData {
    pub count: LiveData<u32>,
    pub name: LiveData<String>,
    pub submitted: LiveData<bool>,
    /// Written on demand; not part of [`FormLiveData::entries`].
    pub last_error: LiveData<Option<String>>,
}

impl FormLiveData {
    /// The descriptors a form view-model is initialized from.
    pub fn entries(&self) -> LiveDataSet {
        LiveDataSet::new()
            .with("count", &self.count)
            .with("name", &self.name)
            .with("submitted", &self.submitted)
    }
}

pub static FORM: Lazy<FormLiveData> = Lazy::new(|| FormLiveData {
    count: LiveData::with_label(0, "count"),
    name: LiveData::with_label(String::new(), "name"),
    submitted: LiveData::with_label(false, "submitted"),
    last_error: LiveData::with_label(None, "lastError"),
});

pub const NAME_REQUIRED: &str = "name is required";

pub struct FormViewModel<H: StateHost> {
    base: ViewModel<H>,
}

impl<H: StateHost> FormViewModel<H> {
    pub fn new(host: H) -> Result<Self, H::Error> {
        Ok(Self {
            base: ViewModel::new(host, &FORM.entries())?,
        })
    }

    #[instrument(skip(self))]
    pub fn increment(&mut self) -> Result<u32, H::Error> {
        let next = self.count().saturating_add(1);
        self.base.set(&FORM.count, next)?;
        Ok(next)
    }

    #[instrument(skip(self, name))]
    pub fn rename(&mut self, name: impl Into<String>) -> Result<(), H::Error> {
        self.base.set(&FORM.name, name.into())
    }

    /// Marks the form submitted, or records [`NAME_REQUIRED`] when the name is blank.
    ///
    /// Returns whether the submission was accepted.
    #[instrument(skip(self))]
    pub fn submit(&mut self) -> Result<bool, H::Error> {
        if self.name().trim().is_empty() {
            warn!("Submit without a name");
            self.base
                .set(&FORM.last_error, Some(NAME_REQUIRED.to_string()))?;
            return Ok(false);
        }

        if self.base.contains(&FORM.last_error) {
            self.base.set(&FORM.last_error, None)?;
        }
        self.base.set(&FORM.submitted, true)?;
        info!(name = self.name(), count = self.count(), "Form submitted");
        Ok(true)
    }

    /// Puts every slot back to its default.
    pub fn clear(&mut self) -> Result<(), H::Error> {
        self.base.reset(&FORM.count)?;
        self.base.reset(&FORM.name)?;
        self.base.reset(&FORM.submitted)?;
        if self.base.contains(&FORM.last_error) {
            self.base.reset(&FORM.last_error)?;
        }
        Ok(())
    }

    pub fn count(&self) -> u32 {
        self.base.get(&FORM.count).copied().unwrap_or_default()
    }

    pub fn name(&self) -> &str {
        self.base.get(&FORM.name).map(String::as_str).unwrap_or_default()
    }

    pub fn is_submitted(&self) -> bool {
        self.base.get(&FORM.submitted).copied().unwrap_or_default()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.base.get(&FORM.last_error).and_then(|error| error.as_deref())
    }

    pub fn view_model(&self) -> &ViewModel<H> {
        &self.base
    }
}

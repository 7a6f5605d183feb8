use chrono::{DateTime, SecondsFormat, Utc};

/// Deferred timestamp creation.
///
/// Is used to ensure that a log record that is sent to multiple outputs
/// (in maybe different formats) always uses the same timestamp.
#[derive(Debug, Default)]
pub struct DeferredNow(Option<DateTime<Utc>>);

impl<'a> DeferredNow {
    /// Creates a `DeferredNow` whose timestamp is not yet determined.
    #[must_use]
    pub fn new() -> Self {
        Self(None)
    }

    /// Retrieve the timestamp.
    ///
    /// Requires mutability because the first caller will generate the timestamp.
    pub fn now(&'a mut self) -> &'a DateTime<Utc> {
        if self.0.is_none() {
            self.0 = Some(Utc::now());
        }
        self.0.as_ref().unwrap()
    }

    /// The timestamp rendered as RFC3339 UTC with second precision,
    /// e.g. `2023-07-11T08:15:30Z`.
    pub fn format_rfc3339(&'a mut self) -> String {
        self.now().to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

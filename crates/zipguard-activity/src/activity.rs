//! Activity evaluation and result mapping.

use log::debug;
use log::info;
use log::warn;
use serde::Deserialize;
use serde::Serialize;
use zipguard_core::ExtractOptions;
use zipguard_core::Extractor;

use crate::Action;
use crate::ActivityError;
use crate::ActivityInput;
use crate::Result;

/// Result value reported when the action succeeded.
pub const RESULT_OK: &str = "OK";

/// Result value reported when the action is not supported.
pub const RESULT_NOK: &str = "NOK";

/// Output of one activity evaluation, serialized as `{"result": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityOutput {
    /// `"OK"`, `"NOK"`, or the failure's message.
    pub result: String,
}

impl ActivityOutput {
    /// Output of a successful action.
    #[must_use]
    pub fn ok() -> Self {
        Self {
            result: RESULT_OK.to_string(),
        }
    }

    /// Output of an unsupported action.
    #[must_use]
    pub fn not_ok() -> Self {
        Self {
            result: RESULT_NOK.to_string(),
        }
    }

    /// Output carrying an error's message.
    #[must_use]
    pub fn failed(error: &ActivityError) -> Self {
        Self {
            result: error.to_string(),
        }
    }

    /// Output for any evaluation outcome; never fails.
    #[must_use]
    pub fn from_outcome(outcome: &Result<Self>) -> Self {
        match outcome {
            Ok(output) => output.clone(),
            Err(error) => Self::failed(error),
        }
    }

    /// Returns `true` for the `"OK"` result.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.result == RESULT_OK
    }
}

/// A workflow activity that dispatches on [`Action`].
///
/// # Examples
///
/// ```no_run
/// use zipguard_activity::Activity;
/// use zipguard_activity::ActivityInput;
///
/// let activity = Activity::default();
/// let input = ActivityInput::new("unzip", "bundle.zip", "/tmp/out");
/// let outcome = activity.eval(&input);
/// assert!(outcome.is_ok());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Activity {
    extractor: Extractor,
}

impl Activity {
    /// Creates an activity whose extractions use `options`.
    #[must_use]
    pub fn new(options: ExtractOptions) -> Self {
        Self {
            extractor: Extractor::new(options),
        }
    }

    /// Evaluates one input.
    ///
    /// An unsupported action yields `Ok` with the `"NOK"` result and leaves
    /// the filesystem untouched.
    ///
    /// # Errors
    ///
    /// - `ActivityError::Config` if the paths fail validation
    /// - `ActivityError::Extraction` if extraction fails; its message is the
    ///   result to report
    pub fn eval(&self, input: &ActivityInput) -> Result<ActivityOutput> {
        let Ok(action) = input.action.parse::<Action>() else {
            info!("action {:?} is not supported", input.action);
            return Ok(ActivityOutput::not_ok());
        };

        input.validate()?;

        match action {
            Action::Unzip => self.unzip(input),
        }
    }

    /// Parses `value` as an [`ActivityInput`] and evaluates it.
    ///
    /// # Errors
    ///
    /// Same as [`Activity::eval`], plus `ActivityError::Config` for input that
    /// does not deserialize.
    pub fn eval_json(&self, value: serde_json::Value) -> Result<ActivityOutput> {
        let input = ActivityInput::from_json(value)?;
        self.eval(&input)
    }

    fn unzip(&self, input: &ActivityInput) -> Result<ActivityOutput> {
        info!(
            "unzipping {} into {}",
            input.source_file, input.target_directory
        );

        match self
            .extractor
            .extract(&input.source_file, &input.target_directory)
        {
            Ok(report) => {
                debug!(
                    "extracted {} files and {} directories ({} bytes) in {:?}",
                    report.files_extracted,
                    report.directories_created,
                    report.bytes_written,
                    report.duration
                );
                Ok(ActivityOutput::ok())
            }
            Err(err) => {
                warn!("unzip of {} failed: {err}", input.source_file);
                Err(err.into())
            }
        }
    }
}

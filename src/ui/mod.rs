use anyhow::Result;
use inquire::InquireError;
use inquire::error::InquireResult;

mod avatar;
mod live_line;
mod style;

pub use avatar::RobotAvatar;
pub use live_line::LiveLine;
pub use style::Style;

/// Ctrl+C and Esc both end an inquire prompt without an answer.
const fn is_prompt_cancelled(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// Separates "the user backed out" from real prompt failures.
pub trait PromptResultExt<T> {
    /// `Ok(None)` if the prompt was cancelled, the answer otherwise.
    fn or_cancelled(self) -> Result<Option<T>>;
}

impl<T> PromptResultExt<T> for InquireResult<T> {
    fn or_cancelled(self) -> Result<Option<T>> {
        match self {
            Ok(answer) => Ok(Some(answer)),
            Err(err) if is_prompt_cancelled(&err) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

use crate::error::{OrderError, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// Line-oriented prompt/answer channel between the session and the user.
///
/// Generic over any async reader and writer so the session can be driven by
/// stdin/stdout or by in-memory buffers in tests.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes `text` followed by a newline.
    pub async fn say(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.write_all(b"\n").await?;
        self.output.flush().await?;
        Ok(())
    }

    /// Writes `prompt` without a newline and reads one line of input.
    ///
    /// The returned line has its terminator stripped. Fails with
    /// [`OrderError::InputClosed`] once the input reaches end of file.
    pub async fn ask(&mut self, prompt: &str) -> Result<String> {
        self.output.write_all(prompt.as_bytes()).await?;
        self.output.flush().await?;

        let mut line = String::new();
        if self.input.read_line(&mut line).await? == 0 {
            return Err(OrderError::InputClosed);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

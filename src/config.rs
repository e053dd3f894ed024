/// Default prompt printed before every read.
pub const DEFAULT_PROMPT: &str = "#>>> ";
/// Prefix of every diagnostic written to the error stream.
pub const DEFAULT_NAME: &str = "lsh";
/// First line of the `help` output.
pub const DEFAULT_BANNER: &str = "huahua's LSH";
/// Initial capacity of the line buffer, and the step it grows by.
pub const LINE_BUFFER_SIZE: usize = 1024;
/// Initial capacity of the argument vector, and the step it grows by.
pub const TOKEN_BUFFER_SIZE: usize = 64;

/// Fixed settings of an interpreter instance.
///
/// Nothing here is read from files or the environment; the binary runs with
/// [`ShellConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub prompt: String,
    pub name: String,
    pub banner: String,
    pub line_buffer_size: usize,
    pub line_buffer_increment: usize,
    pub token_buffer_size: usize,
    pub token_buffer_increment: usize,
}

impl ShellConfig {
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_banner(mut self, banner: impl Into<String>) -> Self {
        self.banner = banner.into();
        self
    }

    /// Set the initial line buffer size and its growth step.
    ///
    /// A zero increment is clamped to one so growth always makes progress.
    pub fn with_line_buffer(mut self, initial: usize, increment: usize) -> Self {
        self.line_buffer_size = initial;
        self.line_buffer_increment = increment.max(1);
        self
    }

    /// Set the initial token capacity and its growth step, clamped like
    /// [`ShellConfig::with_line_buffer`].
    pub fn with_token_buffer(mut self, initial: usize, increment: usize) -> Self {
        self.token_buffer_size = initial;
        self.token_buffer_increment = increment.max(1);
        self
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            name: DEFAULT_NAME.to_string(),
            banner: DEFAULT_BANNER.to_string(),
            line_buffer_size: LINE_BUFFER_SIZE,
            line_buffer_increment: LINE_BUFFER_SIZE,
            token_buffer_size: TOKEN_BUFFER_SIZE,
            token_buffer_increment: TOKEN_BUFFER_SIZE,
        }
    }
}

/// Default config file name (looked up in the working directory)
pub const CONFIG_FILE: &str = "dirsum.json";

/// Default completion model
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Base URL of the hosted text-generation endpoint
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Timeout for a single completion request (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Sampling temperature
pub const DEFAULT_TEMPERATURE: f32 = 0.5;

/// Nucleus sampling cutoff
pub const DEFAULT_TOP_P: f32 = 1.0;

/// Maximum tokens the model may generate per request
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 2048;

/// Characters of file content sent for a summary (keeps the cheap pass cheap)
pub const SUMMARY_CHAR_LIMIT: usize = 15_000;

/// Extensions the directory scanner picks up (lowercase, no dot)
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "txt", "md", "py", "java", "js", "html", "css", "json", "xml", "csv", "log", "ini", "cfg",
    "sh", "bat", "pdf", "pptx", "xlsx", "xls", "docx",
];

/// Summary recorded when a file could not be extracted
pub const UNREADABLE_MARKER: &str = "[Could not read file]";

/// Summary recorded when a file has no readable text
pub const EMPTY_MARKER: &str = "[File is empty or contains no readable text]";

/// Returned by the completion client when no API key is configured
pub const MISSING_API_KEY_MARKER: &str = "[Error: API key not provided]";

/// Returned by the completion client when a response part has no text
pub const NO_TEXT_MARKER: &str = "[Could not extract text from response]";

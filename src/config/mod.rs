//! Static configuration: industries, locales, prompts and function definitions.

mod functions;
mod i18n;
mod industries;
mod prompts;

pub use functions::{function_definitions, FunctionDefinition};
pub use i18n::{
    base_language, get_locale, is_supported_language, Locale, DEFAULT_LANGUAGE,
    SUPPORTED_LANGUAGES,
};
pub use industries::{get_available_industries, Industry, INDUSTRIES};
pub use prompts::{
    build_prompt, current_date, format_current_date, DOCS_PROMPT_TEMPLATE, PROMPT_DATE_FORMAT,
    PROMPT_TEMPLATE,
};

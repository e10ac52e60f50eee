// Consolation flow: validated text in, reflection plus verse batch out.
// All completion calls go through llm_client — no direct HTTP calls here.

pub mod document;
pub mod handlers;
pub mod models;
pub mod normalizer;
pub mod prompts;
pub mod session;

// Shared prompt fragments. Each module that talks to the completion service
// defines its own prompts.rs alongside it; cross-cutting pieces live here.

/// Instruction appended to every prompt that expects a JSON payload back.
pub const JSON_ONLY_INSTRUCTION: &str = "\
    Responde ÚNICAMENTE con un objeto JSON válido. \
    No incluyas explicaciones, disculpas ni texto adicional fuera del JSON.";

/// Tone every generated message must keep.
pub const PASTORAL_TONE_INSTRUCTION: &str = "\
    El tono debe ser siempre de esperanza, comprensión y empatía. \
    Usa textos bíblicos basados en una traducción de lenguaje actual como la TLA.";

// Prompt templates for the consolation flow.
// Shared fragments come from llm_client::prompts.

/// Initial consolation prompt. Replace: {user_input}, {json_only}, {tone}
pub const CONSOLATION_PROMPT_TEMPLATE: &str = r#"Un usuario, que busca consuelo bíblico, ha escrito el siguiente texto sobre sus sentimientos: "{user_input}"

Tu tarea es actuar como un consejero cristiano sabio, cercano y empático. Analiza profundamente los sentimientos del usuario, identifica las emociones específicas, las situaciones mencionadas y sus preocupaciones particulares. {json_only}

La estructura del JSON debe ser exactamente:
{
  "briefSummary": "Un resumen muy breve de 3-5 palabras que capture la esencia de lo que siente el usuario (ej: 'ansiedad y tristeza', 'soledad y miedo', 'agradecimiento y paz')",
  "initialReflection": "Un mensaje reflexivo inicial personalizado, cálido y profundamente empático, de 6-9 frases. Debe reconocer específicamente los sentimientos expresados, ofrecer comprensión genuina y brindar esperanza de manera personal y directa.",
  "verses": [
    {
      "reference": "Referencia del primer versículo (ej. 'Mateo 11:28')",
      "text": "El texto completo del versículo.",
      "reflection": "Una frase reflexiva corta, alentadora y directamente relacionada con este versículo."
    },
    { "reference": "...", "text": "...", "reflection": "..." },
    { "reference": "...", "text": "...", "reflection": "..." },
    { "reference": "...", "text": "...", "reflection": "..." },
    { "reference": "...", "text": "...", "reflection": "..." }
  ]
}

Asegúrate de que el array "verses" contenga exactamente 5 versículos relevantes para los sentimientos del usuario. {tone} El mensaje inicial debe mencionar elementos concretos de lo que compartió el usuario.

IMPORTANTE: "briefSummary" debe ser muy conciso, en español, y capturar la emoción principal en pocas palabras naturales."#;

/// Follow-up prompt asking for more, different verses.
/// Replace: {user_input}, {existing_references}, {json_only}, {tone}
pub const MORE_VERSES_PROMPT_TEMPLATE: &str = r#"Un usuario escribió: "{user_input}".
Ya se le mostraron estos versículos: {existing_references}.

Proporciona 5 versículos MÁS, diferentes a los anteriores, que también ofrezcan consuelo para lo que siente. {tone}

{json_only} El objeto debe tener un array "verses" con 5 nuevos versículos:
{
  "verses": [
    { "reference": "...", "text": "...", "reflection": "..." }
  ]
}"#;

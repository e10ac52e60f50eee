//! Common Spanish words used to judge whether a text reads as natural Spanish.
//!
//! Entries are lowercase. Accented and unaccented spellings both appear where
//! users commonly drop the accent.

pub const COMMON_SPANISH_WORDS: &[&str] = &[
    // Articles and determiners
    "el", "la", "los", "las", "un", "una", "unos", "unas", "lo", "al", "del",
    "este", "esta", "estos", "estas", "ese", "esa", "eso", "esto", "todo", "toda",
    "todos", "todas", "cada", "otro", "otra", "otros", "mucho", "mucha", "muchos",
    "muchas", "poco", "poca", "nada", "algo", "alguien", "nadie",
    // Pronouns and possessives
    "yo", "tu", "tú", "él", "ella", "nosotros", "ellos", "ellas", "me", "te", "se",
    "nos", "le", "les", "mi", "mis", "tus", "su", "sus", "nuestro", "nuestra", "conmigo",
    "contigo", "mí", "ti",
    // Conjunctions, prepositions, adverbs
    "y", "e", "o", "u", "pero", "porque", "que", "qué", "como", "cómo", "cuando",
    "cuándo", "donde", "dónde", "si", "sí", "no", "ni", "ya", "aún", "aun", "también",
    "tampoco", "muy", "más", "mas", "menos", "tan", "tanto", "siempre", "nunca",
    "hoy", "ayer", "ahora", "mañana", "después", "antes", "aquí", "solo", "sólo",
    "sola", "bien", "mal", "casi", "de", "en", "con", "sin", "por", "para", "a",
    "desde", "hasta", "sobre", "entre", "hacia", "contra", "tras",
    // Frequent verbs
    "es", "soy", "eres", "son", "era", "fue", "ser", "estar", "estoy", "estás",
    "está", "estamos", "están", "estado", "he", "has", "ha", "hay", "había", "tengo",
    "tienes", "tiene", "tener", "puedo", "puede", "poder", "quiero", "quiere",
    "necesito", "necesita", "siento", "sientes", "siente", "sentir", "creo", "cree",
    "sé", "sabe", "saber", "hacer", "hago", "voy", "va", "vamos", "ir", "vivo",
    "vivir", "pienso", "pensar", "perdí", "perdió", "perder", "encuentro", "busco",
    "pido", "ayuda", "ayudar", "ayúdame",
    // Feelings
    "triste", "tristeza", "feliz", "alegría", "alegre", "miedo", "temor", "ansiedad",
    "ansioso", "ansiosa", "angustia", "dolor", "sufrimiento", "soledad",
    "cansado", "cansada", "cansancio", "enojo", "enojado", "enojada", "rabia",
    "culpa", "vergüenza", "preocupado", "preocupada", "preocupación", "estrés",
    "deprimido", "deprimida", "depresión", "llorar", "lloro", "perdido", "perdida",
    "confundido", "confundida", "agotado", "agotada", "paz", "calma", "esperanza",
    "amor", "gracias", "agradecido", "agradecida", "corazón", "alma", "vida",
    "muerte", "pérdida", "duelo", "familia", "hijo", "hija", "madre", "padre",
    "mamá", "papá", "trabajo", "dinero", "salud", "enfermedad", "futuro",
    "últimamente", "día", "días", "noche", "tiempo", "momento", "momentos",
    // Faith
    "dios", "señor", "jesús", "cristo", "fe", "oración", "orar", "rezar", "biblia",
    "iglesia", "cielo", "perdón", "gracia", "bendición", "consuelo", "fuerza",
];

/// Lowercases a word and trims surrounding punctuation so "Triste," matches "triste".
pub fn normalize_word(word: &str) -> String {
    word.trim_matches(|c: char| !c.is_alphabetic()).to_lowercase()
}

pub fn is_common_spanish_word(word: &str) -> bool {
    let normalized = normalize_word(word);
    !normalized.is_empty() && COMMON_SPANISH_WORDS.contains(&normalized.as_str())
}

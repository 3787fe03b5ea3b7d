//! Keyword language detection

use parley_domain::QuickReplySet;

const SPANISH_KEYWORDS: [&str; 6] = ["hola", "buenas", "ayuda", "día", "gracias", "por favor"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Spanish,
}

/// Spanish if any Spanish keyword occurs in the message, English otherwise.
pub fn detect_language(message: &str) -> Language {
    let lower = message.to_lowercase();
    if SPANISH_KEYWORDS.iter().any(|word| lower.contains(word)) {
        Language::Spanish
    } else {
        Language::English
    }
}

pub fn quick_replies_for(language: Language) -> QuickReplySet {
    match language {
        Language::Spanish => QuickReplySet::new([
            "¿Qué es un PCB?",
            "Cuéntame sobre electrónica",
            "¿Cómo se hacen los PCBs?",
        ]),
        Language::English => QuickReplySet::new([
            "What is a PCB?",
            "Tell me about electronics",
            "How are PCBs made?",
        ]),
    }
}

impl Language {
    pub fn welcome(&self) -> &'static str {
        match self {
            Language::Spanish => "¡Bienvenido al Chatbot de PCB! ¿En qué puedo ayudarte hoy?",
            Language::English => "Welcome to the PCB Chatbot! How can I assist you today?",
        }
    }
}

//! Unified target-language dispatch.
//!
//! The only place that knows every emitter; commands select one through the
//! `Language` value and stay target-agnostic.

use armature_codegen::EndpointEmitter;
use armature_codegen_csharp::Emitter as CSharpEmitter;
use armature_codegen_javascript::Emitter as JavaScriptEmitter;
use armature_codegen_ruby::Emitter as RubyEmitter;
use armature_definition::Language;

/// Language-specific support for scaffolding generation.
pub struct LanguageSupport {
    language: Language,
}

impl LanguageSupport {
    /// Get language support for the given selector.
    pub fn get(language: Language) -> Self {
        Self { language }
    }

    /// Create the emitter for this language.
    pub fn emitter(&self) -> Box<dyn EndpointEmitter> {
        match self.language {
            Language::CSharp => Box::new(CSharpEmitter),
            Language::Ruby => Box::new(RubyEmitter),
            Language::JavaScript => Box::new(JavaScriptEmitter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_resolves_matching_emitter() {
        assert_eq!(
            LanguageSupport::get(Language::CSharp).emitter().language(),
            "csharp"
        );
        assert_eq!(
            LanguageSupport::get(Language::Ruby).emitter().language(),
            "ruby"
        );
        assert_eq!(
            LanguageSupport::get(Language::JavaScript)
                .emitter()
                .language(),
            "javascript"
        );
    }
}

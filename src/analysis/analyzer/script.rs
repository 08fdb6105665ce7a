//! Script-aware analyzer.
//!
//! Space-delimited text is split into words; Hangul text is compacted and
//! cut into character bigrams and trigrams, since Korean compounds rarely
//! line up with whitespace.

use std::sync::Arc;

use lazy_static::lazy_static;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::char_filter::CharFilter;
use crate::analysis::char_filter::normalize::NormalizeCharFilter;
use crate::analysis::language::contains_hangul;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::length::LengthFilter;
use crate::analysis::token_filter::prefix::PrefixFilter;
use crate::analysis::token_filter::synonym::SynonymFilter;
use crate::analysis::token_filter::unique::UniqueFilter;
use crate::analysis::tokenizer::ngram::NgramTokenizer;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;

/// Words shorter than this are dropped on the word path.
pub const MIN_WORD_CHARS: usize = 3;

/// Length of the prefix stub emitted for longer terms.
pub const PREFIX_LENGTH: usize = 3;

lazy_static! {
    static ref EXPANDING: ScriptAwareAnalyzer = ScriptAwareAnalyzer::build(true);
    static ref RAW: ScriptAwareAnalyzer = ScriptAwareAnalyzer::build(false);
}

/// Analyzer that normalizes the input once, then routes it through the
/// n-gram pipeline if it contains Hangul and the word pipeline otherwise.
#[derive(Clone, Debug)]
pub struct ScriptAwareAnalyzer {
    normalizer: NormalizeCharFilter,
    words: PipelineAnalyzer,
    ngrams: PipelineAnalyzer,
    expand: bool,
}

impl ScriptAwareAnalyzer {
    fn build(expand: bool) -> Self {
        let mut words = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_filter(Arc::new(LengthFilter::new(MIN_WORD_CHARS)));
        let mut ngrams = PipelineAnalyzer::new(Arc::new(NgramTokenizer::bigram_trigram()));

        if expand {
            words = Self::with_expansion(words);
            ngrams = Self::with_expansion(ngrams);
        }

        ScriptAwareAnalyzer {
            normalizer: NormalizeCharFilter::new(),
            words: words.with_name(if expand { "words_expanding" } else { "words" }),
            ngrams: ngrams.with_name(if expand { "ngrams_expanding" } else { "ngrams" }),
            expand,
        }
    }

    fn with_expansion(pipeline: PipelineAnalyzer) -> PipelineAnalyzer {
        pipeline
            .add_filter(Arc::new(PrefixFilter::new(PREFIX_LENGTH)))
            .add_filter(Arc::new(SynonymFilter::default()))
            .add_filter(Arc::new(UniqueFilter::new()))
    }

    /// The shared analyzer used for indexing: synonyms and prefix stubs are
    /// added and duplicates removed.
    pub fn expanding() -> &'static ScriptAwareAnalyzer {
        &EXPANDING
    }

    /// The shared analyzer without expansion. Duplicates are preserved.
    pub fn raw() -> &'static ScriptAwareAnalyzer {
        &RAW
    }

    /// Whether this analyzer expands terms.
    pub fn is_expanding(&self) -> bool {
        self.expand
    }
}

impl Analyzer for ScriptAwareAnalyzer {
    fn analyze(&self, text: &str) -> TokenStream {
        let normalized = self.normalizer.filter(text);

        if contains_hangul(&normalized) {
            self.ngrams.analyze(&normalized)
        } else {
            self.words.analyze(&normalized)
        }
    }

    fn name(&self) -> &str {
        if self.expand {
            "script_aware_expanding"
        } else {
            "script_aware"
        }
    }
}

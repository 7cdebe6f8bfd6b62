use glossa_core::language::LanguageProcessor;
use glossa_core::summarizer::{DEFAULT_SENTENCES, summarize};
use glossa_lang_english::{EnglishProcessor, StopwordFilter};

#[test]
fn dominant_word_selects_later_sentence() {
    let processor = EnglishProcessor::new();
    let summary = summarize(&processor, "Dog runs fast. The cat cat cat sleeps.", 1);
    assert_eq!(summary, "The cat cat cat sleeps.");
}

#[test]
fn empty_input_is_empty_output() {
    let processor = EnglishProcessor::new();
    for n in [0, 1, DEFAULT_SENTENCES, 10] {
        assert_eq!(summarize(&processor, "", n), "");
    }
}

#[test]
fn stopwords_and_punctuation_alone_summarize_to_nothing() {
    let processor = EnglishProcessor::new();
    assert_eq!(summarize(&processor, "The. Is it? And, the!", 3), "");
    assert_eq!(summarize(&processor, "... !!! ???", 3), "");
}

#[test]
fn selected_sentences_come_from_the_input_verbatim() {
    let processor = EnglishProcessor::with_stopwords(StopwordFilter::from_list(&[
        "the", "a", "is", "and", "of", "on", "in",
    ]));
    let text = "Rivers carry water to the sea. The sea is salty and deep. \
                Water evaporates from the sea and falls as rain. Rain feeds rivers. \
                Mountains stand still.";

    let summary = summarize(&processor, text, DEFAULT_SENTENCES);
    let source = processor.sentences(text);
    let picked = processor.sentences(&summary);

    assert_eq!(picked.len(), 3);
    for sentence in &picked {
        assert!(source.contains(sentence), "{sentence} not in source");
    }
    assert_eq!(picked[0], "Water evaporates from the sea and falls as rain.");
}

#[test]
fn case_differences_count_as_the_same_word() {
    let processor = EnglishProcessor::with_stopwords(StopwordFilter::from_list(&["the"]));
    let summary = summarize(&processor, "Bees buzz. BEES sting. Flowers bloom.", 2);
    assert_eq!(summary, "Bees buzz. BEES sting.");
}

#[test]
fn everyday_words_are_scored() {
    let processor = EnglishProcessor::new();
    assert_eq!(
        summarize(&processor, "Good work. Great results.", 3),
        "Good work. Great results."
    );
    assert_eq!(
        summarize(
            &processor,
            "The new system needs good information. Cats sleep.",
            1
        ),
        "The new system needs good information."
    );
}

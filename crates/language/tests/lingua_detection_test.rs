//! Integration tests for [`language::StatisticalDetector`] with the real lingua model.
//!
//! Uses full sentences so the n-gram model has enough signal; short inputs exercise the heuristic path.

use std::sync::Arc;

use language::{
    DetectorKind, Language, LanguageDetector, LanguageModel, LinguaModel, StatisticalDetector,
};

fn detector() -> StatisticalDetector {
    StatisticalDetector::new(Arc::new(LinguaModel::new()))
}

#[test]
fn test_detects_common_sentences() {
    let d = detector();
    assert_eq!(d.detect("Привет всем, как у вас сегодня дела?"), Language::Russian);
    assert_eq!(d.detect("Hello everyone, how are you doing today?"), Language::English);
    assert_eq!(
        d.detect("¿Dónde está la estación de tren más cercana?"),
        Language::Spanish
    );
    assert_eq!(
        d.detect("Ich habe heute keine Zeit, weil ich arbeiten muss."),
        Language::German
    );
    assert_eq!(
        d.detect("Je voudrais réserver une table pour deux personnes ce soir."),
        Language::French
    );
}

#[test]
fn test_detects_non_latin_scripts_the_heuristic_misses() {
    let d = detector();
    assert_eq!(d.detect("今天天气很好，我们去公园散步吧。"), Language::ChineseSimplified);
    assert_eq!(d.detect("こんにちは、今日はいい天気ですね。"), Language::Japanese);
    assert_eq!(d.detect("안녕하세요, 오늘 날씨가 좋네요."), Language::Korean);
}

#[test]
fn test_ranking_is_sorted_with_bounded_confidences() {
    let model = LinguaModel::new();
    let ranked = model.rank("Buongiorno a tutti, come state?").unwrap();
    assert!(!ranked.is_empty());
    assert_eq!(ranked[0].code, "it");
    assert!(ranked.iter().all(|r| (0.0..=1.0).contains(&r.confidence)));
    assert!(ranked.windows(2).all(|w| w[0].confidence >= w[1].confidence));
}

#[test]
fn test_short_text_uses_heuristic() {
    let d = DetectorKind::Statistical.build();
    assert_eq!(d.name(), "statistical");
    assert_eq!(d.detect("ок"), Language::Russian);
    assert_eq!(d.detect("hi"), Language::English);
}
